//! The interactive referee loop.
//!
//! The session owns the fleet outright and lends `&mut` access to the
//! resolver for one exchange at a time.

use crate::combat::ModifierTable;
use crate::error::Result;
use crate::fleet::{Exchange, Fleet};
use crate::input::{prompt_index, prompt_yes_no};
use crate::save_manager::SaveManager;
use crate::ui::{draw_fleet, write_exchange};
use rand::Rng;
use std::io::{BufRead, Write};

pub struct Session<R: Rng> {
    fleet: Fleet,
    saves: SaveManager,
    table: ModifierTable,
    rng: R,
}

/// Attacker, defender and return-fire choice for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOrders {
    pub attacker: usize,
    pub defender: usize,
    pub return_fire: bool,
}

impl<R: Rng> Session<R> {
    pub fn new(fleet: Fleet, saves: SaveManager, table: ModifierTable, rng: R) -> Self {
        Self {
            fleet,
            saves,
            table,
            rng,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn into_fleet(self) -> Fleet {
        self.fleet
    }

    /// Applies one round of orders.
    pub fn play_round(&mut self, orders: RoundOrders) -> Result<Exchange> {
        self.fleet.engage(
            orders.attacker,
            orders.defender,
            orders.return_fire,
            &self.table,
            &mut self.rng,
        )
    }

    /// Runs until the input is exhausted. The fleet is saved before every
    /// prompt cycle, so nothing is lost when the input ends mid-round.
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        let mut rounds = 0u32;
        loop {
            self.saves.save(&self.fleet)?;

            draw_fleet(output, &self.fleet)?;
            writeln!(output)?;

            let Some(orders) = self.read_orders(input, output)? else {
                tracing::info!(rounds, "input closed, ending session");
                writeln!(output)?;
                return Ok(());
            };

            let exchange = self.play_round(orders)?;
            write_exchange(output, &exchange)?;
            rounds += 1;
        }
    }

    fn read_orders(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<Option<RoundOrders>> {
        let fleet = &self.fleet;
        let occupied = |i: usize| fleet.get(i).is_some();

        let attacker = loop {
            let Some(index) = prompt_index(input, output, "Attacker: ", occupied)? else {
                return Ok(None);
            };
            match fleet.get(index) {
                Some(entity) if entity.is_destroyed() => {
                    writeln!(output, "\"{}\" is destroyed and cannot attack.", entity.name)?;
                }
                _ => break index,
            }
        };

        let Some(defender) = prompt_index(input, output, "Defender: ", occupied)? else {
            return Ok(None);
        };
        if let Some(target) = fleet.get(defender).filter(|e| e.is_destroyed()) {
            tracing::warn!(entity = %target.name, "targeting a destroyed entity");
            writeln!(output, "\"{}\" is already destroyed.", target.name)?;
        }

        let Some(return_fire) = prompt_yes_no(input, output, "Return fire? (y/n) ")? else {
            return Ok(None);
        };

        Ok(Some(RoundOrders {
            attacker,
            defender,
            return_fire,
        }))
    }
}

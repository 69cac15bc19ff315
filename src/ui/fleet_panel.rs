use crate::combat::CombatEntity;
use crate::core::constants::{HULL_COLUMN_WIDTH, NAME_COLUMN_WIDTH};
use crate::fleet::Fleet;
use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

/// Red when destroyed, yellow when damaged, green at full hull.
pub fn status_color(entity: &CombatEntity) -> Color {
    if entity.is_destroyed() {
        Color::Red
    } else if entity.is_damaged() {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// `(index)\tname shields/max + hp/max`, unstyled.
pub fn status_line(index: usize, entity: &CombatEntity) -> String {
    let hull = format!(
        "{}/{} + {}/{}",
        entity.shields, entity.max_shields, entity.hp, entity.max_hp
    );
    format!(
        "({})\t{:name_w$} {:hull_w$}",
        index,
        entity.name,
        hull,
        name_w = NAME_COLUMN_WIDTH,
        hull_w = HULL_COLUMN_WIDTH
    )
}

/// Draws one line per slot; separators become blank lines.
pub fn draw_fleet(output: &mut impl Write, fleet: &Fleet) -> io::Result<()> {
    for (index, slot) in fleet.slots().iter().enumerate() {
        match slot {
            Some(entity) => {
                let line = status_line(index, entity).with(status_color(entity));
                writeln!(output, "{}", line)?;
            }
            None => writeln!(output)?,
        }
    }
    Ok(())
}

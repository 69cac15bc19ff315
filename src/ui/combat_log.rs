use crate::combat::{AttackOutcome, Modifier};
use crate::fleet::Exchange;
use std::io::{self, Write};

/// Console lines describing one attack.
pub fn attack_lines(outcome: &AttackOutcome) -> Vec<String> {
    let mut lines = vec![format!(
        "\"{}\" attacks \"{}\"",
        outcome.attacker, outcome.defender
    )];

    match outcome.modifier {
        Modifier::Strong => lines.push(format!(
            "Strong matchup! Effective crit chance: {}%",
            outcome.crit_chance
        )),
        Modifier::Weak => lines.push("Weak matchup.".to_string()),
        Modifier::Balanced => {}
    }

    if outcome.is_crit {
        lines.push("Critical hit!".to_string());
    }

    lines.push(format!(
        "\"{}\" takes {} damage! ({} shields, {} hull)",
        outcome.defender, outcome.damage, outcome.shield_damage, outcome.hull_damage
    ));

    if outcome.destroyed {
        lines.push(format!("\"{}\" was destroyed!", outcome.defender));
    }
    lines
}

/// Writes the full exchange, including the return-fire verdict.
pub fn write_exchange(output: &mut impl Write, exchange: &Exchange) -> io::Result<()> {
    for line in attack_lines(&exchange.attack) {
        writeln!(output, "{}", line)?;
    }
    match &exchange.return_fire {
        Some(reply) => {
            writeln!(output, "Return fire!")?;
            for line in attack_lines(reply) {
                writeln!(output, "{}", line)?;
            }
        }
        None => writeln!(output, "No return fire!")?,
    }
    writeln!(output)
}

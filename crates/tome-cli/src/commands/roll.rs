use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tome_core::{CheckSubject, Die};

use super::signed;

pub fn run(
    sheet: &Path,
    subject: CheckSubject,
    base: Option<i32>,
    seed: Option<u64>,
) -> Result<(), String> {
    let outcome = super::edit(sheet, |c| {
        let breakdown = c.check(subject);
        let base = match base {
            Some(value) => value,
            None => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                Die::D20.roll(&mut rng)
            }
        };
        Ok(c.resolve_check(breakdown, base))
    })?;

    let roll = &outcome.recorded.roll;
    let parts = &outcome.breakdown;
    tracing::info!(
        label = roll.label(),
        base = roll.base_result(),
        modifier = roll.applied_modifier(),
        outcome = roll.final_outcome(),
        "check rolled"
    );

    println!("  {}", roll.label().bold());
    println!("  base roll:         {}", roll.base_result());
    println!("  ability modifier:  {}", signed(parts.ability_modifier));
    if let CheckSubject::Skill(_) = parts.subject {
        println!("  proficiency bonus: {}", signed(parts.proficiency_bonus));
    }
    println!("  buffs/debuffs:     {}", signed(parts.buff_modifier));
    println!(
        "  {}             {}",
        "total:".bold(),
        roll.final_outcome().to_string().bold()
    );

    for name in &outcome.recorded.expired {
        println!("  {} {name} has worn off", "expired:".dimmed());
    }
    Ok(())
}

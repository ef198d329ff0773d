use std::path::Path;

use tome_core::AbilityType;
use tome_core::rules::{self, MAX_ABILITY_SCORE, MIN_ABILITY_SCORE};

pub fn run(sheet: &Path, ability: AbilityType, score: i32) -> Result<(), String> {
    if !rules::is_valid_ability_score(score) {
        return Err(format!(
            "score must be between {MIN_ABILITY_SCORE} and {MAX_ABILITY_SCORE}, got {score}"
        ));
    }

    let updated = super::edit(sheet, |c| {
        if !c.update_ability_score(ability, score) {
            c.restore_ability_score(ability, score);
        }
        Ok(c.ability_score(ability).copied())
    })?;

    if let Some(updated) = updated {
        println!("  {updated}");
    }
    Ok(())
}

pub fn run_level(sheet: &Path, level: u32) -> Result<(), String> {
    let bonus = super::edit(sheet, |c| {
        c.set_level(level).map_err(|e| e.to_string())?;
        Ok(c.proficiency_bonus())
    })?;
    println!(
        "  Level {level} (proficiency bonus {})",
        super::signed(bonus)
    );
    Ok(())
}

use std::path::Path;

use colored::Colorize;
use tome_core::{Character, persist};

pub fn run(sheet: &Path, name: &str, level: u32, force: bool) -> Result<(), String> {
    if sheet.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            sheet.display()
        ));
    }

    let character = Character::new(name, level).map_err(|e| e.to_string())?;
    persist::save(sheet, &character).map_err(|e| e.to_string())?;

    println!(
        "  Created level {} character '{}' in {}",
        level,
        character.name().bold(),
        sheet.display()
    );
    Ok(())
}

pub mod buff;
pub mod history;
pub mod modifiers;
pub mod new;
pub mod roll;
pub mod set;
pub mod show;
pub mod skill;

use std::path::Path;

use tome_core::{Character, persist};

/// Load the character stored at `sheet`.
fn load(sheet: &Path) -> Result<Character, String> {
    persist::load(sheet).map_err(|e| e.to_string())
}

/// Load the sheet, apply `f`, and write the sheet back if `f` succeeds.
fn edit<T>(
    sheet: &Path,
    f: impl FnOnce(&mut Character) -> Result<T, String>,
) -> Result<T, String> {
    let mut character = load(sheet)?;
    let value = f(&mut character)?;
    persist::save(sheet, &character).map_err(|e| e.to_string())?;
    Ok(value)
}

/// Render a modifier with an explicit sign, e.g. `+3`, `-1`, `+0`.
fn signed(n: i32) -> String {
    format!("{n:+}")
}

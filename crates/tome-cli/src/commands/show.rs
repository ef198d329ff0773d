use std::path::Path;

pub fn run(sheet: &Path) -> Result<(), String> {
    let character = super::load(sheet)?;
    print!("{}", character.describe());
    Ok(())
}

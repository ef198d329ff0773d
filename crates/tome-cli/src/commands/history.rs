use std::path::Path;

pub fn list(sheet: &Path, last: Option<usize>) -> Result<(), String> {
    let character = super::load(sheet)?;
    let history = character.roll_history();

    if history.is_empty() {
        println!("  No rolls made yet.");
        return Ok(());
    }

    let shown = match last {
        Some(n) => history.recent(n),
        None => history.rolls(),
    };
    let offset = history.len() - shown.len();
    for (i, roll) in shown.iter().enumerate() {
        println!("  [{}] {roll}", offset + i);
    }
    Ok(())
}

pub fn clear(sheet: &Path) -> Result<(), String> {
    let count = super::edit(sheet, |c| {
        let count = c.roll_history().len();
        c.roll_history_mut().clear();
        Ok(count)
    })?;
    println!("  Cleared {count} roll(s)");
    Ok(())
}

pub fn remove(sheet: &Path, index: usize) -> Result<(), String> {
    let removed = super::edit(sheet, |c| {
        c.roll_history_mut()
            .remove(index)
            .ok_or_else(|| format!("no roll at index {index}"))
    })?;
    println!("  Removed {removed}");
    Ok(())
}

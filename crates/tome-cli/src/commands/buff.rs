use std::path::Path;

use tome_core::{AbilityType, BuffDebuff};

pub fn add(
    sheet: &Path,
    name: &str,
    ability: AbilityType,
    magnitude: i32,
    duration: u32,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("buff name must not be empty".into());
    }
    let buff = BuffDebuff::new(name, ability, magnitude, duration);
    let description = buff.describe();
    super::edit(sheet, |c| {
        c.add_buff_debuff(buff);
        Ok(())
    })?;
    println!("  Applied {description}");
    Ok(())
}

pub fn remove(sheet: &Path, name: &str) -> Result<(), String> {
    let removed = super::edit(sheet, |c| {
        c.remove_buff_debuff(name)
            .ok_or_else(|| format!("no buff or debuff named '{name}'"))
    })?;
    println!("  Removed {removed}");
    Ok(())
}

pub fn clear(sheet: &Path) -> Result<(), String> {
    let count = super::edit(sheet, |c| {
        let count = c.buffs_debuffs().len();
        c.clear_buffs_debuffs();
        Ok(count)
    })?;
    println!("  Cleared {count} buff(s)/debuff(s)");
    Ok(())
}

pub fn prune(sheet: &Path) -> Result<(), String> {
    let pruned = super::edit(sheet, |c| Ok(c.prune_expired()))?;
    if pruned.is_empty() {
        println!("  No expired buffs or debuffs.");
    }
    for buff in &pruned {
        println!("  Removed expired {}", buff.name());
    }
    Ok(())
}

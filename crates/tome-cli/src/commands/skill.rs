use std::path::Path;

use tome_core::{Skill, SkillType};

pub fn add(sheet: &Path, skill_type: SkillType, proficient: bool) -> Result<(), String> {
    let (skill, replaced) = super::edit(sheet, |c| {
        let skill = Skill::new(skill_type, proficient);
        let replaced = c.add_skill(skill.clone()).is_some();
        Ok((skill, replaced))
    })?;

    let verb = if replaced { "Updated" } else { "Learned" };
    println!("  {verb} {}", skill.describe());
    Ok(())
}

pub fn remove(sheet: &Path, skill_type: SkillType) -> Result<(), String> {
    super::edit(sheet, |c| {
        c.remove_skill(skill_type)
            .map(|_| ())
            .ok_or_else(|| format!("skill not learned: {skill_type}"))
    })?;
    println!("  Forgot {skill_type}");
    Ok(())
}

pub fn set_proficient(sheet: &Path, skill_type: SkillType, value: bool) -> Result<(), String> {
    let description = super::edit(sheet, |c| {
        if !c.set_proficiency(skill_type, value) {
            return Err(format!("skill not learned: {skill_type}"));
        }
        Ok(c.skill(skill_type).map(Skill::describe).unwrap_or_default())
    })?;
    println!("  {description}");
    Ok(())
}

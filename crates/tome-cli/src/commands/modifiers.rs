use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tome_core::{AbilityType, SkillType};

use super::signed;

pub fn run(sheet: &Path) -> Result<(), String> {
    let character = super::load(sheet)?;

    let mut abilities = Table::new();
    abilities.set_content_arrangement(ContentArrangement::Dynamic);
    abilities.set_header(vec!["Ability", "Score", "Modifier", "Buffs", "Check"]);
    for ability in AbilityType::ALL {
        let Some(score) = character.ability_score(ability) else {
            abilities.add_row(vec![
                ability.to_string(),
                "-".into(),
                "-".into(),
                "-".into(),
                signed(0),
            ]);
            continue;
        };
        abilities.add_row(vec![
            ability.to_string(),
            score.score().to_string(),
            signed(score.modifier()),
            signed(character.buff_total(ability)),
            signed(character.calculate_ability_modifier(ability)),
        ]);
    }

    let mut skills = Table::new();
    skills.set_content_arrangement(ContentArrangement::Dynamic);
    skills.set_header(vec!["Skill", "Ability", "Learned", "Proficient", "Check"]);
    for skill_type in SkillType::ALL {
        let learned = character.skill(skill_type).is_some();
        skills.add_row(vec![
            skill_type.name().to_string(),
            skill_type.ability().abbreviation().to_string(),
            mark(learned).to_string(),
            mark(character.is_proficient_in_skill(skill_type)).to_string(),
            signed(character.calculate_skill_modifier(skill_type)),
        ]);
    }

    println!(
        "  {} (level {}, proficiency {})",
        character.name(),
        character.level(),
        signed(character.proficiency_bonus())
    );
    println!("{abilities}");
    println!();
    println!("{skills}");
    Ok(())
}

fn mark(flag: bool) -> &'static str {
    if flag { "✓" } else { "" }
}

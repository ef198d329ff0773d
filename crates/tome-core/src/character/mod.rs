//! The character aggregate and its modifier calculations.
//!
//! A [`Character`] owns its ability scores, learned skills, active buffs and
//! debuffs, and roll history. Skills refer to abilities by key and are
//! resolved against the character's own scores, so editing a score is
//! immediately visible through every skill that reads it.
//!
//! Nothing here fails on missing data: an ability or skill the character
//! does not have resolves to `0`, `false`, or `None`. The only errors are
//! validation failures when naming a character or setting its level, and
//! those leave the character unchanged.

pub mod check;

pub use check::{CheckBreakdown, CheckOutcome, CheckSubject};

use std::collections::BTreeMap;

use crate::ability::{AbilityScore, AbilityType};
use crate::buff::{self, BuffDebuff};
use crate::error::{SheetError, SheetResult};
use crate::roll::{Roll, RollHistory};
use crate::rules;
use crate::skill::{Skill, SkillType};

/// What happened when a roll was recorded.
///
/// Returned instead of written to a global log so the caller decides how,
/// and whether, to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollRecorded {
    /// The roll as appended to the history.
    pub roll: Roll,
    /// Names of buffs and debuffs whose duration ran out this round.
    pub expired: Vec<String>,
}

/// A player character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    level: u32,
    abilities: BTreeMap<AbilityType, AbilityScore>,
    skills: BTreeMap<SkillType, Skill>,
    buffs: Vec<BuffDebuff>,
    history: RollHistory,
}

impl Character {
    /// Create a character with every ability at the default score and no
    /// skills, buffs, or rolls.
    pub fn new(name: impl Into<String>, level: u32) -> SheetResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SheetError::EmptyName);
        }
        validate_level(level)?;

        let abilities = AbilityType::ALL
            .into_iter()
            .map(|a| (a, AbilityScore::new(a, rules::DEFAULT_ABILITY_SCORE)))
            .collect();

        Ok(Self {
            name,
            level,
            abilities,
            skills: BTreeMap::new(),
            buffs: Vec::new(),
            history: RollHistory::new(),
        })
    }

    /// Character name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character level (always at least 1).
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Change the level. Level 0 is rejected and the level is left as is.
    pub fn set_level(&mut self, level: u32) -> SheetResult<()> {
        validate_level(level)?;
        self.level = level;
        Ok(())
    }

    /// Proficiency bonus at the current level.
    pub fn proficiency_bonus(&self) -> i32 {
        rules::proficiency_bonus(self.level)
    }

    // -- Ability scores ----------------------------------------------------

    /// Ability scores in sheet order.
    pub fn ability_scores(&self) -> impl Iterator<Item = &AbilityScore> {
        self.abilities.values()
    }

    /// The score for `ability`, if the character has it.
    pub fn ability_score(&self, ability: AbilityType) -> Option<&AbilityScore> {
        self.abilities.get(&ability)
    }

    /// Whether the character has a score for `ability`.
    pub fn has_ability(&self, ability: AbilityType) -> bool {
        self.abilities.contains_key(&ability)
    }

    /// Set the raw score for `ability`. Returns false if the character has no
    /// such ability; range checks are the caller's job.
    pub fn update_ability_score(&mut self, ability: AbilityType, score: i32) -> bool {
        match self.abilities.get_mut(&ability) {
            Some(existing) => {
                existing.set_score(score);
                tracing::debug!(character = %self.name, %ability, score, "ability score updated");
                true
            }
            None => false,
        }
    }

    /// Remove an ability score entirely.
    pub fn remove_ability_score(&mut self, ability: AbilityType) -> Option<AbilityScore> {
        self.abilities.remove(&ability)
    }

    /// Add (or overwrite) the score for `ability`.
    pub fn restore_ability_score(&mut self, ability: AbilityType, score: i32) {
        self.abilities
            .insert(ability, AbilityScore::new(ability, score));
    }

    // -- Skills ------------------------------------------------------------

    /// Learned skills in canonical skill order.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    /// The learned skill of the given type, if any.
    pub fn skill(&self, skill_type: SkillType) -> Option<&Skill> {
        self.skills.get(&skill_type)
    }

    /// Learn a skill. A character holds at most one entry per skill type, so
    /// any previous entry is replaced and returned.
    pub fn add_skill(&mut self, skill: Skill) -> Option<Skill> {
        tracing::debug!(
            character = %self.name,
            skill = %skill.skill_type(),
            proficient = skill.is_proficient(),
            "skill learned"
        );
        self.skills.insert(skill.skill_type(), skill)
    }

    /// Forget a skill.
    pub fn remove_skill(&mut self, skill_type: SkillType) -> Option<Skill> {
        self.skills.remove(&skill_type)
    }

    /// Change proficiency on a learned skill. Returns false if the skill is
    /// not learned.
    pub fn set_proficiency(&mut self, skill_type: SkillType, proficient: bool) -> bool {
        match self.skills.get_mut(&skill_type) {
            Some(skill) => {
                skill.set_proficiency(proficient);
                true
            }
            None => false,
        }
    }

    /// True iff the skill is learned and flagged proficient.
    pub fn is_proficient_in_skill(&self, skill_type: SkillType) -> bool {
        self.skills
            .get(&skill_type)
            .is_some_and(Skill::is_proficient)
    }

    // -- Buffs and debuffs -------------------------------------------------

    /// Active buffs and debuffs in the order they were applied.
    pub fn buffs_debuffs(&self) -> &[BuffDebuff] {
        &self.buffs
    }

    /// Apply a buff or debuff.
    pub fn add_buff_debuff(&mut self, buff: BuffDebuff) {
        tracing::debug!(character = %self.name, buff = %buff, "buff applied");
        self.buffs.push(buff);
    }

    /// Remove the first buff or debuff with the given name.
    pub fn remove_buff_debuff(&mut self, name: &str) -> Option<BuffDebuff> {
        let index = self.buffs.iter().position(|b| b.name() == name)?;
        Some(self.buffs.remove(index))
    }

    /// Remove every buff and debuff.
    pub fn clear_buffs_debuffs(&mut self) {
        self.buffs.clear();
    }

    /// Advance every buff and debuff by one round. Returns the names of those
    /// that expired on this round; expired entries stay listed.
    pub fn update_buffs_debuffs_duration(&mut self) -> Vec<String> {
        let mut expired = Vec::new();
        for buff in &mut self.buffs {
            let was_running = !buff.is_expired();
            buff.decrement_duration(1);
            if was_running && buff.is_expired() {
                expired.push(buff.name().to_string());
            }
        }
        if !expired.is_empty() {
            tracing::debug!(character = %self.name, ?expired, "buffs expired");
        }
        expired
    }

    /// Remove and return every expired buff and debuff.
    pub fn prune_expired(&mut self) -> Vec<BuffDebuff> {
        let (expired, running): (Vec<_>, Vec<_>) = std::mem::take(&mut self.buffs)
            .into_iter()
            .partition(BuffDebuff::is_expired);
        self.buffs = running;
        expired
    }

    /// Sum of running buff magnitudes on `ability`.
    pub fn buff_total(&self, ability: AbilityType) -> i32 {
        buff::total_for(&self.buffs, ability)
    }

    // -- Modifiers ---------------------------------------------------------

    /// Ability modifier plus running buffs on that ability, or 0 if the
    /// character has no score for it.
    pub fn calculate_ability_modifier(&self, ability: AbilityType) -> i32 {
        match self.abilities.get(&ability) {
            Some(score) => score.modifier().saturating_add(self.buff_total(ability)),
            None => 0,
        }
    }

    /// Full skill check modifier: raw ability modifier, proficiency bonus
    /// when trained, and running buffs on the skill's ability.
    ///
    /// The skill need not be learned; an unlearned skill simply has no
    /// proficiency bonus.
    pub fn calculate_skill_modifier(&self, skill_type: SkillType) -> i32 {
        self.skill_parts(skill_type).total()
    }

    /// The learned skill's own modifier: ability plus proficiency, without
    /// buffs.
    ///
    /// Returns 0 if the skill is not learned or the character no longer has
    /// the ability the skill reads.
    pub fn calculate_total_modifier_for_skill(&self, skill_type: SkillType) -> i32 {
        let Some(skill) = self.skills.get(&skill_type) else {
            return 0;
        };
        match self.abilities.get(&skill.associated_ability()) {
            Some(score) => skill.total_modifier(score, self.level),
            None => 0,
        }
    }

    // -- Rolls -------------------------------------------------------------

    /// The roll history.
    pub fn roll_history(&self) -> &RollHistory {
        &self.history
    }

    /// Mutable access to the roll history, for removal and clearing.
    pub fn roll_history_mut(&mut self) -> &mut RollHistory {
        &mut self.history
    }

    /// The newest roll, if any.
    pub fn last_roll(&self) -> Option<&Roll> {
        self.history.last()
    }

    /// Append a roll without advancing time.
    pub fn add_roll(&mut self, roll: Roll) {
        self.history.add(roll);
    }

    /// Record a check. One check is one round, so every buff and debuff
    /// counts down by one afterwards.
    pub fn record_roll(
        &mut self,
        label: impl Into<String>,
        base_result: i32,
        applied_modifier: i32,
    ) -> RollRecorded {
        let roll = Roll::new(label, base_result, applied_modifier);
        tracing::debug!(character = %self.name, roll = %roll, "roll recorded");
        self.history.add(roll.clone());
        let expired = self.update_buffs_debuffs_duration();
        RollRecorded { roll, expired }
    }

    // -- Presentation ------------------------------------------------------

    /// Multi-line summary of the whole sheet.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Name: {}\n", self.name));
        out.push_str(&format!("Level: {}\n", self.level));

        out.push_str("\nAbility Scores:\n");
        for score in self.abilities.values() {
            out.push_str(&format!("{score}\n"));
        }

        out.push_str("\nActive Buffs/Debuffs:\n");
        if self.buffs.is_empty() {
            out.push_str("None.\n");
        }
        for buff in &self.buffs {
            out.push_str(&format!("{buff}\n"));
        }

        out.push_str("\nSkills:\n");
        if self.skills.is_empty() {
            out.push_str("None.\n");
        }
        for skill in self.skills.values() {
            out.push_str(&format!("{}\n", skill.describe()));
        }

        out.push_str("\nRoll History:\n");
        if self.history.is_empty() {
            out.push_str("No rolls made yet.\n");
        }
        for roll in &self.history {
            out.push_str(&format!("{roll}\n"));
        }
        out
    }
}

fn validate_level(level: u32) -> SheetResult<()> {
    if level == 0 {
        Err(SheetError::InvalidLevel(level))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rogue() -> Character {
        let mut c = Character::new("Rogue", 3).unwrap();
        c.update_ability_score(AbilityType::Dexterity, 16);
        c.add_skill(Skill::new(SkillType::Stealth, true));
        c.add_buff_debuff(BuffDebuff::new("Cloak", AbilityType::Dexterity, 1, 2));
        c
    }

    #[test]
    fn new_character_defaults() {
        let c = Character::new("Aria", 1).unwrap();
        assert_eq!(c.name(), "Aria");
        assert_eq!(c.level(), 1);
        assert_eq!(c.ability_scores().count(), 6);
        for score in c.ability_scores() {
            assert_eq!(score.score(), 10);
            assert_eq!(score.modifier(), 0);
        }
        assert_eq!(c.skills().count(), 0);
        assert!(c.buffs_debuffs().is_empty());
        assert!(c.roll_history().is_empty());
    }

    #[test]
    fn new_rejects_empty_name_and_level_zero() {
        assert!(matches!(Character::new("  ", 1), Err(SheetError::EmptyName)));
        assert!(matches!(
            Character::new("Aria", 0),
            Err(SheetError::InvalidLevel(0))
        ));
    }

    #[test]
    fn set_level_validation_leaves_state_unchanged() {
        let mut c = Character::new("Aria", 4).unwrap();
        assert!(c.set_level(0).is_err());
        assert_eq!(c.level(), 4);
        c.set_level(5).unwrap();
        assert_eq!(c.proficiency_bonus(), 3);
    }

    #[test]
    fn update_ability_score_reports_missing() {
        let mut c = Character::new("Aria", 1).unwrap();
        assert!(c.update_ability_score(AbilityType::Strength, 18));
        assert_eq!(c.ability_score(AbilityType::Strength).unwrap().modifier(), 4);

        c.remove_ability_score(AbilityType::Strength);
        assert!(!c.has_ability(AbilityType::Strength));
        assert!(!c.update_ability_score(AbilityType::Strength, 12));

        c.restore_ability_score(AbilityType::Strength, 12);
        assert!(c.has_ability(AbilityType::Strength));
        assert_eq!(c.ability_score(AbilityType::Strength).unwrap().score(), 12);
    }

    #[test]
    fn ability_modifier_without_buffs_is_raw() {
        let c = rogue();
        assert_eq!(c.calculate_ability_modifier(AbilityType::Strength), 0);
        let mut c = c;
        c.clear_buffs_debuffs();
        assert_eq!(c.calculate_ability_modifier(AbilityType::Dexterity), 3);
    }

    #[test]
    fn ability_modifier_adds_buffs() {
        let mut c = Character::new("Aria", 1).unwrap();
        c.update_ability_score(AbilityType::Wisdom, 14);
        let base = c.calculate_ability_modifier(AbilityType::Wisdom);
        assert_eq!(base, 2);

        c.add_buff_debuff(BuffDebuff::new("Bless", AbilityType::Wisdom, 2, 3));
        assert_eq!(c.calculate_ability_modifier(AbilityType::Wisdom), base + 2);

        c.add_buff_debuff(BuffDebuff::new("Bane", AbilityType::Wisdom, -1, 3));
        assert_eq!(c.calculate_ability_modifier(AbilityType::Wisdom), base + 1);
    }

    #[test]
    fn ability_modifier_missing_ability_is_zero() {
        let mut c = Character::new("Aria", 1).unwrap();
        c.add_buff_debuff(BuffDebuff::new("Bless", AbilityType::Wisdom, 2, 3));
        c.remove_ability_score(AbilityType::Wisdom);
        assert_eq!(c.calculate_ability_modifier(AbilityType::Wisdom), 0);
    }

    #[test]
    fn skill_modifier_end_to_end() {
        let c = rogue();
        // 3 (dex 16) + 2 (level 3 proficiency) + 1 (Cloak)
        assert_eq!(c.calculate_skill_modifier(SkillType::Stealth), 6);
        // unlearned dex skill: no proficiency, still buffed
        assert_eq!(c.calculate_skill_modifier(SkillType::Acrobatics), 4);
    }

    #[test]
    fn skill_modifier_proficiency_by_level() {
        let mut c = Character::new("Aria", 1).unwrap();
        c.add_skill(Skill::new(SkillType::Arcana, true));
        assert_eq!(c.calculate_skill_modifier(SkillType::Arcana), 2);
        c.set_level(5).unwrap();
        assert_eq!(c.calculate_skill_modifier(SkillType::Arcana), 3);
    }

    #[test]
    fn total_modifier_for_skill_excludes_buffs() {
        let c = rogue();
        assert_eq!(c.calculate_total_modifier_for_skill(SkillType::Stealth), 5);
        assert_eq!(c.calculate_total_modifier_for_skill(SkillType::Arcana), 0);
    }

    #[test]
    fn extreme_values_saturate() {
        let mut c = rogue();
        c.update_ability_score(AbilityType::Strength, i32::MIN);
        assert_eq!(
            c.calculate_ability_modifier(AbilityType::Strength),
            i32::MIN / 2 - 5
        );

        c.add_buff_debuff(BuffDebuff::new("Titan", AbilityType::Dexterity, i32::MAX, 3));
        c.add_buff_debuff(BuffDebuff::new("Titan", AbilityType::Dexterity, 1, 3));
        assert_eq!(c.calculate_ability_modifier(AbilityType::Dexterity), i32::MAX);
        assert_eq!(c.calculate_skill_modifier(SkillType::Stealth), i32::MAX);
        assert_eq!(c.skill_check(SkillType::Stealth).total(), i32::MAX);

        c.update_ability_score(AbilityType::Dexterity, i32::MAX);
        assert_eq!(
            c.calculate_total_modifier_for_skill(SkillType::Stealth),
            i32::MAX / 2 - 5 + 2
        );
        let event = c.record_roll("STEALTH check", 20, i32::MAX);
        assert_eq!(event.roll.final_outcome(), i32::MAX);
        assert!(c.describe().contains("Titan (DEXTERITY, 2147483647"));
    }

    #[test]
    fn total_modifier_for_skill_without_ability_is_zero() {
        let mut c = rogue();
        c.remove_ability_score(AbilityType::Dexterity);
        assert_eq!(c.calculate_total_modifier_for_skill(SkillType::Stealth), 0);
    }

    #[test]
    fn skills_track_live_ability_scores() {
        let mut c = rogue();
        c.clear_buffs_debuffs();
        assert_eq!(c.calculate_total_modifier_for_skill(SkillType::Stealth), 5);
        c.update_ability_score(AbilityType::Dexterity, 20);
        assert_eq!(c.calculate_total_modifier_for_skill(SkillType::Stealth), 7);
        assert_eq!(c.calculate_skill_modifier(SkillType::Stealth), 7);
    }

    #[test]
    fn skills_are_unique_by_type() {
        let mut c = Character::new("Aria", 1).unwrap();
        assert!(c.add_skill(Skill::new(SkillType::Insight, false)).is_none());
        let previous = c.add_skill(Skill::new(SkillType::Insight, true));
        assert_eq!(previous.map(|s| s.is_proficient()), Some(false));
        assert_eq!(c.skills().count(), 1);
        assert!(c.is_proficient_in_skill(SkillType::Insight));
    }

    #[test]
    fn proficiency_queries() {
        let mut c = Character::new("Aria", 1).unwrap();
        assert!(!c.is_proficient_in_skill(SkillType::Medicine));
        c.add_skill(Skill::new(SkillType::Medicine, false));
        assert!(!c.is_proficient_in_skill(SkillType::Medicine));
        assert!(c.set_proficiency(SkillType::Medicine, true));
        assert!(c.is_proficient_in_skill(SkillType::Medicine));
        assert!(!c.set_proficiency(SkillType::Nature, true));
        assert!(c.remove_skill(SkillType::Medicine).is_some());
        assert!(!c.is_proficient_in_skill(SkillType::Medicine));
    }

    #[test]
    fn remove_buff_by_name() {
        let mut c = rogue();
        c.add_buff_debuff(BuffDebuff::new("Bane", AbilityType::Charisma, -1, 2));
        let removed = c.remove_buff_debuff("Cloak").unwrap();
        assert_eq!(removed.effect_magnitude(), 1);
        assert_eq!(c.buffs_debuffs().len(), 1);
        assert!(c.remove_buff_debuff("Cloak").is_none());
    }

    #[test]
    fn record_roll_advances_buffs() {
        let mut c = rogue();
        let modifier = c.calculate_skill_modifier(SkillType::Stealth);
        let event = c.record_roll("STEALTH check", 12, modifier);
        assert_eq!(event.roll.final_outcome(), 18);
        assert!(event.expired.is_empty());
        assert_eq!(c.buffs_debuffs()[0].duration(), 1);
        assert_eq!(c.last_roll().map(Roll::final_outcome), Some(18));

        let event = c.record_roll("STEALTH check", 3, 5);
        assert_eq!(event.expired, ["Cloak"]);
        assert_eq!(c.buffs_debuffs()[0].duration(), 0);
        assert_eq!(c.buffs_debuffs().len(), 1);
    }

    #[test]
    fn expired_buffs_stop_contributing_until_pruned() {
        let mut c = rogue();
        c.record_roll("a", 1, 0);
        c.record_roll("b", 1, 0);
        assert_eq!(c.calculate_ability_modifier(AbilityType::Dexterity), 3);
        assert_eq!(c.calculate_skill_modifier(SkillType::Stealth), 5);

        // later rounds do not report it again
        assert!(c.record_roll("c", 1, 0).expired.is_empty());

        let pruned = c.prune_expired();
        assert_eq!(pruned.len(), 1);
        assert!(c.buffs_debuffs().is_empty());
    }

    #[test]
    fn add_roll_does_not_advance_time() {
        let mut c = rogue();
        c.add_roll(Roll::new("imported", 10, 0));
        assert_eq!(c.buffs_debuffs()[0].duration(), 2);
        assert_eq!(c.roll_history().len(), 1);
        c.roll_history_mut().clear();
        assert!(c.last_roll().is_none());
    }

    #[test]
    fn describe_sheet() {
        let mut c = rogue();
        c.record_roll("STEALTH check", 12, 6);
        insta::assert_snapshot!(c.describe(), @r"
        Name: Rogue
        Level: 3

        Ability Scores:
        STRENGTH: 10 (Modifier: 0)
        DEXTERITY: 16 (Modifier: 3)
        CONSTITUTION: 10 (Modifier: 0)
        INTELLIGENCE: 10 (Modifier: 0)
        WISDOM: 10 (Modifier: 0)
        CHARISMA: 10 (Modifier: 0)

        Active Buffs/Debuffs:
        Cloak (DEXTERITY, 1, Duration: 1 rounds)

        Skills:
        STEALTH (Associated with DEXTERITY): Proficient

        Roll History:
        STEALTH check: Rolled a 12 with a modifier of 6. Final result: 18
        ");
    }

    #[test]
    fn describe_empty_sections() {
        let c = Character::new("Aria", 1).unwrap();
        let text = c.describe();
        assert!(text.contains("Active Buffs/Debuffs:\nNone.\n"));
        assert!(text.contains("Skills:\nNone.\n"));
        assert!(text.ends_with("Roll History:\nNo rolls made yet.\n"));
    }
}

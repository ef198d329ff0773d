//! Ability and skill checks: roll a d20, add the modifier, record the result.

use std::fmt;

use rand::Rng;

use super::{Character, RollRecorded};
use crate::ability::AbilityType;
use crate::dice::Die;
use crate::skill::SkillType;

/// What a check is rolled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckSubject {
    /// A plain ability check.
    Ability(AbilityType),
    /// A skill check, read through the skill's ability.
    Skill(SkillType),
}

impl CheckSubject {
    /// The roll label recorded in history, e.g. `"STEALTH check"`.
    pub fn label(self) -> String {
        format!("{self} check")
    }
}

impl From<AbilityType> for CheckSubject {
    fn from(ability: AbilityType) -> Self {
        Self::Ability(ability)
    }
}

impl From<SkillType> for CheckSubject {
    fn from(skill_type: SkillType) -> Self {
        Self::Skill(skill_type)
    }
}

impl fmt::Display for CheckSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ability(a) => write!(f, "{a}"),
            Self::Skill(s) => write!(f, "{s}"),
        }
    }
}

/// The parts that make up a check's modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckBreakdown {
    /// What is being checked.
    pub subject: CheckSubject,
    /// Raw modifier of the ability score (0 if the character lacks it).
    pub ability_modifier: i32,
    /// Proficiency bonus, or 0 for ability checks and untrained skills.
    pub proficiency_bonus: i32,
    /// Sum of running buffs and debuffs on the ability.
    pub buff_modifier: i32,
}

impl CheckBreakdown {
    /// The modifier applied to the die.
    pub fn total(&self) -> i32 {
        self.ability_modifier
            .saturating_add(self.proficiency_bonus)
            .saturating_add(self.buff_modifier)
    }
}

/// A resolved check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// How the modifier was built.
    pub breakdown: CheckBreakdown,
    /// The recorded roll and any buffs that expired.
    pub recorded: RollRecorded,
}

impl Character {
    /// Modifier parts for an ability check.
    pub fn ability_check(&self, ability: AbilityType) -> CheckBreakdown {
        let (ability_modifier, buff_modifier) = self.ability_parts(ability);
        CheckBreakdown {
            subject: CheckSubject::Ability(ability),
            ability_modifier,
            proficiency_bonus: 0,
            buff_modifier,
        }
    }

    /// Modifier parts for a skill check. The skill need not be learned.
    pub fn skill_check(&self, skill_type: SkillType) -> CheckBreakdown {
        self.skill_parts(skill_type)
    }

    /// Resolve a check with a known die result and record it.
    pub fn resolve_check(&mut self, breakdown: CheckBreakdown, base_result: i32) -> CheckOutcome {
        let recorded = self.record_roll(breakdown.subject.label(), base_result, breakdown.total());
        CheckOutcome {
            breakdown,
            recorded,
        }
    }

    /// Modifier parts for any check subject.
    pub fn check(&self, subject: CheckSubject) -> CheckBreakdown {
        match subject {
            CheckSubject::Ability(ability) => self.ability_check(ability),
            CheckSubject::Skill(skill_type) => self.skill_check(skill_type),
        }
    }

    /// Roll a d20 ability check and record it.
    pub fn roll_ability_check<R: Rng>(&mut self, ability: AbilityType, rng: &mut R) -> CheckOutcome {
        let breakdown = self.ability_check(ability);
        let base = Die::D20.roll(rng);
        self.resolve_check(breakdown, base)
    }

    /// Roll a d20 skill check and record it.
    pub fn roll_skill_check<R: Rng>(&mut self, skill_type: SkillType, rng: &mut R) -> CheckOutcome {
        let breakdown = self.skill_check(skill_type);
        let base = Die::D20.roll(rng);
        self.resolve_check(breakdown, base)
    }

    pub(super) fn skill_parts(&self, skill_type: SkillType) -> CheckBreakdown {
        let ability = skill_type.ability();
        let (ability_modifier, buff_modifier) = self.ability_parts(ability);
        let proficiency_bonus = if self.is_proficient_in_skill(skill_type) {
            self.proficiency_bonus()
        } else {
            0
        };
        CheckBreakdown {
            subject: CheckSubject::Skill(skill_type),
            ability_modifier,
            proficiency_bonus,
            buff_modifier,
        }
    }

    /// Raw modifier and buff sum for `ability`; both 0 when the character
    /// has no score for it.
    fn ability_parts(&self, ability: AbilityType) -> (i32, i32) {
        match self.ability_score(ability) {
            Some(score) => (score.modifier(), self.buff_total(ability)),
            None => (0, 0),
        }
    }
}

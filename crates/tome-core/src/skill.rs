//! Skills, their fixed ability mapping, and skill modifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ability::{AbilityScore, AbilityType};
use crate::error::SheetError;
use crate::rules;

/// One of the eighteen skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillType {
    /// Climbing and swimming.
    Athletics,
    /// Balance and tumbling.
    Acrobatics,
    /// Pickpocketing and manual trickery.
    SleightOfHand,
    /// Moving unseen and unheard.
    Stealth,
    /// Lore of spells and magical traditions.
    Arcana,
    /// Lore of past events and peoples.
    History,
    /// Finding clues and drawing deductions.
    Investigation,
    /// Lore of the natural world.
    Nature,
    /// Lore of deities and rites.
    Religion,
    /// Calming and controlling animals.
    AnimalHandling,
    /// Reading intentions and spotting lies.
    Insight,
    /// Stabilizing the dying and diagnosing illness.
    Medicine,
    /// Noticing things with the senses.
    Perception,
    /// Tracking and foraging in the wild.
    Survival,
    /// Convincingly hiding the truth.
    Deception,
    /// Influencing others through threats.
    Intimidation,
    /// Entertaining an audience.
    Performance,
    /// Influencing others with tact and goodwill.
    Persuasion,
}

impl SkillType {
    /// All eighteen skills, grouped by ability.
    pub const ALL: [SkillType; 18] = [
        Self::Athletics,
        Self::Acrobatics,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Arcana,
        Self::History,
        Self::Investigation,
        Self::Nature,
        Self::Religion,
        Self::AnimalHandling,
        Self::Insight,
        Self::Medicine,
        Self::Perception,
        Self::Survival,
        Self::Deception,
        Self::Intimidation,
        Self::Performance,
        Self::Persuasion,
    ];

    /// The ability this skill is checked against.
    pub fn ability(self) -> AbilityType {
        match self {
            Self::Athletics => AbilityType::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => AbilityType::Dexterity,
            Self::Arcana | Self::History | Self::Investigation | Self::Nature | Self::Religion => {
                AbilityType::Intelligence
            }
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => AbilityType::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                AbilityType::Charisma
            }
        }
    }

    /// The persisted identifier, e.g. `"SLEIGHT_OF_HAND"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Athletics => "ATHLETICS",
            Self::Acrobatics => "ACROBATICS",
            Self::SleightOfHand => "SLEIGHT_OF_HAND",
            Self::Stealth => "STEALTH",
            Self::Arcana => "ARCANA",
            Self::History => "HISTORY",
            Self::Investigation => "INVESTIGATION",
            Self::Nature => "NATURE",
            Self::Religion => "RELIGION",
            Self::AnimalHandling => "ANIMAL_HANDLING",
            Self::Insight => "INSIGHT",
            Self::Medicine => "MEDICINE",
            Self::Perception => "PERCEPTION",
            Self::Survival => "SURVIVAL",
            Self::Deception => "DECEPTION",
            Self::Intimidation => "INTIMIDATION",
            Self::Performance => "PERFORMANCE",
            Self::Persuasion => "PERSUASION",
        }
    }

    /// Human-readable name, e.g. `"Sleight of Hand"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Athletics => "Athletics",
            Self::Acrobatics => "Acrobatics",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Arcana => "Arcana",
            Self::History => "History",
            Self::Investigation => "Investigation",
            Self::Nature => "Nature",
            Self::Religion => "Religion",
            Self::AnimalHandling => "Animal Handling",
            Self::Insight => "Insight",
            Self::Medicine => "Medicine",
            Self::Perception => "Perception",
            Self::Survival => "Survival",
            Self::Deception => "Deception",
            Self::Intimidation => "Intimidation",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
        }
    }
}

/// The ability a skill type is checked against. Total over all skill types.
pub fn associated_ability_for(skill_type: SkillType) -> AbilityType {
    skill_type.ability()
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillType {
    type Err = SheetError;

    /// Accepts `"sleight of hand"`, `"sleight-of-hand"`, and
    /// `"SLEIGHT_OF_HAND"` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|skill| skill.as_str() == wanted)
            .ok_or_else(|| SheetError::UnknownSkill(s.to_string()))
    }
}

/// A skill a character has learned.
///
/// The skill refers to its ability by key, not by holding a copy, so the
/// owning character's current score is always the one used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    skill_type: SkillType,
    ability: AbilityType,
    proficient: bool,
}

impl Skill {
    /// Learn a skill, bound to its canonical ability.
    pub fn new(skill_type: SkillType, proficient: bool) -> Self {
        Self {
            skill_type,
            ability: skill_type.ability(),
            proficient,
        }
    }

    /// Learn a skill bound to an explicit ability.
    ///
    /// Used when reloading documents whose skill entries name their ability.
    pub fn with_ability(skill_type: SkillType, ability: AbilityType, proficient: bool) -> Self {
        Self {
            skill_type,
            ability,
            proficient,
        }
    }

    /// Which skill this is.
    pub fn skill_type(&self) -> SkillType {
        self.skill_type
    }

    /// Key of the ability score this skill reads.
    pub fn associated_ability(&self) -> AbilityType {
        self.ability
    }

    /// Whether the character is trained in this skill.
    pub fn is_proficient(&self) -> bool {
        self.proficient
    }

    /// Change the proficiency flag.
    pub fn set_proficiency(&mut self, proficient: bool) {
        self.proficient = proficient;
    }

    /// Ability modifier plus the level-scaled proficiency bonus when trained.
    ///
    /// `ability` is the owner's live score for [`Self::associated_ability`].
    /// Buffs are not included.
    pub fn total_modifier(&self, ability: &AbilityScore, level: u32) -> i32 {
        let bonus = if self.proficient {
            rules::proficiency_bonus(level)
        } else {
            0
        };
        ability.modifier().saturating_add(bonus)
    }

    /// e.g. `"STEALTH (Associated with DEXTERITY): Proficient"`.
    pub fn describe(&self) -> String {
        let status = if self.proficient {
            "Proficient"
        } else {
            "Not proficient"
        };
        format!(
            "{} (Associated with {}): {}",
            self.skill_type, self.ability, status
        )
    }
}

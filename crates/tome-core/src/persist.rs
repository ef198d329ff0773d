//! JSON load/save for characters.
//!
//! The document shape is flat and stable:
//!
//! ```json
//! {
//!   "name": "Rogue",
//!   "level": 3,
//!   "abilityScores": [{ "type": "DEXTERITY", "score": 16 }],
//!   "skills": [{
//!     "type": "STEALTH",
//!     "associatedAbility": { "type": "DEXTERITY", "score": 16 },
//!     "isProficient": true
//!   }],
//!   "activeBuffsDebuffs": [
//!     { "name": "Cloak", "effectAbility": "DEXTERITY", "effectMagnitude": 1, "duration": 2 }
//!   ],
//!   "rollHistory": { "rolls": [{ "type": "STEALTH check", "baseResult": 12, "appliedModifier": 6 }] }
//! }
//! ```
//!
//! On load a skill's `associatedAbility` is matched to the character's own
//! score by type; the nested `score` is informational only. Abilities absent
//! from `abilityScores` are absent from the loaded character. A roll's final
//! outcome is recomputed, never stored.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ability::{AbilityScore, AbilityType};
use crate::buff::BuffDebuff;
use crate::character::Character;
use crate::error::{SheetError, SheetResult};
use crate::roll::Roll;
use crate::skill::{Skill, SkillType};

/// Serialized form of a [`Character`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDocument {
    /// Character name.
    pub name: String,
    /// Character level.
    pub level: u32,
    /// Up to six ability scores.
    pub ability_scores: Vec<AbilityScoreDocument>,
    /// Learned skills.
    #[serde(default)]
    pub skills: Vec<SkillDocument>,
    /// Active buffs and debuffs.
    #[serde(default)]
    pub active_buffs_debuffs: Vec<BuffDebuffDocument>,
    /// Recorded rolls.
    #[serde(default)]
    pub roll_history: RollHistoryDocument,
}

/// Serialized ability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityScoreDocument {
    /// Which ability.
    #[serde(rename = "type")]
    pub ability_type: AbilityType,
    /// Raw score.
    pub score: i32,
}

/// Serialized skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDocument {
    /// Which skill.
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    /// The ability the skill reads, with its score at save time.
    pub associated_ability: AbilityScoreDocument,
    /// Proficiency flag.
    pub is_proficient: bool,
}

/// Serialized buff or debuff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuffDebuffDocument {
    /// Display name.
    pub name: String,
    /// Affected ability.
    pub effect_ability: AbilityType,
    /// Signed magnitude.
    pub effect_magnitude: i32,
    /// Rounds remaining.
    pub duration: u32,
}

/// Serialized roll history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollHistoryDocument {
    /// Rolls, oldest first.
    #[serde(default)]
    pub rolls: Vec<RollDocument>,
}

/// Serialized roll. The final outcome is not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollDocument {
    /// Roll label.
    #[serde(rename = "type")]
    pub label: String,
    /// Die result.
    pub base_result: i32,
    /// Applied modifier.
    pub applied_modifier: i32,
}

impl From<&AbilityScore> for AbilityScoreDocument {
    fn from(score: &AbilityScore) -> Self {
        Self {
            ability_type: score.ability_type(),
            score: score.score(),
        }
    }
}

impl From<&BuffDebuff> for BuffDebuffDocument {
    fn from(buff: &BuffDebuff) -> Self {
        Self {
            name: buff.name().to_string(),
            effect_ability: buff.effect_ability(),
            effect_magnitude: buff.effect_magnitude(),
            duration: buff.duration(),
        }
    }
}

impl From<&Roll> for RollDocument {
    fn from(roll: &Roll) -> Self {
        Self {
            label: roll.label().to_string(),
            base_result: roll.base_result(),
            applied_modifier: roll.applied_modifier(),
        }
    }
}

impl From<&Character> for CharacterDocument {
    fn from(character: &Character) -> Self {
        let skills = character
            .skills()
            .map(|skill| {
                let ability = skill.associated_ability();
                // A skill whose ability was removed still records its key.
                let score = character
                    .ability_score(ability)
                    .map(AbilityScore::score)
                    .unwrap_or(crate::rules::DEFAULT_ABILITY_SCORE);
                SkillDocument {
                    skill_type: skill.skill_type(),
                    associated_ability: AbilityScoreDocument {
                        ability_type: ability,
                        score,
                    },
                    is_proficient: skill.is_proficient(),
                }
            })
            .collect();

        Self {
            name: character.name().to_string(),
            level: character.level(),
            ability_scores: character.ability_scores().map(Into::into).collect(),
            skills,
            active_buffs_debuffs: character.buffs_debuffs().iter().map(Into::into).collect(),
            roll_history: RollHistoryDocument {
                rolls: character.roll_history().iter().map(Into::into).collect(),
            },
        }
    }
}

impl TryFrom<CharacterDocument> for Character {
    type Error = SheetError;

    fn try_from(doc: CharacterDocument) -> SheetResult<Self> {
        let mut character = Character::new(doc.name, doc.level)?;

        for ability in AbilityType::ALL {
            if !doc.ability_scores.iter().any(|a| a.ability_type == ability) {
                character.remove_ability_score(ability);
            }
        }
        for entry in doc.ability_scores {
            character.restore_ability_score(entry.ability_type, entry.score);
        }

        for entry in doc.skills {
            character.add_skill(Skill::with_ability(
                entry.skill_type,
                entry.associated_ability.ability_type,
                entry.is_proficient,
            ));
        }

        for entry in doc.active_buffs_debuffs {
            character.add_buff_debuff(BuffDebuff::new(
                entry.name,
                entry.effect_ability,
                entry.effect_magnitude,
                entry.duration,
            ));
        }

        for entry in doc.roll_history.rolls {
            character.add_roll(Roll::new(entry.label, entry.base_result, entry.applied_modifier));
        }

        Ok(character)
    }
}

/// Serialize a character to pretty-printed JSON.
pub fn to_json(character: &Character) -> SheetResult<String> {
    let doc = CharacterDocument::from(character);
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parse a character from JSON.
pub fn from_json(json: &str) -> SheetResult<Character> {
    let doc: CharacterDocument = serde_json::from_str(json)?;
    Character::try_from(doc)
}

/// Write a character document to `path`, replacing any existing file.
pub fn save(path: &Path, character: &Character) -> SheetResult<()> {
    let mut json = to_json(character)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| SheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), character = character.name(), "character saved");
    Ok(())
}

/// Read a character document from `path`.
pub fn load(path: &Path) -> SheetResult<Character> {
    let json = fs::read_to_string(path).map_err(|source| SheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let character = from_json(&json)?;
    tracing::debug!(path = %path.display(), character = character.name(), "character loaded");
    Ok(character)
}

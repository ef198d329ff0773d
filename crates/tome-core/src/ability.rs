//! The six ability scores and their derived modifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// One of the six base attributes.
///
/// Ordering follows the traditional sheet layout, which is also the order
/// abilities are listed and persisted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbilityType {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Endurance and health.
    Constitution,
    /// Reasoning and memory.
    Intelligence,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl AbilityType {
    /// All six abilities in sheet order.
    pub const ALL: [AbilityType; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// The persisted identifier, e.g. `"STRENGTH"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "STRENGTH",
            Self::Dexterity => "DEXTERITY",
            Self::Constitution => "CONSTITUTION",
            Self::Intelligence => "INTELLIGENCE",
            Self::Wisdom => "WISDOM",
            Self::Charisma => "CHARISMA",
        }
    }

    /// Three-letter abbreviation, e.g. `"STR"`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

impl fmt::Display for AbilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AbilityType {
    type Err = SheetError;

    /// Accepts full names in any case (`"wisdom"`, `"WISDOM"`) and
    /// abbreviations (`"wis"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == wanted || a.abbreviation() == wanted)
            .ok_or_else(|| SheetError::UnknownAbility(s.to_string()))
    }
}

/// Modifier for a raw ability score: `floor((score - 10) / 2)`.
///
/// Floors toward negative infinity, so a score of 3 gives -4 and a score
/// of 1 gives -5. Defined for every `i32`.
pub fn modifier_for(score: i32) -> i32 {
    score.div_euclid(2) - 5
}

/// One ability's raw score.
///
/// The modifier is always derived from the score and cannot be set on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityScore {
    ability: AbilityType,
    score: i32,
}

impl AbilityScore {
    /// Create an ability score. Any integer is accepted; range checks belong
    /// to the caller.
    pub fn new(ability: AbilityType, score: i32) -> Self {
        Self { ability, score }
    }

    /// Which ability this is.
    pub fn ability_type(&self) -> AbilityType {
        self.ability
    }

    /// The raw score.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The derived modifier.
    pub fn modifier(&self) -> i32 {
        modifier_for(self.score)
    }

    /// Replace the raw score.
    pub fn set_score(&mut self, score: i32) {
        self.score = score;
    }
}

impl fmt::Display for AbilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (Modifier: {})",
            self.ability,
            self.score,
            self.modifier()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn modifier_spot_checks() {
        assert_eq!(modifier_for(10), 0);
        assert_eq!(modifier_for(11), 0);
        assert_eq!(modifier_for(1), -5);
        assert_eq!(modifier_for(3), -4);
        assert_eq!(modifier_for(9), -1);
        assert_eq!(modifier_for(16), 3);
        assert_eq!(modifier_for(29), 9);
        assert_eq!(modifier_for(30), 10);
    }

    #[test]
    fn modifier_at_integer_bounds() {
        assert_eq!(modifier_for(i32::MIN), i32::MIN / 2 - 5);
        assert_eq!(modifier_for(i32::MAX), i32::MAX / 2 - 5);
        assert_eq!(modifier_for(i32::MIN + 1), i32::MIN / 2 - 5);
    }

    #[test]
    fn set_score_updates_modifier() {
        let mut s = AbilityScore::new(AbilityType::Dexterity, 10);
        assert_eq!(s.modifier(), 0);
        s.set_score(16);
        assert_eq!(s.score(), 16);
        assert_eq!(s.modifier(), 3);
        s.set_score(7);
        assert_eq!(s.modifier(), -2);
    }

    #[test]
    fn out_of_range_scores_are_accepted() {
        let s = AbilityScore::new(AbilityType::Strength, -4);
        assert_eq!(s.modifier(), -7);
        let s = AbilityScore::new(AbilityType::Strength, 40);
        assert_eq!(s.modifier(), 15);
    }

    #[test]
    fn display() {
        let s = AbilityScore::new(AbilityType::Wisdom, 8);
        assert_eq!(s.to_string(), "WISDOM: 8 (Modifier: -1)");
    }

    #[test]
    fn parse_names_and_abbreviations() {
        assert_eq!("wisdom".parse::<AbilityType>().unwrap(), AbilityType::Wisdom);
        assert_eq!("CHA".parse::<AbilityType>().unwrap(), AbilityType::Charisma);
        assert_eq!(" Dex ".parse::<AbilityType>().unwrap(), AbilityType::Dexterity);
        assert!(matches!(
            "luck".parse::<AbilityType>(),
            Err(SheetError::UnknownAbility(name)) if name == "luck"
        ));
    }

    #[test]
    fn serde_uses_screaming_names() {
        let json = serde_json::to_string(&AbilityType::Constitution).unwrap();
        assert_eq!(json, "\"CONSTITUTION\"");
        let back: AbilityType = serde_json::from_str("\"INTELLIGENCE\"").unwrap();
        assert_eq!(back, AbilityType::Intelligence);
    }

    proptest! {
        #[test]
        fn modifier_is_floored_half_of_offset(score in any::<i32>()) {
            let m = i64::from(modifier_for(score));
            let offset = i64::from(score) - 10;
            // 2m <= score - 10 < 2m + 2
            prop_assert!(2 * m <= offset);
            prop_assert!(offset < 2 * m + 2);
        }
    }
}

//! Character sheet engine for Tome.
//!
//! Tracks a character's six ability scores, learned skills, timed buffs and
//! debuffs, and roll history, and derives the modifiers a player adds to
//! ability and skill checks. The [`persist`] module loads and saves
//! characters as flat JSON documents.

pub mod ability;
pub mod buff;
pub mod character;
pub mod dice;
pub mod error;
pub mod persist;
pub mod roll;
pub mod rules;
pub mod skill;

pub use ability::{AbilityScore, AbilityType};
pub use buff::BuffDebuff;
pub use character::{Character, CheckBreakdown, CheckOutcome, CheckSubject, RollRecorded};
pub use dice::Die;
pub use error::{SheetError, SheetResult};
pub use roll::{Roll, RollHistory};
pub use skill::{Skill, SkillType, associated_ability_for};

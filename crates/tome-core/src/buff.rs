//! Timed buffs and debuffs on a single ability.

use std::fmt;

use crate::ability::AbilityType;

/// A named, timed modifier on one ability.
///
/// Positive magnitudes are buffs, negative ones debuffs. Duration counts
/// rounds remaining and never goes below zero. A buff at zero duration is
/// expired: it stays listed until pruned but no longer contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuffDebuff {
    name: String,
    effect_ability: AbilityType,
    effect_magnitude: i32,
    duration: u32,
}

impl BuffDebuff {
    /// Create a buff or debuff.
    pub fn new(
        name: impl Into<String>,
        effect_ability: AbilityType,
        effect_magnitude: i32,
        duration: u32,
    ) -> Self {
        Self {
            name: name.into(),
            effect_ability,
            effect_magnitude,
            duration,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ability this affects.
    pub fn effect_ability(&self) -> AbilityType {
        self.effect_ability
    }

    /// Signed amount added to the ability's modifier.
    pub fn effect_magnitude(&self) -> i32 {
        self.effect_magnitude
    }

    /// Rounds remaining.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Retarget the effect to another ability.
    pub fn set_effect_ability(&mut self, ability: AbilityType) {
        self.effect_ability = ability;
    }

    /// Change the effect magnitude.
    pub fn set_effect_magnitude(&mut self, magnitude: i32) {
        self.effect_magnitude = magnitude;
    }

    /// Overwrite the remaining duration.
    pub fn set_duration(&mut self, duration: u32) {
        self.duration = duration;
    }

    /// Count down `rounds`, clamping at zero.
    pub fn decrement_duration(&mut self, rounds: u32) {
        self.duration = self.duration.saturating_sub(rounds);
    }

    /// Extend by `rounds`.
    pub fn increment_duration(&mut self, rounds: u32) {
        self.duration = self.duration.saturating_add(rounds);
    }

    /// True once the duration has run out.
    pub fn is_expired(&self) -> bool {
        self.duration == 0
    }

    /// What this contributes to a modifier on `ability`: the magnitude if it
    /// targets that ability and is still running, otherwise 0.
    pub fn contribution_to(&self, ability: AbilityType) -> i32 {
        if self.effect_ability == ability && !self.is_expired() {
            self.effect_magnitude
        } else {
            0
        }
    }

    /// e.g. `"Bless (WISDOM, 2, Duration: 3 rounds)"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BuffDebuff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, Duration: {} rounds)",
            self.name, self.effect_ability, self.effect_magnitude, self.duration
        )
    }
}

/// Sum of the running buff magnitudes on `ability`. Stacking is unlimited
/// and the sum saturates at the `i32` bounds.
pub fn total_for<'a>(buffs: impl IntoIterator<Item = &'a BuffDebuff>, ability: AbilityType) -> i32 {
    buffs
        .into_iter()
        .map(|b| b.contribution_to(ability))
        .fold(0, i32::saturating_add)
}

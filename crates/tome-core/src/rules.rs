//! Fixed rule constants and the proficiency bonus formula.

/// Score every ability starts at on a freshly created character.
pub const DEFAULT_ABILITY_SCORE: i32 = 10;

/// Lowest ability score a front end should accept from a player.
pub const MIN_ABILITY_SCORE: i32 = 1;

/// Highest ability score a front end should accept from a player.
pub const MAX_ABILITY_SCORE: i32 = 30;

/// Proficiency bonus for a character of the given level.
///
/// Scales as `1 + (level + 3) / 4`: +2 at levels 1-4, +3 at 5-8, and so on.
/// Level 0 is rejected when a character is built, so it never reaches here
/// through the public API; it still yields +1 rather than panicking.
pub fn proficiency_bonus(level: u32) -> i32 {
    1 + (level.saturating_add(3) / 4) as i32
}

/// Returns true if `score` lies within the accepted ability score range.
pub fn is_valid_ability_score(score: i32) -> bool {
    (MIN_ABILITY_SCORE..=MAX_ABILITY_SCORE).contains(&score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_scales_every_four_levels() {
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(3), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(8), 3);
        assert_eq!(proficiency_bonus(9), 4);
        assert_eq!(proficiency_bonus(17), 6);
        assert_eq!(proficiency_bonus(20), 6);
    }

    #[test]
    fn proficiency_does_not_overflow() {
        assert!(proficiency_bonus(u32::MAX) > 0);
    }

    #[test]
    fn ability_score_range() {
        assert!(is_valid_ability_score(1));
        assert!(is_valid_ability_score(30));
        assert!(!is_valid_ability_score(0));
        assert!(!is_valid_ability_score(31));
    }
}

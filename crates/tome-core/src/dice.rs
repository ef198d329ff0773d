//! The check die.

use std::fmt;

use rand::Rng;

/// A die with a fixed number of faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    sides: u32,
}

impl Die {
    /// The twenty-sided die every check is rolled with.
    pub const D20: Die = Die { sides: 20 };

    /// A die with `sides` faces. Zero is treated as a one-sided die.
    pub fn new(sides: u32) -> Self {
        Self {
            sides: sides.max(1),
        }
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        self.sides
    }

    /// Roll the die once, returning a value in `1..=sides`.
    pub fn roll<R: Rng>(self, rng: &mut R) -> i32 {
        let face = rng.random_range(1..=self.sides);
        i32::try_from(face).unwrap_or(i32::MAX)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides)
    }
}

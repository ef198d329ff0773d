//! Ordered log of a character's rolls.

use super::Roll;

/// Insertion-ordered roll log. Newest rolls are at the tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollHistory {
    rolls: Vec<Roll>,
}

impl RollHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a roll.
    pub fn add(&mut self, roll: Roll) {
        self.rolls.push(roll);
    }

    /// All rolls, oldest first.
    pub fn rolls(&self) -> &[Roll] {
        &self.rolls
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Roll> {
        self.rolls.iter()
    }

    /// The newest roll, if any.
    pub fn last(&self) -> Option<&Roll> {
        self.rolls.last()
    }

    /// The newest `n` rolls, oldest first. Returns everything when `n`
    /// exceeds the history length.
    pub fn recent(&self, n: usize) -> &[Roll] {
        let start = self.rolls.len().saturating_sub(n);
        &self.rolls[start..]
    }

    /// Remove the roll at `index` (0 = oldest).
    pub fn remove(&mut self, index: usize) -> Option<Roll> {
        if index < self.rolls.len() {
            Some(self.rolls.remove(index))
        } else {
            None
        }
    }

    /// Keep only the oldest `len` rolls.
    pub fn truncate(&mut self, len: usize) {
        self.rolls.truncate(len);
    }

    /// Drop every roll.
    pub fn clear(&mut self) {
        self.rolls.clear();
    }

    /// Number of rolls.
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Whether no rolls have been recorded.
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}

impl FromIterator<Roll> for RollHistory {
    fn from_iter<I: IntoIterator<Item = Roll>>(iter: I) -> Self {
        Self {
            rolls: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RollHistory {
    type Item = &'a Roll;
    type IntoIter = std::slice::Iter<'a, Roll>;

    fn into_iter(self) -> Self::IntoIter {
        self.rolls.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RollHistory {
        [
            Roll::new("Strength check", 10, 2),
            Roll::new("Dexterity check", 8, 1),
            Roll::new("STEALTH check", 17, 6),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn add_and_last() {
        let mut h = RollHistory::new();
        assert!(h.is_empty());
        assert!(h.last().is_none());

        h.add(Roll::new("Strength check", 10, 2));
        assert_eq!(h.last().map(Roll::final_outcome), Some(12));

        h.add(Roll::new("Dexterity check", 8, 1));
        assert_eq!(h.len(), 2);
        assert_eq!(h.last().map(Roll::label), Some("Dexterity check"));
    }

    #[test]
    fn recent_reads_from_tail() {
        let h = sample();
        let recent = h.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].label(), "Dexterity check");
        assert_eq!(recent[1].label(), "STEALTH check");
        assert_eq!(h.recent(10).len(), 3);
        assert!(h.recent(0).is_empty());
    }

    #[test]
    fn remove_by_index() {
        let mut h = sample();
        let removed = h.remove(0).unwrap();
        assert_eq!(removed.label(), "Strength check");
        assert_eq!(h.len(), 2);
        assert!(h.remove(5).is_none());
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn truncate_and_clear() {
        let mut h = sample();
        h.truncate(1);
        assert_eq!(h.len(), 1);
        assert_eq!(h.rolls()[0].label(), "Strength check");
        h.clear();
        assert!(h.is_empty());
    }

    #[test]
    fn iterates_in_insertion_order() {
        let h = sample();
        let labels: Vec<&str> = h.iter().map(Roll::label).collect();
        assert_eq!(labels, ["Strength check", "Dexterity check", "STEALTH check"]);
        assert_eq!((&h).into_iter().count(), 3);
    }
}

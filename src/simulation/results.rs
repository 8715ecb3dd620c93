// src/simulation/results.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Frequency table of measured bit-strings.
///
/// Only outcomes observed at least once are present, and the counts sum to
/// the number of shots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    shots: usize,
    /// Ordered by bit-string so iteration and display are stable.
    table: BTreeMap<String, u64>,
}

impl Counts {
    pub(crate) fn new(shots: usize) -> Self {
        Self { shots, table: BTreeMap::new() }
    }

    pub(crate) fn record(&mut self, bits: String) {
        *self.table.entry(bits).or_insert(0) += 1;
    }

    /// Number of shots the table was sampled from.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Count for `bits`, zero if never observed.
    pub fn get(&self, bits: &str) -> u64 {
        self.table.get(bits).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Sum of all counts. Equals [`Counts::shots`] for simulator output.
    pub fn total(&self) -> u64 {
        self.table.values().sum()
    }

    /// Iterates `(bit-string, count)` in lexicographic bit-string order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.table.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The most frequent bit-string. Ties go to the lexicographically smallest one.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        // BTreeMap iterates ascending, so keep the first maximum seen
        self.iter().fold(None, |best, (bits, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((bits, count)),
        })
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let table: BTreeMap<String, u64> = iter.into_iter().filter(|(_, c)| *c > 0).collect();
        let shots = table.values().sum::<u64>() as usize;
        Self { shots, table }
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (bits, count)) in self.iter().enumerate() {
            write!(f, "{}'{}': {}", if i > 0 { ", " } else { "" }, bits, count)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Counts {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn ties_break_lexicographically() {
        let c = counts(&[("110", 5), ("011", 5), ("000", 2)]);
        assert_eq!(c.most_frequent(), Some(("011", 5)));
    }

    #[test]
    fn strict_maximum_wins() {
        let c = counts(&[("000", 3), ("111", 9), ("010", 9 - 1)]);
        assert_eq!(c.most_frequent(), Some(("111", 9)));
    }

    #[test]
    fn empty_has_no_winner() {
        assert_eq!(Counts::new(0).most_frequent(), None);
    }

    #[test]
    fn zero_counts_are_dropped_and_totals_match() {
        let c = counts(&[("00", 0), ("01", 4), ("10", 6)]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.total(), 10);
        assert_eq!(c.shots(), 10);
        assert_eq!(c.get("00"), 0);
    }

    #[test]
    fn display_matches_dictionary_style() {
        let c = counts(&[("10", 1), ("01", 2)]);
        assert_eq!(c.to_string(), "{'01': 2, '10': 1}");
    }
}

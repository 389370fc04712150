//! Symbol occurrence counting.

use std::collections::BTreeMap;

/// Occurrence count per distinct byte, iterated in ascending byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let counts: BTreeMap<u8, u64> = bytes
            .iter()
            .copied()
            .fold(BTreeMap::new(), |mut acc, byte| {
                *acc.entry(byte).or_insert(0) += 1;
                acc
            });
        FrequencyTable { counts }
    }

    /// Folds the counts of `other` into `self`. Counting chunks separately and
    /// merging gives the same table as counting the concatenation.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (&byte, &count) in &other.counts {
            *self.counts.entry(byte).or_insert(0) += count;
        }
    }

    pub fn get(&self, byte: u8) -> Option<u64> {
        self.counts.get(&byte).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&b, &c)| (b, c))
    }
}

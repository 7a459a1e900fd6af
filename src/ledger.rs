use std::collections::VecDeque;

use crate::types::AbilityRecord;

/// Fixed history depth. Patterns longer than this can never match and are
/// rejected at library validation.
pub const LEDGER_CAPACITY: usize = 20;

/// Bounded, time-ordered history of completed ability activations. When the
/// buffer is full, appending evicts the oldest record.
#[derive(Debug, Clone)]
pub struct AbilityLedger {
    records: VecDeque<AbilityRecord>,
    capacity: usize,
}

impl AbilityLedger {
    pub fn new() -> Self {
        Self::with_capacity(LEDGER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, record: AbilityRecord) {
        debug_assert!(
            self.records
                .back()
                .is_none_or(|last| last.timestamp <= record.timestamp),
            "ledger records must be appended in timestamp order"
        );
        while self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// The newest `n` records in chronological order. Returns fewer when the
    /// ledger holds fewer.
    pub fn tail(&self, n: usize) -> Vec<AbilityRecord> {
        let skip = self.records.len().saturating_sub(n);
        self.records.iter().skip(skip).copied().collect()
    }

    pub fn latest(&self) -> Option<&AbilityRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityRecord> {
        self.records.iter()
    }
}

impl Default for AbilityLedger {
    fn default() -> Self {
        Self::new()
    }
}

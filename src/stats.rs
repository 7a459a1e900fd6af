use std::collections::HashMap;

use crate::combo::Combo;

/// Per-match tallies for reports and simulation summaries. Reset together
/// with the match.
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    pub activations: u64,
    pub combos_matched: u64,
    pub points_banked: i64,
    /// Points for combos recognized while scoring was gated off.
    pub points_missed: i64,
    pub max_chain: u32,
    combo_counts: HashMap<String, u64>,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_activation(&mut self) {
        self.activations += 1;
    }

    pub fn record_combo(&mut self, combo: &Combo, points: Option<i64>, chain: u32) {
        self.combos_matched += 1;
        self.max_chain = self.max_chain.max(chain);
        *self.combo_counts.entry(combo.id.clone()).or_insert(0) += 1;
        match points {
            Some(points) => self.points_banked += points,
            None => self.points_missed += crate::scoring::score_for(combo, chain),
        }
    }

    pub fn combo_counts(&self) -> &HashMap<String, u64> {
        &self.combo_counts
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

use crate::combo::Combo;
use crate::types::GameTime;

/// Successive combos closer together than this keep the chain alive; a gap
/// of exactly this resets it.
pub const CHAIN_GAP_MS: u64 = 3_000;

/// Per-chain-step bonus for combos that declare no multiplier.
pub const DEFAULT_UNIT_MULTIPLIER: f64 = 0.2;

/// Tracks how many combos landed in quick succession and turns each hit
/// into points. Chain state survives ledger clears; only match restarts
/// reset it.
#[derive(Debug, Clone, Default)]
pub struct ChainScorer {
    combo_chain: u32,
    last_combo_time: GameTime,
}

impl ChainScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current chain length. 0 only before the first combo of a match.
    pub fn combo_chain(&self) -> u32 {
        self.combo_chain
    }

    /// Registers a recognized combo at `match_time` and returns the points
    /// it is worth at the resulting chain length.
    pub fn on_combo_success(&mut self, combo: &Combo, match_time: GameTime) -> i64 {
        if match_time.saturating_sub(self.last_combo_time) < CHAIN_GAP_MS {
            self.combo_chain += 1;
        } else {
            self.combo_chain = 1;
        }
        self.last_combo_time = match_time;
        score_for(combo, self.combo_chain)
    }

    pub fn reset(&mut self) {
        self.combo_chain = 0;
        self.last_combo_time = 0;
    }
}

/// Points for a combo at a given chain length: the base score scaled by
/// `1 + (chain - 1) * unit`, floored. The unit step is `multiplier - 1`
/// when the combo declares one, else the default bonus.
pub fn score_for(combo: &Combo, chain: u32) -> i64 {
    let unit = combo
        .multiplier
        .map_or(DEFAULT_UNIT_MULTIPLIER, |multiplier| multiplier - 1.0);
    let chain_multiplier = 1.0 + f64::from(chain.saturating_sub(1)) * unit;
    (combo.base_score as f64 * chain_multiplier).floor() as i64
}

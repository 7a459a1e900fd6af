pub mod library;
pub mod loader;

use serde::{Deserialize, Serialize};

use crate::ledger::AbilityLedger;
use crate::types::{AbilityKind, AbilityRecord};

/// A named move sequence with its scoring parameters.
///
/// `time_limit_ms` bounds the whole pattern; each adjacent pair of moves
/// must additionally land within half of it. A limit of 0 disables any
/// multi-move pattern. `multiplier` feeds chain scoring; combos without one
/// use the default chain bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combo {
    pub id: String,
    pub name: String,
    pub pattern: Vec<AbilityKind>,
    pub base_score: i64,
    pub difficulty: u8,
    pub time_limit_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    #[serde(default)]
    pub description: String,
}

/// A successful recognition: the combo plus the ledger records that formed
/// its pattern, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboMatch {
    pub combo: Combo,
    pub records: Vec<AbilityRecord>,
}

/// Scans the ledger tail against a fixed library, declaration order, first
/// match wins. Evaluated once per appended record (edge triggered); the
/// caller clears the ledger after a hit so a combo cannot rematch on stale
/// records.
#[derive(Debug, Clone)]
pub struct ComboMatcher {
    library: Vec<Combo>,
}

impl ComboMatcher {
    /// The library is assumed validated (see `library::validate_library`);
    /// the matcher itself never rejects entries.
    pub fn new(library: Vec<Combo>) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &[Combo] {
        &self.library
    }

    pub fn match_ledger(&self, ledger: &AbilityLedger) -> Option<ComboMatch> {
        for combo in &self.library {
            if combo.pattern.is_empty() || combo.pattern.len() > ledger.len() {
                continue;
            }
            let tail = ledger.tail(combo.pattern.len());
            if pattern_matches(&tail, &combo.pattern)
                && within_time_windows(&tail, combo.time_limit_ms)
            {
                return Some(ComboMatch {
                    combo: combo.clone(),
                    records: tail,
                });
            }
        }
        None
    }
}

fn pattern_matches(tail: &[AbilityRecord], pattern: &[AbilityKind]) -> bool {
    tail.len() == pattern.len()
        && tail
            .iter()
            .zip(pattern)
            .all(|(record, kind)| record.ability == *kind)
}

/// Both windows are inclusive: the whole pattern within `limit`, each
/// adjacent gap within `limit / 2`. Single-move patterns have neither an
/// elapsed span nor gaps and always pass.
fn within_time_windows(tail: &[AbilityRecord], limit: u64) -> bool {
    let (first, last) = match (tail.first(), tail.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };
    if last.timestamp - first.timestamp > limit {
        return false;
    }
    let max_gap = limit / 2;
    tail.windows(2)
        .all(|pair| pair[1].timestamp - pair[0].timestamp <= max_gap)
}

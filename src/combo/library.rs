use std::collections::HashSet;

use super::Combo;
use crate::error::{GrooveError, GrooveResult};
use crate::ledger::LEDGER_CAPACITY;
use crate::types::AbilityKind::{RunningMan, TStepLeft, TStepRight};

/// Built-in combo set, declared simple to complex. Declaration order is
/// match priority, so no pattern here may complete at an earlier or equal
/// edge of a later pattern; `validate_library` returns no warnings for
/// this set.
pub fn builtin_library() -> Vec<Combo> {
    vec![
        Combo {
            id: "double_time".to_string(),
            name: "Double Time".to_string(),
            pattern: vec![RunningMan, RunningMan],
            base_score: 100,
            difficulty: 1,
            time_limit_ms: 2000,
            multiplier: None,
            description: "Two running man steps back to back.".to_string(),
        },
        Combo {
            id: "side_winder".to_string(),
            name: "Side Winder".to_string(),
            pattern: vec![TStepLeft, TStepRight, TStepLeft],
            base_score: 140,
            difficulty: 2,
            time_limit_ms: 2600,
            multiplier: None,
            description: "Alternating T-steps, leading left.".to_string(),
        },
        Combo {
            id: "crossover".to_string(),
            name: "Crossover".to_string(),
            pattern: vec![RunningMan, TStepLeft, RunningMan],
            base_score: 150,
            difficulty: 2,
            time_limit_ms: 2200,
            multiplier: Some(1.2),
            description: "Running man split by a left T-step.".to_string(),
        },
        Combo {
            id: "crossover_reverse".to_string(),
            name: "Crossover Reverse".to_string(),
            pattern: vec![RunningMan, TStepRight, RunningMan],
            base_score: 150,
            difficulty: 2,
            time_limit_ms: 2200,
            multiplier: Some(1.2),
            description: "Running man split by a right T-step.".to_string(),
        },
        Combo {
            id: "whirlwind".to_string(),
            name: "Whirlwind".to_string(),
            pattern: vec![TStepRight, TStepLeft, RunningMan, TStepLeft],
            base_score: 260,
            difficulty: 3,
            time_limit_ms: 3200,
            multiplier: Some(1.5),
            description: "Full carousel of steps ending on a left T-step.".to_string(),
        },
    ]
}

/// Checks a library before the matcher takes it. Structural defects
/// (duplicate ids, empty patterns, patterns deeper than the ledger) fail
/// the load; suspicious-but-legal entries come back as warning strings.
pub fn validate_library(combos: &[Combo]) -> GrooveResult<Vec<String>> {
    let mut seen_ids = HashSet::new();
    for combo in combos {
        if !seen_ids.insert(combo.id.as_str()) {
            return Err(GrooveError::Library(format!(
                "duplicate combo id '{}'",
                combo.id
            )));
        }
        if combo.pattern.is_empty() {
            return Err(GrooveError::Library(format!(
                "combo '{}' has an empty pattern",
                combo.id
            )));
        }
        if combo.pattern.len() > LEDGER_CAPACITY {
            return Err(GrooveError::Library(format!(
                "combo '{}' pattern has {} moves; the ledger only holds {}",
                combo.id,
                combo.pattern.len(),
                LEDGER_CAPACITY
            )));
        }
    }

    let mut warnings = Vec::new();
    for combo in combos {
        if combo.time_limit_ms == 0 && combo.pattern.len() > 1 {
            warnings.push(format!(
                "combo '{}': time limit 0 makes a multi-move pattern unmatchable",
                combo.id
            ));
        }
        if combo.base_score <= 0 {
            warnings.push(format!(
                "combo '{}': base score {} awards no points",
                combo.id, combo.base_score
            ));
        }
        if let Some(multiplier) = combo.multiplier {
            if multiplier < 1.0 {
                warnings.push(format!(
                    "combo '{}': multiplier {} shrinks the score as the chain grows",
                    combo.id, multiplier
                ));
            }
        }
    }
    warnings.extend(shadow_warnings(combos));
    Ok(warnings)
}

/// Matching is edge triggered and the history is cleared after every hit,
/// so a combo whose pattern contains another combo's full pattern ending
/// at an earlier edge can never complete: the shorter combo fires first
/// and wipes the history. At the final edge the tie goes to whichever is
/// declared first.
fn shadow_warnings(combos: &[Combo]) -> Vec<String> {
    let mut warnings = Vec::new();
    for (i, combo) in combos.iter().enumerate() {
        for (j, other) in combos.iter().enumerate() {
            if i == j || other.pattern.len() > combo.pattern.len() {
                continue;
            }
            let earlier_edge = (other.pattern.len()..combo.pattern.len())
                .find(|&k| combo.pattern[..k].ends_with(&other.pattern));
            if let Some(edge) = earlier_edge {
                warnings.push(format!(
                    "combo '{}' may never match: '{}' completes at move {} of its pattern",
                    combo.id, other.id, edge
                ));
            } else if j < i && combo.pattern.ends_with(&other.pattern) {
                warnings.push(format!(
                    "combo '{}' may never match: '{}' is declared first and completes on the same move",
                    combo.id, other.id
                ));
            }
        }
    }
    warnings
}

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::engine::MatchEngine;
use crate::error::{GrooveError, GrooveResult};
use crate::input::DirectionSignal;
use crate::types::{AbilityKind, GameTime};

/// One recorded host action. Traces are CSV rows of
/// `time_ms,action,value`; see `TraceAction` for the action vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub time_ms: GameTime,
    pub action: TraceAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceAction {
    Press(DirectionSignal),
    Release(DirectionSignal),
    Ability(AbilityKind),
    ToggleMode,
    Start,
    Pause,
    Resume,
    End,
    Restart,
}

impl TraceEvent {
    /// Replays this action against an engine, using the recorded time as
    /// `now` where one is needed.
    pub fn apply(&self, engine: &mut MatchEngine) {
        match self.action {
            TraceAction::Press(signal) => engine.signal_changed(signal, true),
            TraceAction::Release(signal) => engine.signal_changed(signal, false),
            TraceAction::Ability(kind) => engine.request_ability(kind, self.time_ms),
            TraceAction::ToggleMode => {
                engine.toggle_move_mode();
            }
            TraceAction::Start => engine.start(self.time_ms),
            TraceAction::Pause => engine.pause(self.time_ms),
            TraceAction::Resume => engine.resume(self.time_ms),
            TraceAction::End => engine.end(),
            TraceAction::Restart => engine.restart(),
        }
    }
}

/// Loads a session trace. Malformed rows are skipped and counted, not
/// fatal; the result is sorted by timestamp since hand-edited traces may
/// be out of order.
pub fn load_trace<R: Read>(reader: R) -> GrooveResult<Vec<TraceEvent>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?;
    let named = |i: usize| headers.get(i).map(str::trim).unwrap_or_default();
    if named(0) != "time_ms" || named(1) != "action" {
        return Err(GrooveError::Trace(format!(
            "unexpected trace header '{}', want 'time_ms,action,value'",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut events = Vec::new();
    let mut skipped_count = 0;
    let mut row_idx = 0;

    for result in rdr.records() {
        row_idx += 1;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                tracing::debug!("trace row {}: csv error: {}", row_idx, e);
                skipped_count += 1;
                continue;
            }
        };
        if rec.len() < 2 {
            skipped_count += 1;
            continue;
        }

        let time_ms: GameTime = match rec[0].trim().parse() {
            Ok(val) => val,
            Err(_) => {
                tracing::debug!("trace row {}: bad time '{}'", row_idx, &rec[0]);
                skipped_count += 1;
                continue;
            }
        };
        let value = rec.get(2).map(str::trim).unwrap_or_default();
        let action = match parse_action(rec[1].trim(), value) {
            Some(action) => action,
            None => {
                tracing::debug!(
                    "trace row {}: unknown action '{}' / value '{}'",
                    row_idx,
                    &rec[1],
                    value
                );
                skipped_count += 1;
                continue;
            }
        };
        events.push(TraceEvent { time_ms, action });
    }

    if skipped_count > 0 {
        tracing::warn!("trace: skipped {} malformed row(s)", skipped_count);
    }

    events.sort_by_key(|event| event.time_ms);
    Ok(events)
}

pub fn load_trace_file<P: AsRef<Path>>(path: P) -> GrooveResult<Vec<TraceEvent>> {
    let file = File::open(path)?;
    load_trace(file)
}

fn parse_action(action: &str, value: &str) -> Option<TraceAction> {
    match action {
        "press" => DirectionSignal::from_str(value).ok().map(TraceAction::Press),
        "release" => DirectionSignal::from_str(value)
            .ok()
            .map(TraceAction::Release),
        "ability" => AbilityKind::from_str(value).ok().map(TraceAction::Ability),
        "toggle" => Some(TraceAction::ToggleMode),
        "start" => Some(TraceAction::Start),
        "pause" => Some(TraceAction::Pause),
        "resume" => Some(TraceAction::Resume),
        "end" => Some(TraceAction::End),
        "restart" => Some(TraceAction::Restart),
        _ => None,
    }
}

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::clock::MatchPhase;
use crate::combo::Combo;

/// Notifications pushed to the presentation layer. Payloads carry full
/// state so subscribers never have to query back.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    ScoreChanged {
        delta_score: i64,
        total_score: i64,
        combo_chain: u32,
    },
    TimeChanged {
        time_left: u32,
        is_warning: bool,
        is_critical: bool,
        is_time_up: bool,
    },
    StateChanged {
        previous: MatchPhase,
        current: MatchPhase,
    },
    ComboAchieved {
        combo: Combo,
        /// None when the match was not active at score time; the combo was
        /// still recognized, it just banked nothing.
        points: Option<i64>,
    },
}

/// Fan-out over mpsc senders. Subscribe before the engine is built, then
/// move the bus in; components hold clones. A dropped receiver is normal
/// during teardown and only logged at debug level.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    senders: Vec<Sender<MatchEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<MatchEvent> {
        let (sender, receiver) = channel();
        self.senders.push(sender);
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }

    pub fn publish(&self, event: MatchEvent) {
        for sender in &self.senders {
            if sender.send(event.clone()).is_err() {
                tracing::debug!("subscriber dropped; discarding {:?}", event);
            }
        }
    }
}

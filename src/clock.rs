use strum_macros::Display;

use crate::events::{EventBus, MatchEvent};
use crate::types::GameTime;

pub const COUNTDOWN_INTERVAL_MS: u64 = 1_000;
/// Post-decrement seconds at or below which the warning flag raises.
pub const WARNING_THRESHOLD_SECS: i64 = 10;
/// Post-decrement seconds at or below which warning escalates to critical.
pub const CRITICAL_THRESHOLD_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum MatchPhase {
    Init,
    Ready,
    Active,
    Paused,
    Finished,
}

/// Countdown timing seam. The production impl is a deterministic
/// accumulator over host-supplied game time; tests inject their own.
pub trait Scheduler {
    fn schedule_periodic(&mut self, now: GameTime, interval_ms: u64);
    fn cancel(&mut self);
    /// Freezes progress toward the next firing, keeping the fraction of
    /// the interval already elapsed.
    fn pause(&mut self, now: GameTime);
    fn resume(&mut self, now: GameTime);
    /// Number of whole intervals elapsed since the last poll.
    fn poll_expired(&mut self, now: GameTime) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler {
    interval_ms: u64,
    next_due: GameTime,
    armed: bool,
    paused: bool,
    pause_remaining: u64,
}

impl Scheduler for IntervalScheduler {
    fn schedule_periodic(&mut self, now: GameTime, interval_ms: u64) {
        self.interval_ms = interval_ms;
        self.next_due = now + interval_ms;
        self.armed = true;
        self.paused = false;
    }

    fn cancel(&mut self) {
        self.armed = false;
        self.paused = false;
    }

    fn pause(&mut self, now: GameTime) {
        if self.armed && !self.paused {
            self.pause_remaining = self.next_due.saturating_sub(now);
            self.paused = true;
        }
    }

    fn resume(&mut self, now: GameTime) {
        if self.armed && self.paused {
            self.next_due = now + self.pause_remaining;
            self.paused = false;
        }
    }

    fn poll_expired(&mut self, now: GameTime) -> u32 {
        if !self.armed || self.paused || self.interval_ms == 0 {
            return 0;
        }
        let mut fired = 0;
        while now >= self.next_due {
            fired += 1;
            self.next_due += self.interval_ms;
        }
        fired
    }
}

/// Match lifecycle, 1 Hz countdown and the score account. Scoring is only
/// accepted while the match is Active; every phase transition and every
/// countdown second is broadcast on the event bus.
pub struct MatchClock {
    phase: MatchPhase,
    time_left: i64,
    total_score: i64,
    initial_duration_secs: u32,
    scheduler: Box<dyn Scheduler + Send>,
    events: EventBus,
}

impl MatchClock {
    pub fn new(initial_duration_secs: u32, events: EventBus) -> Self {
        Self::with_scheduler(
            initial_duration_secs,
            events,
            Box::new(IntervalScheduler::default()),
        )
    }

    pub fn with_scheduler(
        initial_duration_secs: u32,
        events: EventBus,
        scheduler: Box<dyn Scheduler + Send>,
    ) -> Self {
        Self {
            phase: MatchPhase::Init,
            time_left: i64::from(initial_duration_secs),
            total_score: 0,
            initial_duration_secs,
            scheduler,
            events,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Seconds remaining, clamped to zero.
    pub fn time_left(&self) -> u32 {
        self.time_left.max(0) as u32
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    pub fn initial_duration_secs(&self) -> u32 {
        self.initial_duration_secs
    }

    /// Ready -> Active. Restores the full duration and arms the countdown.
    pub fn start(&mut self, now: GameTime) {
        if self.phase != MatchPhase::Ready {
            tracing::warn!("start ignored: match is {} not ready", self.phase);
            return;
        }
        self.time_left = i64::from(self.initial_duration_secs);
        self.scheduler.schedule_periodic(now, COUNTDOWN_INTERVAL_MS);
        self.set_phase(MatchPhase::Active);
    }

    /// Active -> Paused. The countdown holds its sub-second progress.
    pub fn pause(&mut self, now: GameTime) {
        if self.phase != MatchPhase::Active {
            tracing::warn!("pause ignored: match is {} not active", self.phase);
            return;
        }
        self.scheduler.pause(now);
        self.set_phase(MatchPhase::Paused);
    }

    /// Paused -> Active.
    pub fn resume(&mut self, now: GameTime) {
        if self.phase != MatchPhase::Paused {
            tracing::warn!("resume ignored: match is {} not paused", self.phase);
            return;
        }
        self.scheduler.resume(now);
        self.set_phase(MatchPhase::Active);
    }

    /// Any phase -> Finished. Stops the countdown; repeated calls are
    /// no-ops.
    pub fn end(&mut self) {
        self.scheduler.cancel();
        self.set_phase(MatchPhase::Finished);
    }

    /// Any phase -> Ready. Zeroes the score, restores the full duration and
    /// broadcasts a zeroed score so displays reset.
    pub fn restart(&mut self) {
        self.total_score = 0;
        self.time_left = i64::from(self.initial_duration_secs);
        self.scheduler.cancel();
        self.events.publish(MatchEvent::ScoreChanged {
            delta_score: 0,
            total_score: 0,
            combo_chain: 0,
        });
        self.set_phase(MatchPhase::Ready);
    }

    /// Catches the countdown up to `now`, one broadcast per elapsed second.
    /// Seconds queued past the finish are dropped.
    pub fn advance(&mut self, now: GameTime) {
        if self.phase != MatchPhase::Active {
            return;
        }
        let due = self.scheduler.poll_expired(now);
        for _ in 0..due {
            self.second_tick();
            if self.phase != MatchPhase::Active {
                break;
            }
        }
    }

    /// Banks points while Active. Returns false (and broadcasts nothing)
    /// in any other phase.
    pub fn add_score(&mut self, delta: i64, combo_chain: u32) -> bool {
        if self.phase != MatchPhase::Active {
            tracing::warn!("score of {} ignored: match is {} not active", delta, self.phase);
            return false;
        }
        self.total_score += delta;
        self.events.publish(MatchEvent::ScoreChanged {
            delta_score: delta,
            total_score: self.total_score,
            combo_chain,
        });
        true
    }

    fn second_tick(&mut self) {
        self.time_left -= 1;
        let t = self.time_left;
        let is_warning = t > CRITICAL_THRESHOLD_SECS && t <= WARNING_THRESHOLD_SECS;
        let is_critical = t > 0 && t <= CRITICAL_THRESHOLD_SECS;
        let is_time_up = t <= 0;
        self.events.publish(MatchEvent::TimeChanged {
            time_left: t.max(0) as u32,
            is_warning,
            is_critical,
            is_time_up,
        });
        if is_time_up {
            self.scheduler.cancel();
            self.set_phase(MatchPhase::Finished);
        }
    }

    fn set_phase(&mut self, next: MatchPhase) {
        if next == self.phase {
            return;
        }
        let previous = std::mem::replace(&mut self.phase, next);
        self.events.publish(MatchEvent::StateChanged {
            previous,
            current: next,
        });
    }
}

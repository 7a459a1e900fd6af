use crate::clock::{MatchClock, MatchPhase};
use crate::combo::library::{builtin_library, validate_library};
use crate::combo::{Combo, ComboMatcher};
use crate::config::EngineConfig;
use crate::error::GrooveResult;
use crate::events::{EventBus, MatchEvent};
use crate::input::{DirectionSignal, InputAggregator, MoveMode};
use crate::ledger::AbilityLedger;
use crate::scoring::ChainScorer;
use crate::stats::MatchStats;
use crate::types::{AbilityKind, GameTime};

/// One match worth of recognition and scoring state. Hosts feed it raw
/// input signals and a monotonic clock; it pushes `MatchEvent`s back over
/// the bus it was built with.
///
/// Engines start in Init; call `restart()` once to reach Ready, then
/// `start(now)`. All methods run on the caller's thread; the engine is
/// `Send` so whole sessions can be farmed out to worker threads.
pub struct MatchEngine {
    input: InputAggregator,
    ledger: AbilityLedger,
    matcher: ComboMatcher,
    scorer: ChainScorer,
    clock: MatchClock,
    stats: MatchStats,
    events: EventBus,
}

impl MatchEngine {
    /// Validates the config and library before wiring anything: structural
    /// defects fail construction, library lints are logged as warnings.
    pub fn new(config: &EngineConfig, library: Vec<Combo>, events: EventBus) -> GrooveResult<Self> {
        config.validate()?;
        for warning in validate_library(&library)? {
            tracing::warn!("combo library: {}", warning);
        }
        Ok(Self {
            input: InputAggregator::new(config.durations),
            ledger: AbilityLedger::new(),
            matcher: ComboMatcher::new(library),
            scorer: ChainScorer::new(),
            clock: MatchClock::new(config.match_params.match_duration_secs, events.clone()),
            stats: MatchStats::new(),
            events,
        })
    }

    pub fn with_builtin_library(config: &EngineConfig, events: EventBus) -> GrooveResult<Self> {
        Self::new(config, builtin_library(), events)
    }

    // --- consumed surface -------------------------------------------------

    pub fn signal_changed(&mut self, signal: DirectionSignal, pressed: bool) {
        self.input.set_signal(signal, pressed);
    }

    pub fn toggle_move_mode(&mut self) -> MoveMode {
        self.input.toggle_mode()
    }

    /// Ability request at `now`. When the activation is accepted the record
    /// goes straight to the ledger and the ledger tail is matched once.
    /// On a hit: chain-scored points are banked (only while Active), the
    /// score event goes out before the combo event, and the history clears
    /// so nothing rematches.
    pub fn request_ability(&mut self, kind: AbilityKind, now: GameTime) {
        let Some(record) = self.input.try_activate(kind, now) else {
            return;
        };
        self.stats.record_activation();
        self.ledger.append(record);

        let Some(hit) = self.matcher.match_ledger(&self.ledger) else {
            return;
        };
        let delta = self.scorer.on_combo_success(&hit.combo, record.timestamp);
        let chain = self.scorer.combo_chain();
        let banked = self.clock.add_score(delta, chain);
        let points = banked.then_some(delta);
        self.stats.record_combo(&hit.combo, points, chain);
        self.events.publish(MatchEvent::ComboAchieved {
            combo: hit.combo,
            points,
        });
        self.ledger.clear();
    }

    // --- host loop and lifecycle ------------------------------------------

    /// Frame hook: expires the running ability, then catches the countdown
    /// up to `now`.
    pub fn tick(&mut self, now: GameTime) {
        self.input.tick(now);
        self.clock.advance(now);
    }

    pub fn start(&mut self, now: GameTime) {
        self.clock.start(now);
    }

    pub fn pause(&mut self, now: GameTime) {
        self.clock.pause(now);
    }

    pub fn resume(&mut self, now: GameTime) {
        self.clock.resume(now);
    }

    pub fn end(&mut self) {
        self.clock.end();
    }

    /// Back to Ready from any phase: score, chain, history and stats all
    /// reset. Held direction signals survive (keys may still be down) and
    /// a running ability is left to expire on its own.
    pub fn restart(&mut self) {
        self.clock.restart();
        self.scorer.reset();
        self.ledger.clear();
        self.stats.reset();
    }

    // --- queries ----------------------------------------------------------

    pub fn phase(&self) -> MatchPhase {
        self.clock.phase()
    }

    pub fn total_score(&self) -> i64 {
        self.clock.total_score()
    }

    pub fn time_left(&self) -> u32 {
        self.clock.time_left()
    }

    pub fn combo_chain(&self) -> u32 {
        self.scorer.combo_chain()
    }

    pub fn input(&self) -> &InputAggregator {
        &self.input
    }

    pub fn ledger(&self) -> &AbilityLedger {
        &self.ledger
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    pub fn library(&self) -> &[Combo] {
        self.matcher.library()
    }
}

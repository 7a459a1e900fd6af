use fastrand::Rng;
use strum::IntoEnumIterator;

use crate::clock::MatchPhase;
use crate::combo::Combo;
use crate::config::EngineConfig;
use crate::engine::MatchEngine;
use crate::error::{GrooveError, GrooveResult};
use crate::events::EventBus;
use crate::input::DirectionSignal;
use crate::stats::MatchStats;
use crate::types::{AbilityKind, GameTime};

/// Knobs for the scripted input bot.
#[derive(Debug, Clone, Copy)]
pub struct SimOptions {
    pub frame_ms: u64,
    /// Bounds on the pause between bot actions, inclusive.
    pub min_action_gap_ms: u64,
    pub max_action_gap_ms: u64,
    /// Share of action slots spent re-aiming instead of requesting an
    /// ability.
    pub redirect_ratio: f64,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            frame_ms: 16,
            min_action_gap_ms: 150,
            max_action_gap_ms: 600,
            redirect_ratio: 0.25,
        }
    }
}

impl SimOptions {
    pub fn validate(&self) -> GrooveResult<()> {
        if self.frame_ms == 0 {
            return Err(GrooveError::Config("frame_ms must be positive".to_string()));
        }
        if self.min_action_gap_ms > self.max_action_gap_ms {
            return Err(GrooveError::Config(format!(
                "action gap bounds are inverted ({} > {})",
                self.min_action_gap_ms, self.max_action_gap_ms
            )));
        }
        Ok(())
    }
}

/// Outcome of one simulated match.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub seed: u64,
    pub total_score: i64,
    pub stats: MatchStats,
}

/// Plays one full match with a seeded bot on the caller's thread. The same
/// seed, config and library always produce the same report.
pub fn run_session(
    config: &EngineConfig,
    library: Vec<Combo>,
    options: &SimOptions,
    seed: u64,
) -> GrooveResult<SessionReport> {
    options.validate()?;
    let mut engine = MatchEngine::new(config, library, EventBus::new())?;
    let mut rng = Rng::with_seed(seed);

    engine.restart();
    engine.start(0);
    randomize_direction(&mut engine, &mut rng);

    // A finished countdown is the normal exit; the cap covers degenerate
    // configs.
    let cap: GameTime = u64::from(config.match_params.match_duration_secs) * 1_000 + 10_000;
    let mut now: GameTime = 0;
    let mut next_action = action_gap(&mut rng, options);

    while engine.phase() != MatchPhase::Finished && now < cap {
        now += options.frame_ms;
        engine.tick(now);
        // the tick may have run the countdown out; the bot stops with it
        if engine.phase() == MatchPhase::Finished {
            break;
        }
        if now >= next_action {
            if rng.f64() < options.redirect_ratio {
                randomize_direction(&mut engine, &mut rng);
            } else {
                engine.request_ability(random_kind(&mut rng), now);
            }
            next_action = now + action_gap(&mut rng, options);
        }
    }

    Ok(SessionReport {
        seed,
        total_score: engine.total_score(),
        stats: engine.stats().clone(),
    })
}

fn action_gap(rng: &mut Rng, options: &SimOptions) -> u64 {
    rng.u64(options.min_action_gap_ms..=options.max_action_gap_ms)
}

fn random_kind(rng: &mut Rng) -> AbilityKind {
    let kinds: Vec<AbilityKind> = AbilityKind::iter().collect();
    kinds[rng.usize(0..kinds.len())]
}

fn randomize_direction(engine: &mut MatchEngine, rng: &mut Rng) {
    for signal in DirectionSignal::iter() {
        engine.signal_changed(signal, false);
    }
    let (mut horizontal, mut vertical) = (0i8, 0i8);
    while horizontal == 0 && vertical == 0 {
        horizontal = rng.i8(-1..=1);
        vertical = rng.i8(-1..=1);
    }
    if horizontal > 0 {
        engine.signal_changed(DirectionSignal::Right, true);
    } else if horizontal < 0 {
        engine.signal_changed(DirectionSignal::Left, true);
    }
    if vertical > 0 {
        engine.signal_changed(DirectionSignal::Down, true);
    } else if vertical < 0 {
        engine.signal_changed(DirectionSignal::Up, true);
    }
}

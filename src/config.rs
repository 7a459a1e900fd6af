use clap::Args;
use strum::IntoEnumIterator;

use crate::error::{GrooveError, GrooveResult};
use crate::types::AbilityKind;

#[derive(Args, Debug, Clone)]
pub struct EngineConfig {
    #[command(flatten)]
    pub match_params: MatchParams,
    #[command(flatten)]
    pub durations: AbilityDurations,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct MatchParams {
    /// Round length in seconds.
    #[arg(long, default_value_t = 60)]
    pub match_duration_secs: u32,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct AbilityDurations {
    #[arg(long, default_value_t = 400)]
    pub running_man_ms: u64,
    #[arg(long, default_value_t = 300)]
    pub t_step_left_ms: u64,
    #[arg(long, default_value_t = 300)]
    pub t_step_right_ms: u64,
}

impl AbilityDurations {
    pub fn duration_of(&self, kind: AbilityKind) -> u64 {
        match kind {
            AbilityKind::RunningMan => self.running_man_ms,
            AbilityKind::TStepLeft => self.t_step_left_ms,
            AbilityKind::TStepRight => self.t_step_right_ms,
        }
    }
}

impl EngineConfig {
    /// Rejects values the engine cannot run with.
    pub fn validate(&self) -> GrooveResult<()> {
        if self.match_params.match_duration_secs == 0 {
            return Err(GrooveError::Config(
                "match duration must be at least 1 second".to_string(),
            ));
        }
        for kind in AbilityKind::iter() {
            if self.durations.duration_of(kind) == 0 {
                return Err(GrooveError::Config(format!(
                    "{} duration must be positive",
                    kind
                )));
            }
        }
        Ok(())
    }
}

// Defaults mirror the clap default_value_t values above so library users
// get the same engine with or without a parsed command line.
impl Default for MatchParams {
    fn default() -> Self {
        Self {
            match_duration_secs: 60,
        }
    }
}

impl Default for AbilityDurations {
    fn default() -> Self {
        Self {
            running_man_ms: 400,
            t_step_left_ms: 300,
            t_step_right_ms: 300,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_params: MatchParams::default(),
            durations: AbilityDurations::default(),
        }
    }
}

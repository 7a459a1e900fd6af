use clap::Args;
use groovecore::combo::Combo;
use groovecore::config::EngineConfig;
use groovecore::sim::{run_session, SessionReport, SimOptions};
use rayon::prelude::*;
use std::process;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    #[arg(short = 'n', long, default_value_t = 8)]
    pub sessions: usize,

    /// Base seed; session i runs with seed + i. Random when omitted.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,

    #[arg(long, default_value_t = 150)]
    pub min_action_gap_ms: u64,

    #[arg(long, default_value_t = 600)]
    pub max_action_gap_ms: u64,

    #[arg(long, default_value_t = 0.25)]
    pub redirect_ratio: f64,
}

pub fn run(args: SimulateArgs, library: Vec<Combo>) {
    let options = SimOptions {
        frame_ms: args.frame_ms,
        min_action_gap_ms: args.min_action_gap_ms,
        max_action_gap_ms: args.max_action_gap_ms,
        redirect_ratio: args.redirect_ratio,
    };
    let base_seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    println!(
        "🤖 Simulating {} session(s) from base seed {}",
        args.sessions, base_seed
    );

    let results: Result<Vec<SessionReport>, _> = (0..args.sessions)
        .into_par_iter()
        .map(|i| run_session(&args.config, library.clone(), &options, base_seed + i as u64))
        .collect();

    let session_reports = results.unwrap_or_else(|e| {
        eprintln!("❌ Simulation failed: {}", e);
        process::exit(1);
    });
    reports::print_simulation_report(&session_reports);
}

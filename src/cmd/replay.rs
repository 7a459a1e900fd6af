use clap::Args;
use groovecore::clock::MatchPhase;
use groovecore::combo::Combo;
use groovecore::config::EngineConfig;
use groovecore::engine::MatchEngine;
use groovecore::events::EventBus;
use groovecore::trace::load_trace_file;
use groovecore::types::GameTime;
use std::process;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub config: EngineConfig,

    /// Session trace CSV (time_ms,action,value).
    #[arg(short, long)]
    pub trace: String,

    /// Tick step while replaying.
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,

    /// Keep ticking after the last row until the match finishes.
    #[arg(long, default_value_t = false)]
    pub play_out: bool,
}

pub fn run(args: ReplayArgs, library: Vec<Combo>, debug: bool) {
    let trace = load_trace_file(&args.trace).unwrap_or_else(|e| {
        eprintln!("❌ Could not load trace '{}': {}", args.trace, e);
        process::exit(1);
    });
    println!("🎬 Replaying {} ({} events)", args.trace, trace.len());

    let mut bus = EventBus::new();
    let receiver = bus.subscribe();
    let mut engine = MatchEngine::new(&args.config, library, bus).unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        process::exit(1);
    });

    // Bring the engine to Ready so a trace can open with a plain `start`.
    engine.restart();

    let frame = args.frame_ms.max(1);
    let mut now: GameTime = 0;
    for event in &trace {
        while now + frame <= event.time_ms {
            now += frame;
            engine.tick(now);
        }
        event.apply(&mut engine);
    }
    if let Some(last) = trace.last() {
        now = now.max(last.time_ms);
        engine.tick(now);
    }

    if args.play_out {
        let deadline =
            now + u64::from(args.config.match_params.match_duration_secs) * 1_000 + 10_000;
        while engine.phase() != MatchPhase::Finished && now < deadline {
            now += frame;
            engine.tick(now);
        }
    }

    let events: Vec<_> = receiver.try_iter().collect();
    if debug {
        for event in &events {
            println!("   {:?}", event);
        }
    }
    println!(
        "🏁 Match {} after {} ms with {} event(s) broadcast",
        engine.phase(),
        now,
        events.len()
    );
    reports::print_match_report(engine.stats(), engine.total_score(), engine.library());
}

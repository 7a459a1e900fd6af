// ===== groovecore/src/main.rs =====
use clap::{Parser, Subcommand};
use groovecore::combo::library::builtin_library;
use groovecore::combo::loader::load_library_file;
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Combo library JSON; the built-in set when omitted.
    #[arg(global = true, short, long)]
    library: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Replay(cmd::replay::ReplayArgs),
    Simulate(cmd::simulate::SimulateArgs),
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    let cli = Cli::parse();

    // 1. Logging first so library lint warnings reach the console.
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    println!("\n🕺 Initializing Groove Engine...");

    // 2. Resolve the combo library.
    let library = match &cli.library {
        Some(path) => {
            println!("📂 Loading combo library: {}", path);
            load_library_file(path).unwrap_or_else(|e| {
                eprintln!("❌ Could not load combo library '{}': {}", path, e);
                process::exit(1);
            })
        }
        None => builtin_library(),
    };

    // 3. Execute.
    match cli.command {
        Commands::Replay(args) => cmd::replay::run(args, library, cli.debug),
        Commands::Simulate(args) => cmd::simulate::run(args, library),
        Commands::Validate(args) => cmd::validate::run(args, library),
    }
}

use crate::reports; // This stays 'crate'
use clap::Args;
use groovecore::combo::library::validate_library;
use groovecore::combo::Combo;
use std::process;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Only list combos whose id contains this substring. Validation
    /// still covers the whole library; shadowing is a library-wide
    /// property.
    #[arg(short = 'f', long)]
    pub filter: Option<String>,

    /// Treat warnings as failures.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, library: Vec<Combo>) {
    println!("\n🔎 === COMBO LIBRARY AUDIT === 🔎");

    let warnings = validate_library(&library).unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        process::exit(1);
    });

    let listed: Vec<Combo> = match &args.filter {
        Some(filter) => {
            let needle = filter.to_lowercase();
            library
                .into_iter()
                .filter(|combo| combo.id.to_lowercase().contains(&needle))
                .collect()
        }
        None => library,
    };
    reports::print_library(&listed);

    if warnings.is_empty() {
        println!("✅ {} combo(s) listed, no warnings.", listed.len());
        return;
    }
    for warning in &warnings {
        println!("⚠️  {}", warning);
    }
    if args.strict {
        eprintln!("❌ {} warning(s) with --strict set.", warnings.len());
        process::exit(1);
    }
}

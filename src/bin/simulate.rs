//! Progression balance simulator CLI.
//!
//! Run Monte Carlo simulations of daily quest routines.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 runs of a year
//!   cargo run --bin simulate -- -n 100 -d 90   # 100 runs of 90 days
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use questline::simulator::{run_simulation, SimConfig};
use questline::EngineConfig;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (mut config, no_penalties) = parse_args(&args);

    let default_filter = match config.verbosity {
        0 => "warn",
        1 => "questline=warn",
        _ => "questline=info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    // Engine settings come from ~/.questline/settings.json; flags override them.
    let settings = EngineConfig::load();
    config.engine = if no_penalties {
        settings.without_penalties()
    } else {
        settings
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              QUESTLINE BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Days:           {}", config.days);
    println!(
        "  Completion:     {:.0}%",
        config.completion_chance * 100.0
    );
    println!("  Routine:        {} quests/day", config.routine.len());
    println!("  Boss HP:        {}", config.boss_hp);
    println!("  Crit Chance:    {:.0}%", config.engine.crit_chance * 100.0);
    println!(
        "  Penalties:      {}",
        if config.engine.penalties_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut no_penalties = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-d" | "--days" => {
                if i + 1 < args.len() {
                    config.days = args[i + 1].parse().unwrap_or(365);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-c" | "--chance" => {
                if i + 1 < args.len() {
                    config.completion_chance = args[i + 1].parse().unwrap_or(0.8);
                    i += 1;
                }
            }
            "--boss-hp" => {
                if i + 1 < args.len() {
                    config.boss_hp = args[i + 1].parse().unwrap_or(10_000);
                    i += 1;
                }
            }
            "--no-penalties" => {
                no_penalties = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--long" => {
                config = SimConfig::long_haul();
            }
            _ => {}
        }
        i += 1;
    }

    (config, no_penalties)
}

fn print_help() {
    println!("Questline Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 1000)");
    println!("    -d, --days <D>      Days per run (default: 365)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -c, --chance <P>    Per-quest daily completion chance, 0-1 (default: 0.8)");
    println!("    --boss-hp <HP>      HP of the simulated boss (default: 10000)");
    println!("    --no-penalties      Disable death penalties (overrides settings.json)");
    println!("    -v, --verbose       Log every run");
    println!("    -q, --quiet         Only log warnings");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (100 runs of a dedicated month)");
    println!("    --long              Long test (50 runs of five flaky years)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                    # Default run");
    println!("    cargo run --bin simulate -- -n 100 -d 90   # 100 runs of 90 days");
    println!("    cargo run --bin simulate -- --seed 42      # Reproducible");
    println!("    cargo run --bin simulate -- --quick        # Quick balance check");
    println!("    cargo run --bin simulate -- --long -c 0.5  # Flaky user, half effort");
    println!();
    println!("Engine settings are read from ~/.questline/settings.json.");
    println!("Set RUST_LOG to override log filtering.");
}

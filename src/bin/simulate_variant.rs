//! Random-reveal Monty Hall variant binary.
//!
//! After the contestant's choice, the host opens one of the two remaining
//! doors at random. If he opens the prize door the game is over; otherwise
//! the contestant may switch. Reports the overall win rate, the host's
//! reveal rate, and the win rate conditioned on the host missing.
//!
//! Usage:
//!   cargo run --release --bin simulate_variant -- [OPTIONS]

use std::env;
use std::process;

use indicatif::ProgressBar;

use monty_hall_sim::games::random_reveal::RandomHost;
use monty_hall_sim::sim::{SimConfig, TrialRunner};

/// The variant keeps the original short default run.
const DEFAULT_TRIALS: u64 = 10_000;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut config = match config_file_arg(&args) {
        Some(path) => match SimConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(2);
            }
        },
        None => SimConfig::default().with_trials(DEFAULT_TRIALS),
    };

    let mut saw_switch = false;
    let mut saw_keep = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--switch" => {
                saw_switch = true;
                config = config.with_switch(true);
            }
            "--keep" | "-k" => {
                saw_keep = true;
                config = config.with_switch(false);
            }
            "--trials" | "-n" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(n) => config = config.with_trials(n),
                    None => usage_error("--trials requires a positive integer"),
                }
            }
            "--seed" | "-s" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(s) => config = config.with_seed(s),
                    None => usage_error("--seed requires an integer"),
                }
            }
            "--threads" | "-t" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(t) => config = config.with_threads(t),
                    None => usage_error("--threads requires an integer"),
                }
            }
            "--config" | "-c" => {
                i += 1; // already handled above
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            other => usage_error(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    if saw_switch && saw_keep {
        usage_error("--switch and --keep are mutually exclusive");
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(2);
    }

    println!("=================================================");
    println!("  Monty Hall Simulator (random reveal)");
    println!("=================================================");
    println!();
    println!("Trials: {}", config.trials);
    println!(
        "Policy: {}",
        if config.switch { "switch" } else { "keep" }
    );
    if let Some(seed) = config.seed {
        println!("Seed: {}", seed);
    }
    if config.is_parallel() {
        println!("Threads: {}", config.num_threads.unwrap_or(1));
    }
    println!();

    let switch = config.switch;
    let trials = config.trials;
    let mut runner = TrialRunner::new(RandomHost, config);

    let stats = if runner.config().is_parallel() {
        match runner.run() {
            Ok(stats) => stats,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        }
    } else {
        const BATCH: u64 = 1_000;
        let bar = ProgressBar::new(trials);
        while runner.completed() < trials {
            let n = BATCH.min(trials - runner.completed());
            runner.run_batch(n);
            bar.inc(n);
        }
        bar.finish_and_clear();
        runner.stats()
    };

    println!(
        "Given {} trials, the host revealed the prize in {} trials ({:.3} %)",
        stats.trials,
        stats.host_wins,
        stats.host_win_rate()
    );

    let policy = if switch { "changing" } else { "not changing" };
    println!(
        "Given {} trials, the chance of winning when {} door selection is {:.3} %",
        stats.trials,
        policy,
        stats.win_rate()
    );

    match stats.conditional_win_rate() {
        Some(rate) => println!(
            "Given the chance to change door selection, the chance of winning when {} it is {:.3} %",
            policy, rate
        ),
        None => println!("The host revealed the prize in every trial"),
    }

    println!();
    println!(
        "Completed in {:.3}s ({:.0} trials/s)",
        stats.elapsed_seconds, stats.trials_per_second
    );
}

/// Scan for `--config <FILE>` ahead of the main parse, so later flags
/// override file values regardless of argument order.
fn config_file_arg(args: &[String]) -> Option<String> {
    args.iter()
        .position(|a| a == "--config" || a == "-c")
        .and_then(|i| args.get(i + 1).cloned())
}

fn usage_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    eprintln!();
    print_help();
    process::exit(2);
}

fn print_help() {
    println!("Random-Reveal Monty Hall Simulator");
    println!();
    println!("Usage: simulate_variant [OPTIONS]");
    println!();
    println!("Door policy (mutually exclusive, default --switch):");
    println!("  --switch                 Change the door selection after the reveal");
    println!("  -k, --keep               Keep the initial door selection");
    println!();
    println!("Options:");
    println!("  -n, --trials <N>         Number of trials (default: 10,000)");
    println!("  -s, --seed <N>           Random seed for reproducible runs");
    println!("  -t, --threads <N>        Parallel trial batches (default: 1)");
    println!("  -c, --config <FILE>      Configuration JSON file");
    println!("  -h, --help               Show this help");
    println!();
    println!("Examples:");
    println!("  # Switching policy after the host misses");
    println!("  simulate_variant");
    println!();
    println!("  # Larger run with a fixed seed");
    println!("  simulate_variant --trials 200000 --seed 42");
}

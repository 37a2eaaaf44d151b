//! Classic Monty Hall simulation binary.
//!
//! Usage:
//!   cargo run --release --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --switch             Change the door selection after the reveal (default)
//!   --keep               Keep the initial door selection
//!   --trials <N>         Number of trials (default: 500,000)
//!   --seed <N>           Random seed (optional)
//!   --threads <N>        Parallel trial batches (default: 1)
//!   --config <FILE>      Configuration JSON file (optional)

use std::env;
use std::process;

use indicatif::ProgressBar;

use monty_hall_sim::games::classic::ClassicHost;
use monty_hall_sim::sim::{SimConfig, TrialRunner};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    // A config file, if given, supplies the baseline; flags override it
    let mut config = match config_file_arg(&args) {
        Some(path) => match SimConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(2);
            }
        },
        None => SimConfig::default(),
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
    println!("  Monty Hall Simulator (classic host)");
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
    let mut runner = TrialRunner::new(ClassicHost, config);

    let stats = if runner.config().is_parallel() {
        // No per-batch progress on the parallel path
        match runner.run() {
            Ok(stats) => stats,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        }
    } else {
        const BATCH: u64 = 10_000;
        let bar = ProgressBar::new(trials);
        while runner.completed() < trials {
            let n = BATCH.min(trials - runner.completed());
            runner.run_batch(n);
            bar.inc(n);
        }
        bar.finish_and_clear();
        runner.stats()
    };

    if switch {
        println!(
            "Given {} trials, the chance of winning when changing door selection is {:.2} %",
            stats.trials,
            stats.win_rate()
        );
    } else {
        println!(
            "Given {} trials, the chance of winning when not changing door selection is {:.2} %",
            stats.trials,
            stats.win_rate()
        );
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
    println!("Classic Monty Hall Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Door policy (mutually exclusive, default --switch):");
    println!("  --switch                 Change the door selection after the reveal");
    println!("  -k, --keep               Keep the initial door selection");
    println!();
    println!("Options:");
    println!("  -n, --trials <N>         Number of trials (default: 500,000)");
    println!("  -s, --seed <N>           Random seed for reproducible runs");
    println!("  -t, --threads <N>        Parallel trial batches (default: 1)");
    println!("  -c, --config <FILE>      Configuration JSON file");
    println!("  -h, --help               Show this help");
    println!();
    println!("Examples:");
    println!("  # Switching policy, half a million trials");
    println!("  simulate");
    println!();
    println!("  # Keeping policy with a fixed seed");
    println!("  simulate --keep --seed 42");
    println!();
    println!("  # Four parallel batches");
    println!("  simulate --trials 2000000 --threads 4");
}

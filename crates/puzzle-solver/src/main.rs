//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver clock <hours> <start> <end>
//!   puzzle-solver water <amount> <capacity>...
//!   puzzle-solver tipover <board-file>
//!   puzzle-solver lunar <board-file>
//!
//! Options:
//!   -v, --verbose   Raise log level (repeat for more)
//!   --json          Print the result as JSON
//!   --hint          Only print the next configuration on a shortest route

use std::fmt::Display;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};
use env_logger::TimestampPrecision;
use log::LevelFilter;
use serde::Serialize;

use puzzle_solver::loader::{load_lunar, load_tipover};
use puzzle_solver::{
    next_step, solve_with_stats, ClockPuzzle, Configuration, PuzzleError, SolverResult,
    WaterPuzzle,
};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Breadth-first shortest-path solver for clock, water, tip-over and lunar landing puzzles")]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Only print the next configuration on a shortest route
    #[arg(long, global = true)]
    hint: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn a clock hand to the target hour
    Clock {
        /// Number of hours on the clock
        hours: u32,
        /// Starting hour
        start: u32,
        /// Hour to reach
        end: u32,
    },
    /// Measure an amount of water with buckets that start empty
    Water {
        /// Amount any one bucket must hold
        amount: u32,
        /// Capacity of each bucket
        #[arg(required = true)]
        capacities: Vec<u32>,
    },
    /// Walk and tip crate stacks to reach the goal
    #[command(name = "tipover")]
    TipOver {
        /// Board file (.json for JSON, anything else for the text format)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Slide figures until the explorer lands on the pad
    Lunar {
        /// Board file (.json for JSON, anything else for the text format)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Output format for a full solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solvable: bool,
    moves: usize,
    configs_generated: usize,
    configs_unique: usize,
    time_elapsed_ms: u64,
    path: Vec<serde_json::Value>,
}

/// Output format for `--hint`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HintOutput {
    already_solved: bool,
    next: Option<serde_json::Value>,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let outcome = match &cli.command {
        Commands::Clock { hours, start, end } => {
            ClockPuzzle::new(*hours, *end).and_then(|puzzle| {
                let config = Arc::new(puzzle).start(*start)?;
                header(&cli, format!("Hours: {}, Start: {}, End: {}", hours, start, end));
                report(&cli, &config)
            })
        }
        Commands::Water { amount, capacities } => {
            WaterPuzzle::new(capacities.clone(), *amount).and_then(|puzzle| {
                let config = Arc::new(puzzle).start_empty();
                header(&cli, format!("Amount: {}, Buckets: {:?}", amount, capacities));
                report(&cli, &config)
            })
        }
        Commands::TipOver { file } => load_tipover(file).and_then(|start| {
            header(&cli, format!("File: {}", file.display()));
            report(&cli, &start)
        }),
        Commands::Lunar { file } => load_lunar(file).and_then(|start| {
            header(&cli, format!("File: {}", file.display()));
            report(&cli, &start)
        }),
    };

    // Exit with appropriate code
    match outcome {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn header(cli: &Cli, line: String) {
    if !cli.json {
        println!("{}", line);
    }
}

/// Solve from `start` and print the result. Returns whether a solution exists.
fn report<C>(cli: &Cli, start: &C) -> Result<bool, PuzzleError>
where
    C: Configuration + Display + Serialize,
{
    if cli.hint {
        return report_hint(cli, start);
    }

    let result = solve_with_stats(start);
    if cli.json {
        let output = format_result(&result)?;
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if result.is_solved() {
        for (i, config) in result.path.iter().enumerate() {
            println!("Step {}: {}", i, config);
        }
    } else {
        println!("No Solution");
    }
    Ok(result.is_solved())
}

fn report_hint<C>(cli: &Cli, start: &C) -> Result<bool, PuzzleError>
where
    C: Configuration + Display + Serialize,
{
    let already_solved = start.is_solution();
    let next = if already_solved { None } else { next_step(start) };
    let solvable = already_solved || next.is_some();

    if cli.json {
        let output = HintOutput {
            already_solved,
            next: next.as_ref().map(serde_json::to_value).transpose()?,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if already_solved {
        println!("Already solved");
    } else if let Some(next) = next {
        println!("Next: {}", next);
    } else {
        println!("No Solution");
    }
    Ok(solvable)
}

fn format_result<C: Serialize>(result: &SolverResult<C>) -> Result<SolveOutput, PuzzleError> {
    let path = result
        .path
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SolveOutput {
        solvable: result.is_solved(),
        moves: result.moves(),
        configs_generated: result.stats.configs_generated,
        configs_unique: result.stats.configs_unique,
        time_elapsed_ms: result.stats.elapsed_ms(),
        path,
    })
}

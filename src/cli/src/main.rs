#![warn(clippy::pedantic)]

mod bench;
mod config;
mod render;
mod repl;
mod session;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use cube_core::{MoveSequence, apply_sequence, scramble_with_rng, solved_state};
use env_logger::TimestampPrecision;
use lbl_solver::LblSolver;
use log::{LevelFilter, debug};

use crate::{config::Config, render::Renderer, repl::Repl, session::Session};

/// Scrambles, displays and solves a 3x3 cube layer by layer
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `<config dir>/cube/config.toml` when that file exists.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Increase logging verbosity. Can be given up to three times.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print color letters instead of colored stickers
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a random scramble
    Scramble {
        /// Number of moves; defaults to the configured scramble length
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply moves to a solved cube and print the result
    Apply {
        /// The moves, e.g. R U R' U'
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
    /// Solve the given moves' state, or a random scramble when none are given
    Solve {
        #[arg(allow_hyphen_values = true)]
        moves: Vec<String>,
        /// Seed for the random scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Solve many random scrambles and report how often the solver succeeds
    Bench {
        /// Number of scrambles
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,
        /// Scramble length; defaults to the configured scramble length
        #[arg(short, long)]
        length: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Start an interactive session
    Repl,
}

fn rng(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}

fn parse_moves(words: &[String]) -> color_eyre::Result<MoveSequence> {
    words
        .join(" ")
        .parse::<MoveSequence>()
        .wrap_err("Could not parse the moves")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
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

    let config = Config::load(cli.config.as_deref())?;
    debug!("Using {config:?}");
    let renderer = Renderer {
        color: config.color && !cli.no_color,
    };
    let solver = LblSolver::with_config(config.solver);

    match cli.command {
        Commands::Scramble { length, seed } => {
            let scramble =
                scramble_with_rng(&mut rng(seed), length.unwrap_or(config.scramble_length));
            println!("{scramble}");
        }
        Commands::Apply { moves } => {
            let state = apply_sequence(&solved_state(), &parse_moves(&moves)?);
            print!("{}", renderer.net(&state));
            println!("{}", if state.is_solved() { "solved" } else { "not solved" });
        }
        Commands::Solve { moves, seed } => {
            let scramble = if moves.is_empty() {
                let scramble = scramble_with_rng(&mut rng(seed), config.scramble_length);
                println!("Scramble: {scramble}");
                scramble
            } else {
                parse_moves(&moves)?
            };
            let state = apply_sequence(&solved_state(), &scramble);
            print!("{}", renderer.net(&state));

            let report = solver.solve_report(&state);
            if !report.records.is_empty() {
                println!("{}", renderer.solution(&report.records));
            }
            println!("{}", renderer.verdict(&report));
        }
        Commands::Bench {
            count,
            length,
            seed,
        } => {
            let stats = bench::run(
                &solver,
                &mut rng(seed),
                count,
                length.unwrap_or(config.scramble_length),
            );
            bench::print(&stats);
        }
        Commands::Repl => {
            Repl {
                session: Session::new(solver),
                renderer,
                scramble_length: config.scramble_length,
            }
            .run()?;
        }
    }

    Ok(())
}

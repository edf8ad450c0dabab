use std::time::{Duration, Instant};

use cube_core::{apply_sequence, scramble_with_rng, solved_state};
use lbl_solver::{LblSolver, Phase};
use log::{debug, info};

/// Aggregate results of solving many random scrambles.
#[derive(Debug, Default)]
pub struct BenchStats {
    pub runs: usize,
    pub solved: usize,
    pub total_moves: usize,
    pub max_moves: usize,
    /// Failures per phase, indexed like [`Phase::ALL`].
    pub phase_failures: [usize; 4],
    pub elapsed: Duration,
}

impl BenchStats {
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        ratio(self.solved, self.runs)
    }

    pub fn mean_moves(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        ratio(self.total_moves, self.runs)
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(a: usize, b: usize) -> f64 {
    a as f64 / b as f64
}

pub fn run(solver: &LblSolver, rng: &mut fastrand::Rng, runs: usize, length: usize) -> BenchStats {
    info!(lbl_solver::start!("Benchmarking {} scrambles of length {}"), runs, length);
    let start = Instant::now();
    let mut stats = BenchStats {
        runs,
        ..BenchStats::default()
    };

    for _ in 0..runs {
        let scramble = scramble_with_rng(rng, length);
        let report = solver.solve_report(&apply_sequence(&solved_state(), &scramble));
        if report.is_solved() {
            stats.solved += 1;
        } else {
            debug!("Failed to solve {scramble}");
        }
        stats.total_moves += report.records.len();
        stats.max_moves = stats.max_moves.max(report.records.len());
        for summary in report.phases.iter().filter(|summary| !summary.success) {
            stats.phase_failures[summary.phase as usize] += 1;
        }
    }

    stats.elapsed = start.elapsed();
    info!(
        lbl_solver::success!("Benchmark finished in {:.3}s"),
        stats.elapsed.as_secs_f64()
    );
    stats
}

pub fn print(stats: &BenchStats) {
    println!(
        "solved {}/{} ({:.2}%)",
        stats.solved,
        stats.runs,
        stats.success_rate() * 100.0
    );
    println!(
        "moves: mean {:.1}, max {}",
        stats.mean_moves(),
        stats.max_moves
    );
    for (phase, failures) in Phase::ALL.iter().zip(stats.phase_failures) {
        if failures > 0 {
            println!("{phase} gave up {failures} times");
        }
    }
    println!("{:.3}s", stats.elapsed.as_secs_f64());
}

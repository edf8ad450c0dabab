use std::time::{Duration, Instant};

use cube_core::{CubeState, MoveSequence};
use log::{debug, info, warn};

use crate::{
    config::SolverConfig,
    optimization::optimize,
    phases::PHASES,
    record::{MoveRecord, Phase, tokens},
    start, success, working,
};

/// A layer-by-layer solver: cross on D, first two layers, then orientation
/// and permutation of the U layer.
///
/// Every phase runs even if an earlier one gave up, so the result is always
/// a full move list. Whether it actually solves the cube is reported rather
/// than treated as an error; see [`SolveReport::is_solved`].
#[derive(Debug, Default, Clone)]
pub struct LblSolver {
    config: SolverConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSummary {
    pub phase: Phase,
    pub success: bool,
    /// Moves the phase emitted, before optimization.
    pub moves: usize,
}

#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The optimized solution.
    pub records: Vec<MoveRecord>,
    pub phases: Vec<PhaseSummary>,
    /// The state the solution leads to.
    pub state: CubeState,
    pub elapsed: Duration,
}

impl SolveReport {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    #[must_use]
    pub fn sequence(&self) -> MoveSequence {
        tokens(&self.records)
    }
}

impl LblSolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The optimized move list that takes `state` to solved, or as close as
    /// the attempt budgets allow. A solved cube gives an empty list.
    #[must_use]
    pub fn solve(&self, state: &CubeState) -> Vec<MoveRecord> {
        self.solve_report(state).records
    }

    #[must_use]
    pub fn solve_report(&self, state: &CubeState) -> SolveReport {
        let start = Instant::now();

        if state.is_solved() {
            debug!("Cube is already solved");
            return SolveReport {
                records: Vec::new(),
                phases: Vec::new(),
                state: *state,
                elapsed: start.elapsed(),
            };
        }

        info!(start!("Solving {}"), state.to_facelet_string());

        let mut current = *state;
        let mut records = Vec::new();
        let mut phases = Vec::with_capacity(PHASES.len());
        for (phase, run) in PHASES {
            let phase_start = Instant::now();
            let outcome = run(&current, &self.config);
            debug!(
                working!("Phase {} emitted {} moves in {:.3}ms"),
                phase,
                outcome.records.len(),
                phase_start.elapsed().as_secs_f64() * 1000.0
            );
            if !outcome.success {
                warn!("Phase {phase} did not finish within its attempt budget");
            }
            phases.push(PhaseSummary {
                phase,
                success: outcome.success,
                moves: outcome.records.len(),
            });
            records.extend(outcome.records);
            current = outcome.state;
        }

        let optimized = optimize(&records);
        let elapsed = start.elapsed();
        if current.is_solved() {
            info!(
                success!("Solved in {} moves ({} before optimization) in {:.3}s"),
                optimized.len(),
                records.len(),
                elapsed.as_secs_f64()
            );
        } else {
            warn!(
                "Solver gave up after {} moves; the cube is not solved",
                optimized.len()
            );
        }

        SolveReport {
            records: optimized,
            phases,
            state: current,
            elapsed,
        }
    }
}

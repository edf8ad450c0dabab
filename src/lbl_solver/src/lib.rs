#![warn(clippy::pedantic)]
#![allow(clippy::similar_names)]

pub(crate) mod algorithms;
pub mod config;
pub mod optimization;
pub(crate) mod phases;
pub(crate) mod pieces;
pub mod record;
pub mod solver;

pub use config::SolverConfig;
pub use optimization::optimize;
pub use record::{MoveRecord, Phase};
pub use solver::{LblSolver, PhaseSummary, SolveReport};

use cube_core::CubeState;

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}

/// Solves `state` with the default attempt budgets.
#[must_use]
pub fn solve(state: &CubeState) -> Vec<MoveRecord> {
    LblSolver::new().solve(state)
}

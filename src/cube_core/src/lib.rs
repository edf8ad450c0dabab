#![warn(clippy::pedantic)]

pub mod history;
pub mod moves;
pub mod scramble;
pub mod state;
pub mod turns;

pub use history::{History, HistoryEntry};
pub use moves::{BaseMove, Direction, MoveParseError, MoveSequence, MoveToken};
pub use scramble::scramble_with_rng;
pub use state::{Color, CubeState, Face};
pub use turns::apply_sequence;

#[must_use]
pub const fn solved_state() -> CubeState {
    CubeState::solved()
}

#[must_use]
pub fn apply(state: &CubeState, token: MoveToken) -> CubeState {
    turns::apply(state, token)
}

#[must_use]
pub fn is_solved(state: &CubeState) -> bool {
    state.is_solved()
}

#[must_use]
pub const fn invert(token: MoveToken) -> MoveToken {
    token.invert()
}

#[must_use]
pub fn scramble(length: usize) -> MoveSequence {
    scramble::scramble(length)
}

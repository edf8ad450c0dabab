//! The four solver phases. Each is a pure function from a state to a
//! [`PhaseOutcome`]: it inspects the cube, applies one case's algorithm,
//! and inspects again, until its goal holds or its attempt budget runs out.

mod cross;
mod f2l;
mod oll;
mod pll;

use cube_core::{BaseMove, Color, CubeState, Direction, Face, MoveToken, apply};

use crate::{
    config::SolverConfig,
    pieces::{conjugate, u_turn_between},
    record::{MoveRecord, Phase},
};

pub(crate) use cross::cross;
pub(crate) use f2l::f2l;
pub(crate) use oll::oll;
pub(crate) use pll::pll;

pub(crate) type PhaseFn = fn(&CubeState, &SolverConfig) -> PhaseOutcome;

/// The phases in the order the solver runs them.
pub(crate) const PHASES: [(Phase, PhaseFn); 4] = [
    (Phase::Cross, cross),
    (Phase::F2l, f2l),
    (Phase::Oll, oll),
    (Phase::Pll, pll),
];

#[derive(Debug, Clone)]
pub(crate) struct PhaseOutcome {
    pub state: CubeState,
    pub records: Vec<MoveRecord>,
    pub success: bool,
}

/// A phase in progress. Every emitted token is applied right away, so the
/// next inspection sees the real cube.
struct PhaseRun {
    phase: Phase,
    state: CubeState,
    records: Vec<MoveRecord>,
}

impl PhaseRun {
    fn new(phase: Phase, state: &CubeState) -> Self {
        Self {
            phase,
            state: *state,
            records: Vec::new(),
        }
    }

    fn center(&self, face: Face) -> Color {
        self.state.center(face)
    }

    fn emit(&mut self, tokens: impl IntoIterator<Item = MoveToken>, description: &'static str) {
        for token in tokens {
            self.state = apply(&self.state, token);
            self.records
                .push(MoveRecord::new(token, self.phase, description));
        }
    }

    /// Emits an algorithm written for the front slot, turned toward `side`.
    fn emit_at(&mut self, alg: &[MoveToken], side: Face, description: &'static str) {
        self.emit(conjugate(alg, side), description);
    }

    /// Emits a half turn of `face`.
    fn emit_half_turn(&mut self, face: Face, description: &'static str) {
        self.emit(
            [MoveToken::new(BaseMove::from(face), Direction::Double)],
            description,
        );
    }

    /// Turns U so the top slot above `at` ends up above `target`.
    fn align(&mut self, at: Face, target: Face, description: &'static str) {
        self.emit(u_turn_between(at, target), description);
    }

    /// Emits the fewest quarter turns of `base`, as one token, after which
    /// `goal` holds. Emits nothing when no number of turns satisfies it.
    fn turn_until(
        &mut self,
        base: BaseMove,
        goal: impl Fn(&CubeState) -> bool,
        description: &'static str,
    ) -> bool {
        let quarter = MoveToken::new(base, Direction::Normal);
        let mut state = self.state;
        for turns in 0..4 {
            if goal(&state) {
                self.emit(
                    Direction::from_quarter_turns(turns).map(|dir| MoveToken::new(base, dir)),
                    description,
                );
                return true;
            }
            state = apply(&state, quarter);
        }
        false
    }

    fn finish(self, success: bool) -> PhaseOutcome {
        PhaseOutcome {
            state: self.state,
            records: self.records,
            success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{MoveSequence, apply_sequence, solved_state};

    #[test]
    fn turn_until_emits_one_token() {
        let scrambled = apply_sequence(&solved_state(), &"U".parse::<MoveSequence>().unwrap());
        let mut run = PhaseRun::new(Phase::Pll, &scrambled);
        assert!(run.turn_until(BaseMove::U, CubeState::is_solved, "auf"));
        assert_eq!(run.records.len(), 1);
        assert_eq!(run.records[0].token.to_string(), "U'");
        assert!(run.state.is_solved());
    }

    #[test]
    fn turn_until_without_a_match_does_nothing() {
        let scrambled = apply_sequence(&solved_state(), &"R".parse::<MoveSequence>().unwrap());
        let mut run = PhaseRun::new(Phase::Pll, &scrambled);
        assert!(!run.turn_until(BaseMove::U, CubeState::is_solved, "auf"));
        assert!(run.records.is_empty());
        assert_eq!(run.state, scrambled);
    }

    #[test]
    fn every_phase_leaves_solved_alone() {
        for (phase, run) in PHASES {
            let outcome = run(&solved_state(), &SolverConfig::default());
            assert!(outcome.success, "{phase} failed on a solved cube");
            assert!(outcome.records.is_empty(), "{phase} moved a solved cube");
        }
    }
}

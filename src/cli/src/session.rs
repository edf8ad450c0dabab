use cube_core::{CubeState, History, MoveToken, apply, solved_state};
use lbl_solver::{LblSolver, SolveReport};
use log::trace;

/// The cube a user is working on, with undo/redo over every move applied to
/// it.
pub struct Session {
    state: CubeState,
    history: History,
    solver: LblSolver,
}

impl Session {
    pub fn new(solver: LblSolver) -> Self {
        Self {
            state: solved_state(),
            history: History::new(),
            solver,
        }
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn apply(&mut self, token: MoveToken) {
        trace!("Applying {token}");
        self.history.push(token, self.state);
        self.state = apply(&self.state, token);
    }

    pub fn apply_sequence(&mut self, tokens: &[MoveToken]) {
        for &token in tokens {
            self.apply(token);
        }
    }

    /// Restores the state from before the last move. Returns the undone move.
    pub fn undo(&mut self) -> Option<MoveToken> {
        let entry = self.history.undo()?;
        self.state = entry.before;
        Some(entry.token)
    }

    pub fn redo(&mut self) -> Option<MoveToken> {
        let token = self.history.redo()?;
        self.state = apply(&self.state, token);
        Some(token)
    }

    /// Back to a solved cube with an empty history.
    pub fn reset(&mut self) {
        self.state = solved_state();
        self.history.clear();
    }

    pub fn solution(&self) -> SolveReport {
        self.solver.solve_report(&self.state)
    }

    /// Solves the cube through the session so every solution move can be
    /// undone.
    pub fn auto_solve(&mut self) -> SolveReport {
        let report = self.solution();
        self.apply_sequence(&report.sequence());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{MoveSequence, cube_move};

    fn session() -> Session {
        Session::new(LblSolver::new())
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut session = session();
        session.apply(cube_move!(R));
        let after_r = *session.state();
        session.apply(cube_move!(U, Prime));

        assert_eq!(session.undo(), Some(cube_move!(U, Prime)));
        assert_eq!(*session.state(), after_r);
        assert_eq!(session.undo(), Some(cube_move!(R)));
        assert!(session.state().is_solved());
        assert_eq!(session.undo(), None);
    }

    #[test]
    fn redo_reapplies() {
        let mut session = session();
        session.apply_sequence(&"R U F".parse::<MoveSequence>().unwrap());
        let scrambled = *session.state();
        session.undo();
        session.undo();
        assert_eq!(session.redo(), Some(cube_move!(U)));
        assert_eq!(session.redo(), Some(cube_move!(F)));
        assert_eq!(session.redo(), None);
        assert_eq!(*session.state(), scrambled);
    }

    #[test]
    fn new_move_clears_redo() {
        let mut session = session();
        session.apply(cube_move!(R));
        session.undo();
        session.apply(cube_move!(L));
        assert_eq!(session.redo(), None);
        assert_eq!(session.history().applied().len(), 1);
    }

    #[test]
    fn auto_solve_is_undoable() {
        let mut session = session();
        session.apply_sequence(&"U R F L D B U' R'".parse::<MoveSequence>().unwrap());
        let scrambled = *session.state();

        let report = session.auto_solve();
        assert!(report.is_solved());
        assert!(session.state().is_solved());

        for _ in 0..report.records.len() {
            session.undo();
        }
        assert_eq!(*session.state(), scrambled);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut session = session();
        session.apply(cube_move!(D, Double));
        session.reset();
        assert!(session.state().is_solved());
        assert!(!session.history().can_undo());
    }
}

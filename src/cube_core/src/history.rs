//! An undo/redo log of applied moves.
//!
//! Entries are kept as a stack with a pointer to the current top. Undoing
//! only moves the pointer, so the undone entries stay available for redo
//! until a new move is pushed over them.

use crate::{moves::MoveToken, state::CubeState};

/// A token paired with the state it was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub token: MoveToken,
    pub before: CubeState,
}

#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    stack_pointer: usize,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `token` as applied to `before`, dropping anything that could
    /// have been redone.
    pub fn push(&mut self, token: MoveToken, before: CubeState) {
        self.entries.truncate(self.stack_pointer);
        self.entries.push(HistoryEntry { token, before });
        self.stack_pointer += 1;
    }

    /// Steps back over the last applied entry. The caller restores
    /// `entry.before` as its current state.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        self.stack_pointer = self.stack_pointer.checked_sub(1)?;
        Some(self.entries[self.stack_pointer])
    }

    /// Steps forward over the next undone entry, returning the token to
    /// apply again.
    pub fn redo(&mut self) -> Option<MoveToken> {
        let entry = self.entries.get(self.stack_pointer)?;
        self.stack_pointer += 1;
        Some(entry.token)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.stack_pointer > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.stack_pointer < self.entries.len()
    }

    /// The entries currently applied, oldest first.
    #[must_use]
    pub fn applied(&self) -> &[HistoryEntry] {
        &self.entries[..self.stack_pointer]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.stack_pointer = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cube_move, turns::apply};

    #[test]
    fn undo_then_redo() {
        let mut history = History::new();
        let solved = CubeState::solved();
        let after_r = apply(&solved, cube_move!(R));
        history.push(cube_move!(R), solved);
        history.push(cube_move!(U), after_r);

        let entry = history.undo().unwrap();
        assert_eq!(entry.token, cube_move!(U));
        assert_eq!(entry.before, after_r);
        assert!(history.can_redo());
        assert_eq!(history.redo(), Some(cube_move!(U)));
        assert_eq!(history.redo(), None);
        assert_eq!(history.applied().len(), 2);
    }

    #[test]
    fn push_after_undo_drops_redo() {
        let mut history = History::new();
        let solved = CubeState::solved();
        history.push(cube_move!(R), solved);
        history.undo();
        history.push(cube_move!(F, Prime), solved);
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
        assert_eq!(history.applied().len(), 1);
        assert_eq!(history.applied()[0].token, cube_move!(F, Prime));
    }

    #[test]
    fn undo_past_start() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert_eq!(history.undo(), None);
        history.push(cube_move!(D), CubeState::solved());
        history.clear();
        assert_eq!(history.undo(), None);
    }
}

use std::fmt;

use cube_core::{MoveSequence, MoveToken};

/// The solver stage that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Cross,
    F2l,
    Oll,
    Pll,
}

impl Phase {
    pub const ALL: [Self; 4] = [Phase::Cross, Phase::F2l, Phase::Oll, Phase::Pll];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Cross => "cross",
            Phase::F2l => "f2l",
            Phase::Oll => "oll",
            Phase::Pll => "pll",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A solution move tagged for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub token: MoveToken,
    pub phase: Phase,
    pub description: &'static str,
}

impl MoveRecord {
    #[must_use]
    pub const fn new(token: MoveToken, phase: Phase, description: &'static str) -> Self {
        Self {
            token,
            phase,
            description,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}

/// Strips the tags off a list of records.
#[must_use]
pub fn tokens(records: &[MoveRecord]) -> MoveSequence {
    records.iter().map(|record| record.token).collect()
}

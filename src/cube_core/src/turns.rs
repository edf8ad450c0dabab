//! Sticker permutations for every base move.
//!
//! Each base letter has a [`TurnTable`] naming the face it rotates (none for
//! `M`) and four three-sticker strips. A clockwise quarter turn rotates the
//! face with [`FACE_CLOCKWISE`] and carries the content of strip `k` into
//! strip `k + 1`. A prime turn does both in reverse, and a half turn is two
//! clockwise quarter turns.

use crate::{
    moves::{BaseMove, MoveToken},
    state::{Color, CubeState, Face},
};

/// `new[i] = old[FACE_CLOCKWISE[i]]` for a clockwise turn of a face.
pub const FACE_CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Three stickers of one face, listed so that corresponding positions line
/// up between consecutive strips of a table.
pub type Strip = (Face, [usize; 3]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTable {
    pub face: Option<Face>,
    pub strips: [Strip; 4],
}

pub const TURN_U: TurnTable = TurnTable {
    face: Some(Face::U),
    strips: [
        (Face::F, [0, 1, 2]),
        (Face::L, [0, 1, 2]),
        (Face::B, [0, 1, 2]),
        (Face::R, [0, 1, 2]),
    ],
};

pub const TURN_D: TurnTable = TurnTable {
    face: Some(Face::D),
    strips: [
        (Face::F, [6, 7, 8]),
        (Face::R, [6, 7, 8]),
        (Face::B, [6, 7, 8]),
        (Face::L, [6, 7, 8]),
    ],
};

pub const TURN_F: TurnTable = TurnTable {
    face: Some(Face::F),
    strips: [
        (Face::U, [6, 7, 8]),
        (Face::R, [0, 3, 6]),
        (Face::D, [2, 1, 0]),
        (Face::L, [8, 5, 2]),
    ],
};

pub const TURN_B: TurnTable = TurnTable {
    face: Some(Face::B),
    strips: [
        (Face::U, [0, 1, 2]),
        (Face::L, [6, 3, 0]),
        (Face::D, [8, 7, 6]),
        (Face::R, [2, 5, 8]),
    ],
};

pub const TURN_L: TurnTable = TurnTable {
    face: Some(Face::L),
    strips: [
        (Face::U, [0, 3, 6]),
        (Face::F, [0, 3, 6]),
        (Face::D, [0, 3, 6]),
        (Face::B, [8, 5, 2]),
    ],
};

pub const TURN_R: TurnTable = TurnTable {
    face: Some(Face::R),
    strips: [
        (Face::F, [2, 5, 8]),
        (Face::U, [2, 5, 8]),
        (Face::B, [6, 3, 0]),
        (Face::D, [2, 5, 8]),
    ],
};

/// The slice between L and R, turning like L. It moves centers but rotates
/// no face.
pub const TURN_M: TurnTable = TurnTable {
    face: None,
    strips: [
        (Face::U, [1, 4, 7]),
        (Face::F, [1, 4, 7]),
        (Face::D, [1, 4, 7]),
        (Face::B, [7, 4, 1]),
    ],
};

impl TurnTable {
    #[must_use]
    pub const fn of(base: BaseMove) -> &'static TurnTable {
        match base {
            BaseMove::U => &TURN_U,
            BaseMove::D => &TURN_D,
            BaseMove::F => &TURN_F,
            BaseMove::B => &TURN_B,
            BaseMove::L => &TURN_L,
            BaseMove::R => &TURN_R,
            BaseMove::M => &TURN_M,
        }
    }

    fn quarter_turn(&self, old: &[[Color; 9]; 6], clockwise: bool) -> [[Color; 9]; 6] {
        let mut new = *old;

        if let Some(face) = self.face {
            let (old_face, new_face) = (&old[face as usize], &mut new[face as usize]);
            for (i, &src) in FACE_CLOCKWISE.iter().enumerate() {
                if clockwise {
                    new_face[i] = old_face[src];
                } else {
                    new_face[src] = old_face[i];
                }
            }
        }

        for k in 0..4 {
            let (mut from, mut to) = (self.strips[k], self.strips[(k + 1) % 4]);
            if !clockwise {
                (from, to) = (to, from);
            }
            for (&src, &dst) in from.1.iter().zip(&to.1) {
                new[to.0 as usize][dst] = old[from.0 as usize][src];
            }
        }

        new
    }
}

/// Applies one token, returning the resulting state.
#[must_use]
pub fn apply(state: &CubeState, token: MoveToken) -> CubeState {
    let table = TurnTable::of(token.base);
    let faces = match token.dir.quarter_turns() {
        1 => table.quarter_turn(&state.faces, true),
        2 => table.quarter_turn(&table.quarter_turn(&state.faces, true), true),
        _ => table.quarter_turn(&state.faces, false),
    };
    let next = CubeState { faces };
    debug_assert!(
        next.has_valid_color_counts(),
        "{token} broke the color counts: {:?}",
        next.color_counts()
    );
    next
}

/// Applies tokens left to right.
#[must_use]
pub fn apply_sequence(state: &CubeState, tokens: &[MoveToken]) -> CubeState {
    tokens
        .iter()
        .fold(*state, |state, &token| apply(&state, token))
}

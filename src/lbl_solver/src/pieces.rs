//! Where the edge and corner stickers of each slot live, and how to find a
//! piece by its colors.
//!
//! Every table is keyed by a side face in [`Face::SIDES`]. Slot tables for a
//! side describe the position between that side and its right neighbour.

use cube_core::{BaseMove, Color, CubeState, Face, MoveToken};
use itertools::Itertools;

pub(crate) type Sticker = (Face, usize);

fn side_index(side: Face) -> usize {
    match side {
        Face::F => 0,
        Face::R => 1,
        Face::B => 2,
        Face::L => 3,
        Face::U | Face::D => unreachable!("{side} is not a side face"),
    }
}

pub(crate) fn right_of(side: Face) -> Face {
    Face::SIDES[(side_index(side) + 1) % 4]
}

pub(crate) fn left_of(side: Face) -> Face {
    Face::SIDES[(side_index(side) + 3) % 4]
}

fn opposite(side: Face) -> Face {
    Face::SIDES[(side_index(side) + 2) % 4]
}

/// The U sticker then the side sticker of the top edge on `side`.
pub(crate) fn top_edge(side: Face) -> [Sticker; 2] {
    let up = match side {
        Face::F => 7,
        Face::R => 5,
        Face::B => 1,
        _ => 3,
    };
    [(Face::U, up), (side, 1)]
}

/// The D sticker then the side sticker of the bottom edge on `side`.
pub(crate) fn bottom_edge(side: Face) -> [Sticker; 2] {
    let down = match side {
        Face::F => 1,
        Face::R => 5,
        Face::B => 7,
        _ => 3,
    };
    [(Face::D, down), (side, 7)]
}

/// The edge between `side` and its right neighbour.
pub(crate) fn middle_edge(side: Face) -> [Sticker; 2] {
    [(side, 5), (right_of(side), 3)]
}

/// The U, side and right stickers of the top corner right of `side`.
pub(crate) fn top_corner(side: Face) -> [Sticker; 3] {
    let up = match side {
        Face::F => 8,
        Face::R => 2,
        Face::B => 0,
        _ => 6,
    };
    [(Face::U, up), (side, 2), (right_of(side), 0)]
}

/// The D, side and right stickers of the bottom corner right of `side`.
pub(crate) fn bottom_corner(side: Face) -> [Sticker; 3] {
    let down = match side {
        Face::F => 2,
        Face::R => 8,
        Face::B => 6,
        _ => 0,
    };
    [(Face::D, down), (side, 8), (right_of(side), 6)]
}

pub(crate) fn colors<const N: usize>(state: &CubeState, stickers: [Sticker; N]) -> [Color; N] {
    stickers.map(|(face, index)| state.facelet(face, index))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layer {
    Top,
    Middle,
    Bottom,
}

/// A located edge. `colors` follows the sticker order of the slot table it
/// was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeLocation {
    pub layer: Layer,
    pub side: Face,
    pub colors: [Color; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CornerLocation {
    pub layer: Layer,
    pub side: Face,
    pub colors: [Color; 3],
}

/// Finds the edge showing colors `a` and `b` in either orientation.
pub(crate) fn locate_edge(state: &CubeState, a: Color, b: Color) -> Option<EdgeLocation> {
    Face::SIDES
        .into_iter()
        .flat_map(|side| {
            [
                (Layer::Top, side, top_edge(side)),
                (Layer::Bottom, side, bottom_edge(side)),
                (Layer::Middle, side, middle_edge(side)),
            ]
        })
        .map(|(layer, side, stickers)| EdgeLocation {
            layer,
            side,
            colors: colors(state, stickers),
        })
        .find(|edge| edge.colors == [a, b] || edge.colors == [b, a])
}

/// Finds the corner showing exactly the three given colors, looking at the
/// top layer first.
pub(crate) fn locate_corner(state: &CubeState, wanted: [Color; 3]) -> Option<CornerLocation> {
    let wanted = wanted.into_iter().sorted().collect_vec();
    [Layer::Top, Layer::Bottom]
        .into_iter()
        .cartesian_product(Face::SIDES)
        .map(|(layer, side)| {
            let stickers = match layer {
                Layer::Top => top_corner(side),
                _ => bottom_corner(side),
            };
            CornerLocation {
                layer,
                side,
                colors: colors(state, stickers),
            }
        })
        .find(|corner| corner.colors.into_iter().sorted().collect_vec() == wanted)
}

/// Rewrites an algorithm written for the front slot so that it acts on
/// `side` instead, as if the cube were turned about the U axis. U, D and M
/// are unaffected.
pub(crate) fn conjugate(alg: &[MoveToken], side: Face) -> impl Iterator<Item = MoveToken> + '_ {
    let remap = move |face: Face| match face {
        Face::F => side,
        Face::R => right_of(side),
        Face::B => opposite(side),
        Face::L => left_of(side),
        Face::U | Face::D => face,
    };
    alg.iter().map(move |token| match token.base.face() {
        Some(face) => MoveToken::new(BaseMove::from(remap(face)), token.dir),
        None => *token,
    })
}

/// The single U-turn token that brings the top slot above `at` over
/// `target`, if any turn is needed.
pub(crate) fn u_turn_between(at: Face, target: Face) -> Option<MoveToken> {
    let turns = (side_index(at) + 4 - side_index(target)) % 4;
    cube_core::Direction::from_quarter_turns(u8::try_from(turns).ok()?)
        .map(|dir| MoveToken::new(BaseMove::U, dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{MoveSequence, apply, apply_sequence, solved_state};

    fn conjugated(alg: &str, side: Face) -> String {
        let alg = alg.parse::<MoveSequence>().unwrap();
        conjugate(&alg, side).collect::<MoveSequence>().to_string()
    }

    #[test]
    fn neighbours() {
        assert_eq!(right_of(Face::F), Face::R);
        assert_eq!(right_of(Face::L), Face::F);
        assert_eq!(left_of(Face::F), Face::L);
        assert_eq!(left_of(Face::R), Face::F);
    }

    #[test]
    fn conjugation_turns_about_u() {
        assert_eq!(conjugated("R U R'", Face::F), "R U R'");
        assert_eq!(conjugated("R U R'", Face::R), "B U B'");
        assert_eq!(conjugated("F R U R' U' F'", Face::B), "B L U L' U' B'");
        assert_eq!(conjugated("U' L' U L M2 D", Face::L), "U' B' U B M2 D");
    }

    #[test]
    fn solved_slots_hold_their_own_pieces() {
        let state = solved_state();
        for side in Face::SIDES {
            let right = right_of(side);
            assert_eq!(
                colors(&state, middle_edge(side)),
                [side.home_color(), right.home_color()]
            );
            assert_eq!(
                colors(&state, bottom_corner(side)),
                [Color::Yellow, side.home_color(), right.home_color()]
            );
            let edge = locate_edge(&state, Color::White, side.home_color()).unwrap();
            assert_eq!((edge.layer, edge.side), (Layer::Top, side));
            assert_eq!(edge.colors, [Color::White, side.home_color()]);
        }
    }

    #[test]
    fn u_turn_moves_top_pieces_between_sides() {
        let state = apply(&solved_state(), cube_core::cube_move!(R));
        let corner = [Color::Yellow, Color::Green, Color::Red];
        let found = locate_corner(&state, corner).unwrap();
        assert_eq!((found.layer, found.side), (Layer::Top, Face::F));

        for target in Face::SIDES {
            let turn = u_turn_between(Face::F, target);
            let moved = match turn {
                Some(token) => apply(&state, token),
                None => state,
            };
            let found = locate_corner(&moved, corner).unwrap();
            assert_eq!((found.layer, found.side), (Layer::Top, target));
        }

        let back = apply_sequence(&state, &"U2".parse::<MoveSequence>().unwrap());
        let edge = locate_edge(&back, Color::White, Color::Blue).unwrap();
        assert_eq!((edge.layer, edge.side), (Layer::Top, Face::F));
    }
}

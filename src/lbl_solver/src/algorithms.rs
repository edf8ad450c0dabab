//! The fixed move sequences the phases insert, written for the front slot
//! (F on the left, R on the right). [`crate::pieces::conjugate`] turns them
//! toward any other side.

use cube_core::{MoveToken, cube_move};

/// `R U R'`. Pulls a piece out of the front-right slot without disturbing
/// the cross, or drops a corner in when its bottom color faces right.
pub(crate) const SLOT_OUT: [MoveToken; 3] = [cube_move!(R), cube_move!(U), cube_move!(R, Prime)];

/// `U' R' F R`. Inserts a top edge into the front cross slot flipped.
pub(crate) const CROSS_FLIP: [MoveToken; 4] = [
    cube_move!(U, Prime),
    cube_move!(R, Prime),
    cube_move!(F),
    cube_move!(R),
];

/// `R U R' U'`
pub(crate) const CORNER_TWIST_OUT: [MoveToken; 4] = [
    cube_move!(R),
    cube_move!(U),
    cube_move!(R, Prime),
    cube_move!(U, Prime),
];

/// `F' U' F`
pub(crate) const CORNER_FRONT: [MoveToken; 3] = [
    cube_move!(F, Prime),
    cube_move!(U, Prime),
    cube_move!(F),
];

/// `R U2 R' U' R U R'`
pub(crate) const CORNER_UP: [MoveToken; 7] = [
    cube_move!(R),
    cube_move!(U, Double),
    cube_move!(R, Prime),
    cube_move!(U, Prime),
    cube_move!(R),
    cube_move!(U),
    cube_move!(R, Prime),
];

/// `U R U' R' U' F' U F`. Inserts the edge above F into the front-right slot.
pub(crate) const EDGE_RIGHT: [MoveToken; 8] = [
    cube_move!(U),
    cube_move!(R),
    cube_move!(U, Prime),
    cube_move!(R, Prime),
    cube_move!(U, Prime),
    cube_move!(F, Prime),
    cube_move!(U),
    cube_move!(F),
];

/// `U' L' U L U F U' F'`. Inserts the edge above F into the front-left slot.
pub(crate) const EDGE_LEFT: [MoveToken; 8] = [
    cube_move!(U, Prime),
    cube_move!(L, Prime),
    cube_move!(U),
    cube_move!(L),
    cube_move!(U),
    cube_move!(F),
    cube_move!(U, Prime),
    cube_move!(F, Prime),
];

/// `F R U R' U' F'`
pub(crate) const OLL_LINE: [MoveToken; 6] = [
    cube_move!(F),
    cube_move!(R),
    cube_move!(U),
    cube_move!(R, Prime),
    cube_move!(U, Prime),
    cube_move!(F, Prime),
];

/// `F U R U' R' F'`
pub(crate) const OLL_ANGLE: [MoveToken; 6] = [
    cube_move!(F),
    cube_move!(U),
    cube_move!(R),
    cube_move!(U, Prime),
    cube_move!(R, Prime),
    cube_move!(F, Prime),
];

/// `R U R' U R U2 R'`
pub(crate) const SUNE: [MoveToken; 7] = [
    cube_move!(R),
    cube_move!(U),
    cube_move!(R, Prime),
    cube_move!(U),
    cube_move!(R),
    cube_move!(U, Double),
    cube_move!(R, Prime),
];

/// `R' F R' B2 R F' R' B2 R2`. Cycles three top corners, keeping the back
/// pair in place.
pub(crate) const A_PERM: [MoveToken; 9] = [
    cube_move!(R, Prime),
    cube_move!(F),
    cube_move!(R, Prime),
    cube_move!(B, Double),
    cube_move!(R),
    cube_move!(F, Prime),
    cube_move!(R, Prime),
    cube_move!(B, Double),
    cube_move!(R, Double),
];

/// `M2 U M U2 M' U M2`. Cycles the front, right and left top edges, keeping
/// the back edge.
pub(crate) const U_PERM: [MoveToken; 7] = [
    cube_move!(M, Double),
    cube_move!(U),
    cube_move!(M),
    cube_move!(U, Double),
    cube_move!(M, Prime),
    cube_move!(U),
    cube_move!(M, Double),
];

/// `M2 U' M U2 M' U' M2`, the mirror of [`U_PERM`].
pub(crate) const U_PERM_MIRROR: [MoveToken; 7] = [
    cube_move!(M, Double),
    cube_move!(U, Prime),
    cube_move!(M),
    cube_move!(U, Double),
    cube_move!(M, Prime),
    cube_move!(U, Prime),
    cube_move!(M, Double),
];

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{MoveSequence, apply_sequence, is_solved, solved_state};

    fn order(alg: &[MoveToken]) -> usize {
        let mut state = apply_sequence(&solved_state(), alg);
        let mut n = 1;
        while !is_solved(&state) {
            state = apply_sequence(&state, alg);
            n += 1;
        }
        n
    }

    #[test]
    fn written_forms() {
        assert_eq!(MoveSequence::from(SUNE.to_vec()).to_string(), "R U R' U R U2 R'");
        assert_eq!(
            MoveSequence::from(A_PERM.to_vec()).to_string(),
            "R' F R' B2 R F' R' B2 R2"
        );
        assert_eq!(
            MoveSequence::from(U_PERM_MIRROR.to_vec()).to_string(),
            "M2 U' M U2 M' U' M2"
        );
    }

    #[test]
    fn last_layer_algorithm_orders() {
        assert_eq!(order(&A_PERM), 3);
        assert_eq!(order(&U_PERM), 3);
        assert_eq!(order(&U_PERM_MIRROR), 3);
        assert_eq!(order(&SUNE), 6);
    }

    #[test]
    fn u_perms_are_inverses() {
        let state = apply_sequence(&solved_state(), &U_PERM);
        assert!(is_solved(&apply_sequence(&state, &U_PERM_MIRROR)));
    }
}

use log::trace;

use crate::moves::{MoveSequence, MoveToken};

/// A random scramble of `length` face turns from a fresh generator.
#[must_use]
pub fn scramble(length: usize) -> MoveSequence {
    scramble_with_rng(&mut fastrand::Rng::new(), length)
}

/// A random scramble of `length` face turns. `M` is never used, and no two
/// consecutive tokens share a base letter.
#[must_use]
pub fn scramble_with_rng(rng: &mut fastrand::Rng, length: usize) -> MoveSequence {
    let mut tokens: Vec<MoveToken> = Vec::with_capacity(length);
    while tokens.len() < length {
        let token = MoveToken::FACE_TURNS[rng.usize(..MoveToken::FACE_TURNS.len())];
        if tokens.last().is_some_and(|last| last.base == token.base) {
            continue;
        }
        tokens.push(token);
    }
    let scramble = MoveSequence::from(tokens);
    trace!("Generated scramble {scramble}");
    scramble
}

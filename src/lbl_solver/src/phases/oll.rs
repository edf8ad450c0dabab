use cube_core::{BaseMove, CubeState, Face};

use super::{PhaseOutcome, PhaseRun};
use crate::{
    algorithms::{OLL_ANGLE, OLL_LINE, SUNE},
    config::SolverConfig,
    record::Phase,
};

const EDGE_STICKERS: [usize; 4] = [1, 3, 5, 7];
const CORNER_STICKERS: [usize; 4] = [0, 2, 6, 8];

fn oriented(state: &CubeState, stickers: [usize; 4]) -> usize {
    let up = state.center(Face::U);
    stickers
        .into_iter()
        .filter(|&i| state.facelet(Face::U, i) == up)
        .count()
}

fn up_at(state: &CubeState, face: Face, index: usize) -> bool {
    state.facelet(face, index) == state.center(Face::U)
}

/// Turns the top face to the cross color: edges first, then corners by
/// repeated Sune.
pub(crate) fn oll(state: &CubeState, config: &SolverConfig) -> PhaseOutcome {
    let mut run = PhaseRun::new(Phase::Oll, state);

    for _ in 0..config.oll_attempts {
        match oriented(&run.state, EDGE_STICKERS) {
            4 => break,
            0 => run.emit(OLL_LINE, "orient edges (dot)"),
            _ => {
                run.turn_until(
                    BaseMove::U,
                    |state| {
                        (up_at(state, Face::U, 3) && up_at(state, Face::U, 5))
                            || (up_at(state, Face::U, 1) && up_at(state, Face::U, 3))
                    },
                    "align edges",
                );
                if up_at(&run.state, Face::U, 3) && up_at(&run.state, Face::U, 5) {
                    run.emit(OLL_LINE, "orient edges (line)");
                } else {
                    run.emit(OLL_ANGLE, "orient edges (angle)");
                }
            }
        }
    }

    for _ in 0..config.oll_attempts {
        let count = oriented(&run.state, CORNER_STICKERS);
        if count == 4 {
            break;
        }
        // Sune's fixed point depends on how many corners are done: a lone
        // oriented corner goes front-left, otherwise the front-left corner
        // must face its top color left (none done) or forward (two done).
        run.turn_until(
            BaseMove::U,
            |state| match count {
                1 => up_at(state, Face::U, 6),
                0 => up_at(state, Face::L, 2),
                _ => up_at(state, Face::F, 0),
            },
            "align corners",
        );
        run.emit(SUNE, "orient corners (Sune)");
    }

    let up = run.center(Face::U);
    let success = run.state.face(Face::U).iter().all(|&color| color == up);
    run.finish(success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{MoveSequence, apply_sequence, solved_state};

    #[test]
    fn orients_a_sune_case() {
        // The inverse of Sune leaves a single oriented corner.
        let state = apply_sequence(
            &solved_state(),
            &"R U2 R' U' R U' R'".parse::<MoveSequence>().unwrap(),
        );
        let outcome = oll(&state, &SolverConfig::default());
        assert!(outcome.success);
        assert!(outcome.records.iter().all(|record| record.phase == Phase::Oll));
    }

    #[test]
    fn orients_flipped_edges() {
        let state = apply_sequence(
            &solved_state(),
            &"F R U R' U' F'".parse::<MoveSequence>().unwrap(),
        );
        let outcome = oll(&state, &SolverConfig::default());
        assert!(outcome.success);
    }
}

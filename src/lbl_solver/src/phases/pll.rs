use cube_core::{BaseMove, CubeState, Face};

use super::{PhaseOutcome, PhaseRun};
use crate::{
    algorithms::{A_PERM, U_PERM, U_PERM_MIRROR},
    config::SolverConfig,
    record::Phase,
};

/// Both top corners of `side` show the same color.
fn headlights(state: &CubeState, side: Face) -> bool {
    state.facelet(side, 0) == state.facelet(side, 2)
}

/// The whole top row of `side` shows one color.
fn bar(state: &CubeState, side: Face) -> bool {
    headlights(state, side) && state.facelet(side, 1) == state.facelet(side, 0)
}

/// Permutes the oriented last layer: corners with the A-perm, edges with
/// the slice U-perm, then a final U turn.
pub(crate) fn pll(state: &CubeState, config: &SolverConfig) -> PhaseOutcome {
    let mut run = PhaseRun::new(Phase::Pll, state);

    for _ in 0..config.pll_attempts {
        if Face::SIDES
            .into_iter()
            .all(|side| headlights(&run.state, side))
        {
            break;
        }
        if Face::SIDES
            .into_iter()
            .any(|side| headlights(&run.state, side))
        {
            run.turn_until(
                BaseMove::U,
                |state| headlights(state, Face::B),
                "headlights to back",
            );
        }
        run.emit(A_PERM, "permute corners (A-perm)");
    }

    for _ in 0..config.pll_attempts {
        if Face::SIDES.into_iter().all(|side| bar(&run.state, side)) {
            break;
        }
        if Face::SIDES.into_iter().any(|side| bar(&run.state, side)) {
            run.turn_until(BaseMove::U, |state| bar(state, Face::B), "bar to back");
            // Front edge matches the corner next to it on R, so it belongs on R.
            if run.state.facelet(Face::F, 1) == run.state.facelet(Face::R, 0) {
                run.emit(U_PERM, "permute edges (U-perm)");
            } else {
                run.emit(U_PERM_MIRROR, "permute edges (U-perm)");
            }
        } else {
            run.emit(U_PERM, "permute edges (U-perm)");
        }
    }

    run.turn_until(BaseMove::U, CubeState::is_solved, "adjust U layer");
    let success = run.state.is_solved();
    run.finish(success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{MoveSequence, apply_sequence, solved_state};

    fn solves(moves: &str) -> PhaseOutcome {
        let state = apply_sequence(&solved_state(), &moves.parse::<MoveSequence>().unwrap());
        pll(&state, &SolverConfig::default())
    }

    #[test]
    fn final_turn_only() {
        let outcome = solves("U");
        assert!(outcome.success);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].token.to_string(), "U'");
    }

    #[test]
    fn corner_and_edge_cycles() {
        for case in [
            "R' F R' B2 R F' R' B2 R2",
            "M2 U M U2 M' U M2",
            "M2 U' M U2 M' U' M2 U2",
            "R' F R' B2 R F' R' B2 R2 U M2 U M U2 M' U M2",
        ] {
            assert!(solves(case).success, "{case}");
        }
    }
}

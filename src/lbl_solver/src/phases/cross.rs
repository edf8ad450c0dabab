use cube_core::{BaseMove, Color, CubeState, Face};

use super::{PhaseOutcome, PhaseRun};
use crate::{
    algorithms::{CROSS_FLIP, SLOT_OUT},
    config::SolverConfig,
    pieces::{Layer, bottom_edge, colors, locate_edge},
    record::Phase,
};

fn edge_solved(state: &CubeState, side: Face) -> bool {
    colors(state, bottom_edge(side)) == [state.center(Face::D), state.center(side)]
}

/// Builds the cross on D, one side edge at a time.
pub(crate) fn cross(state: &CubeState, config: &SolverConfig) -> PhaseOutcome {
    let mut run = PhaseRun::new(Phase::Cross, state);

    // M turns are the only way centers move, so one M-slice token puts white
    // back on top.
    run.turn_until(
        BaseMove::M,
        |state| state.center(Face::U) == Color::White,
        "restore centers",
    );

    for side in Face::SIDES {
        for _ in 0..config.cross_attempts {
            if edge_solved(&run.state, side) {
                break;
            }
            let down = run.center(Face::D);
            let Some(edge) = locate_edge(&run.state, down, run.center(side)) else {
                break;
            };
            match edge.layer {
                Layer::Bottom => run.emit_half_turn(edge.side, "lift edge from bottom"),
                Layer::Middle => run.emit_at(&SLOT_OUT, edge.side, "lift edge from middle"),
                Layer::Top => {
                    run.align(edge.side, side, "align edge");
                    if edge.colors[0] == down {
                        run.emit_half_turn(side, "insert edge");
                    } else {
                        run.emit_at(&CROSS_FLIP, side, "insert flipped edge");
                    }
                }
            }
        }
    }

    let success = Face::SIDES
        .into_iter()
        .all(|side| edge_solved(&run.state, side));
    run.finish(success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{MoveSequence, apply_sequence, scramble_with_rng, solved_state};

    #[test]
    fn builds_cross_on_scrambles() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..50 {
            let state = apply_sequence(&solved_state(), &scramble_with_rng(&mut rng, 25));
            let outcome = cross(&state, &SolverConfig::default());
            assert!(outcome.success);
            assert_eq!(outcome.state.center(Face::D), Color::Yellow);
        }
    }

    #[test]
    fn restores_centers_with_one_slice_turn() {
        let state = apply_sequence(&solved_state(), &"M".parse::<MoveSequence>().unwrap());
        let outcome = cross(&state, &SolverConfig::default());
        assert!(outcome.success);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].token.to_string(), "M'");
        assert!(outcome.state.is_solved());
    }
}

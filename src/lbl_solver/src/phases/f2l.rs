use cube_core::{Color, CubeState, Face};

use super::{PhaseOutcome, PhaseRun};
use crate::{
    algorithms::{CORNER_FRONT, CORNER_TWIST_OUT, CORNER_UP, EDGE_LEFT, EDGE_RIGHT, SLOT_OUT},
    config::SolverConfig,
    pieces::{
        Layer, bottom_corner, colors, locate_corner, locate_edge, middle_edge, right_of,
        top_corner,
    },
    record::Phase,
};

fn slot_colors(state: &CubeState, side: Face) -> [Color; 3] {
    [
        state.center(Face::D),
        state.center(side),
        state.center(right_of(side)),
    ]
}

fn corner_solved(state: &CubeState, side: Face) -> bool {
    colors(state, bottom_corner(side)) == slot_colors(state, side)
}

fn edge_solved(state: &CubeState, side: Face) -> bool {
    colors(state, middle_edge(side)) == [state.center(side), state.center(right_of(side))]
}

/// Places the four bottom corners, then the four middle edges, over a
/// finished cross.
pub(crate) fn f2l(state: &CubeState, config: &SolverConfig) -> PhaseOutcome {
    let mut run = PhaseRun::new(Phase::F2l, state);

    for side in Face::SIDES {
        insert_corner(&mut run, side, config.f2l_corner_attempts);
    }
    for side in Face::SIDES {
        insert_edge(&mut run, side, config.f2l_edge_attempts);
    }

    let success = Face::SIDES
        .into_iter()
        .all(|side| corner_solved(&run.state, side) && edge_solved(&run.state, side));
    run.finish(success)
}

fn insert_corner(run: &mut PhaseRun, side: Face, attempts: usize) {
    for _ in 0..attempts {
        if corner_solved(&run.state, side) {
            return;
        }
        let Some(corner) = locate_corner(&run.state, slot_colors(&run.state, side)) else {
            return;
        };
        match corner.layer {
            Layer::Bottom if corner.side != side => {
                run.emit_at(&SLOT_OUT, corner.side, "extract corner");
            }
            Layer::Bottom => run.emit_at(&CORNER_TWIST_OUT, side, "extract twisted corner"),
            _ => {
                run.align(corner.side, side, "align corner");
                let [_, front, right] = colors(&run.state, top_corner(side));
                let down = run.center(Face::D);
                if right == down {
                    run.emit_at(&SLOT_OUT, side, "insert corner");
                } else if front == down {
                    run.emit_at(&CORNER_FRONT, side, "insert corner");
                } else {
                    run.emit_at(&CORNER_UP, side, "insert corner facing up");
                }
            }
        }
    }
}

fn insert_edge(run: &mut PhaseRun, side: Face, attempts: usize) {
    for _ in 0..attempts {
        if edge_solved(&run.state, side) {
            return;
        }
        let Some(edge) = locate_edge(&run.state, run.center(side), run.center(right_of(side)))
        else {
            return;
        };
        match edge.layer {
            Layer::Middle => run.emit_at(&EDGE_RIGHT, edge.side, "extract edge"),
            Layer::Bottom => run.emit_half_turn(edge.side, "lift edge from bottom"),
            Layer::Top => {
                let [up, front] = edge.colors;
                let Some(home) = Face::SIDES
                    .into_iter()
                    .find(|&face| run.center(face) == front)
                else {
                    return;
                };
                run.align(edge.side, home, "align edge");
                if up == run.center(right_of(home)) {
                    run.emit_at(&EDGE_RIGHT, home, "insert edge right");
                } else {
                    run.emit_at(&EDGE_LEFT, home, "insert edge left");
                }
            }
        }
    }
}

use cube_core::{
    CubeState, MoveSequence, apply_sequence, is_solved, scramble_with_rng, solved_state,
};
use lbl_solver::{LblSolver, MoveRecord, Phase, SolverConfig, optimize, solve};

const FIXED_SCRAMBLE: &str = "U R F L D B U' R'";

fn scrambled(moves: &str) -> CubeState {
    apply_sequence(&solved_state(), &moves.parse::<MoveSequence>().unwrap())
}

fn replay(state: &CubeState, records: &[MoveRecord]) -> CubeState {
    let tokens = records.iter().map(|record| record.token).collect::<Vec<_>>();
    apply_sequence(state, &tokens)
}

fn written(records: &[MoveRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[test_log::test]
fn solved_cube_needs_nothing() {
    assert!(solve(&solved_state()).is_empty());

    let report = LblSolver::new().solve_report(&solved_state());
    assert!(report.records.is_empty());
    assert!(report.phases.is_empty());
    assert!(report.is_solved());
}

#[test_log::test]
fn single_u_turn() {
    let solution = solve(&scrambled("U"));
    assert_eq!(written(&solution), "U'");
    assert_eq!(solution[0].phase, Phase::Pll);
}

#[test_log::test]
fn single_slice_turn() {
    let solution = solve(&scrambled("M"));
    assert_eq!(written(&solution), "M'");
    assert_eq!(solution[0].phase, Phase::Cross);
}

#[test_log::test]
fn undoes_a_trigger() {
    let solution = solve(&scrambled("R U R' U'"));
    assert_eq!(written(&solution), "U R U' R'");
    assert!(solution.iter().all(|record| record.phase == Phase::F2l));
}

#[test_log::test]
fn fixed_scramble() {
    let state = scrambled(FIXED_SCRAMBLE);
    let report = LblSolver::new().solve_report(&state);

    assert!(report.is_solved());
    assert!(report.records.len() < 150, "{} moves", report.records.len());
    assert!(is_solved(&replay(&state, &report.records)));
    assert_eq!(replay(&state, &report.records), report.state);

    assert_eq!(
        report.phases.iter().map(|summary| summary.phase).collect::<Vec<_>>(),
        Phase::ALL
    );
    assert!(report.phases.iter().all(|summary| summary.success));
    let emitted = report.phases.iter().map(|summary| summary.moves).sum::<usize>();
    assert!(emitted >= report.records.len());
}

#[test_log::test]
fn records_are_grouped_by_phase() {
    let solution = solve(&scrambled(FIXED_SCRAMBLE));
    assert!(solution.windows(2).all(|pair| pair[0].phase <= pair[1].phase));
    assert!(solution.iter().all(|record| !record.description.is_empty()));
}

#[test_log::test]
fn random_scrambles() {
    let solver = LblSolver::new();
    let mut rng = fastrand::Rng::with_seed(2024);
    let total = 300;
    let mut solved = 0;
    for _ in 0..total {
        let scramble = scramble_with_rng(&mut rng, 20);
        let state = apply_sequence(&solved_state(), &scramble);
        let report = solver.solve_report(&state);
        assert_eq!(replay(&state, &report.records), report.state, "{scramble}");
        if report.is_solved() {
            solved += 1;
        }
    }
    assert!(solved * 100 >= total * 95, "solved {solved} of {total}");
}

#[test_log::test]
fn scrambles_with_slice_turns() {
    let solver = LblSolver::new();
    let mut rng = fastrand::Rng::with_seed(77);
    for slice in ["M", "M2", "M'"] {
        for _ in 0..20 {
            let mut scramble = scramble_with_rng(&mut rng, 15);
            scramble.push(slice.parse().unwrap());
            scramble.extend(scramble_with_rng(&mut rng, 5).into_inner());
            let state = apply_sequence(&solved_state(), &scramble);
            assert!(solver.solve_report(&state).is_solved(), "{scramble}");
        }
    }
}

#[test_log::test]
fn solutions_are_fully_optimized() {
    let mut rng = fastrand::Rng::with_seed(9);
    for _ in 0..50 {
        let state = apply_sequence(&solved_state(), &scramble_with_rng(&mut rng, 25));
        let solution = solve(&state);
        assert_eq!(optimize(&solution), solution);
        assert!(solution.windows(2).all(|pair| {
            pair[0].token.base != pair[1].token.base
                || (pair[0].token != pair[1].token && !pair[0].token.cancels(pair[1].token))
        }));
    }
}

#[test_log::test]
fn exhausted_budgets_are_reported() {
    let config = SolverConfig {
        cross_attempts: 0,
        f2l_corner_attempts: 0,
        f2l_edge_attempts: 0,
        oll_attempts: 0,
        pll_attempts: 0,
    };
    let report = LblSolver::with_config(config).solve_report(&scrambled(FIXED_SCRAMBLE));
    assert!(!report.is_solved());
    assert!(!report.phases[0].success);
    assert_eq!(report.phases.len(), 4);
}

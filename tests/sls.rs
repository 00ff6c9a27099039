//! Scenario tests (spec.md §8, S1-S4) plus determinism (P10) and
//! model-validity (P6) checks, exercised against every heuristic through
//! the public `sls_sat::run_formula` entry point.

use sls_sat::sls::literal::Lit;
use sls_sat::sls::{Formula, Heuristic, RunResult, Settings};

const ALL_HEURISTICS: &[Heuristic] = &[
    Heuristic::Gsat,
    Heuristic::GsatRandomWalk,
    Heuristic::WalkSat,
    Heuristic::WalkSatTabu,
    Heuristic::GsatTabu,
    Heuristic::Novelty,
    Heuristic::AdaptiveNoveltyPlus,
    Heuristic::RNovelty,
    Heuristic::RoTS,
    Heuristic::HRTS,
    Heuristic::IRoTS,
    Heuristic::Amls,
];

fn clause(lits: &[i64]) -> Vec<Lit> {
    lits.iter().map(|&x| Lit::from_dimacs(x)).collect()
}

fn settings_for(h: Heuristic, seed: u64) -> Settings {
    let mut s = Settings::default();
    s.heuristic = h;
    s.seed = seed;
    s
}

#[test]
fn s1_unit_clause_is_satisfied_quickly() {
    // {(1)}, n=1
    let f = Formula::new(vec![clause(&[1])], 1);
    for &h in ALL_HEURISTICS {
        let settings = settings_for(h, 0);
        let result = sls_sat::run_formula(&f, &settings);
        match result {
            RunResult::Sat { model, stats } => {
                assert_eq!(model, vec![1]);
                assert!(stats.flips <= 2, "{:?}: {} flips", h, stats.flips);
            }
            RunResult::Unknown { .. } => panic!("{:?}: expected SAT on a unit clause", h),
        }
    }
}

#[test]
fn s2_contradiction_is_unknown() {
    // {(1), (-1)}, n=1: unsatisfiable.
    let f = Formula::new(vec![clause(&[1]), clause(&[-1])], 1);
    let settings = settings_for(Heuristic::WalkSat, 0);
    let result = sls_sat::run_formula(&f, &settings);
    match result {
        RunResult::Unknown { .. } => {}
        RunResult::Sat { .. } => panic!("a contradiction cannot be SAT"),
    }
}

#[test]
fn s3_gsat_and_walksat_reach_sat_with_x3_true() {
    // (x1 v x2) & (-x1 v x2) & (x1 v -x2) & (-x1 v -x2 v x3): SAT only when x3 = true.
    let f = Formula::new(
        vec![
            clause(&[1, 2]),
            clause(&[-1, 2]),
            clause(&[1, -2]),
            clause(&[-1, -2, 3]),
        ],
        3,
    );
    for h in [Heuristic::Gsat, Heuristic::WalkSat] {
        let settings = settings_for(h, 0);
        match sls_sat::run_formula(&f, &settings) {
            RunResult::Sat { model, .. } => assert_eq!(model[2], 3, "{:?}: x3 must be true", h),
            RunResult::Unknown { .. } => panic!("{:?}: expected SAT", h),
        }
    }
}

#[test]
fn s4_flip_flip_is_identity() {
    use sls_sat::sls::literal::Var;
    use sls_sat::sls::state::FormulaState;

    let f = Formula::new(
        vec![
            clause(&[1, 2]),
            clause(&[-1, 2]),
            clause(&[1, -2]),
            clause(&[-1, -2, 3]),
        ],
        3,
    );
    let mut st = FormulaState::load(&f);
    for v in f.vars() {
        st.flip_var(v); // move off the all-false default into a known state
    }
    let lit = Var::new(0).pos_lit();
    let costs_before: Vec<u32> = (0..f.n_clauses()).map(|c| st.cost(c)).collect();
    let unsat_before: Vec<usize> = st.unsat().iter().collect();

    st.flip(lit);
    st.flip(lit);

    let costs_after: Vec<u32> = (0..f.n_clauses()).map(|c| st.cost(c)).collect();
    let mut unsat_after: Vec<usize> = st.unsat().iter().collect();
    unsat_after.sort();
    let mut unsat_before_sorted = unsat_before;
    unsat_before_sorted.sort();

    assert_eq!(costs_before, costs_after);
    assert_eq!(unsat_before_sorted, unsat_after);
}

#[test]
fn p6_reported_models_satisfy_every_clause() {
    let f = Formula::new(
        vec![
            clause(&[1, 2]),
            clause(&[-1, 2]),
            clause(&[1, -2]),
            clause(&[-1, -2, 3]),
        ],
        3,
    );
    for &h in ALL_HEURISTICS {
        let settings = settings_for(h, 1);
        if let RunResult::Sat { model, .. } = sls_sat::run_formula(&f, &settings) {
            sls_sat::validate_model(&f, &model)
                .unwrap_or_else(|e| panic!("{:?}: {}", h, e));
        }
    }
}

#[test]
fn p10_same_seed_same_result() {
    let f = Formula::new(
        vec![
            clause(&[1, 2]),
            clause(&[-1, 2]),
            clause(&[1, -2]),
            clause(&[-1, -2, 3]),
        ],
        3,
    );
    for &h in ALL_HEURISTICS {
        let a = sls_sat::run_formula(&f, &settings_for(h, 42));
        let b = sls_sat::run_formula(&f, &settings_for(h, 42));
        match (a, b) {
            (RunResult::Sat { model: m1, stats: s1 }, RunResult::Sat { model: m2, stats: s2 }) => {
                assert_eq!(m1, m2, "{:?}", h);
                assert_eq!(s1.flips, s2.flips, "{:?}", h);
                assert_eq!(s1.tries, s2.tries, "{:?}", h);
            }
            (RunResult::Unknown { stats: s1 }, RunResult::Unknown { stats: s2 }) => {
                assert_eq!(s1.flips, s2.flips, "{:?}", h);
                assert_eq!(s1.tries, s2.tries, "{:?}", h);
            }
            _ => panic!("{:?}: outcome differs across identical-seed runs", h),
        }
    }
}

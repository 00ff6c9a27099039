//! Restart / Perturbation Controller (spec.md §4.4). The outer loop
//! shared by every heuristic: generate a fresh random assignment per
//! try, run the selector for up to `MAX_FLIPS` steps, perturb if it
//! didn't find SAT, and stop once `MAX_TRIES` is exhausted or a model is
//! found. `tries` is incremented exactly once per restart, inside
//! `FormulaState::random_assignment` — the source increments it inside
//! its own "generate" routine in a way that double-counts on some
//! code paths, which spec.md §9 flags as a bug.

use super::formula::Formula;
use super::rng::Rand;
use super::selector;
use super::settings::Settings;
use super::state::FormulaState;

#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub flips: u64,
    pub tries: u64,
    pub cpu_time: f64,
}

#[derive(Debug, Clone)]
pub enum RunResult {
    Sat { model: Vec<i64>, stats: Stats },
    Unknown { stats: Stats },
}

impl RunResult {
    pub fn stats(&self) -> &Stats {
        match self {
            RunResult::Sat { stats, .. } => stats,
            RunResult::Unknown { stats } => stats,
        }
    }
}

pub fn run(formula: &Formula, settings: &Settings) -> RunResult {
    let start = time::precise_time_s();

    let mut rng = Rand::new(settings.seed);
    let mut state = FormulaState::load(formula);
    let mut sel = selector::build(settings, formula.n_vars(), formula.n_clauses());
    let mut best = selector::Best::new(formula.n_clauses());

    let max_tries = settings.max_tries();
    let max_flips = settings.max_flips(formula.n_vars());

    let mut total_flips = 0u64;

    for try_idx in 0..max_tries {
        state.random_assignment(&mut rng);
        state.recompute_costs();
        sel.on_restart(&state, &mut rng);
        best.consider(&state);
        debug!("try {:>4}: |UNSAT| = {}", try_idx, state.n_unsat());

        for _ in 0..max_flips {
            if state.is_sat() {
                break;
            }
            sel.step(&mut state, &mut rng, &mut best);
        }

        if !state.is_sat() {
            sel.perturb(&mut state, &mut rng, &mut best);
        }

        total_flips += state.flips();

        if state.is_sat() {
            break;
        }
    }

    let stats = Stats {
        flips: total_flips,
        tries: state.tries(),
        cpu_time: time::precise_time_s() - start,
    };

    if best.cost == 0 {
        RunResult::Sat {
            model: best.model.clone(),
            stats,
        }
    } else {
        RunResult::Unknown { stats }
    }
}

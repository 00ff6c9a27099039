//! Variable Selector family (spec.md §4.3). All eleven heuristics share
//! one `FormulaState`/scoring/tabu/memory substrate through this trait;
//! `avoid per-variant copies of flip and recompute_costs` (spec.md §9) is
//! satisfied because every selector below calls into `FormulaState`
//! rather than re-implementing clause bookkeeping.

mod amls;
mod gsat;
mod gsat_tabu;
mod hrts;
mod irots;
mod novelty;
mod novelty_plus;
mod r_novelty;
mod rots;
mod walksat;
mod walksat_tabu;

use super::literal::Var;
use super::rng::Rand;
use super::settings::Settings;
use super::state::FormulaState;

/// Tracks the best assignment seen so far, across tries (spec.md I5/P5:
/// `best_cost` only ever decreases).
pub struct Best {
    pub cost: usize,
    pub model: Vec<i64>,
}

impl Best {
    pub fn new(n_clauses: usize) -> Self {
        Best {
            cost: n_clauses,
            model: Vec::new(),
        }
    }

    /// Compare the current `|UNSAT|` against the running best, updating
    /// it (and snapshotting the model) on improvement. Returns whether
    /// this call improved the best.
    pub fn consider(&mut self, state: &FormulaState) -> bool {
        let cur = state.n_unsat();
        if cur < self.cost {
            self.cost = cur;
            self.model = state.model();
            true
        } else {
            false
        }
    }
}

/// One pluggable variable-selection strategy. `step` performs one round
/// of search — ordinarily a single flip, though a handful of variants
/// (H-RTS, IRoTS) internally advance a multi-phase state machine that can
/// take more than one flip per call. `perturb` is the variant-specific
/// hook spec.md §4.4's controller pseudocode calls once per try, after
/// the flip budget is exhausted or SAT is found (AMLS is the only
/// variant that does real work here; every other variant's default is a
/// no-op).
pub trait VariableSelector {
    fn on_restart(&mut self, state: &FormulaState, rng: &mut Rand);

    fn step(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best);

    fn perturb(&mut self, _state: &mut FormulaState, _rng: &mut Rand, _best: &mut Best) {}
}

pub fn build(settings: &Settings, n_vars: usize, n_clauses: usize) -> Box<dyn VariableSelector> {
    use super::settings::Heuristic::*;
    match settings.heuristic {
        Gsat => Box::new(gsat::Gsat::new(settings, false)),
        GsatRandomWalk => Box::new(gsat::Gsat::new(settings, true)),
        WalkSat => Box::new(walksat::WalkSat::new(settings)),
        WalkSatTabu => Box::new(walksat_tabu::WalkSatTabu::new(settings, n_vars)),
        GsatTabu => Box::new(gsat_tabu::GsatTabu::new(settings, n_vars)),
        Novelty => Box::new(novelty::Novelty::new(settings)),
        AdaptiveNoveltyPlus => Box::new(novelty_plus::AdaptiveNoveltyPlus::new(settings, n_clauses)),
        RNovelty => Box::new(r_novelty::RNovelty::new(settings)),
        RoTS => Box::new(rots::RoTS::new(n_vars)),
        HRTS => Box::new(hrts::HRTS::new(n_vars)),
        IRoTS => Box::new(irots::IRoTS::new(n_vars, n_clauses)),
        Amls => Box::new(amls::Amls::new(n_vars, n_clauses)),
    }
}

/// Collect the distinct variables occurring in some UNSAT clause
/// (`L_unsat`, spec.md §4.3), reusing a caller-owned scratch buffer.
pub(crate) fn unsat_vars(state: &FormulaState, scratch: &mut Vec<Var>) {
    state.unsat_vars(scratch);
}

/// First- and second-minimum (by score) over a nonempty variable slice,
/// returning `(best, second_best)`. Ties for first place are broken by
/// position, matching the source's running-min scan.
pub(crate) fn first_and_second_min<F: Fn(Var) -> i64>(vars: &[Var], score: F) -> (Var, Var) {
    assert!(!vars.is_empty());
    if vars.len() == 1 {
        return (vars[0], vars[0]);
    }
    let mut best = vars[0];
    let mut best_score = score(vars[0]);
    let mut second = vars[0];
    let mut second_s = score(vars[0]);
    for &v in &vars[1..] {
        let s = score(v);
        if s <= best_score {
            second = best;
            second_s = best_score;
            best = v;
            best_score = s;
        } else if s < second_s {
            second = v;
            second_s = s;
        }
    }
    (best, second)
}

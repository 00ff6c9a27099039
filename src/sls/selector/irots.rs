//! Iterated Robust Tabu Search (spec.md §4.3). One `step()` call runs a
//! full local-search/perturb/repair/accept iteration: a RoTS-style
//! local-search phase to a local optimum, a snapshot, a perturbation
//! phase under a looser tenure, an optional repair phase if the
//! perturbation left the formula unsatisfied (whose snapshot is
//! authoritative even if worse than the pre-repair one), and finally an
//! acceptance test against the pre-perturbation snapshot.

use super::super::literal::Var;
use super::super::rng::Rand;
use super::super::scoring;
use super::super::state::FormulaState;
use super::super::tabu::LastMove;
use super::{Best, VariableSelector};

pub struct IRoTS {
    tenure_ls: usize,
    escape_threshold: u64,
    tenure_perturb: usize,
    max_perturbations: u64,
    last_move: LastMove,
    scratch: Vec<Var>,
}

impl IRoTS {
    pub fn new(n_vars: usize, _n_clauses: usize) -> Self {
        IRoTS {
            tenure_ls: n_vars / 10 + 4,
            escape_threshold: ((n_vars as u64 * n_vars as u64) / 4).max(1),
            tenure_perturb: (n_vars / 2).max(1),
            max_perturbations: ((9 * n_vars as u64) / 10).max(1),
            last_move: LastMove::new(n_vars),
            scratch: Vec::new(),
        }
    }

    /// One tabu/aspiration flip under `tenure`; returns the post-flip
    /// `|UNSAT|`.
    fn tabu_flip(&mut self, state: &mut FormulaState, tenure: usize, best_cost: usize) -> usize {
        super::unsat_vars(state, &mut self.scratch);
        let flips = state.flips();
        let (mut non_tabu, mut tabu): (Vec<Var>, Vec<Var>) = (Vec::new(), Vec::new());
        for &v in &self.scratch {
            if self.last_move.is_tabu(v, flips, tenure) {
                tabu.push(v);
            } else {
                non_tabu.push(v);
            }
        }
        if non_tabu.is_empty() {
            std::mem::swap(&mut non_tabu, &mut tabu);
        }

        let best_nt = non_tabu
            .iter()
            .map(|&v| (v, scoring::gsat_score(state, v)))
            .min_by_key(|&(_, s)| s)
            .expect("candidate set is nonempty");
        let best_t = tabu
            .iter()
            .map(|&v| (v, scoring::gsat_score(state, v)))
            .min_by_key(|&(_, s)| s);

        let chosen = match best_t {
            Some((t_var, t_score)) if t_score < best_nt.1 => {
                let current_cost = state.n_unsat() as i64;
                if current_cost + t_score < best_cost as i64 {
                    t_var
                } else {
                    best_nt.0
                }
            }
            _ => best_nt.0,
        };

        state.flip_var(chosen);
        self.last_move.record(chosen, state.flips());
        state.n_unsat()
    }

    /// Run tabu search under `tenure` until `escape_threshold`
    /// consecutive non-improving flips, or the formula is satisfied.
    fn ls_phase(&mut self, state: &mut FormulaState, best: &mut Best) {
        let mut no_improve = 0u64;
        while no_improve < self.escape_threshold && !state.is_sat() {
            let before = state.n_unsat();
            let after = self.tabu_flip(state, self.tenure_ls, best.cost);
            best.consider(state);
            if after < before {
                no_improve = 0;
            } else {
                no_improve += 1;
            }
        }
    }

    /// Run exactly `max_perturbations` tabu flips (or until SAT),
    /// ignoring the improvement-based stopping rule that governs the LS
    /// phase.
    fn perturb_phase(&mut self, state: &mut FormulaState, best: &mut Best) {
        let mut done = 0u64;
        while done < self.max_perturbations && !state.is_sat() {
            self.tabu_flip(state, self.tenure_perturb, best.cost);
            best.consider(state);
            done += 1;
        }
    }
}

impl VariableSelector for IRoTS {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {
        self.last_move.reset();
    }

    fn step(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best) {
        self.ls_phase(state, best);
        let x_star = state.model();
        let x_star_cost = state.n_unsat();
        self.last_move.reset();

        if state.is_sat() {
            return;
        }

        self.perturb_phase(state, best);
        let mut xp_star = state.model();
        let mut xp_star_cost = state.n_unsat();

        if !state.is_sat() {
            self.ls_phase(state, best);
            // the repair snapshot is authoritative even if it is worse
            // than the pre-repair perturbation result.
            xp_star = state.model();
            xp_star_cost = state.n_unsat();
        }

        let accept_prob = if xp_star_cost < x_star_cost {
            0.9
        } else if xp_star_cost == x_star_cost {
            0.5
        } else {
            0.1
        };
        if rng.chance(accept_prob) {
            state.restore_model(&xp_star);
        } else {
            state.restore_model(&x_star);
        }
        best.consider(state);
    }
}

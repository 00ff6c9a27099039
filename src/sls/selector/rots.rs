//! Robust Tabu Search (spec.md §4.3): time-tenure tabu over `L_unsat`
//! with an aspiration criterion, periodic forced diversification, and
//! periodic tenure resampling.

use super::super::literal::Var;
use super::super::rng::Rand;
use super::super::scoring;
use super::super::state::FormulaState;
use super::super::tabu::LastMove;
use super::{Best, VariableSelector};

pub struct RoTS {
    n_vars: usize,
    tenure: usize,
    min_tenure: usize,
    max_tenure: usize,
    check_freq: u64,
    last_move: LastMove,
    scratch: Vec<Var>,
    non_tabu: Vec<Var>,
    tabu: Vec<Var>,
}

impl RoTS {
    pub fn new(n_vars: usize) -> Self {
        let min_tenure = n_vars / 10;
        RoTS {
            n_vars,
            tenure: min_tenure + 4,
            min_tenure,
            max_tenure: 3 * min_tenure,
            check_freq: 10 * n_vars as u64,
            last_move: LastMove::new(n_vars),
            scratch: Vec::new(),
            non_tabu: Vec::new(),
            tabu: Vec::new(),
        }
    }

    fn best_of<'a>(
        state: &FormulaState,
        candidates: &'a [Var],
    ) -> Option<(Var, i64)> {
        candidates
            .iter()
            .map(|&v| (v, scoring::gsat_score(state, v)))
            .min_by_key(|&(_, s)| s)
    }
}

impl VariableSelector for RoTS {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {
        self.last_move.reset();
        self.tenure = self.min_tenure + 4;
    }

    fn step(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best) {
        super::unsat_vars(state, &mut self.scratch);

        self.non_tabu.clear();
        self.tabu.clear();
        for &v in &self.scratch {
            if self.last_move.is_tabu(v, state.flips(), self.tenure) {
                self.tabu.push(v);
            } else {
                self.non_tabu.push(v);
            }
        }
        if self.non_tabu.is_empty() {
            std::mem::swap(&mut self.non_tabu, &mut self.tabu);
        }

        let nt_best = Self::best_of(state, &self.non_tabu).expect("candidate set is nonempty");
        let chosen = match Self::best_of(state, &self.tabu) {
            Some((t_var, t_score)) if t_score < nt_best.1 => {
                let current_cost = state.n_unsat() as i64;
                if current_cost + t_score < best.cost as i64 {
                    t_var
                } else {
                    nt_best.0
                }
            }
            _ => nt_best.0,
        };

        state.flip_var(chosen);
        self.last_move.record(chosen, state.flips());
        best.consider(state);

        if self.check_freq > 0 && state.flips() % self.check_freq == 0 {
            let (oldest_v, age) = self.last_move.oldest(self.n_vars, state.flips());
            if age > self.check_freq as i64 {
                state.flip_var(oldest_v);
                self.last_move.record(oldest_v, state.flips());
                best.consider(state);
            }
        }

        if self.n_vars > 0 && state.flips() % self.n_vars as u64 == 0 {
            self.tenure = rng.range_incl(self.min_tenure, self.max_tenure.max(self.min_tenure));
        }
    }
}

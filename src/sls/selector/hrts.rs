//! Hamming Reactive Tabu Search (spec.md §4.3). Alternates a greedy
//! descent phase (strictly-improving GSAT moves, no tabu) with a
//! reactive-tabu burst of `2·(tenure+1)` flips, then reacts to how far
//! the burst moved the assignment (Hamming distance from where the burst
//! started) by nudging the tabu fraction `T_f` up or down.

use super::super::literal::Var;
use super::super::rng::Rand;
use super::super::scoring;
use super::super::state::FormulaState;
use super::super::tabu::CircularTabu;
use super::{Best, VariableSelector};

pub struct HRTS {
    n_vars: usize,
    t_f: f64,
    tenure: usize,
    tabu: CircularTabu,
    scratch: Vec<Var>,
    candidates: Vec<Var>,
}

impl HRTS {
    pub fn new(n_vars: usize) -> Self {
        let t_f = 0.025_f64;
        let tenure = ((t_f * n_vars as f64).floor() as usize).max(4);
        HRTS {
            n_vars,
            t_f,
            tenure,
            tabu: CircularTabu::new(tenure),
            scratch: Vec::new(),
            candidates: Vec::new(),
        }
    }

    fn greedy_descent(&mut self, state: &mut FormulaState, best: &mut Best) {
        loop {
            super::unsat_vars(state, &mut self.scratch);
            if self.scratch.is_empty() {
                return;
            }
            let (v, s) = self
                .scratch
                .iter()
                .map(|&v| (v, scoring::gsat_score(state, v)))
                .min_by_key(|&(_, s)| s)
                .expect("candidate set is nonempty");
            if s >= 0 {
                return;
            }
            state.flip_var(v);
            best.consider(state);
        }
    }

    fn tabu_burst(&mut self, state: &mut FormulaState, best: &mut Best) -> Vec<i64> {
        let x_i = state.model();
        let burst_len = 2 * (self.tenure + 1);
        self.tabu = CircularTabu::new(self.tenure);
        for _ in 0..burst_len {
            super::unsat_vars(state, &mut self.scratch);
            if self.scratch.is_empty() {
                break;
            }
            self.candidates.clear();
            self.candidates
                .extend(self.scratch.iter().copied().filter(|&v| !self.tabu.contains(v)));
            if self.candidates.is_empty() {
                self.candidates.extend(self.scratch.iter().copied());
            }
            let v = *self
                .candidates
                .iter()
                .min_by_key(|&&v| scoring::gsat_score(state, v))
                .expect("candidate set is nonempty");
            state.flip_var(v);
            self.tabu.push(v);
            best.consider(state);
        }
        x_i
    }
}

fn hamming(a: &[i64], b: &[i64]) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

impl VariableSelector for HRTS {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {
        self.t_f = 0.025;
        self.tenure = ((self.t_f * self.n_vars as f64).floor() as usize).max(4);
        self.tabu.clear();
    }

    fn step(&mut self, state: &mut FormulaState, _rng: &mut Rand, best: &mut Best) {
        self.greedy_descent(state, best);
        if state.is_sat() {
            return;
        }

        let x_i = self.tabu_burst(state, best);
        let x_f = state.model();
        let dist = hamming(&x_f, &x_i) as f64;
        let deriv = dist / (self.tenure as f64 + 1.0) - 1.0;

        if deriv <= 0.0 {
            self.t_f += 0.01;
        } else if deriv > 0.5 {
            self.t_f -= 0.01;
        }
        self.t_f = self.t_f.clamp(0.025, 0.25);
        self.tenure = ((self.t_f * self.n_vars as f64).floor() as usize).max(4);
    }
}

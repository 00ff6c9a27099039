//! Adaptive Memory-based Local Search (spec.md §3/§4.3). Combines a
//! time-tenure tabu list (resampled every flip) with the clause-memory
//! penalty function from [`super::super::memory`], and adapts its own
//! `p`/`wp` probabilities from a stagnation streak. Its `perturb` hook is
//! the one real implementation of spec.md §4.4's post-try perturbation
//! phase: a fixed run of forced moves under a looser tenure, independent
//! of whether the try found a model.

use super::super::literal::Var;
use super::super::memory::PenaltyMemory;
use super::super::rng::Rand;
use super::super::scoring;
use super::super::state::FormulaState;
use super::super::tabu::LastMove;
use super::{Best, VariableSelector};

const MAX_PERTURBATIONS: usize = 15;

pub struct Amls {
    n_vars: usize,
    p: f64,
    wp: f64,
    stagnation_streak: u64,
    defined_step: u64,
    tenure: usize,
    last_move: LastMove,
    memory: PenaltyMemory,
    scratch: Vec<Var>,
    non_tabu: Vec<Var>,
    tabu: Vec<Var>,
}

impl Amls {
    pub fn new(n_vars: usize, n_clauses: usize) -> Self {
        Amls {
            n_vars,
            p: 0.0,
            wp: 0.0,
            stagnation_streak: 0,
            defined_step: (n_clauses as u64 / 6).max(1),
            tenure: 1,
            last_move: LastMove::new(n_vars),
            memory: PenaltyMemory::new(n_clauses),
            scratch: Vec::new(),
            non_tabu: Vec::new(),
            tabu: Vec::new(),
        }
    }
}

impl VariableSelector for Amls {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {
        self.p = 0.0;
        self.wp = 0.0;
        self.stagnation_streak = 0;
        self.tenure = 1;
        self.last_move.reset();
        self.memory.reset();
    }

    fn step(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best) {
        super::unsat_vars(state, &mut self.scratch);
        let flips = state.flips();

        self.non_tabu.clear();
        self.tabu.clear();
        for &v in &self.scratch {
            if self.last_move.is_tabu(v, flips, self.tenure) {
                self.tabu.push(v);
            } else {
                self.non_tabu.push(v);
            }
        }
        if self.non_tabu.is_empty() {
            std::mem::swap(&mut self.non_tabu, &mut self.tabu);
        }

        let current_cost = state.n_unsat();

        let scored: Vec<(Var, i64)> = self
            .non_tabu
            .iter()
            .map(|&v| (v, scoring::gsat_score(state, v)))
            .collect();
        let &(x1, x1_score) = scored
            .iter()
            .min_by_key(|&&(_, s)| s)
            .expect("candidate set is nonempty");

        let best_tabu = self
            .tabu
            .iter()
            .map(|&v| (v, scoring::gsat_score(state, v)))
            .min_by_key(|&(_, s)| s);

        let aspirated = match best_tabu {
            Some((x_tb, tb_score)) if tb_score < x1_score => {
                (current_cost as i64 + tb_score < best.cost as i64).then_some(x_tb)
            }
            _ => None,
        };

        let chosen = if let Some(x_tb) = aspirated {
            x_tb
        } else if x1_score < 0 {
            x1
        } else if rng.chance(self.wp) {
            *rng.pick(&self.non_tabu)
        } else {
            let mut second: Option<(Var, i64)> = None;
            for &(v, s) in &scored {
                if v == x1 {
                    continue;
                }
                if second.map_or(true, |(_, bs)| s < bs) {
                    second = Some((v, s));
                }
            }
            let least_recently_moved = self
                .non_tabu
                .iter()
                .map(|&v| (v, flips as i64 - self.last_move.get(v)))
                .max_by_key(|&(_, age)| age)
                .map(|(v, _)| v);
            match (least_recently_moved == Some(x1), second) {
                (true, Some((x2, _)))
                    if self.memory.penalty(x2) < self.memory.penalty(x1) && rng.chance(self.p) =>
                {
                    x2
                }
                _ => x1,
            }
        };

        let events = state.flip_var(chosen);
        self.memory.record_flip(chosen, &events);
        self.last_move.record(chosen, state.flips());

        self.tenure = rng.range_incl(1, 10) + ((0.25 * self.scratch.len() as f64).floor() as usize);

        if state.n_unsat() >= current_cost {
            self.stagnation_streak += 1;
            if self.stagnation_streak >= self.defined_step {
                self.p += (1.0 - self.p) / 5.0;
                self.wp += (0.05 - self.wp) / 5.0;
                self.stagnation_streak = 0;
            }
        } else {
            self.p -= self.p / 10.0;
            self.wp -= self.wp / 10.0;
            self.stagnation_streak = 0;
        }
        self.p = self.p.clamp(0.0, 1.0);
        self.wp = self.wp.clamp(0.0, 1.0);

        best.consider(state);
    }

    fn perturb(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best) {
        self.tenure = (self.n_vars / 2).max(1);
        for _ in 0..MAX_PERTURBATIONS {
            if state.is_sat() {
                break;
            }
            super::unsat_vars(state, &mut self.scratch);
            let v = *rng.pick(&self.scratch);
            state.flip_var(v);
            self.last_move.record(v, state.flips());
            best.consider(state);
        }
    }
}

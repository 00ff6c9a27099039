//! Adaptive Novelty⁺ (spec.md §4.3): Novelty plus an adaptive
//! random-walk noise `wₙ` that grows during stagnation and decays on any
//! improvement.

use super::super::literal::Var;
use super::super::rng::Rand;
use super::super::scoring;
use super::super::settings::Settings;
use super::super::state::FormulaState;
use super::{Best, VariableSelector};

pub struct AdaptiveNoveltyPlus {
    p: f64,
    phi: f64,
    defined_step: f64,
    wn: f64,
    no_improvement_step: u64,
    stagnation: bool,
    most_recent: Option<Var>,
    scratch: Vec<Var>,
}

impl AdaptiveNoveltyPlus {
    pub fn new(settings: &Settings, n_clauses: usize) -> Self {
        AdaptiveNoveltyPlus {
            p: settings.noise.p,
            phi: settings.noise.phi,
            defined_step: settings.noise.theta * n_clauses as f64,
            wn: 0.0,
            no_improvement_step: 0,
            stagnation: false,
            most_recent: None,
            scratch: Vec::new(),
        }
    }
}

impl VariableSelector for AdaptiveNoveltyPlus {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {
        self.most_recent = None;
        self.wn = 0.0;
        self.no_improvement_step = 0;
        self.stagnation = false;
    }

    fn step(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best) {
        super::unsat_vars(state, &mut self.scratch);
        let (x1, x2) = super::first_and_second_min(&self.scratch, |v| scoring::gsat_score(state, v));

        if self.stagnation {
            self.no_improvement_step += 1;
            if self.no_improvement_step as f64 >= self.defined_step {
                self.wn += (1.0 - self.wn) * self.phi;
                self.no_improvement_step = 0;
            }
        } else {
            self.wn -= self.wn * 2.0 * self.phi;
            self.no_improvement_step = 0;
        }
        self.wn = self.wn.clamp(0.0, 1.0);

        let mut apply_novelty = true;
        let mut x = x1;
        if self.wn > 0.0 && rng.unit() < self.wn {
            x = *rng.pick(&self.scratch);
            apply_novelty = false;
        }

        if apply_novelty {
            x = if Some(x1) != self.most_recent {
                x1
            } else if rng.chance(self.p) {
                x2
            } else {
                x1
            };
        }

        let current_cost = state.n_unsat();
        state.flip_var(x);
        self.most_recent = Some(x);
        self.stagnation = state.n_unsat() >= current_cost;
        best.consider(state);
    }
}

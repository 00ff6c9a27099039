//! Novelty (spec.md §4.3): pick the best-scoring variable unless it was
//! the most recently flipped one, in which case fall back to the second
//! best with probability `p`.

use super::super::literal::Var;
use super::super::rng::Rand;
use super::super::scoring;
use super::super::settings::Settings;
use super::super::state::FormulaState;
use super::{Best, VariableSelector};

pub struct Novelty {
    p: f64,
    most_recent: Option<Var>,
    scratch: Vec<Var>,
}

impl Novelty {
    pub fn new(settings: &Settings) -> Self {
        Novelty {
            p: settings.noise.p,
            most_recent: None,
            scratch: Vec::new(),
        }
    }
}

impl VariableSelector for Novelty {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {
        self.most_recent = None;
    }

    fn step(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best) {
        super::unsat_vars(state, &mut self.scratch);
        let (x1, x2) = super::first_and_second_min(&self.scratch, |v| scoring::gsat_score(state, v));

        let x = if Some(x1) != self.most_recent {
            x1
        } else if rng.chance(self.p) {
            x2
        } else {
            x1
        };

        state.flip_var(x);
        self.most_recent = Some(x);
        best.consider(state);
    }
}

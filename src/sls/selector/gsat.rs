//! GSAT, with the optional random-walk variant (spec.md §4.3).

use super::super::literal::Var;
use super::super::rng::Rand;
use super::super::scoring;
use super::super::settings::Settings;
use super::super::state::FormulaState;
use super::{Best, VariableSelector};

pub struct Gsat {
    p: f64,
    random_walk: bool,
    scratch: Vec<Var>,
}

impl Gsat {
    pub fn new(settings: &Settings, random_walk: bool) -> Self {
        Gsat {
            p: settings.noise.p,
            random_walk,
            scratch: Vec::new(),
        }
    }
}

impl VariableSelector for Gsat {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {}

    fn step(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best) {
        super::unsat_vars(state, &mut self.scratch);
        let x = if self.random_walk && rng.chance(self.p) {
            *rng.pick(&self.scratch)
        } else {
            *self
                .scratch
                .iter()
                .min_by_key(|&&v| scoring::gsat_score(state, v))
                .expect("L_unsat is nonempty while the formula is unsatisfied")
        };
        state.flip_var(x);
        best.consider(state);
    }
}

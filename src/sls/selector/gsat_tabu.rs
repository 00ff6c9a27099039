//! GSAT-Tabu (spec.md §4.3): GSAT restricted to non-tabu variables of
//! `L_unsat`, falling back to the unrestricted set if every candidate is
//! tabu. The source computes this restriction via `set(lits) ^
//! set(tabu)`, a symmetric difference that conflates signed literals with
//! unsigned variable ids — spec.md §9 flags this as a bug; filtering here
//! is unambiguously by `Var`.

use super::super::literal::Var;
use super::super::rng::Rand;
use super::super::scoring;
use super::super::settings::Settings;
use super::super::state::FormulaState;
use super::super::tabu::{default_circular_tenure, CircularTabu};
use super::{Best, VariableSelector};

pub struct GsatTabu {
    tabu: CircularTabu,
    scratch: Vec<Var>,
    candidates: Vec<Var>,
}

impl GsatTabu {
    pub fn new(settings: &Settings, n_vars: usize) -> Self {
        let cap = settings
            .tabu
            .circular_tenure
            .unwrap_or_else(|| default_circular_tenure(n_vars));
        GsatTabu {
            tabu: CircularTabu::new(cap),
            scratch: Vec::new(),
            candidates: Vec::new(),
        }
    }
}

impl VariableSelector for GsatTabu {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {
        self.tabu.clear();
    }

    fn step(&mut self, state: &mut FormulaState, _rng: &mut Rand, best: &mut Best) {
        super::unsat_vars(state, &mut self.scratch);

        self.candidates.clear();
        self.candidates
            .extend(self.scratch.iter().copied().filter(|&v| !self.tabu.contains(v)));
        if self.candidates.is_empty() {
            self.candidates.extend(self.scratch.iter().copied());
        }

        let x = *self
            .candidates
            .iter()
            .min_by_key(|&&v| scoring::gsat_score(state, v))
            .expect("candidate set is nonempty");

        state.flip_var(x);
        self.tabu.push(x);
        best.consider(state);
    }
}

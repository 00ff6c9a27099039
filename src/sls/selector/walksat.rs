//! WalkSAT, SKC variant (spec.md §4.3): "never make a random move if
//! there exists a literal with zero break-count."

use super::super::rng::Rand;
use super::super::scoring;
use super::super::settings::Settings;
use super::super::state::FormulaState;
use super::{Best, VariableSelector};

pub struct WalkSat {
    p: f64,
}

impl WalkSat {
    pub fn new(settings: &Settings) -> Self {
        WalkSat { p: settings.noise.p }
    }
}

impl VariableSelector for WalkSat {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {}

    fn step(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best) {
        let clause_idx = state.unsat().sample(rng);
        let clause = state.formula().clause(clause_idx).to_vec();

        let breaks: Vec<u32> = clause
            .iter()
            .map(|&lit| scoring::break_count(state, lit.var()))
            .collect();

        let zero_break = breaks.iter().position(|&b| b == 0);
        let x = if let Some(i) = zero_break {
            clause[i].var()
        } else if rng.chance(self.p) {
            rng.pick(&clause).var()
        } else {
            let (i, _) = breaks
                .iter()
                .enumerate()
                .min_by_key(|&(_, &b)| b)
                .expect("clause is nonempty");
            clause[i].var()
        };

        state.flip_var(x);
        best.consider(state);
    }
}

//! WalkSAT-Tabu (spec.md §4.3). Samples UNSAT clauses without
//! replacement until one has a non-tabu literal, falling back to
//! ignoring tabu entirely if none do. The source filters a clause's
//! literals by checking `abs(literal) in tabu_list` while mutating the
//! same list it iterates — spec.md §9 calls this out; here the filter is
//! a plain `retain`/`filter` pass with no concurrent mutation, and tabu
//! membership is always tested against the variable, never the signed
//! literal.

use super::super::literal::Lit;
use super::super::rng::Rand;
use super::super::scoring;
use super::super::settings::Settings;
use super::super::state::FormulaState;
use super::super::tabu::{default_circular_tenure, CircularTabu};
use super::{Best, VariableSelector};

pub struct WalkSatTabu {
    p: f64,
    tabu: CircularTabu,
}

impl WalkSatTabu {
    pub fn new(settings: &Settings, n_vars: usize) -> Self {
        let cap = settings
            .tabu
            .circular_tenure
            .unwrap_or_else(|| default_circular_tenure(n_vars));
        WalkSatTabu {
            p: settings.noise.p,
            tabu: CircularTabu::new(cap),
        }
    }

    fn pick_clause(&self, state: &FormulaState, rng: &mut Rand) -> Vec<Lit> {
        let mut remaining: Vec<usize> = state.unsat().iter().collect();
        while !remaining.is_empty() {
            let i = rng.below(remaining.len());
            let clause_idx = remaining.swap_remove(i);
            let filtered: Vec<Lit> = state
                .formula()
                .clause(clause_idx)
                .iter()
                .copied()
                .filter(|lit| !self.tabu.contains(lit.var()))
                .collect();
            if !filtered.is_empty() {
                return filtered;
            }
        }
        // every candidate is tabu: ignore tabu entirely for this round.
        let clause_idx = state.unsat().sample(rng);
        state.formula().clause(clause_idx).to_vec()
    }
}

impl VariableSelector for WalkSatTabu {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {
        self.tabu.clear();
    }

    fn step(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best) {
        let candidates = self.pick_clause(state, rng);
        let breaks: Vec<u32> = candidates
            .iter()
            .map(|&lit| scoring::break_count(state, lit.var()))
            .collect();

        let x = if let Some(i) = breaks.iter().position(|&b| b == 0) {
            candidates[i].var()
        } else if rng.chance(self.p) {
            rng.pick(&candidates).var()
        } else {
            let (i, _) = breaks
                .iter()
                .enumerate()
                .min_by_key(|&(_, &b)| b)
                .expect("candidate set is nonempty");
            candidates[i].var()
        };

        state.flip_var(x);
        self.tabu.push(x);
        best.consider(state);
    }
}

//! R-Novelty (spec.md §4.3). Like Novelty, but when the best-scoring
//! variable is the most recently flipped one, the choice between it and
//! the runner-up is governed by a noise-probability table keyed on `p`
//! and `n = score(x2) - score(x1)` rather than a flat probability `p`.
//! When `x1` and `x2` are tied (`n == 0`) the table does not apply and
//! the plain Novelty rule is used instead.

use super::super::literal::Var;
use super::super::rng::Rand;
use super::super::scoring;
use super::super::settings::Settings;
use super::super::state::FormulaState;
use super::{Best, VariableSelector};

pub struct RNovelty {
    p: f64,
    most_recent: Option<Var>,
    scratch: Vec<Var>,
}

impl RNovelty {
    pub fn new(settings: &Settings) -> Self {
        RNovelty {
            p: settings.noise.p,
            most_recent: None,
            scratch: Vec::new(),
        }
    }
}

impl VariableSelector for RNovelty {
    fn on_restart(&mut self, _state: &FormulaState, _rng: &mut Rand) {
        self.most_recent = None;
    }

    fn step(&mut self, state: &mut FormulaState, rng: &mut Rand, best: &mut Best) {
        super::unsat_vars(state, &mut self.scratch);
        let score = |v: Var| scoring::gsat_score(state, v);
        let (x1, x2) = super::first_and_second_min(&self.scratch, &score);

        let x = if Some(x1) != self.most_recent {
            x1
        } else {
            let n = score(x2) - score(x1);
            if n == 0 {
                // no distinct runner-up: fall back to the plain Novelty rule.
                if rng.chance(self.p) {
                    x2
                } else {
                    x1
                }
            } else {
                let r = rng.unit();
                match (self.p < 0.5, n == 1) {
                    (true, true) => {
                        if r < 2.0 * self.p {
                            x2
                        } else {
                            x1
                        }
                    }
                    (true, false) => x1,
                    (false, true) => x2,
                    (false, false) => {
                        if r < 2.0 * (self.p - 0.5) {
                            x2
                        } else {
                            x1
                        }
                    }
                }
            }
        };

        state.flip_var(x);
        self.most_recent = Some(x);
        best.consider(state);
    }
}

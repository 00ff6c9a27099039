//! AMLS-only penalty memory (spec.md §3/§4.3): for each clause, which
//! variable most recently moved it UNSAT→SAT (`vs`) or SAT→UNSAT (`vf`),
//! and how many consecutive times that same variable did so (`ns`/`nf`).

use super::literal::Var;
use super::state::FlipEvents;

pub struct PenaltyMemory {
    vs: Vec<Option<Var>>,
    vf: Vec<Option<Var>>,
    ns: Vec<u32>,
    nf: Vec<u32>,
}

impl PenaltyMemory {
    pub fn new(n_clauses: usize) -> Self {
        PenaltyMemory {
            vs: vec![None; n_clauses],
            vf: vec![None; n_clauses],
            ns: vec![0; n_clauses],
            nf: vec![0; n_clauses],
        }
    }

    pub fn reset(&mut self) {
        for x in self.vs.iter_mut() {
            *x = None;
        }
        for x in self.vf.iter_mut() {
            *x = None;
        }
        for x in self.ns.iter_mut() {
            *x = 0;
        }
        for x in self.nf.iter_mut() {
            *x = 0;
        }
    }

    /// Consume the events produced by one `FormulaState::flip(..)` for
    /// variable `flipped`, updating `vs`/`vf`/`ns`/`nf` (spec.md §4.3).
    pub fn record_flip(&mut self, flipped: Var, events: &FlipEvents) {
        for &ci in &events.newly_sat {
            let ci = ci as usize;
            if self.vs[ci] == Some(flipped) {
                self.ns[ci] += 1;
            } else {
                self.vs[ci] = Some(flipped);
                self.ns[ci] = 1;
            }
        }
        for &ci in &events.newly_unsat {
            let ci = ci as usize;
            if self.vf[ci] == Some(flipped) {
                self.nf[ci] += 1;
            } else {
                self.vf[ci] = Some(flipped);
                self.nf[ci] = 1;
            }
        }
    }

    /// `penalty(v) = (Σ_{i∈RS} 2^ns[i])/(2|RS|) + (Σ_{i∈RF} 2^nf[i])/(2|RF|)`,
    /// each term zero when its index set is empty (spec.md §4.3).
    pub fn penalty(&self, v: Var) -> f64 {
        let rs: Vec<usize> = (0..self.vs.len())
            .filter(|&i| self.vs[i] == Some(v))
            .collect();
        let rf: Vec<usize> = (0..self.vf.len())
            .filter(|&i| self.vf[i] == Some(v))
            .collect();

        let term_s = if rs.is_empty() {
            0.0
        } else {
            let sum: f64 = rs.iter().map(|&i| 2f64.powi(self.ns[i] as i32)).sum();
            sum / (2.0 * rs.len() as f64)
        };
        let term_f = if rf.is_empty() {
            0.0
        } else {
            let sum: f64 = rf.iter().map(|&i| 2f64.powi(self.nf[i] as i32)).sum();
            sum / (2.0 * rf.len() as f64)
        };
        term_s + term_f
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn penalty_matches_s6() {
        // clause 0 goes UNSAT->SAT via var 5, then SAT->UNSAT via var 5.
        let mut mem = PenaltyMemory::new(1);
        let v5 = Var::new(4);
        mem.record_flip(
            v5,
            &FlipEvents {
                newly_unsat: vec![],
                newly_sat: vec![0],
            },
        );
        mem.record_flip(
            v5,
            &FlipEvents {
                newly_unsat: vec![0],
                newly_sat: vec![],
            },
        );
        assert_eq!(mem.ns[0], 1);
        assert_eq!(mem.nf[0], 1);
        assert!((mem.penalty(v5) - 2.0).abs() < 1e-9);
    }
}

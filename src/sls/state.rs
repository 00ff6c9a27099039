//! Incremental formula state: assignment, the literal→clause `pool`,
//! per-clause true-literal counts (`costs`) and the UNSAT set — `spec.md`
//! §3/§4.1. `pool` and the clause structure are built once and never
//! mutated; `flip` updates `costs`/UNSAT incrementally in time
//! proportional to the flipped variable's occurrence count, never in the
//! number of clauses `m` (the complexity requirement in §4.1).

use super::formula::Formula;
use super::index_map::IdxVec;
use super::literal::{Lit, Var};
use super::rng::Rand;
use super::unsat_set::UnsatSet;

/// The clauses that changed SAT/UNSAT status as a side effect of one
/// `flip`, reported so memory-bearing selectors (AMLS) can update their
/// per-clause bookkeeping without the core engine knowing about them.
pub struct FlipEvents {
    /// clauses that went from satisfied to falsified
    pub newly_unsat: Vec<u32>,
    /// clauses that went from falsified to satisfied
    pub newly_sat: Vec<u32>,
}

pub struct FormulaState<'f> {
    formula: &'f Formula,
    pool: IdxVec<Lit, Vec<u32>>,
    assignment: IdxVec<Var, Lit>,
    costs: Vec<u32>,
    unsat: UnsatSet,
    flips: u64,
    tries: u64,
}

impl<'f> FormulaState<'f> {
    pub fn load(formula: &'f Formula) -> Self {
        let n_vars = formula.n_vars();
        let mut pool = IdxVec::from_elem(Vec::new(), 2 * n_vars);
        for (ci, clause) in formula.clauses().iter().enumerate() {
            for &lit in clause {
                pool[lit].push(ci as u32);
            }
        }
        FormulaState {
            formula,
            pool,
            assignment: IdxVec::from_elem(Lit(0), n_vars),
            costs: vec![0; formula.n_clauses()],
            unsat: UnsatSet::with_capacity(formula.n_clauses()),
            flips: 0,
            tries: 0,
        }
    }

    #[inline]
    pub fn formula(&self) -> &'f Formula {
        self.formula
    }

    #[inline]
    pub fn n_vars(&self) -> usize {
        self.formula.n_vars()
    }

    #[inline]
    pub fn flips(&self) -> u64 {
        self.flips
    }

    #[inline]
    pub fn tries(&self) -> u64 {
        self.tries
    }

    #[inline]
    pub fn cur_lit(&self, v: Var) -> Lit {
        self.assignment[v]
    }

    #[inline]
    pub fn cost(&self, clause: usize) -> u32 {
        self.costs[clause]
    }

    #[inline]
    pub fn unsat(&self) -> &UnsatSet {
        &self.unsat
    }

    #[inline]
    pub fn n_unsat(&self) -> usize {
        self.unsat.len()
    }

    #[inline]
    pub fn is_sat(&self) -> bool {
        self.unsat.is_empty()
    }

    #[inline]
    pub fn pool(&self, lit: Lit) -> &[u32] {
        &self.pool[lit]
    }

    /// Independently randomize each variable's polarity, bump the try
    /// counter and reset the flip counter (spec.md §4.1).
    pub fn random_assignment(&mut self, rng: &mut Rand) {
        self.tries += 1;
        self.flips = 0;
        for v in self.formula.vars() {
            self.assignment[v] = v.lit(rng.chance(0.5));
        }
    }

    /// Rebuild `costs` and the UNSAT set from scratch for the current
    /// assignment (spec.md P1).
    pub fn recompute_costs(&mut self) {
        self.unsat.clear();
        for (ci, clause) in self.formula.clauses().iter().enumerate() {
            let satisfied = clause
                .iter()
                .filter(|&&lit| self.assignment[lit.var()] == lit)
                .count() as u32;
            self.costs[ci] = satisfied;
            if satisfied == 0 {
                self.unsat.insert(ci);
            }
        }
    }

    /// Convenience wrapper: flip by variable directly, since `flip`'s
    /// argument sign is never actually consulted.
    #[inline]
    pub fn flip_var(&mut self, v: Var) -> FlipEvents {
        self.flip(v.pos_lit())
    }

    /// Flip the variable named by `lit` (only `|lit|` matters — the sign
    /// of the argument is ignored, matching the source's `flip(ℓ)`
    /// semantics of "locate the variable, invert whatever its current
    /// polarity is").
    pub fn flip(&mut self, lit: Lit) -> FlipEvents {
        let var = lit.var();
        let old = self.assignment[var];
        let new = !old;

        let mut newly_unsat = Vec::new();
        let mut newly_sat = Vec::new();

        for &ci in &self.pool[old] {
            let ci = ci as usize;
            self.costs[ci] -= 1;
            if self.costs[ci] == 0 {
                self.unsat.insert(ci);
                newly_unsat.push(ci as u32);
            }
        }
        for &ci in &self.pool[new] {
            let ci = ci as usize;
            if self.costs[ci] == 0 {
                self.unsat.remove(ci);
                newly_sat.push(ci as u32);
            }
            self.costs[ci] += 1;
        }

        self.assignment[var] = new;
        self.flips += 1;

        FlipEvents {
            newly_unsat,
            newly_sat,
        }
    }

    /// break/make score of flipping `var` away from its current literal,
    /// per spec.md §4.2: break = #clauses satisfied solely by the current
    /// literal, make = #UNSAT clauses containing the flipped-to literal.
    pub fn break_count(&self, var: Var) -> u32 {
        let cur = self.assignment[var];
        self.pool[cur]
            .iter()
            .filter(|&&ci| self.costs[ci as usize] == 1)
            .count() as u32
    }

    pub fn make_count(&self, var: Var) -> u32 {
        let new = !self.assignment[var];
        self.pool[new]
            .iter()
            .filter(|&&ci| self.costs[ci as usize] == 0)
            .count() as u32
    }

    /// `bs·break − ms·make`. Lower is better. `(1,0)` is WalkSAT's
    /// break-count rule, `(1,1)` is GSAT's net-cost rule.
    pub fn score(&self, var: Var, bs: i64, ms: i64) -> i64 {
        bs * (self.break_count(var) as i64) - ms * (self.make_count(var) as i64)
    }

    /// The current total (signed) assignment, one entry per variable.
    pub fn model(&self) -> Vec<i64> {
        self.formula
            .vars()
            .map(|v| self.assignment[v].to_dimacs())
            .collect()
    }

    /// Overwrite the assignment wholesale from a previously captured
    /// `model()` snapshot and recompute costs/UNSAT from it (used by the
    /// multi-phase selectors — IRoTS's LS/perturbation snapshots — that
    /// restore an earlier assignment rather than flip toward it).
    pub fn restore_model(&mut self, model: &[i64]) {
        for &x in model {
            self.assignment[Lit::from_dimacs(x).var()] = Lit::from_dimacs(x);
        }
        self.recompute_costs();
    }

    /// L_unsat: the set of distinct variables occurring in some UNSAT
    /// clause, expressed as the literal each would need to take to
    /// satisfy the clause it was pulled from (i.e. the flipped-to value).
    pub fn unsat_vars(&self, scratch: &mut Vec<Var>) {
        scratch.clear();
        for ci in self.unsat.iter() {
            for &lit in self.formula.clause(ci) {
                let v = lit.var();
                if !scratch.contains(&v) {
                    scratch.push(v);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sls::literal::Lit;

    fn small_formula() -> Formula {
        // (x1 v x2) & (-x1 v x2) & (x1 v -x2) & (-x1 v -x2 v x3)
        let c = |lits: &[i64]| lits.iter().map(|&x| Lit::from_dimacs(x)).collect::<Vec<_>>();
        Formula::new(
            vec![
                c(&[1, 2]),
                c(&[-1, 2]),
                c(&[1, -2]),
                c(&[-1, -2, 3]),
            ],
            3,
        )
    }

    #[test]
    fn recompute_matches_p1() {
        let f = small_formula();
        let mut st = FormulaState::load(&f);
        st.assignment[Var::new(0)] = Var::new(0).pos_lit();
        st.assignment[Var::new(1)] = Var::new(1).pos_lit();
        st.assignment[Var::new(2)] = Var::new(2).pos_lit();
        st.tries = 1;
        st.recompute_costs();
        assert_eq!(st.cost(0), 2); // both x1, x2 true
        assert_eq!(st.cost(1), 1); // x2 true
        assert_eq!(st.cost(2), 1); // x1 true
        assert_eq!(st.cost(3), 1); // x3 true
        assert!(st.is_sat());
    }

    #[test]
    fn flip_is_involution() {
        let f = small_formula();
        let mut st = FormulaState::load(&f);
        for v in f.vars() {
            st.assignment[v] = v.pos_lit();
        }
        st.recompute_costs();
        let before_costs = st.costs.clone();
        let before_unsat: Vec<usize> = st.unsat.iter().collect();

        let lit = Var::new(0).pos_lit();
        st.flip(lit);
        st.flip(lit);

        assert_eq!(st.costs, before_costs);
        let after_unsat: Vec<usize> = st.unsat.iter().collect();
        assert_eq!(after_unsat, before_unsat);
        assert_eq!(st.assignment[Var::new(0)], Var::new(0).pos_lit());
        assert_eq!(st.flips, 2);
    }

    #[test]
    fn flip_matches_recompute() {
        let f = small_formula();
        let mut st = FormulaState::load(&f);
        for v in f.vars() {
            st.assignment[v] = v.neg_lit();
        }
        st.recompute_costs();

        st.flip(Var::new(0).neg_lit());
        st.flip(Var::new(2).neg_lit());

        let costs_via_flip = st.costs.clone();
        let unsat_via_flip: Vec<usize> = {
            let mut v: Vec<usize> = st.unsat.iter().collect();
            v.sort();
            v
        };

        st.recompute_costs();
        let unsat_via_recompute: Vec<usize> = {
            let mut v: Vec<usize> = st.unsat.iter().collect();
            v.sort();
            v
        };

        assert_eq!(st.costs, costs_via_flip);
        assert_eq!(unsat_via_flip, unsat_via_recompute);
    }
}

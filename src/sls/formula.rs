//! Immutable problem description: the ordered clause list and variable
//! count produced by the CNF loader. Never mutated after `Formula::new`.

use super::literal::{Lit, Var};

pub type Clause = Vec<Lit>;

pub struct Formula {
    clauses: Vec<Clause>,
    n_vars: usize,
}

impl Formula {
    pub fn new(clauses: Vec<Clause>, n_vars: usize) -> Formula {
        Formula { clauses, n_vars }
    }

    #[inline]
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    #[inline]
    pub fn n_clauses(&self) -> usize {
        self.clauses.len()
    }

    #[inline]
    pub fn clause(&self, idx: usize) -> &[Lit] {
        &self.clauses[idx]
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn vars(&self) -> impl Iterator<Item = Var> {
        (0..self.n_vars).map(Var::new)
    }
}

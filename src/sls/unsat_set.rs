//! The UNSAT set: the indices of currently-falsified clauses. `spec.md`
//! only requires O(1) insert/remove/contains/sample/len; the source this
//! was distilled from re-scans a Python list for membership and removal,
//! which the design notes call out explicitly as something an
//! implementation must not carry over. Backed by the classic sparse/dense
//! index-array pair so every operation is O(1), with `sample` doing
//! uniform selection over the dense side.

use rand::Rng;

pub struct UnsatSet {
    dense: Vec<u32>,
    sparse: Vec<u32>,
    present: Vec<bool>,
}

const NONE: u32 = u32::MAX;

impl UnsatSet {
    pub fn with_capacity(n_clauses: usize) -> Self {
        UnsatSet {
            dense: Vec::with_capacity(n_clauses),
            sparse: vec![NONE; n_clauses],
            present: vec![false; n_clauses],
        }
    }

    pub fn clear(&mut self) {
        self.dense.clear();
        for s in self.sparse.iter_mut() {
            *s = NONE;
        }
        for p in self.present.iter_mut() {
            *p = false;
        }
    }

    #[inline]
    pub fn contains(&self, clause: usize) -> bool {
        self.present[clause]
    }

    pub fn insert(&mut self, clause: usize) {
        if self.present[clause] {
            return;
        }
        self.sparse[clause] = self.dense.len() as u32;
        self.dense.push(clause as u32);
        self.present[clause] = true;
    }

    pub fn remove(&mut self, clause: usize) {
        if !self.present[clause] {
            return;
        }
        let pos = self.sparse[clause] as usize;
        let last = *self.dense.last().unwrap();
        self.dense[pos] = last;
        self.sparse[last as usize] = pos as u32;
        self.dense.pop();
        self.present[clause] = false;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.dense.iter().map(|&c| c as usize)
    }

    /// Uniformly sample one clause index from the set. Panics if empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let i = rng.gen_range(0..self.dense.len());
        self.dense[i] as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn insert_remove_contains() {
        let mut s = UnsatSet::with_capacity(5);
        assert!(s.is_empty());
        s.insert(2);
        s.insert(4);
        assert!(s.contains(2) && s.contains(4));
        assert_eq!(s.len(), 2);
        s.remove(2);
        assert!(!s.contains(2));
        assert_eq!(s.len(), 1);
        // duplicate insert/remove are no-ops
        s.insert(4);
        assert_eq!(s.len(), 1);
        s.remove(2);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn sample_only_returns_members() {
        let mut s = UnsatSet::with_capacity(10);
        for c in [1, 3, 7] {
            s.insert(c);
        }
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let c = s.sample(&mut rng);
            assert!(s.contains(c));
        }
    }
}

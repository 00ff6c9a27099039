//! Tabu / Memory Module (spec.md §3/§4.3): the bounded circular tabu list
//! used by GSAT-Tabu/WalkSAT-Tabu/H-RTS, and the per-variable last-flip
//! timestamps used by the time-tenure tabu variants (RoTS, IRoTS, AMLS).
//!
//! The source conflates signed literals with unsigned variables when
//! building its tabu set (`set(lits) ^ set(tabu)`), which spec.md §9 flags
//! as a bug. Both structures here are keyed by `Var`, never by `Lit`, so
//! that conflation cannot happen.

use std::collections::VecDeque;

use super::index_map::IdxVec;
use super::literal::Var;

/// Default tabu tenure for the circular-list variants, `⌊0.01875·n +
/// 2.8125⌋` (spec.md §4.3).
pub fn default_circular_tenure(n_vars: usize) -> usize {
    ((0.01875 * n_vars as f64) + 2.8125).floor() as usize
}

/// Bounded FIFO of recently-flipped variables. Always stores the
/// unsigned variable, never a signed literal (spec.md §9: the source
/// normalises inconsistently on overflow; here it's always normalised).
pub struct CircularTabu {
    cap: usize,
    ring: VecDeque<Var>,
}

impl CircularTabu {
    pub fn new(cap: usize) -> Self {
        CircularTabu {
            cap: cap.max(1),
            ring: VecDeque::with_capacity(cap.max(1)),
        }
    }

    pub fn clear(&mut self) {
        self.ring.clear();
    }

    pub fn contains(&self, v: Var) -> bool {
        self.ring.contains(&v)
    }

    pub fn push(&mut self, v: Var) {
        if self.ring.len() >= self.cap {
            self.ring.pop_front();
        }
        self.ring.push_back(v);
    }
}

/// Flip-count timestamp of each variable's most recent flip, or `-1` if
/// never flipped (spec.md §3).
pub struct LastMove {
    last: IdxVec<Var, i64>,
}

impl LastMove {
    pub fn new(n_vars: usize) -> Self {
        LastMove {
            last: IdxVec::from_elem(-1, n_vars),
        }
    }

    pub fn reset(&mut self) {
        self.last.fill(-1);
    }

    #[inline]
    pub fn record(&mut self, v: Var, flips: u64) {
        self.last[v] = flips as i64;
    }

    #[inline]
    pub fn get(&self, v: Var) -> i64 {
        self.last[v]
    }

    /// true if flipping `v` now (at flip count `flips`) would be a tabu
    /// move under tenure `tenure`.
    #[inline]
    pub fn is_tabu(&self, v: Var, flips: u64, tenure: usize) -> bool {
        (flips as i64) - self.last[v] < tenure as i64
    }

    /// The variable whose last move is oldest (ties broken by lowest
    /// index), and how long ago that was.
    pub fn oldest(&self, n_vars: usize, flips: u64) -> (Var, i64) {
        let mut best_v = Var::new(0);
        let mut best_age = i64::MIN;
        for i in 0..n_vars {
            let v = Var::new(i);
            let age = (flips as i64) - self.last[v];
            if age > best_age {
                best_age = age;
                best_v = v;
            }
        }
        (best_v, best_age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_tabu_evicts_oldest() {
        let mut t = CircularTabu::new(2);
        t.push(Var::new(0));
        t.push(Var::new(1));
        assert!(t.contains(Var::new(0)));
        t.push(Var::new(2));
        assert!(!t.contains(Var::new(0)));
        assert!(t.contains(Var::new(1)) && t.contains(Var::new(2)));
    }

    #[test]
    fn tabu_discipline_respects_tenure() {
        let mut lm = LastMove::new(10);
        for v in 0..10 {
            lm.record(Var::new(v), 0);
        }
        // at flips=3, tenure=5: a variable last moved at 0,1,2 is still tabu
        assert!(lm.is_tabu(Var::new(0), 3, 5));
        assert!(!lm.is_tabu(Var::new(0), 6, 5));
    }
}

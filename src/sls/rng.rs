//! Seeded RNG wrapper. The teacher's `sat::minisat::search::random::Random`
//! hand-rolls a linear-congruential generator seeded by an `f64`; this
//! crate instead draws on the `rand` ecosystem crate (as the reference
//! `solhop-rsat` SLS implementation does) while keeping the same small,
//! purpose-built surface the teacher exposes: `chance`, `below`, `pick`.
//! `StdRng::seed_from_u64` guarantees the same seed always produces the
//! same stream, which is what `spec.md` §5's determinism property (P10)
//! requires.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Rand(StdRng);

impl Rand {
    pub fn new(seed: u64) -> Rand {
        Rand(StdRng::seed_from_u64(seed))
    }

    /// true with probability `p`.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_range(0.0..1.0) < p
    }

    /// uniform float in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }

    /// uniform integer in `[0, n)`. Panics if `n == 0`.
    #[inline]
    pub fn below(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }

    /// uniform integer in `[lo, hi]` inclusive.
    #[inline]
    pub fn range_incl(&mut self, lo: usize, hi: usize) -> usize {
        if lo >= hi {
            lo
        } else {
            self.0.gen_range(lo..=hi)
        }
    }

    /// uniformly pick an element from a nonempty slice.
    pub fn pick<'a, T>(&mut self, xs: &'a [T]) -> &'a T {
        &xs[self.below(xs.len())]
    }

    pub fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.0
    }
}

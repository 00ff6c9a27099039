//! Scoring Oracle (spec.md §4.2): free functions over `FormulaState` so
//! selectors share one scoring rule instead of recomputing break/make by
//! hand. Kept as thin wrappers over `FormulaState`'s incremental counters
//! — the counts themselves are computed there because they need direct
//! access to `pool`/`costs`, but every selector goes through this module
//! to stay textually consistent with spec.md's component boundary.

use super::literal::Var;
use super::state::FormulaState;

pub const WALKSAT_WEIGHTS: (i64, i64) = (1, 0);
pub const GSAT_WEIGHTS: (i64, i64) = (1, 1);

#[inline]
pub fn break_count(state: &FormulaState, var: Var) -> u32 {
    state.break_count(var)
}

#[inline]
pub fn make_count(state: &FormulaState, var: Var) -> u32 {
    state.make_count(var)
}

#[inline]
pub fn score(state: &FormulaState, var: Var, bs: i64, ms: i64) -> i64 {
    state.score(var, bs, ms)
}

#[inline]
pub fn gsat_score(state: &FormulaState, var: Var) -> i64 {
    let (bs, ms) = GSAT_WEIGHTS;
    state.score(var, bs, ms)
}

#[inline]
pub fn walksat_score(state: &FormulaState, var: Var) -> i64 {
    let (bs, ms) = WALKSAT_WEIGHTS;
    state.score(var, bs, ms)
}

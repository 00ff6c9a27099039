#[macro_use]
extern crate log;

use std::path::Path;

pub mod sls;

use sls::{Formula, Result, RunResult, Settings, SlsError};

/// Load a DIMACS file and run one solver session to completion, per
/// spec.md §4.9. This is the single entry point the CLI layer and the
/// integration tests both go through.
pub fn solve_file<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<RunResult> {
    let formula = sls::dimacs::parse_file(path)?;
    Ok(run_formula(&formula, settings))
}

/// Run one solver session over an already-parsed formula.
pub fn run_formula(formula: &Formula, settings: &Settings) -> RunResult {
    info!(
        "solving: n_vars={} n_clauses={} heuristic={} seed={}",
        formula.n_vars(),
        formula.n_clauses(),
        settings.heuristic.name(),
        settings.seed
    );
    let result = sls::run(formula, settings);
    match &result {
        RunResult::Sat { stats, .. } => info!(
            "SAT after {} flips, {} tries, {:.4}s",
            stats.flips, stats.tries, stats.cpu_time
        ),
        RunResult::Unknown { stats } => info!(
            "UNKNOWN after {} flips, {} tries, {:.4}s",
            stats.flips, stats.tries, stats.cpu_time
        ),
    }
    result
}

/// Re-check a reported model against the source formula (spec.md P6):
/// every clause must contain at least one literal the model satisfies.
pub fn validate_model(formula: &Formula, model: &[i64]) -> Result<()> {
    for (ci, clause) in formula.clauses().iter().enumerate() {
        let satisfied = clause.iter().any(|&lit| {
            let v = lit.var().idx();
            model.get(v).map_or(false, |&x| x == lit.to_dimacs())
        });
        if !satisfied {
            return Err(SlsError::InvariantBreach(format!(
                "reported model does not satisfy clause {}",
                ci
            )));
        }
    }
    Ok(())
}

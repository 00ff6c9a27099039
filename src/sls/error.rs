//! Error taxonomy, per `spec.md` §7: input errors, internal invariant
//! breaches (fatal bugs), and the rest. Budget exhaustion is not an error
//! path at all — it surfaces as `RunResult::Unknown` (see `run.rs`).

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("internal invariant violated: {0}")]
    InvariantBreach(String),
}

pub type Result<T> = std::result::Result<T, SlsError>;

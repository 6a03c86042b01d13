use std::path::PathBuf;
use thiserror::Error;

use crate::sequence::Sequence;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("{function}: expected a non-negative input, got {n}")]
    NegativeInput { function: &'static str, n: i64 },

    #[error("{function}({n}) overflows a 64-bit integer")]
    Overflow { function: &'static str, n: i64 },

    #[error("{function}({n}) would recurse deeper than {limit} frames")]
    DepthExceeded { function: &'static str, n: i64, limit: i64 },

    #[error("{sequence}({n}) disagrees: recursive = {recursive}, iterative = {iterative}")]
    Disagreement { sequence: Sequence, n: i64, recursive: i64, iterative: i64 },

    #[error("Manifest error: {msg}")]
    Manifest { msg: String, path: PathBuf },
}

impl CalcError {
    pub fn negative_input(function: &'static str, n: i64) -> Self {
        Self::NegativeInput { function, n }
    }

    pub fn overflow(function: &'static str, n: i64) -> Self {
        Self::Overflow { function, n }
    }

    pub fn depth_exceeded(function: &'static str, n: i64, limit: i64) -> Self {
        Self::DepthExceeded { function, n, limit }
    }

    pub fn disagreement(sequence: Sequence, n: i64, recursive: i64, iterative: i64) -> Self {
        Self::Disagreement { sequence, n, recursive, iterative }
    }

    pub fn manifest(msg: impl Into<String>, path: PathBuf) -> Self {
        Self::Manifest { msg: msg.into(), path }
    }
}

//! Engine error type.
//!
//! The allocation engine itself never fails: bad operator text degrades to an
//! empty set or a zero step.  `CoreError` is only produced by the strict
//! parsers, which exist for callers that want to reject input up front.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid range token {token:?} in {input:?}")]
    InvalidRangeToken { token: String, input: String },

    #[error("invalid schedule clause {clause:?}: expected \"<drop>:<value>\" or \"<first>-<last>:<value>\"")]
    InvalidScheduleClause { clause: String },
}

/// Shorthand result type for all `sp-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("planner configuration error: {0}")]
    Config(String),

    #[error("unknown limit handling policy {0:?}: expected ignore, this_drop, next_drop, split_today, or dismissed")]
    UnknownPolicy(String),

    #[error("session index {index} out of range: category has {count} principal sessions")]
    UnknownSession { index: usize, count: usize },

    #[error("{what} length {got} does not match principal session count {expected}")]
    SessionCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LimitError {
    #[error("limit parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LimitResult<T> = Result<T, LimitError>;

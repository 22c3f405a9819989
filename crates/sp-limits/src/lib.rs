//! `sp-limits` — per-session limit records and their resolution.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`limit`]    | `LimitConfig`, `LimitField`                                |
//! | [`store`]    | `LimitStore`, `ResolvedLimit`, `LimitSource`, `EditOutcome` |
//! | [`loader`]   | `load_limits_csv`, `load_limits_reader`                    |
//! | [`error`]    | `LimitError`, `LimitResult<T>`                             |
//!
//! A limit record holds text range fields typed by operators.  The pool a
//! session draws from is derived from them:
//!
//! ```text
//! pool = limit_active_session − (quality ∪ paused_search ∪ toxic ∪ other)
//! ```

pub mod error;
pub mod limit;
pub mod loader;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{LimitError, LimitResult};
pub use limit::{LimitConfig, LimitField};
pub use loader::{load_limits_csv, load_limits_reader};
pub use store::{EditOutcome, LimitSource, LimitStore, ResolvedLimit};

//! `sp-core` — foundational types for the `seedplan` engine.
//!
//! This crate is a dependency of every other `sp-*` crate.  It intentionally
//! has no `sp-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `SessionIdx`, `DropIdx`, `CategoryId`                     |
//! | [`range`]       | `SeedRange`, `RangeSet`, `parse_ranges`, `merge`          |
//! | [`pool`]        | `complement`, `union_size`, `PoolSummary`                 |
//! | [`config`]      | `EngineConfig`                                            |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Range text
//!
//! Operators type ranges as comma-separated tokens:
//!
//! ```text
//! "1-500, 600-700, 812"   → [(1,500), (600,700), (812,812)]
//! "NO"                    → []
//! ```
//!
//! Unreadable tokens are dropped silently; [`RangeSet::parse_strict`] is
//! available for callers that want to reject them instead.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod pool;
pub mod range;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EngineConfig, parse_hm};
pub use error::{CoreError, CoreResult};
pub use ids::{CategoryId, DropIdx, SessionIdx};
pub use pool::{PoolSummary, complement, union_size};
pub use range::{RangeSet, SeedRange, merge, parse_ranges};

//! Limit handling policies: what happens when a drop outruns its range.
//!
//! | Policy        | At the alert drop                                          |
//! |---------------|------------------------------------------------------------|
//! | *(none)*      | spill-over: emit the room left, carry the rest forward     |
//! | `ignore`      | skip ahead to the next range that can hold the full step   |
//! | `this_drop`   | emit only the room left; nothing is carried                |
//! | `next_drop`   | spill-over now; the following drop is capped, no carry     |
//! | `split_today` | spread the room left over the drops before the alert       |
//! | `dismissed`   | spill-over, and the alert is no longer surfaced            |

use std::fmt;
use std::str::FromStr;

use crate::SimError;

/// A per-session choice of how to handle a limit alert.
///
/// The absence of a policy (`Option::<LimitPolicy>::None`) is the default
/// spill-over behaviour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LimitPolicy {
    Ignore,
    ThisDrop,
    NextDrop,
    SplitToday,
    Dismissed,
}

impl LimitPolicy {
    pub const ALL: [LimitPolicy; 5] = [
        LimitPolicy::Ignore,
        LimitPolicy::ThisDrop,
        LimitPolicy::NextDrop,
        LimitPolicy::SplitToday,
        LimitPolicy::Dismissed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LimitPolicy::Ignore     => "ignore",
            LimitPolicy::ThisDrop   => "this_drop",
            LimitPolicy::NextDrop   => "next_drop",
            LimitPolicy::SplitToday => "split_today",
            LimitPolicy::Dismissed  => "dismissed",
        }
    }

    /// Parse an optional policy: empty text and `none` mean spill-over.
    pub fn parse_opt(text: &str) -> Result<Option<LimitPolicy>, SimError> {
        match text.trim() {
            "" | "none" => Ok(None),
            other => other.parse().map(Some),
        }
    }

    /// `false` only for `dismissed`.
    pub fn surfaces_alert(self) -> bool {
        self != LimitPolicy::Dismissed
    }
}

impl fmt::Display for LimitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LimitPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LimitPolicy::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SimError::UnknownPolicy(s.to_owned()))
    }
}

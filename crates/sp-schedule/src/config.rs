//! Per-drop schedule configuration: a constant or a piecewise clause list.
//!
//! # Text form
//!
//! ```text
//! "40"              → Constant(40): every drop
//! "1-3:10,4:20"     → drops 1..=3 use 10, drop 4 uses 20, others 0
//! ```
//!
//! Drop numbers inside clauses are 1-based and inclusive; lookups take a
//! 0-based [`DropIdx`].  The same type carries both STEP and START values.
//! They differ in how a constant applies: a constant step applies to every
//! drop, while a constant start only overrides the first drop.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sp_core::{CoreError, CoreResult, DropIdx};

// ── DropSpan / ScheduleClause ─────────────────────────────────────────────────

/// Inclusive span of 1-based drop numbers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct DropSpan {
    pub first: u32,
    pub last:  u32,
}

impl DropSpan {
    pub fn new(a: u32, b: u32) -> Self {
        Self { first: a.min(b), last: a.max(b) }
    }

    /// `true` if `drop` (0-based) falls inside the span.
    #[inline]
    pub fn covers(&self, drop: DropIdx) -> bool {
        let n = drop.number() as u64;
        self.first as u64 <= n && n <= self.last as u64
    }
}

impl fmt::Display for DropSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

/// One `"<drops>:<value>"` clause.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ScheduleClause {
    pub drops: DropSpan,
    pub value: u64,
}

impl fmt::Display for ScheduleClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.drops, self.value)
    }
}

fn parse_clause(raw: &str) -> Option<ScheduleClause> {
    let (drops, value) = raw.trim().split_once(':')?;
    let value = value.trim().parse::<u64>().ok()?;
    let drops = drops.trim();
    let span = match drops.split_once('-') {
        Some((a, b)) => DropSpan::new(a.trim().parse().ok()?, b.trim().parse().ok()?),
        None => {
            let n = drops.parse().ok()?;
            DropSpan::new(n, n)
        }
    };
    Some(ScheduleClause { drops: span, value })
}

// ── ScheduleConfig ────────────────────────────────────────────────────────────

/// A STEP or START setting for one session on one day.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ScheduleConfig {
    /// One number for the whole day.
    Constant(u64),
    /// Clauses evaluated in order; the first match wins.
    Piecewise(Vec<ScheduleClause>),
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig::Constant(0)
    }
}

impl ScheduleConfig {
    /// Lenient parse.  A numeric string becomes a constant; otherwise each
    /// comma-separated clause is read and unreadable clauses are dropped.
    pub fn parse(text: &str) -> Self {
        let t = text.trim();
        if let Ok(n) = t.parse::<u64>() {
            return ScheduleConfig::Constant(n);
        }
        ScheduleConfig::Piecewise(t.split(',').filter_map(parse_clause).collect())
    }

    /// Strict parse: the first unreadable, non-blank clause is an error.
    pub fn parse_strict(text: &str) -> CoreResult<Self> {
        let t = text.trim();
        if let Ok(n) = t.parse::<u64>() {
            return Ok(ScheduleConfig::Constant(n));
        }
        let mut clauses = Vec::new();
        for raw in t.split(',').filter(|c| !c.trim().is_empty()) {
            match parse_clause(raw) {
                Some(c) => clauses.push(c),
                None => {
                    return Err(CoreError::InvalidScheduleClause { clause: raw.trim().to_owned() });
                }
            }
        }
        Ok(ScheduleConfig::Piecewise(clauses))
    }

    /// Nominal step for `drop`.  Constants apply to every drop; piecewise
    /// configs return the first matching clause's value, or 0.
    pub fn step_for(&self, drop: DropIdx) -> u64 {
        match self {
            ScheduleConfig::Constant(n) => *n,
            ScheduleConfig::Piecewise(_) => self.first_match(drop).unwrap_or(0),
        }
    }

    /// Start override for `drop`.  A constant only overrides the first drop;
    /// piecewise configs return the first matching clause's value.
    pub fn start_override_for(&self, drop: DropIdx) -> Option<u64> {
        match self {
            ScheduleConfig::Constant(n) => (drop.0 == 0).then_some(*n),
            ScheduleConfig::Piecewise(_) => self.first_match(drop),
        }
    }

    fn first_match(&self, drop: DropIdx) -> Option<u64> {
        match self {
            ScheduleConfig::Constant(_) => None,
            ScheduleConfig::Piecewise(clauses) => clauses
                .iter()
                .find(|c| c.drops.covers(drop))
                .map(|c| c.value),
        }
    }
}

impl fmt::Display for ScheduleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleConfig::Constant(n) => write!(f, "{n}"),
            ScheduleConfig::Piecewise(clauses) => {
                for (i, c) in clauses.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{c}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<u64> for ScheduleConfig {
    fn from(n: u64) -> Self {
        ScheduleConfig::Constant(n)
    }
}

// ── Serde: number or string on the wire ───────────────────────────────────────

impl Serialize for ScheduleConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScheduleConfig::Constant(n) => serializer.serialize_u64(*n),
            ScheduleConfig::Piecewise(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawConfig {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for ScheduleConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawConfig::deserialize(deserializer)? {
            RawConfig::Number(n) => ScheduleConfig::Constant(n),
            RawConfig::Text(s) => ScheduleConfig::parse(&s),
        })
    }
}

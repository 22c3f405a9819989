//! Inclusive integer ranges and the canonical `RangeSet`.
//!
//! # Text grammar
//!
//! ```text
//! set    := "NO" | token ("," token)*
//! token  := ""            → contributes nothing
//!         | "NO"          → contributes nothing (case-insensitive)
//!         | n "-" m       → [min(n,m), max(n,m)]
//!         | n             → [n, n]
//! ```
//!
//! Anything else is dropped by the lenient parser.  [`parse_ranges`] returns
//! tokens in input order without merging; [`RangeSet`] always holds the merged
//! form, where no two ranges overlap or touch:
//!
//! ```text
//! "10, 1-5, 6-8, 3"  → parse_ranges → [(10,10), (1,5), (6,8), (3,3)]
//!                    → RangeSet     → [(1,8), (10,10)]
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

// ── SeedRange ─────────────────────────────────────────────────────────────────

/// An inclusive `[start, end]` run of identifiers.  `start <= end` always.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedRange {
    pub start: u64,
    pub end:   u64,
}

impl SeedRange {
    /// Build a range from two bounds in either order.
    #[inline]
    pub fn new(a: u64, b: u64) -> Self {
        Self { start: a.min(b), end: a.max(b) }
    }

    /// A range holding exactly one identifier.
    #[inline]
    pub fn single(n: u64) -> Self {
        Self { start: n, end: n }
    }

    /// Number of identifiers in the range (never 0).
    ///
    /// Saturates at `u64::MAX` for the full-width range `0-u64::MAX`.
    #[inline]
    pub fn len(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    #[inline]
    pub fn contains(&self, n: u64) -> bool {
        self.start <= n && n <= self.end
    }
}

impl fmt::Display for SeedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Outcome of reading one comma-separated token.
enum Token {
    Empty,
    Range(SeedRange),
    Invalid,
}

fn read_token(raw: &str) -> Token {
    let p = raw.trim();
    if p.is_empty() || p.eq_ignore_ascii_case("NO") {
        return Token::Empty;
    }
    if p.contains('-') {
        let mut parts = p.split('-');
        let a = parts.next().and_then(|s| s.trim().parse::<u64>().ok());
        let b = parts.next().and_then(|s| s.trim().parse::<u64>().ok());
        match (a, b) {
            (Some(a), Some(b)) => Token::Range(SeedRange::new(a, b)),
            _ => Token::Invalid,
        }
    } else {
        match p.parse::<u64>() {
            Ok(n) => Token::Range(SeedRange::single(n)),
            Err(_) => Token::Invalid,
        }
    }
}

/// Parse range text into its tokens, in input order, without merging.
///
/// Unreadable tokens are dropped; a wholly unreadable string yields `[]`.
pub fn parse_ranges(text: &str) -> Vec<SeedRange> {
    text.split(',')
        .filter_map(|tok| match read_token(tok) {
            Token::Range(r) => Some(r),
            Token::Empty | Token::Invalid => None,
        })
        .collect()
}

/// Sort by start and fold overlapping *or touching* ranges together.
///
/// `[1,5]` and `[6,10]` become `[1,10]`: they describe one contiguous run.
pub fn merge(ranges: impl IntoIterator<Item = SeedRange>) -> Vec<SeedRange> {
    let mut all: Vec<SeedRange> = ranges.into_iter().collect();
    if all.len() < 2 {
        return all;
    }
    all.sort_unstable();

    let mut merged: Vec<SeedRange> = Vec::with_capacity(all.len());
    let mut current = all[0];
    for next in all.into_iter().skip(1) {
        if next.start <= current.end.saturating_add(1) {
            current.end = current.end.max(next.end);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);
    merged
}

// ── RangeSet ──────────────────────────────────────────────────────────────────

/// A canonical set of identifiers: sorted, disjoint, non-adjacent ranges.
///
/// The empty set is valid and renders as `""` (or `"NO"` via
/// [`format_or`][Self::format_or]).  `RangeSet` is a plain value: every
/// operation returns a new set rather than mutating in place.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeSet {
    ranges: Vec<SeedRange>,
}

impl RangeSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a canonical set from arbitrary (possibly overlapping) ranges.
    pub fn from_ranges(ranges: impl IntoIterator<Item = SeedRange>) -> Self {
        Self { ranges: merge(ranges) }
    }

    /// Lenient parse: unreadable tokens are dropped.
    pub fn parse(text: &str) -> Self {
        Self::from_ranges(parse_ranges(text))
    }

    /// Strict parse: the first unreadable token is reported as an error.
    pub fn parse_strict(text: &str) -> CoreResult<Self> {
        let mut ranges = Vec::new();
        for tok in text.split(',') {
            match read_token(tok) {
                Token::Range(r) => ranges.push(r),
                Token::Empty => {}
                Token::Invalid => {
                    return Err(CoreError::InvalidRangeToken {
                        token: tok.trim().to_owned(),
                        input: text.to_owned(),
                    });
                }
            }
        }
        Ok(Self::from_ranges(ranges))
    }

    /// Read-only slice of the merged ranges, ascending.
    pub fn ranges(&self) -> &[SeedRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of disjoint ranges (not identifiers; see [`size`][Self::size]).
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Total number of identifiers: Σ `(end - start + 1)`, saturating.
    pub fn size(&self) -> u64 {
        self.ranges.iter().fold(0u64, |acc, r| acc.saturating_add(r.len()))
    }

    /// Smallest identifier in the set.
    pub fn first(&self) -> Option<u64> {
        self.ranges.first().map(|r| r.start)
    }

    /// Largest identifier in the set.
    pub fn last(&self) -> Option<u64> {
        self.ranges.last().map(|r| r.end)
    }

    pub fn contains(&self, n: u64) -> bool {
        self.range_containing(n).is_some()
    }

    /// Index of the range that contains `n`, if any.
    pub fn range_containing(&self, n: u64) -> Option<usize> {
        // First range whose end >= n; it contains n iff its start <= n.
        let idx = self.ranges.partition_point(|r| r.end < n);
        self.ranges
            .get(idx)
            .filter(|r| r.start <= n)
            .map(|_| idx)
    }

    /// Index of the first range starting strictly after `n`, if any.
    pub fn next_range_after(&self, n: u64) -> Option<usize> {
        let idx = self.ranges.partition_point(|r| r.start <= n);
        (idx < self.ranges.len()).then_some(idx)
    }

    /// The `k`-th identifier (0-based) in ascending order.
    pub fn nth(&self, mut k: u64) -> Option<u64> {
        for r in &self.ranges {
            if k < r.len() {
                return Some(r.start + k);
            }
            k -= r.len();
        }
        None
    }

    /// Render the set, substituting `empty` when there is nothing to show.
    pub fn format_or(&self, empty: &str) -> String {
        if self.is_empty() {
            empty.to_owned()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

impl FromStr for RangeSet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeSet::parse_strict(s)
    }
}

impl FromIterator<SeedRange> for RangeSet {
    fn from_iter<I: IntoIterator<Item = SeedRange>>(iter: I) -> Self {
        RangeSet::from_ranges(iter)
    }
}

//! The cursor walker: sequential consumption over a cyclic pool.
//!
//! # Pool as a cycle
//!
//! A pool is a `RangeSet` read as one cyclic sequence of identifiers:
//!
//! ```text
//! pool = 1-4, 10-12
//! walk = 1 2 3 4 | 10 11 12 | 1 2 3 4 | 10 …
//! ```
//!
//! A single take never crosses a range boundary: callers ask how much
//! [`room`][PoolWalker::room] the current range has and decide what to do
//! when it is short.  That decision is the limit handling policy, which lives
//! in the simulator, not here.
//!
//! # Simulation pools
//!
//! When replaying a subset (for example paused intervals being planned back
//! in), the walker starts inside that *simulation* pool.  What happens after
//! its last range is the [`WrapMode`]:
//!
//! | Mode        | After the simulation pool's last range                      |
//! |-------------|-------------------------------------------------------------|
//! | `Duplicate` | wrap to the simulation pool's first range (ids reused)      |
//! | `Continue`  | resume in the normal pool after the simulation pool's end   |

use sp_core::{RangeSet, SeedRange};

/// What the walker does at the end of a simulation pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum WrapMode {
    #[default]
    Duplicate,
    Continue,
}

/// Which pool a cursor is walking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PoolSource {
    /// The session's regular pool.
    Normal,
    /// A temporary pool used for replay planning.
    Simulation,
}

/// A position inside one range of one pool.
///
/// Invariant: `pos` lies inside range `range` of the pool named by `source`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub source: PoolSource,
    pub range:  usize,
    pub pos:    u64,
}

impl Cursor {
    pub fn in_simulation(&self) -> bool {
        self.source == PoolSource::Simulation
    }
}

/// Walks a normal pool, optionally entered through a simulation pool.
#[derive(Copy, Clone, Debug)]
pub struct PoolWalker<'a> {
    normal:     &'a RangeSet,
    simulation: Option<&'a RangeSet>,
    mode:       WrapMode,
}

impl<'a> PoolWalker<'a> {
    /// Walk `pool` on its own.
    pub fn new(pool: &'a RangeSet) -> Self {
        Self { normal: pool, simulation: None, mode: WrapMode::Duplicate }
    }

    /// Walk `simulation` first; `mode` decides what follows its end.
    ///
    /// An empty simulation pool is ignored and the walk uses `normal` alone.
    pub fn with_simulation(normal: &'a RangeSet, simulation: &'a RangeSet, mode: WrapMode) -> Self {
        let simulation = (!simulation.is_empty()).then_some(simulation);
        Self { normal, simulation, mode }
    }

    /// Same pools, different wrap mode.
    pub fn with_mode(self, mode: WrapMode) -> Self {
        Self { mode, ..self }
    }

    /// The pool a fresh walk starts in.
    pub fn entry_source(&self) -> PoolSource {
        if self.simulation.is_some() {
            PoolSource::Simulation
        } else {
            PoolSource::Normal
        }
    }

    pub fn pool(&self, source: PoolSource) -> &'a RangeSet {
        match (source, self.simulation) {
            (PoolSource::Simulation, Some(sim)) => sim,
            _ => self.normal,
        }
    }

    /// `true` when there is nothing to walk at all.
    pub fn is_empty(&self) -> bool {
        self.pool(self.entry_source()).is_empty()
    }

    /// Total ranges across both pools; bounds any scan for a roomy range.
    pub fn range_count(&self) -> usize {
        self.normal.len() + self.simulation.map_or(0, RangeSet::len)
    }

    // ── Positioning ───────────────────────────────────────────────────────

    /// Open a cursor in the entry pool at `at`, or at its first id.
    ///
    /// Returns `None` only when the entry pool is empty.
    pub fn start(&self, at: Option<u64>) -> Option<Cursor> {
        let source = self.entry_source();
        match at {
            Some(pos) => self.locate(source, pos),
            None => {
                let first = self.pool(source).ranges().first()?;
                Some(Cursor { source, range: 0, pos: first.start })
            }
        }
    }

    /// Cursor for `pos` inside `source`.
    ///
    /// A position outside every range resolves to the start of the next
    /// range above it, wrapping to the first range.
    pub fn locate(&self, source: PoolSource, pos: u64) -> Option<Cursor> {
        let pool = self.pool(source);
        if pool.is_empty() {
            return None;
        }
        if let Some(range) = pool.range_containing(pos) {
            return Some(Cursor { source, range, pos });
        }
        let range = pool.next_range_after(pos).unwrap_or(0);
        let resolved = pool.ranges()[range].start;
        log::debug!("position {pos} is outside the pool; resuming at {resolved}");
        Some(Cursor { source, range, pos: resolved })
    }

    /// Move `cursor` to `pos` within the pool it is currently walking.
    pub fn relocate(&self, cursor: &Cursor, pos: u64) -> Cursor {
        self.locate(cursor.source, pos).unwrap_or(*cursor)
    }

    // ── Consumption ───────────────────────────────────────────────────────

    /// The range the cursor is in.
    pub fn range(&self, cursor: &Cursor) -> SeedRange {
        self.pool(cursor.source).ranges()[cursor.range]
    }

    /// Identifiers left in the current range, cursor included.
    pub fn room(&self, cursor: &Cursor) -> u64 {
        (self.range(cursor).end - cursor.pos).saturating_add(1)
    }

    /// Consume `n` ids from the cursor and return the interval plus the next
    /// cursor.  Callers guarantee `1 <= n <= room(cursor)`.
    pub fn take(&self, cursor: &Cursor, n: u64) -> (SeedRange, Cursor) {
        debug_assert!(n >= 1 && n <= self.room(cursor), "take({n}) exceeds room");
        let end = cursor.pos + (n - 1);
        let interval = SeedRange { start: cursor.pos, end };
        let next = if end >= self.range(cursor).end {
            self.next_range(cursor)
        } else {
            Cursor { pos: end + 1, ..*cursor }
        };
        (interval, next)
    }

    /// Consume everything left in the current range.
    pub fn take_rest(&self, cursor: &Cursor) -> (SeedRange, Cursor) {
        self.take(cursor, self.room(cursor))
    }

    /// Start of the range after the cursor's, wrapping per the rules above.
    pub fn next_range(&self, cursor: &Cursor) -> Cursor {
        let pool = self.pool(cursor.source);
        let next = cursor.range + 1;
        if next < pool.len() {
            return Cursor { source: cursor.source, range: next, pos: pool.ranges()[next].start };
        }

        if cursor.source == PoolSource::Simulation && self.mode == WrapMode::Continue {
            let after = pool.last().map_or(0, |l| l.saturating_add(1));
            if let Some(c) = self.locate(PoolSource::Normal, after) {
                return c;
            }
        }
        Cursor { source: cursor.source, range: 0, pos: pool.ranges()[0].start }
    }
}

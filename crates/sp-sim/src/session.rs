//! One session's inputs for one day.

use sp_core::{DropIdx, RangeSet};
use sp_schedule::ScheduleConfig;

use crate::walker::{Cursor, PoolWalker, WrapMode};

/// A simulation pool the day starts in, and what follows its end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    pub pool: RangeSet,
    pub mode: WrapMode,
}

impl Replay {
    pub fn new(pool: RangeSet, mode: WrapMode) -> Self {
        Self { pool, mode }
    }
}

/// Everything needed to walk one session through one day.
///
/// `start` is the saved START override (if any); `default_start` is the
/// position continuity derived from the previous day.  An override for
/// drop 1 wins over `default_start`; without either the walk starts at the
/// pool's first identifier.
///
/// `carry_in` is the spill-over left by the previous day's last drop; it is
/// added to the request of drop 1.
#[derive(Copy, Clone, Debug)]
pub struct SessionDay<'a> {
    pub pool:          &'a RangeSet,
    pub replay:        Option<&'a Replay>,
    pub step:          &'a ScheduleConfig,
    pub start:         Option<&'a ScheduleConfig>,
    pub default_start: Option<u64>,
    pub carry_in:      u64,
    pub num_drops:     usize,
}

impl<'a> SessionDay<'a> {
    pub fn new(pool: &'a RangeSet, step: &'a ScheduleConfig, num_drops: usize) -> Self {
        Self { pool, replay: None, step, start: None, default_start: None, carry_in: 0, num_drops }
    }

    pub fn with_start(self, start: Option<&'a ScheduleConfig>) -> Self {
        Self { start, ..self }
    }

    pub fn with_default_start(self, default_start: Option<u64>) -> Self {
        Self { default_start, ..self }
    }

    pub fn with_carry_in(self, carry_in: u64) -> Self {
        Self { carry_in, ..self }
    }

    pub fn with_replay(self, replay: Option<&'a Replay>) -> Self {
        Self { replay, ..self }
    }

    pub fn walker(&self) -> PoolWalker<'a> {
        match self.replay {
            Some(r) => PoolWalker::with_simulation(self.pool, &r.pool, r.mode),
            None => PoolWalker::new(self.pool),
        }
    }

    pub(crate) fn drops(&self) -> impl Iterator<Item = DropIdx> {
        (0..self.num_drops).filter_map(|d| DropIdx::try_from(d).ok())
    }

    /// Cursor for the first drop, or `None` when there is nothing to walk.
    pub(crate) fn open(&self, walker: &PoolWalker<'_>) -> Option<Cursor> {
        let at = self
            .start
            .and_then(|s| s.start_override_for(DropIdx(0)))
            .or(self.default_start);
        walker.start(at)
    }

    /// Apply a START override for `drop` (drop 1 is handled by [`open`]).
    pub(crate) fn reposition(&self, walker: &PoolWalker<'_>, cursor: Cursor, drop: DropIdx) -> Cursor {
        if drop.0 == 0 {
            return cursor;
        }
        match self.start.and_then(|s| s.start_override_for(drop)) {
            Some(pos) => walker.relocate(&cursor, pos),
            None => cursor,
        }
    }
}

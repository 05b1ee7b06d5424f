//! Non-overlapping index of scheduled intervals, keyed by start time.
//!
//! Intervals live in a `BTreeMap` ordered by start, plus a reverse `HashMap`
//! from id to start key, so a new interval's overlap check only needs to
//! look at its immediate predecessor and successor rather than scan every
//! placed interval. `Minutes` (`i64`) is `Ord` on its own, so no NaN-guard
//! wrapper is needed for the map key.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::interval::TimeInterval;
use crate::time::Minutes;
use crate::Id;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("id {0} already present in schedule")]
    DuplicateId(Id),
    #[error("interval for {new_id} overlaps existing entry {existing_id}")]
    OverlapsExisting { new_id: Id, existing_id: Id },
}

struct Entry {
    id: Id,
    interval: TimeInterval,
}

/// Non-overlapping, start-time-sorted collection of scheduled intervals.
#[derive(Default)]
pub struct Schedule {
    by_start: BTreeMap<Minutes, Entry>,
    start_by_id: HashMap<Id, Minutes>,
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            by_start: BTreeMap::new(),
            start_by_id: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.start_by_id.contains_key(id)
    }

    /// Inserts `interval` under `id`. Only the immediate predecessor and
    /// successor by start time can possibly overlap a non-overlapping
    /// schedule, so this is the only pair checked.
    pub fn add(&mut self, id: impl Into<Id>, interval: TimeInterval) -> Result<(), ScheduleError> {
        let id: Id = id.into();
        if self.contains(&id) {
            return Err(ScheduleError::DuplicateId(id));
        }

        if let Some((_, prev)) = self.by_start.range(..=interval.start()).next_back() {
            if prev.interval.overlaps(&interval) {
                return Err(ScheduleError::OverlapsExisting {
                    new_id: id,
                    existing_id: prev.id.clone(),
                });
            }
        }
        if let Some((_, next)) = self.by_start.range(interval.start()..).next() {
            if next.interval.overlaps(&interval) {
                return Err(ScheduleError::OverlapsExisting {
                    new_id: id,
                    existing_id: next.id.clone(),
                });
            }
        }

        self.by_start.insert(
            interval.start(),
            Entry {
                id: id.clone(),
                interval,
            },
        );
        self.start_by_id.insert(id, interval.start());
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<TimeInterval> {
        let start = self.start_by_id.remove(id)?;
        self.by_start.remove(&start).map(|e| e.interval)
    }

    /// True if `query` overlaps any scheduled interval.
    pub fn has_conflict(&self, query: &TimeInterval) -> bool {
        if let Some((_, prev)) = self.by_start.range(..=query.start()).next_back() {
            if prev.interval.overlaps(query) {
                return true;
            }
        }
        self.by_start
            .range(query.start()..)
            .take_while(|(start, _)| *start < query.end())
            .any(|(_, e)| e.interval.overlaps(query))
    }

    pub fn is_free(&self, query: &TimeInterval) -> bool {
        !self.has_conflict(query)
    }

    /// Scheduled entries in start-time order.
    pub fn iter(&self) -> impl Iterator<Item = (&Id, &TimeInterval)> {
        self.by_start.values().map(|e| (&e.id, &e.interval))
    }
}

//! Capacity x prefix table with index-based backpointers.
//!
//! Values and session counts only ever read the previous row, so two rolling
//! rows suffice. A full matrix of "taken" bits records, for each candidate
//! and capacity, whether that cell extended `(row - 1, t - duration)` or
//! carried `(row - 1, t)`. Walking those bits once from `(n, capacity)`
//! recovers the selection without copying lists per cell.

use super::candidate::SessionCandidate;
use super::core::{Pick, SchedulerError};
use crate::log_debug;

/// Best value at one capacity and the size of the sub-solution achieving it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Cell {
    value: f64,
    sessions: u32,
}

pub struct DpTable {
    capacity: usize,
    width: usize,
    rows_filled: usize,
    prev: Vec<Cell>,
    cur: Vec<Cell>,
    /// Row-major, one row per candidate.
    taken: Vec<bool>,
}

impl DpTable {
    /// Allocate a table for `candidates` rows and capacities `0..=capacity`.
    pub fn new(candidates: usize, capacity: usize) -> Result<Self, SchedulerError> {
        let too_large = || {
            SchedulerError::InvalidArgument(format!(
                "table for {} candidates and {} minutes does not fit in memory",
                candidates, capacity
            ))
        };

        let width = capacity.checked_add(1).ok_or_else(too_large)?;
        let cells = candidates.checked_mul(width).ok_or_else(too_large)?;

        let mut taken = Vec::new();
        taken.try_reserve_exact(cells).map_err(|_| too_large())?;
        taken.resize(cells, false);

        let mut prev = Vec::new();
        prev.try_reserve_exact(width).map_err(|_| too_large())?;
        prev.resize(width, Cell::default());

        Ok(Self {
            capacity,
            width,
            rows_filled: 0,
            cur: prev.clone(),
            prev,
            taken,
        })
    }

    /// Fill the next row with `candidate`.
    ///
    /// Taking requires a strictly larger total than skipping, so ties keep
    /// the sub-solution built from earlier candidates. Returns how many
    /// capacities took the candidate.
    pub fn fill_row(
        &mut self,
        candidate: &SessionCandidate,
        fatigue_penalty: f64,
        verbosity: u8,
    ) -> usize {
        let row_start = self.rows_filled * self.width;
        let mut taken_count = 0;

        for t in 0..=self.capacity {
            let skip = self.prev[t];
            let Some(column) = candidate.lookup_column(t, self.capacity) else {
                self.cur[t] = skip;
                continue;
            };

            let base = self.prev[column];
            let adjusted = candidate.adjusted_value(base.sessions, fatigue_penalty);
            let take = adjusted + base.value;

            if take > skip.value {
                log_debug!(
                    verbosity,
                    "    t={}: take #{} (fatigue {}, adjusted {:.3}) -> {:.3} over {:.3}",
                    t,
                    candidate.index,
                    base.sessions,
                    adjusted,
                    take,
                    skip.value
                );
                self.cur[t] = Cell {
                    value: take,
                    sessions: base.sessions + 1,
                };
                self.taken[row_start + t] = true;
                taken_count += 1;
            } else {
                self.cur[t] = skip;
            }
        }

        std::mem::swap(&mut self.prev, &mut self.cur);
        self.rows_filled += 1;
        taken_count
    }

    /// Best value at full capacity over the rows filled so far.
    pub fn best_value(&self) -> f64 {
        self.prev[self.capacity].value
    }

    /// Sessions in the best sub-solution at `t` over the rows filled so far.
    pub fn session_count(&self, t: usize) -> u32 {
        self.prev.get(t).map_or(0, |cell| cell.sessions)
    }

    /// Walk backpointers from `(rows_filled, capacity)` and return the picks
    /// in input order.
    ///
    /// `candidates` must be the slice the rows were filled from.
    pub fn backtrack(&self, candidates: &[SessionCandidate], fatigue_penalty: f64) -> Vec<Pick> {
        let mut reversed: Vec<&SessionCandidate> =
            Vec::with_capacity(self.session_count(self.capacity) as usize);
        let mut t = self.capacity;

        for (row, candidate) in candidates.iter().enumerate().take(self.rows_filled).rev() {
            if !self.taken[row * self.width + t] {
                continue;
            }
            // a taken cell always had a lookup column
            let Some(column) = candidate.lookup_column(t, self.capacity) else {
                break;
            };
            reversed.push(candidate);
            t = column;
        }

        // Earlier picks form the sub-solution each later pick extended, so
        // a pick's position in input order is its fatigue level.
        reversed
            .into_iter()
            .rev()
            .enumerate()
            .map(|(position, candidate)| {
                let fatigue_level = position as u32;
                Pick {
                    index: candidate.index,
                    duration_minutes: candidate.duration_minutes,
                    fatigue_level,
                    adjusted_value: candidate.adjusted_value(fatigue_level, fatigue_penalty),
                }
            })
            .collect()
    }
}

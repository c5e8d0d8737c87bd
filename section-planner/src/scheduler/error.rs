/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the schedule search.
//!
//! Both variants carry the full [`ConflictReport`] so the caller can show the
//! diagnostic verbatim or inspect individual [`Conflict`]s.  A search that ran
//! and failed also carries the [`SearchStats`] it collected.
//!
//! Exhausting the search space is an ordinary outcome of the search, not a
//! transient fault: retrying the same call can only ever produce a different
//! *successful* schedule, never turn a failure into a success.
//!
//! [`Conflict`]: super::conflict::Conflict

use thiserror::Error;

use super::conflict::ConflictReport;
use super::SearchStats;

/// Error type returned by
/// [`ScheduleSearch::search()`](super::ScheduleSearch::search).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Every candidate for some course was rejected or led to a dead end.
    ///
    /// The report lists conflicts found directly at each level followed by
    /// the ones merged up from deeper failed branches.
    #[error("no conflict-free schedule is possible:\n{report}")]
    NoSchedulesPossible {
        report: ConflictReport,
        stats: SearchStats,
    },

    /// The already-chosen sections passed in to resume a search conflict
    /// with each other or with a block-out, or include a section that is
    /// not OPEN.  Nothing is searched in that case.
    #[error("already-chosen sections are not conflict-free:\n{report}")]
    InvalidPrefix { report: ConflictReport },
}

impl ScheduleError {
    /// The conflict diagnostics carried by either variant.
    pub fn report(&self) -> &ConflictReport {
        match self {
            ScheduleError::NoSchedulesPossible { report, .. }
            | ScheduleError::InvalidPrefix { report } => report,
        }
    }

    /// Counters of the failed search; `None` when the prefix was rejected
    /// before searching.
    pub fn stats(&self) -> Option<&SearchStats> {
        match self {
            ScheduleError::NoSchedulesPossible { stats, .. } => Some(stats),
            ScheduleError::InvalidPrefix { .. } => None,
        }
    }

    pub fn into_report(self) -> ConflictReport {
        match self {
            ScheduleError::NoSchedulesPossible { report, .. }
            | ScheduleError::InvalidPrefix { report } => report,
        }
    }
}

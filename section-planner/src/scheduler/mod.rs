/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Randomised backtracking search for a conflict-free set of sections.
//!
//! [`ScheduleSearch`] picks one [`Section`] per [`Course`] such that no two
//! picks overlap in time and no pick overlaps a block-out.  Candidate order
//! is shuffled at every level, so repeated searches over the same input can
//! return different valid schedules.
//!
//! # Completeness
//! Every candidate at every level is tried before a level gives up, and a
//! failing sub-search hands control back to its parent, which continues with
//! its next candidate.  A single call therefore finds a schedule whenever one
//! exists among OPEN sections; only *which* schedule it finds is random.
//!
//! # Design
//!
//! | Topic | Approach |
//! |---|---|
//! | Backtracking signal | `Result<Vec<Arc<Section>>, ConflictReport>` returned by each level |
//! | Diagnostics | [`ConflictReport`] threaded through return values and merged by the caller |
//! | Chosen list | Copy-on-extend snapshot per level, nothing to undo on failure |
//! | Caller's prefix | Borrowed, never mutated; must be OPEN and conflict-free |
//! | Blocked courses | Screened against prefix and block-outs up front, reported even if the search never reaches them |
//! | Randomness | Owned `Rng`; seedable for reproducible runs |
//! | Thread safety | Catalog shared as `Arc<Section>`; each search owns its own state |
//!
//! # Example
//! ```rust,ignore
//! let mut engine = ScheduleSearch::new();
//! let picked = engine.search(&courses, &[], &blockouts)?;
//! ```

pub mod conflict;
pub mod error;
pub mod space;

pub use conflict::{Conflict, ConflictReport};
pub use error::ScheduleError;

use std::sync::Arc;

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::course::Course;
use crate::section::Section;

use conflict::{absorb, record};
use space::{exceeds_limit, LARGE_SEARCH_SPACE};

// ── SearchStats ───────────────────────────────────────────────────────────────

/// Counters collected over one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// OPEN candidates tested against the chosen list and block-outs.
    pub candidates_tried: u64,
    /// Candidates skipped because their status is not OPEN.
    pub closed_skipped: u64,
    /// Conflicts recorded directly (excluding merged duplicates).
    pub conflicts: u64,
    /// Tentative picks abandoned because the deeper search failed.
    pub backtracks: u64,
}

// ── ScheduleSearch ────────────────────────────────────────────────────────────

/// The schedule search engine.
///
/// Holds only its random source; all per-run state lives inside
/// [`search`](Self::search) and is dropped at the end of the call.
pub struct ScheduleSearch<R = ThreadRng> {
    rng: R,
}

impl ScheduleSearch<ThreadRng> {
    /// Engine backed by the thread-local generator.  Runs are not
    /// reproducible.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ScheduleSearch<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleSearch<StdRng> {
    /// Engine with a seeded generator: the same seed and input always yield
    /// the same result.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> ScheduleSearch<R> {
    /// Engine driven by a caller-supplied generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    // ── Public entry points ───────────────────────────────────────────────────

    /// Choose one section per course.
    ///
    /// * `courses`: requirements to satisfy, in order.
    /// * `chosen`: sections already fixed (empty for a fresh search).  Must
    ///   be OPEN, pairwise conflict-free and clear of every block-out.
    /// * `blockouts`: fixed intervals no pick may overlap.
    ///
    /// On success the result is `chosen` followed by one section per course,
    /// in course order.  `chosen` itself is left untouched either way.
    ///
    /// # Errors
    /// * [`ScheduleError::InvalidPrefix`] if `chosen` violates its
    ///   precondition.
    /// * [`ScheduleError::NoSchedulesPossible`] once every branch is
    ///   exhausted, carrying every conflict discovered along the way.
    pub fn search(
        &mut self,
        courses: &[Course],
        chosen: &[Arc<Section>],
        blockouts: &[Arc<Section>],
    ) -> Result<Vec<Arc<Section>>, ScheduleError> {
        self.search_with_stats(courses, chosen, blockouts)
            .map(|(selection, _)| selection)
    }

    /// Same as [`search`](Self::search), also returning the run's
    /// [`SearchStats`] on success.  A failed search carries them in
    /// [`ScheduleError::NoSchedulesPossible`].
    pub fn search_with_stats(
        &mut self,
        courses: &[Course],
        chosen: &[Arc<Section>],
        blockouts: &[Arc<Section>],
    ) -> Result<(Vec<Arc<Section>>, SearchStats), ScheduleError> {
        // ── Preconditions ─────────────────────────────────────────────────────
        if let Some(report) = validate_prefix(chosen, blockouts) {
            warn!(
                conflicts = report.len(),
                "already-chosen sections are not a valid prefix"
            );
            return Err(ScheduleError::InvalidPrefix { report });
        }

        if let Some(size) = exceeds_limit(courses, LARGE_SEARCH_SPACE) {
            let combinations = if size == u128::MAX {
                "overflow".to_string()
            } else {
                size.to_string()
            };
            warn!(
                combinations = %combinations,
                limit = %LARGE_SEARCH_SPACE,
                "large search space — worst-case backtracking is exponential in course count"
            );
        }

        info!(
            course_count = courses.len(),
            chosen_count = chosen.len(),
            blockout_count = blockouts.len(),
            "=== ScheduleSearch::search() ==="
        );

        // ── Screening ─────────────────────────────────────────────────────────
        let mut stats = SearchStats::default();
        let (viable, screened) = screen_courses(courses, chosen, blockouts, &mut stats);
        if let Some(report) = &screened {
            warn!(
                blocked = courses.len() - viable.len(),
                conflicts = report.len(),
                "some courses have no OPEN section clear of the fixed sections"
            );
        }

        // ── Search ────────────────────────────────────────────────────────────
        // Blocked courses are left out so the report also covers how the
        // remaining courses interact with each other.
        let report = match (self.place(0, &viable, chosen, blockouts, &mut stats), screened) {
            (Ok(selection), None) => {
                info!(
                    sections = selection.len(),
                    tried = stats.candidates_tried,
                    skipped = stats.closed_skipped,
                    conflicts = stats.conflicts,
                    backtracks = stats.backtracks,
                    "=== Search complete ==="
                );
                return Ok((selection, stats));
            }
            (Ok(_), Some(report)) => report,
            (Err(deeper), None) => deeper,
            (Err(deeper), Some(mut report)) => {
                report.merge(deeper);
                report
            }
        };

        warn!(
            reported = report.len(),
            tried = stats.candidates_tried,
            backtracks = stats.backtracks,
            "no conflict-free schedule possible"
        );
        Err(ScheduleError::NoSchedulesPossible { report, stats })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Recursive placement
    // ─────────────────────────────────────────────────────────────────────────

    /// Place a section for `courses[index]` and everything after it.
    ///
    /// `chosen` is this level's snapshot; an accepted candidate is appended to
    /// a fresh copy handed to the next level.
    fn place(
        &mut self,
        index: usize,
        courses: &[Course],
        chosen: &[Arc<Section>],
        blockouts: &[Arc<Section>],
        stats: &mut SearchStats,
    ) -> Result<Vec<Arc<Section>>, ConflictReport> {
        let Some(course) = courses.get(index) else {
            return Ok(chosen.to_vec());
        };

        if course.sections().is_empty() {
            debug!(course = %course.code(), depth = index, "course has no sections");
            return Err(ConflictReport::new(Conflict::NoSections {
                course: course.code().clone(),
            }));
        }

        let mut candidates: Vec<Arc<Section>> = course.sections().to_vec();
        candidates.shuffle(&mut self.rng);

        let mut report: Option<ConflictReport> = None;

        for candidate in candidates {
            if !candidate.is_open() {
                stats.closed_skipped += 1;
                continue;
            }
            stats.candidates_tried += 1;

            if let Some(clash) = first_conflict(&candidate, chosen)
                .or_else(|| first_conflict(&candidate, blockouts))
            {
                stats.conflicts += 1;
                debug!(
                    section = %candidate,
                    with = %clash,
                    depth = index,
                    "✗ conflict"
                );
                record(&mut report, Conflict::between(&candidate, clash));
                continue;
            }

            debug!(section = %candidate, depth = index, "✓ tentatively placed");

            let mut next = Vec::with_capacity(chosen.len() + 1);
            next.extend_from_slice(chosen);
            next.push(Arc::clone(&candidate));

            match self.place(index + 1, courses, &next, blockouts, stats) {
                Ok(selection) => return Ok(selection),
                Err(deeper) => {
                    stats.backtracks += 1;
                    debug!(
                        section = %candidate,
                        depth = index,
                        reported = deeper.len(),
                        "backtracking"
                    );
                    absorb(&mut report, deeper);
                }
            }
        }

        // Nothing recorded means every candidate was skipped for its status.
        Err(report.unwrap_or_else(|| {
            ConflictReport::new(Conflict::NoOpenSections {
                course: course.code().clone(),
            })
        }))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// First section in `others` that overlaps `candidate`.
fn first_conflict<'a>(candidate: &Section, others: &'a [Arc<Section>]) -> Option<&'a Section> {
    others
        .iter()
        .map(Arc::as_ref)
        .find(|other| candidate.conflicts_with(other))
}

/// Split `courses` into those with at least one OPEN section clear of
/// `chosen` and `blockouts`, and a report for the rest.
///
/// A blocked course contributes one conflict per OPEN section, or a single
/// course-level entry when it has no (OPEN) sections at all.
fn screen_courses(
    courses: &[Course],
    chosen: &[Arc<Section>],
    blockouts: &[Arc<Section>],
    stats: &mut SearchStats,
) -> (Vec<Course>, Option<ConflictReport>) {
    let mut viable = Vec::with_capacity(courses.len());
    let mut report: Option<ConflictReport> = None;

    for course in courses {
        if course.sections().is_empty() {
            record(
                &mut report,
                Conflict::NoSections {
                    course: course.code().clone(),
                },
            );
            continue;
        }

        let mut clashes = Vec::new();
        let mut clear = false;
        for section in course.sections().iter().filter(|s| s.is_open()) {
            match first_conflict(section, chosen).or_else(|| first_conflict(section, blockouts)) {
                Some(clash) => clashes.push(Conflict::between(section, clash)),
                None => {
                    clear = true;
                    break;
                }
            }
        }

        if clear {
            viable.push(course.clone());
        } else if clashes.is_empty() {
            record(
                &mut report,
                Conflict::NoOpenSections {
                    course: course.code().clone(),
                },
            );
        } else {
            debug!(course = %course.code(), conflicts = clashes.len(), "course blocked");
            stats.conflicts += clashes.len() as u64;
            for conflict in clashes {
                record(&mut report, conflict);
            }
        }
    }

    (viable, report)
}

/// Check that a resumed prefix holds only OPEN sections, is pairwise
/// conflict-free and is clear of every block-out.  Returns the offending
/// entries, or `None` if the prefix is valid.
fn validate_prefix(chosen: &[Arc<Section>], blockouts: &[Arc<Section>]) -> Option<ConflictReport> {
    let mut report: Option<ConflictReport> = None;
    for (i, section) in chosen.iter().enumerate() {
        if !section.is_open() {
            record(&mut report, Conflict::not_open(section));
        }
        for earlier in &chosen[..i] {
            if section.conflicts_with(earlier) {
                record(&mut report, Conflict::between(section, earlier));
            }
        }
        for blockout in blockouts {
            if section.conflicts_with(blockout) {
                record(&mut report, Conflict::between(section, blockout));
            }
        }
    }
    report
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{ClassStatus, MeetingTime, Weekday};
    use std::collections::HashSet;

    // ── Test helpers ──────────────────────────────────────────────────────────

    fn meeting(day: Weekday, start: &str, end: &str) -> MeetingTime {
        MeetingTime::new(day, start.parse().unwrap(), end.parse().unwrap()).unwrap()
    }

    fn mon(start: &str, end: &str) -> Vec<MeetingTime> {
        vec![meeting(Weekday::Monday, start, end)]
    }

    /// Course with one OPEN section per entry of `slots`, numbered 001, 002...
    fn course(dept: &str, number: &str, slots: &[Vec<MeetingTime>]) -> Course {
        let mut c = Course::new(dept, number, format!("{dept} {number}"));
        for (i, m) in slots.iter().enumerate() {
            c.add_section(format!("{:03}", i + 1), m.clone(), ClassStatus::Open, "Staff");
        }
        c
    }

    fn blockout(label: &str, meetings: Vec<MeetingTime>) -> Arc<Section> {
        Arc::new(Section::blockout(label, meetings))
    }

    fn labels(sections: &[Arc<Section>]) -> Vec<String> {
        sections.iter().map(|s| s.label()).collect()
    }

    /// Asserts the success invariants: one pick per course in order, no
    /// pairwise conflict, no block-out conflict, only OPEN sections.
    fn assert_valid(result: &[Arc<Section>], courses: &[Course], blockouts: &[Arc<Section>]) {
        assert_eq!(result.len(), courses.len());
        for (section, course) in result.iter().zip(courses) {
            assert_eq!(section.course(), course.code());
            assert!(section.is_open(), "{section} is not OPEN");
        }
        for (i, a) in result.iter().enumerate() {
            for b in &result[i + 1..] {
                assert!(!a.conflicts_with(b), "{a} conflicts with {b}");
            }
            for b in blockouts {
                assert!(!a.conflicts_with(b), "{a} conflicts with {b}");
            }
        }
    }

    // ── Scenarios ─────────────────────────────────────────────────────────────

    #[test]
    fn two_disjoint_sections_are_both_returned() {
        let courses = vec![
            course("CSE", "1320", &[mon("09:00", "10:00")]),
            course("MATH", "2425", &[mon("10:00", "11:00")]),
        ];
        let result = ScheduleSearch::new().search(&courses, &[], &[]).unwrap();
        assert_eq!(labels(&result), ["CSE 1320-001", "MATH 2425-001"]);
        assert_valid(&result, &courses, &[]);
    }

    #[test]
    fn overlapping_single_sections_fail_naming_both() {
        let courses = vec![
            course("CSE", "1320", &[mon("09:00", "10:00")]),
            course("MATH", "2425", &[mon("09:30", "10:30")]),
        ];
        let err = ScheduleSearch::new().search(&courses, &[], &[]).unwrap_err();

        let ScheduleError::NoSchedulesPossible { report, .. } = err else {
            panic!("expected NoSchedulesPossible");
        };
        assert_eq!(
            report.to_string(),
            "Conflict between MATH 2425-001 and CSE 1320-001"
        );
    }

    #[test]
    fn closed_section_is_skipped_silently() {
        let mut c = Course::new("CSE", "1320", "Intermediate Programming");
        c.add_section("001", mon("08:00", "09:00"), ClassStatus::Closed, "Staff");
        c.add_section("002", mon("13:00", "14:00"), ClassStatus::Open, "Staff");
        let courses = vec![c];
        let blockouts = vec![blockout("Work", mon("12:00", "17:00"))];

        for _ in 0..20 {
            let err = ScheduleSearch::new()
                .search(&courses, &[], &blockouts)
                .unwrap_err();
            let report = err.report();
            assert_eq!(report.len(), 1);
            assert_eq!(
                report.to_string(),
                "Conflict between CSE 1320-002 and BLOCKOUT: Work"
            );
            assert!(!report.mentions("CSE 1320-001"));
        }
    }

    #[test]
    fn picks_the_only_section_clear_of_a_prior_choice() {
        let prior = course("PHYS", "1443", &[mon("09:00", "10:00")]).sections()[0].clone();
        let courses = vec![course(
            "CSE",
            "1320",
            &[mon("09:30", "10:30"), mon("11:00", "12:00")],
        )];

        for seed in 0..32 {
            let result = ScheduleSearch::with_seed(seed)
                .search(&courses, &[Arc::clone(&prior)], &[])
                .unwrap();
            assert_eq!(labels(&result), ["PHYS 1443-001", "CSE 1320-002"]);
        }
    }

    #[test]
    fn deep_failure_is_reported_from_the_level_where_it_happens() {
        let work = blockout("Work", mon("12:00", "17:00"));
        let courses = vec![
            course("CSE", "1320", &[mon("09:00", "10:00")]),
            course("MATH", "2425", &[mon("10:00", "11:00")]),
            course(
                "HIST",
                "1311",
                &[mon("09:30", "10:30"), mon("13:00", "14:00")],
            ),
        ];
        let err = ScheduleSearch::new()
            .search(&courses, &[], &[Arc::clone(&work)])
            .unwrap_err();
        let report = err.report();

        assert!(report.mentions("HIST 1311-001"));
        assert!(report.mentions("HIST 1311-002"));
        assert!(report.mentions("BLOCKOUT: Work"));
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn blocked_course_is_reported_even_when_earlier_courses_clash() {
        // CSE and MATH overlap each other, so the search never reaches HIST;
        // HIST is blocked by Work on its own and must still be reported.
        let work = blockout("Work", mon("12:00", "17:00"));
        let courses = vec![
            course("CSE", "1320", &[mon("09:00", "10:00")]),
            course("MATH", "2425", &[mon("09:30", "10:30")]),
            course("HIST", "1311", &[mon("13:00", "14:00")]),
        ];
        let err = ScheduleSearch::new()
            .search(&courses, &[], &[work])
            .unwrap_err();
        let report = err.report();

        assert!(report.mentions("HIST 1311-001"));
        assert_eq!(
            report.to_string(),
            "Conflict between HIST 1311-001 and BLOCKOUT: Work\n\
             Conflict between MATH 2425-001 and CSE 1320-001"
        );
    }

    #[test]
    fn every_blocked_course_is_listed_with_each_of_its_sections() {
        let prior = course("PHYS", "1443", &[mon("09:00", "10:00")]).sections()[0].clone();
        let work = blockout("Work", mon("12:00", "17:00"));
        let courses = vec![
            course("CSE", "1320", &[mon("09:30", "10:30"), mon("13:00", "14:00")]),
            course("MATH", "2425", &[mon("08:00", "09:00")]),
            course("HIST", "1311", &[mon("15:00", "16:00")]),
        ];
        let err = ScheduleSearch::new()
            .search(&courses, &[prior], &[work])
            .unwrap_err();
        let lines: Vec<String> = err.report().iter().map(|c| c.to_string()).collect();
        assert_eq!(
            lines,
            [
                "Conflict between CSE 1320-001 and PHYS 1443-001",
                "Conflict between CSE 1320-002 and BLOCKOUT: Work",
                "Conflict between HIST 1311-001 and BLOCKOUT: Work",
            ]
        );
    }

    // ── Failure reporting ─────────────────────────────────────────────────────

    #[test]
    fn course_without_sections_fails_with_dedicated_description() {
        let courses = vec![
            course("CSE", "1320", &[mon("09:00", "10:00")]),
            Course::new("ENGL", "1301", "Rhetoric and Composition I"),
        ];
        let err = ScheduleSearch::new().search(&courses, &[], &[]).unwrap_err();
        assert_eq!(
            err.report().conflicts(),
            [Conflict::NoSections {
                course: courses[1].code().clone()
            }]
        );
    }

    #[test]
    fn course_with_only_closed_sections_fails() {
        let mut c = Course::new("CSE", "1320", "Intermediate Programming");
        c.add_section("001", mon("08:00", "09:00"), ClassStatus::Closed, "Staff");
        c.add_section("002", mon("10:00", "11:00"), ClassStatus::Waitlisted, "Staff");
        let courses = vec![c];

        let err = ScheduleSearch::new().search(&courses, &[], &[]).unwrap_err();
        assert!(matches!(err, ScheduleError::NoSchedulesPossible { .. }));
        assert_eq!(
            err.report().to_string(),
            "No open sections available for CSE 1320"
        );
    }

    #[test]
    fn report_keeps_direct_conflicts_and_merged_deeper_ones() {
        // CSE 1320 has two sections; MATH 2425 overlaps both, so each branch
        // fails one level down and both failures are merged upward.
        let courses = vec![
            course(
                "CSE",
                "1320",
                &[mon("09:00", "10:00"), mon("13:00", "14:00")],
            ),
            course(
                "MATH",
                "2425",
                &[vec![
                    meeting(Weekday::Monday, "09:30", "10:30"),
                    meeting(Weekday::Monday, "13:30", "14:30"),
                ]],
            ),
        ];
        let err = ScheduleSearch::new().search(&courses, &[], &[]).unwrap_err();
        let report = err.report();
        assert_eq!(err.stats().map(|s| s.backtracks), Some(2));
        assert_eq!(report.len(), 2);
        assert!(report.mentions("CSE 1320-001"));
        assert!(report.mentions("CSE 1320-002"));
        assert!(report
            .iter()
            .all(|c| c.to_string().starts_with("Conflict between MATH 2425-001")));
    }

    // ── Preconditions ─────────────────────────────────────────────────────────

    #[test]
    fn empty_course_list_returns_the_prefix() {
        let prior = course("PHYS", "1443", &[mon("09:00", "10:00")]).sections()[0].clone();
        let result = ScheduleSearch::new().search(&[], &[prior], &[]).unwrap();
        assert_eq!(labels(&result), ["PHYS 1443-001"]);
    }

    #[test]
    fn conflicting_prefix_is_rejected() {
        let a = course("CSE", "1320", &[mon("09:00", "10:00")]).sections()[0].clone();
        let b = course("MATH", "2425", &[mon("09:30", "10:30")]).sections()[0].clone();
        let work = blockout("Work", mon("09:45", "11:00"));
        let courses = vec![course("HIST", "1311", &[mon("15:00", "16:00")])];

        let err = ScheduleSearch::new()
            .search(&courses, &[a, b], &[work])
            .unwrap_err();
        let ScheduleError::InvalidPrefix { report } = err else {
            panic!("expected InvalidPrefix");
        };
        assert_eq!(
            report.to_string(),
            "Conflict between CSE 1320-001 and BLOCKOUT: Work\n\
             Conflict between MATH 2425-001 and CSE 1320-001\n\
             Conflict between MATH 2425-001 and BLOCKOUT: Work"
        );
    }

    #[test]
    fn prefix_with_a_closed_section_is_rejected() {
        let mut phys = Course::new("PHYS", "1443", "General Technical Physics");
        let closed = phys.add_section("001", mon("08:00", "09:00"), ClassStatus::Closed, "Staff");
        let courses = vec![course("CSE", "1320", &[mon("10:00", "11:00")])];

        let err = ScheduleSearch::new()
            .search(&courses, &[closed], &[])
            .unwrap_err();
        let ScheduleError::InvalidPrefix { report } = err else {
            panic!("expected InvalidPrefix");
        };
        assert_eq!(report.to_string(), "Section PHYS 1443-001 is CLOSED, not OPEN");
    }

    #[test]
    fn caller_prefix_is_not_modified() {
        let prior = course("PHYS", "1443", &[mon("09:00", "10:00")]).sections()[0].clone();
        let chosen = vec![prior];
        let courses = vec![course("CSE", "1320", &[mon("09:30", "10:30")])];

        let _ = ScheduleSearch::new().search(&courses, &chosen, &[]);
        assert_eq!(labels(&chosen), ["PHYS 1443-001"]);

        let ok = vec![course("CSE", "1320", &[mon("11:00", "12:00")])];
        let result = ScheduleSearch::new().search(&ok, &chosen, &[]).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(chosen.len(), 1);
    }

    // ── Completeness & randomisation ──────────────────────────────────────────

    #[test]
    fn finds_the_single_solution_hidden_behind_backtracking() {
        // Only CSE-003 + MATH-003 + HIST-001 works; every seed must find it.
        let courses = vec![
            course(
                "CSE",
                "1320",
                &[mon("09:00", "10:00"), mon("10:00", "11:00"), mon("14:00", "15:00")],
            ),
            course(
                "MATH",
                "2425",
                &[mon("09:00", "10:00"), mon("10:00", "11:00"), mon("15:00", "16:00")],
            ),
            course("HIST", "1311", &[mon("09:00", "11:00")]),
        ];
        for seed in 0..64 {
            let (result, stats) = ScheduleSearch::with_seed(seed)
                .search_with_stats(&courses, &[], &[])
                .unwrap();
            assert_eq!(
                labels(&result),
                ["CSE 1320-003", "MATH 2425-003", "HIST 1311-001"]
            );
            assert_valid(&result, &courses, &[]);
            assert!(stats.candidates_tried >= 3);
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_schedule() {
        let courses = vec![
            course(
                "CSE",
                "1320",
                &[mon("08:00", "09:00"), mon("09:00", "10:00"), mon("10:00", "11:00")],
            ),
            course(
                "MATH",
                "2425",
                &[mon("11:00", "12:00"), mon("12:00", "13:00"), mon("13:00", "14:00")],
            ),
        ];
        let first = ScheduleSearch::with_seed(42).search(&courses, &[], &[]).unwrap();
        for _ in 0..10 {
            let again = ScheduleSearch::with_seed(42).search(&courses, &[], &[]).unwrap();
            assert_eq!(labels(&again), labels(&first));
        }
    }

    #[test]
    fn repeated_searches_explore_different_schedules() {
        let courses = vec![course(
            "CSE",
            "1320",
            &[mon("08:00", "09:00"), mon("09:00", "10:00"), mon("10:00", "11:00")],
        )];
        let seen: HashSet<String> = (0..64)
            .map(|seed| {
                ScheduleSearch::with_seed(seed).search(&courses, &[], &[]).unwrap()[0].label()
            })
            .collect();
        assert!(seen.len() > 1, "shuffle never changed the pick: {seen:?}");
    }

    #[test]
    fn closed_sections_never_appear_in_results() {
        let mut c = Course::new("CSE", "1320", "Intermediate Programming");
        c.add_section("001", mon("08:00", "09:00"), ClassStatus::Closed, "Staff");
        c.add_section("002", mon("09:00", "10:00"), ClassStatus::Open, "Staff");
        c.add_section("003", mon("10:00", "11:00"), ClassStatus::Other("HOLD".into()), "Staff");
        let courses = vec![c];

        for seed in 0..32 {
            let (result, stats) = ScheduleSearch::with_seed(seed)
                .search_with_stats(&courses, &[], &[])
                .unwrap();
            assert_eq!(labels(&result), ["CSE 1320-002"]);
            assert_eq!(stats.candidates_tried, 1);
        }
    }

    #[test]
    fn random_catalogs_yield_valid_schedules_or_nonempty_reports() {
        let days = [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday];
        let mut catalog_rng = StdRng::seed_from_u64(2024);

        for round in 0..50 {
            let courses: Vec<Course> = (0..4)
                .map(|ci| {
                    let mut c = Course::new("GEN", format!("{ci}"), "generated");
                    for si in 0..catalog_rng.random_range(0..4) {
                        let start = catalog_rng.random_range(8u16..18);
                        let m = MeetingTime::new(
                            days[catalog_rng.random_range(0..days.len())],
                            crate::section::ClockTime::new(start, 0).unwrap(),
                            crate::section::ClockTime::new(start + 1, 30).unwrap(),
                        )
                        .unwrap();
                        let status = if catalog_rng.random_bool(0.8) {
                            ClassStatus::Open
                        } else {
                            ClassStatus::Closed
                        };
                        c.add_section(format!("{si:03}"), vec![m], status, "Staff");
                    }
                    c
                })
                .collect();
            let blockouts = vec![blockout("Lunch", vec![meeting(Weekday::Monday, "12:00", "13:00")])];

            match ScheduleSearch::with_seed(round).search(&courses, &[], &blockouts) {
                Ok(result) => assert_valid(&result, &courses, &blockouts),
                Err(err) => assert!(!err.report().is_empty()),
            }
        }
    }

    // ── Concurrency ───────────────────────────────────────────────────────────

    #[test]
    fn independent_searches_share_the_catalog_across_threads() {
        let courses = Arc::new(vec![
            course("CSE", "1320", &[mon("08:00", "09:00"), mon("09:00", "10:00")]),
            course("MATH", "2425", &[mon("08:00", "09:00"), mon("09:00", "10:00")]),
        ]);

        let handles: Vec<_> = (0..4)
            .map(|seed| {
                let courses = Arc::clone(&courses);
                std::thread::spawn(move || {
                    ScheduleSearch::with_seed(seed).search(&courses, &[], &[])
                })
            })
            .collect();

        for h in handles {
            let result = h.join().unwrap().unwrap();
            assert_valid(&result, &courses, &[]);
        }
    }
}

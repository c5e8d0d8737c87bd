/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Conflict diagnostics accumulated by a failing search branch.
//!
//! A [`ConflictReport`] always holds at least one [`Conflict`]: it is created
//! from the first conflict a frame discovers and only grows afterwards.  A
//! frame that finds nothing wrong carries `None`, never an empty report.

use std::fmt;

use crate::section::{CourseCode, Section};

// ── Conflict ──────────────────────────────────────────────────────────────────

/// One reason a candidate section (or a whole course) could not be placed.
///
/// Sections are stored by label rather than by reference so a report can
/// outlive the catalog it was produced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// Candidate overlaps a section already in the chosen list.
    Sections { section: String, other: String },

    /// Candidate overlaps a block-out interval.
    Blockout { section: String, blockout: String },

    /// The course offers no sections at all.
    NoSections { course: CourseCode },

    /// The course offers sections, but none of them is OPEN.
    NoOpenSections { course: CourseCode },

    /// An already-chosen section is not OPEN.
    NotOpen { section: String, status: String },
}

impl Conflict {
    /// Describe an already-chosen section whose status is not OPEN.
    pub fn not_open(section: &Section) -> Self {
        Conflict::NotOpen {
            section: section.label(),
            status: section.status().to_string(),
        }
    }

    /// Describe a clash between `section` and `other`.
    ///
    /// `other` may be a chosen course section or a block-out; the variant is
    /// picked from its department marker.
    pub fn between(section: &Section, other: &Section) -> Self {
        if other.is_blockout() {
            Conflict::Blockout {
                section: section.label(),
                blockout: other.label(),
            }
        } else {
            Conflict::Sections {
                section: section.label(),
                other: other.label(),
            }
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Sections { section, other } => {
                write!(f, "Conflict between {} and {}", section, other)
            }
            Conflict::Blockout { section, blockout } => {
                write!(f, "Conflict between {} and {}", section, blockout)
            }
            Conflict::NoSections { course } => {
                write!(f, "No sections available for {}", course)
            }
            Conflict::NoOpenSections { course } => {
                write!(f, "No open sections available for {}", course)
            }
            Conflict::NotOpen { section, status } => {
                write!(f, "Section {} is {}, not OPEN", section, status)
            }
        }
    }
}

// ── ConflictReport ────────────────────────────────────────────────────────────

/// Ordered, non-empty list of conflicts discovered across a failed branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport {
    conflicts: Vec<Conflict>,
}

impl ConflictReport {
    pub fn new(first: Conflict) -> Self {
        Self {
            conflicts: vec![first],
        }
    }

    pub fn push(&mut self, conflict: Conflict) {
        self.conflicts.push(conflict);
    }

    /// Append every entry of a deeper frame's report after the existing ones.
    pub fn merge(&mut self, deeper: ConflictReport) {
        self.conflicts.extend(deeper.conflicts);
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    /// Always `false` for a report produced by the search.
    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter()
    }

    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// `true` if any entry mentions `label` on either side.
    pub fn mentions(&self, label: &str) -> bool {
        self.conflicts.iter().any(|c| match c {
            Conflict::Sections { section, other } => section == label || other == label,
            Conflict::Blockout { section, blockout } => section == label || blockout == label,
            Conflict::NoSections { course } | Conflict::NoOpenSections { course } => {
                course.to_string() == label
            }
            Conflict::NotOpen { section, .. } => section == label,
        })
    }
}

/// Record `conflict` into a frame's optional report, creating it lazily.
pub(crate) fn record(report: &mut Option<ConflictReport>, conflict: Conflict) {
    match report {
        Some(r) => r.push(conflict),
        None => *report = Some(ConflictReport::new(conflict)),
    }
}

/// Merge a deeper frame's report into a frame's optional report.
pub(crate) fn absorb(report: &mut Option<ConflictReport>, deeper: ConflictReport) {
    match report {
        Some(r) => r.merge(deeper),
        None => *report = Some(deeper),
    }
}

impl fmt::Display for ConflictReport {
    /// One conflict per line, in discovery order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conflict) in self.conflicts.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", conflict)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ConflictReport {
    type Item = &'a Conflict;
    type IntoIter = std::slice::Iter<'a, Conflict>;

    fn into_iter(self) -> Self::IntoIter {
        self.conflicts.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

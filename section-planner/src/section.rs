/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core section data structures for the section planner.
//!
//! A [`Section`] is one time-slotted offering of a course.  The search engine
//! only ever asks one question of it: does it overlap another section?
//!
//! ```text
//! catalog  ──►  Course ──(Arc<Section> candidates)──►  ScheduleSearch  ──►  Vec<Arc<Section>>
//!                                                         ▲
//!  block-outs (synthetic Sections, dept "BLOCKOUT") ──────┘
//! ```
//!
//! # Time model
//! Meetings are weekly: a [`Weekday`] plus a `[start, end)` half-open
//! interval of [`ClockTime`]s.  Two meetings that merely touch at an
//! endpoint (10:00–11:00 and 11:00–12:00) do **not** conflict.
//!
//! # Ownership model
//! Sections are immutable after construction and shared as `Arc<Section>`:
//! owned by the [`Course`](crate::course::Course) that lists them and
//! referenced by any chosen list, block-out list or
//! [`Schedule`](crate::schedule::Schedule).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Department marker carried by synthetic block-out sections.
pub const BLOCKOUT_DEPARTMENT: &str = "BLOCKOUT";

// ── Parse errors ──────────────────────────────────────────────────────────────

/// Errors produced while building meeting times from catalog text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown day of week: '{0}'")]
    UnknownWeekday(String),

    #[error("invalid clock time '{0}' (expected HH:MM)")]
    InvalidClockTime(String),

    #[error("clock time {hour:02}:{minute:02} is out of range")]
    ClockTimeOutOfRange { hour: u16, minute: u16 },

    /// A meeting must end strictly after it starts.
    #[error("meeting on {day} ends at {end} which is not after its start {start}")]
    EmptyInterval {
        day: Weekday,
        start: ClockTime,
        end: ClockTime,
    },
}

// ── Weekday ───────────────────────────────────────────────────────────────────

/// Day of the week a meeting recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Three-letter display form (`Mon`, `Tue`, ...).
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    /// Accepts full names, three-letter abbreviations and the two-letter codes
    /// used by catalog exports (`MO`, `TU`, `WE`, `TH`, `FR`, `SA`, `SU`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" | "mo" => Weekday::Monday,
            "tuesday" | "tue" | "tu" => Weekday::Tuesday,
            "wednesday" | "wed" | "we" => Weekday::Wednesday,
            "thursday" | "thu" | "th" => Weekday::Thursday,
            "friday" | "fri" | "fr" => Weekday::Friday,
            "saturday" | "sat" | "sa" => Weekday::Saturday,
            "sunday" | "sun" | "su" => Weekday::Sunday,
            _ => return Err(ParseError::UnknownWeekday(s.to_string())),
        };
        Ok(day)
    }
}

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// Time of day with minute resolution, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from hour (`0..24`) and minute (`0..60`).
    pub fn new(hour: u16, minute: u16) -> Result<Self, ParseError> {
        if hour >= 24 || minute >= 60 {
            return Err(ParseError::ClockTimeOutOfRange { hour, minute });
        }
        Ok(ClockTime(hour * 60 + minute))
    }

    pub fn minutes_since_midnight(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidClockTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour: u16 = h.parse().map_err(|_| invalid())?;
        let minute: u16 = m.parse().map_err(|_| invalid())?;
        ClockTime::new(hour, minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── MeetingTime ───────────────────────────────────────────────────────────────

/// One weekly meeting: a day plus a half-open `[start, end)` interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MeetingTime {
    pub day: Weekday,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl MeetingTime {
    /// Rejects intervals where `end <= start`.
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Result<Self, ParseError> {
        if end <= start {
            return Err(ParseError::EmptyInterval { day, start, end });
        }
        Ok(Self { day, start, end })
    }

    /// `true` if both meetings fall on the same day and share any minute.
    pub fn overlaps(&self, other: &MeetingTime) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for MeetingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

// ── ClassStatus ───────────────────────────────────────────────────────────────

/// Enrollment status reported by the catalog.
///
/// Only [`ClassStatus::Open`] sections are ever placed in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassStatus {
    #[default]
    Open,
    Closed,
    Waitlisted,
    /// Any status string the planner does not recognise.
    Other(String),
}

impl ClassStatus {
    /// Parse a catalog status string.  Unknown values map to `Other`.
    pub fn from_catalog(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" => ClassStatus::Open,
            "CLOSED" => ClassStatus::Closed,
            "WAITLIST" | "WAITLISTED" => ClassStatus::Waitlisted,
            _ => ClassStatus::Other(s.trim().to_string()),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ClassStatus::Open)
    }
}

impl fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassStatus::Open => f.write_str("OPEN"),
            ClassStatus::Closed => f.write_str("CLOSED"),
            ClassStatus::Waitlisted => f.write_str("WAITLISTED"),
            ClassStatus::Other(s) => f.write_str(s),
        }
    }
}

impl Serialize for ClassStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ── CourseCode ────────────────────────────────────────────────────────────────

/// Department + course number identifying the course a section belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CourseCode {
    pub department: String,
    pub number: String,
}

impl CourseCode {
    pub fn new(department: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            number: number.into(),
        }
    }

    pub fn is_blockout(&self) -> bool {
        self.department.eq_ignore_ascii_case(BLOCKOUT_DEPARTMENT)
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.department, self.number)
    }
}

// ── Section ───────────────────────────────────────────────────────────────────

/// One scheduled offering of a course.
///
/// Fields are private so the meeting set cannot change after construction;
/// conflict testing is a pure function of two sections' meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    number: String,
    course: CourseCode,
    meetings: Vec<MeetingTime>,
    status: ClassStatus,
    instructors: String,
}

impl Section {
    pub fn new(
        course: CourseCode,
        number: impl Into<String>,
        meetings: Vec<MeetingTime>,
        status: ClassStatus,
        instructors: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            course,
            meetings,
            status,
            instructors: instructors.into(),
        }
    }

    /// Synthetic section for a fixed non-course interval (work, commute, ...).
    ///
    /// The label is carried in the instructor field and shows up in conflict
    /// descriptions as `BLOCKOUT: <label>`.
    pub fn blockout(label: impl Into<String>, meetings: Vec<MeetingTime>) -> Self {
        Self {
            number: String::new(),
            course: CourseCode::new(BLOCKOUT_DEPARTMENT, ""),
            meetings,
            status: ClassStatus::Open,
            instructors: label.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn course(&self) -> &CourseCode {
        &self.course
    }

    pub fn meetings(&self) -> &[MeetingTime] {
        &self.meetings
    }

    pub fn status(&self) -> &ClassStatus {
        &self.status
    }

    pub fn instructors(&self) -> &str {
        &self.instructors
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    pub fn is_blockout(&self) -> bool {
        self.course.is_blockout()
    }

    /// `true` iff any meeting of `self` overlaps any meeting of `other`.
    pub fn conflicts_with(&self, other: &Section) -> bool {
        self.meetings
            .iter()
            .any(|a| other.meetings.iter().any(|b| a.overlaps(b)))
    }

    /// Human-readable identifier used in diagnostics.
    ///
    /// `CSE 1320-001` for course sections, `BLOCKOUT: Work` for block-outs.
    pub fn label(&self) -> String {
        if self.is_blockout() {
            format!("{}: {}", self.course.department, self.instructors)
        } else {
            format!(
                "{} {}-{}",
                self.course.department, self.course.number, self.number
            )
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Scheduling request loading.
//!
//! A request bundles the course list, optional pinned sections and the
//! block-out intervals for one search.  The expected YAML structure is:
//! ```yaml
//! name: "Fall plan"
//! semester: 2158
//! courses:
//!   - department: CSE
//!     number: 1320
//!     name: "Intermediate Programming"
//!     sections:
//!       - number: "001"
//!         status: OPEN
//!         instructors: "Smith"
//!         meetings:
//!           - { day: Mon, start: "09:00", end: "10:20" }
//!           - { day: Wed, start: "09:00", end: "10:20" }
//! pinned:
//!   - "CSE 1320-001"
//! blockouts:
//!   - label: Work
//!     meetings:
//!       - { day: Tue, start: "13:00", end: "17:00" }
//! ```
//!
//! Section numbers should be quoted so leading zeros survive YAML parsing.

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::course::Course;
use crate::section::{ClassStatus, ClockTime, MeetingTime, Section, Weekday};

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
///
/// This is kept private – callers work with [`SchedulingRequest`] instead.
#[derive(Debug, Deserialize)]
struct RequestFile {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default)]
    semester: u32,
    #[serde(default)]
    courses: Vec<CourseEntry>,
    #[serde(default)]
    pinned: Vec<String>,
    #[serde(default)]
    blockouts: Vec<BlockoutEntry>,
}

#[derive(Debug, Deserialize)]
struct CourseEntry {
    department: String,
    number: Code,
    #[serde(default)]
    name: String,
    #[serde(default)]
    sections: Vec<SectionEntry>,
}

/// Per-section fields.  Status defaults to OPEN when absent.
#[derive(Debug, Deserialize)]
struct SectionEntry {
    number: Code,
    #[serde(default = "default_status")]
    status: String,
    #[serde(default)]
    instructors: String,
    #[serde(default)]
    meetings: Vec<MeetingEntry>,
}

#[derive(Debug, Deserialize)]
struct BlockoutEntry {
    label: String,
    #[serde(default)]
    meetings: Vec<MeetingEntry>,
}

#[derive(Debug, Deserialize)]
struct MeetingEntry {
    day: String,
    start: String,
    end: String,
}

/// Course and section numbers may be written bare (`1320`) or quoted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Code {
    Text(String),
    Number(u64),
}

impl Code {
    fn into_string(self) -> String {
        match self {
            Code::Text(s) => s,
            Code::Number(n) => n.to_string(),
        }
    }
}

fn default_name() -> String {
    String::from("Untitled")
}

fn default_status() -> String {
    String::from("OPEN")
}

// ── Public data structures ────────────────────────────────────────────────────

/// Everything one search needs, resolved into domain types.
#[derive(Debug, Clone, Default)]
pub struct SchedulingRequest {
    pub name: String,
    pub semester: u32,
    /// Courses still to be placed (pinned courses are removed from this list).
    pub courses: Vec<Course>,
    /// Sections fixed in advance, passed to the search as its resumed prefix.
    pub chosen: Vec<Arc<Section>>,
    pub blockouts: Vec<Arc<Section>>,
}

impl SchedulingRequest {
    /// Parses `path` into a request.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, the YAML is
    /// structurally invalid, or any day / time / pinned section is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading scheduling request from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open request file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid request file: {}", path.display()))
    }

    /// Parses a request from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: RequestFile =
            serde_yaml::from_str(content).context("Failed to parse request YAML")?;

        let mut courses = Vec::with_capacity(file.courses.len());
        for entry in file.courses {
            courses.push(build_course(entry)?);
        }

        let mut blockouts = Vec::with_capacity(file.blockouts.len());
        for entry in file.blockouts {
            let meetings = build_meetings(&entry.meetings)
                .with_context(|| format!("block-out '{}'", entry.label))?;
            blockouts.push(Arc::new(Section::blockout(entry.label, meetings)));
        }

        let mut chosen = Vec::with_capacity(file.pinned.len());
        for label in &file.pinned {
            let section = take_pinned(&mut courses, &chosen, label)?;
            chosen.push(section);
        }

        if courses.iter().any(|c| c.sections().is_empty()) {
            warn!("request contains a course without sections; the search will fail");
        }

        info!(
            name = %file.name,
            semester = file.semester,
            courses = courses.len(),
            pinned = chosen.len(),
            blockouts = blockouts.len(),
            "Scheduling request loaded"
        );

        Ok(Self {
            name: file.name,
            semester: file.semester,
            courses,
            chosen,
            blockouts,
        })
    }
}

// ── Conversion helpers ────────────────────────────────────────────────────────

fn build_course(entry: CourseEntry) -> Result<Course> {
    let mut course = Course::new(entry.department, entry.number.into_string(), entry.name);

    for section in entry.sections {
        let number = section.number.into_string();
        let meetings = build_meetings(&section.meetings).with_context(|| {
            format!(
                "section {} {}-{}",
                course.department(),
                course.number(),
                number
            )
        })?;
        let status = ClassStatus::from_catalog(&section.status);
        let added = course.add_section(number, meetings, status, section.instructors);

        debug!(
            "  Section: {} | Status: {} | Meetings: {}",
            added.label(),
            added.status(),
            added.meetings().len(),
        );
    }

    Ok(course)
}

fn build_meetings(entries: &[MeetingEntry]) -> Result<Vec<MeetingTime>> {
    entries
        .iter()
        .map(|m| -> Result<MeetingTime> {
            let day = m.day.parse::<Weekday>()?;
            let start = m.start.parse::<ClockTime>()?;
            let end = m.end.parse::<ClockTime>()?;
            Ok(MeetingTime::new(day, start, end)?)
        })
        .collect()
}

/// Remove the course named by `label` (`DEPT NUMBER-SECTION`) from `courses`
/// and return the pinned section.  All parts of the label match
/// case-insensitively; the section must be OPEN.
fn take_pinned(
    courses: &mut Vec<Course>,
    pinned: &[Arc<Section>],
    label: &str,
) -> Result<Arc<Section>> {
    let malformed = || anyhow!("pinned section '{}' must look like 'DEPT NUMBER-SECTION'", label);
    let (code, section_number) = label.trim().rsplit_once('-').ok_or_else(malformed)?;
    let (department, number) = code.split_once(' ').ok_or_else(malformed)?;
    let (department, number, section_number) =
        (department.trim(), number.trim(), section_number.trim());

    if let Some(earlier) = pinned.iter().find(|s| {
        s.course().department.eq_ignore_ascii_case(department)
            && s.course().number.eq_ignore_ascii_case(number)
    }) {
        bail!(
            "pinned section '{}' pins course {} a second time (already pinned: {})",
            label,
            earlier.course(),
            earlier.label()
        );
    }

    let Some(pos) = courses.iter().position(|c| {
        c.department().eq_ignore_ascii_case(department) && c.number().eq_ignore_ascii_case(number)
    }) else {
        bail!("pinned section '{}' refers to a course not in the request", label);
    };

    let section = courses[pos]
        .sections()
        .iter()
        .find(|s| s.number().eq_ignore_ascii_case(section_number))
        .cloned()
        .ok_or_else(|| anyhow!("pinned section '{}' is not offered by its course", label))?;

    if !section.is_open() {
        bail!(
            "pinned section '{}' is {}; only OPEN sections can be pinned",
            label,
            section.status()
        );
    }

    courses.remove(pos);
    debug!(section = %section, "pinned");
    Ok(section)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! A course requirement and its interchangeable candidate sections.

use std::sync::Arc;

use crate::section::{ClassStatus, CourseCode, MeetingTime, Section};

/// One course requirement, satisfied by choosing exactly one of its sections.
///
/// The candidate list is ordered as supplied by the catalog and may be empty;
/// the search treats an empty list as an unavoidable dead end.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    code: CourseCode,
    name: String,
    sections: Vec<Arc<Section>>,
}

impl Course {
    pub fn new(
        department: impl Into<String>,
        number: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            code: CourseCode::new(department, number),
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Append a candidate section owned by this course and return it.
    pub fn add_section(
        &mut self,
        number: impl Into<String>,
        meetings: Vec<MeetingTime>,
        status: ClassStatus,
        instructors: impl Into<String>,
    ) -> Arc<Section> {
        let section = Arc::new(Section::new(
            self.code.clone(),
            number,
            meetings,
            status,
            instructors,
        ));
        self.sections.push(Arc::clone(&section));
        section
    }

    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    pub fn department(&self) -> &str {
        &self.code.department
    }

    pub fn number(&self) -> &str {
        &self.code.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sections(&self) -> &[Arc<Section>] {
        &self.sections
    }

    pub fn open_sections(&self) -> impl Iterator<Item = &Arc<Section>> {
        self.sections.iter().filter(|s| s.is_open())
    }
}

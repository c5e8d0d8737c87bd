/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! A named, finished selection of sections.
//!
//! Built by the caller from a successful search.  Only serialisation for
//! display is provided here; storing schedules is left to the caller.

use std::sync::Arc;

use serde::Serialize;

use crate::section::{CourseCode, Section};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    name: String,
    semester: u32,
    sections: Vec<Arc<Section>>,
}

impl Schedule {
    pub fn new(name: impl Into<String>, semester: u32, sections: Vec<Arc<Section>>) -> Self {
        Self {
            name: name.into(),
            semester,
            sections,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn semester(&self) -> u32 {
        self.semester
    }

    pub fn sections(&self) -> &[Arc<Section>] {
        &self.sections
    }

    /// Distinct course codes in selection order.
    pub fn courses(&self) -> Vec<&CourseCode> {
        let mut codes: Vec<&CourseCode> = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            if !codes.contains(&section.course()) {
                codes.push(section.course());
            }
        }
        codes
    }

    /// Section labels joined with `, `, e.g. `CSE 1320-001, MATH 2425-002`.
    pub fn summary(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

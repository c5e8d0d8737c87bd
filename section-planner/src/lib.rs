/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Section planner – picks one section per course with no time conflicts.
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── section         – sections, meeting times, conflict test
//! ├── course          – a course requirement and its candidate sections
//! ├── scheduler/      – randomised backtracking search + conflict reports
//! ├── schedule        – named, finished selection of sections
//! └── config/         – YAML scheduling request loading
//! ```

pub mod config;
pub mod course;
pub mod schedule;
pub mod scheduler;
pub mod section;

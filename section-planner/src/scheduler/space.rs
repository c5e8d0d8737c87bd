/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Search-space sizing.
//!
//! # Worst case
//! In the worst case the backtracking search explores every combination of
//! candidate sections: the product of every course's section count, which is
//! exponential in the number of courses.  There is no
//! built-in deadline; a caller that needs one must bound the work itself.
//!
//! The size is only **computed and logged** before each search.  It is a
//! warning, never a reason to refuse a request: most real requests prune
//! early on the first few conflicts.
//!
//! | Courses | Sections each | Combinations |
//! |---|---|---|
//! | 4 | 5 | 625 |
//! | 6 | 8 | 262 144 |
//! | 8 | 10 | 100 000 000 |

use crate::course::Course;

/// Number of combinations above which the engine emits a `warn!`.
pub const LARGE_SEARCH_SPACE: u128 = 1_000_000;

/// Product of every course's candidate count.
///
/// Returns `Some(0)` if any course has no sections, `Some(1)` for an empty
/// course list, and `None` if the product overflows `u128`.
pub fn search_space_size(courses: &[Course]) -> Option<u128> {
    courses
        .iter()
        .try_fold(1u128, |acc, c| acc.checked_mul(c.sections().len() as u128))
}

/// Returns `Some(size)` when the search space is at or above `limit`.
///
/// Overflow is reported as `Some(u128::MAX)`.
pub fn exceeds_limit(courses: &[Course], limit: u128) -> Option<u128> {
    match search_space_size(courses) {
        Some(size) if size < limit => None,
        Some(size) => Some(size),
        None => Some(u128::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::ClassStatus;

    fn course_with(n: usize) -> Course {
        let mut c = Course::new("CSE", "1320", "Intermediate Programming");
        for i in 0..n {
            c.add_section(format!("{:03}", i + 1), vec![], ClassStatus::Open, "");
        }
        c
    }

    #[test]
    fn empty_course_list_has_one_combination() {
        assert_eq!(search_space_size(&[]), Some(1));
    }

    #[test]
    fn size_is_product_of_section_counts() {
        let courses = vec![course_with(3), course_with(4), course_with(5)];
        assert_eq!(search_space_size(&courses), Some(60));
    }

    #[test]
    fn course_without_sections_makes_space_empty() {
        let courses = vec![course_with(3), course_with(0)];
        assert_eq!(search_space_size(&courses), Some(0));
    }

    #[test]
    fn below_limit_is_not_reported() {
        let courses = vec![course_with(10), course_with(10)];
        assert_eq!(exceeds_limit(&courses, LARGE_SEARCH_SPACE), None);
    }

    #[test]
    fn at_or_above_limit_is_reported() {
        let courses: Vec<Course> = (0..6).map(|_| course_with(10)).collect();
        assert_eq!(exceeds_limit(&courses, LARGE_SEARCH_SPACE), Some(1_000_000));
    }
}

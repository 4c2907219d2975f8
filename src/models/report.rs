//! Comparison report model
//!
//! The structured result of joining parsed transcript records against the
//! expected-grades table, plus the rendering into the flat report text the
//! tool has always shown. Keeping the structure separate from the rendering
//! is what makes the comparison independently testable and lets the CLI
//! offer a JSON view of the same data.

use crate::models::Grade;
use serde::Serialize;

/// Outcome of looking one expected course up in the parsed records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CourseOutcome {
    /// The course appears on the transcript
    Found {
        /// Grade as printed on the transcript
        grade: Grade,
        /// Expected grade from the reference table (displayed, not checked)
        expected: String,
        /// Pass/fail flag carried over from the matched record
        passing: bool,
    },
    /// The course does not appear on the transcript
    NotFound {
        /// Expected grade from the reference table
        expected: String,
    },
}

/// One expected-course line of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseLine {
    /// Course number the expected table asked about
    pub course_number: String,

    /// What the lookup found
    #[serde(flatten)]
    pub outcome: CourseOutcome,
}

/// One category block of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    /// Category label from the expected table
    pub label: String,

    /// Course lines in the table's stored order
    pub courses: Vec<CourseLine>,
}

/// The full comparison result, in expected-grades order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Category blocks in the table's stored order
    pub categories: Vec<CategoryReport>,
}

impl ComparisonReport {
    /// Render the human-readable report text
    ///
    /// One `Category:` header line per category, then one line per expected
    /// course, every line newline-terminated. An empty table renders the
    /// empty string; a category with no courses renders just its header.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for category in &self.categories {
            out.push_str(&format!("Category: {}\n", category.label));
            for line in &category.courses {
                match &line.outcome {
                    CourseOutcome::Found {
                        grade,
                        expected,
                        passing,
                    } => {
                        let status = if *passing { "Passing" } else { "Not Passing" };
                        out.push_str(&format!(
                            "  Course {}: PDF Grade = {}, Expected Grade = {}, Status = {}\n",
                            line.course_number, grade, expected, status
                        ));
                    }
                    CourseOutcome::NotFound { .. } => {
                        out.push_str(&format!(
                            "  Course {}: Not Found in PDF\n",
                            line.course_number
                        ));
                    }
                }
            }
        }

        out
    }

    /// Total number of expected courses checked
    pub fn course_count(&self) -> usize {
        self.categories.iter().map(|c| c.courses.len()).sum()
    }

    /// Number of expected courses found on the transcript
    pub fn found_count(&self) -> usize {
        self.lines()
            .filter(|line| matches!(line.outcome, CourseOutcome::Found { .. }))
            .count()
    }

    /// Number of expected courses missing from the transcript
    pub fn missing_count(&self) -> usize {
        self.lines()
            .filter(|line| matches!(line.outcome, CourseOutcome::NotFound { .. }))
            .count()
    }

    fn lines(&self) -> impl Iterator<Item = &CourseLine> {
        self.categories.iter().flat_map(|c| c.courses.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ComparisonReport {
        ComparisonReport {
            categories: vec![CategoryReport {
                label: "Math".to_string(),
                courses: vec![
                    CourseLine {
                        course_number: "123456".to_string(),
                        outcome: CourseOutcome::Found {
                            grade: Grade::Score(90),
                            expected: "A".to_string(),
                            passing: true,
                        },
                    },
                    CourseLine {
                        course_number: "999999".to_string(),
                        outcome: CourseOutcome::NotFound {
                            expected: "B".to_string(),
                        },
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_render_found_and_missing_lines() {
        let report = sample_report();
        let expected = concat!(
            "Category: Math\n",
            "  Course 123456: PDF Grade = 90, Expected Grade = A, Status = Passing\n",
            "  Course 999999: Not Found in PDF\n",
        );
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_render_not_passing_status() {
        let report = ComparisonReport {
            categories: vec![CategoryReport {
                label: "Core".to_string(),
                courses: vec![CourseLine {
                    course_number: "345678".to_string(),
                    outcome: CourseOutcome::Found {
                        grade: Grade::Score(40),
                        expected: "C".to_string(),
                        passing: false,
                    },
                }],
            }],
        };

        assert!(report.render().contains("Status = Not Passing"));
    }

    #[test]
    fn test_render_marker_grade_verbatim() {
        let report = ComparisonReport {
            categories: vec![CategoryReport {
                label: "Seminar".to_string(),
                courses: vec![CourseLine {
                    course_number: "234567".to_string(),
                    outcome: CourseOutcome::Found {
                        grade: Grade::Marker("עבר".to_string()),
                        expected: "Pass".to_string(),
                        passing: true,
                    },
                }],
            }],
        };

        assert!(report.render().contains("PDF Grade = עבר"));
    }

    #[test]
    fn test_render_empty_report() {
        assert_eq!(ComparisonReport::default().render(), "");
    }

    #[test]
    fn test_render_category_with_no_courses() {
        let report = ComparisonReport {
            categories: vec![CategoryReport {
                label: "Empty".to_string(),
                courses: Vec::new(),
            }],
        };
        assert_eq!(report.render(), "Category: Empty\n");
    }

    #[test]
    fn test_counts() {
        let report = sample_report();
        assert_eq!(report.course_count(), 2);
        assert_eq!(report.found_count(), 1);
        assert_eq!(report.missing_count(), 1);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(&sample_report()).unwrap();
        let first = &json["categories"][0]["courses"][0];

        assert_eq!(first["course_number"], "123456");
        assert_eq!(first["status"], "found");
        assert_eq!(first["grade"], 90);
        assert_eq!(first["passing"], true);

        let second = &json["categories"][0]["courses"][1];
        assert_eq!(second["status"], "not_found");
        assert_eq!(second["expected"], "B");
    }
}

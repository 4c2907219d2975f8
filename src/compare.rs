//! Grade comparison
//!
//! Joins parsed transcript records against the expected-grades table. The
//! join itself is pure; `compare_files` wraps it with the extraction and
//! loading steps for callers that start from paths.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::GradingConfig;
use crate::extract;
use crate::models::{
    CategoryReport, ComparisonReport, CourseLine, CourseOutcome, CourseRecord, ExpectedGrades,
};
use crate::parser::TranscriptParser;

/// Join parsed records against the expected table
///
/// The report follows the table: one block per category, one line per
/// expected course, both in the table's stored order. Each expected course
/// takes the first record with a matching course number; courses with no
/// matching record are reported as not found. Records the table never asks
/// about do not appear.
pub fn compare(records: &[CourseRecord], expected: &ExpectedGrades) -> ComparisonReport {
    let categories = expected
        .categories()
        .map(|(label, courses)| CategoryReport {
            label: label.to_string(),
            courses: courses
                .iter()
                .map(|(course_number, expected_grade)| {
                    let outcome = match records
                        .iter()
                        .find(|record| record.course_number == *course_number)
                    {
                        Some(record) => CourseOutcome::Found {
                            grade: record.grade.clone(),
                            expected: expected_grade.clone(),
                            passing: record.passing,
                        },
                        None => CourseOutcome::NotFound {
                            expected: expected_grade.clone(),
                        },
                    };
                    CourseLine {
                        course_number: course_number.clone(),
                        outcome,
                    }
                })
                .collect(),
        })
        .collect();

    ComparisonReport { categories }
}

/// Run the full pipeline from a transcript PDF and an expected-grades file
pub fn compare_files(
    transcript: &Path,
    expected: &Path,
    config: &GradingConfig,
) -> Result<ComparisonReport> {
    let text = extract::extract_text(transcript)
        .with_context(|| format!("Failed to extract text from {}", transcript.display()))?;
    let records = TranscriptParser::new(config).parse(&text);

    let table = ExpectedGrades::load(expected)
        .with_context(|| format!("Failed to load expected grades from {}", expected.display()))?;

    Ok(compare(&records, &table))
}

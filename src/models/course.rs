//! Course record data model
//!
//! One record per transcript line the parser matched: course code, credit
//! points, grade, and the derived pass/fail flag. Records are created once
//! during parsing and never mutated afterwards.

use crate::config::GradingConfig;
use serde::Serialize;
use std::fmt;

/// A grade as it appears on the transcript
///
/// Either a numeric 0-100 score or a literal text token (credit-by-exemption
/// and the like). The token is kept verbatim so the report shows exactly
/// what the transcript printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Grade {
    /// Numeric score (an all-digit token)
    Score(u32),
    /// Non-numeric marker token, kept verbatim
    Marker(String),
}

impl Grade {
    /// Classify the grade against the configured threshold and marker set
    ///
    /// Numeric scores pass on strict greater-than, so a score equal to the
    /// threshold fails. Marker tokens pass when they contain any configured
    /// pass marker; every other token fails, with no separate unknown bucket.
    pub fn is_passing(&self, config: &GradingConfig) -> bool {
        match self {
            Grade::Score(score) => *score > config.pass_threshold,
            Grade::Marker(token) => config
                .pass_markers
                .iter()
                .any(|marker| token.contains(marker.as_str())),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Score(score) => write!(f, "{}", score),
            Grade::Marker(token) => write!(f, "{}", token),
        }
    }
}

/// One parsed transcript line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    /// 6-digit course code
    pub course_number: String,

    /// Credit points
    pub points: f64,

    /// Grade as printed on the transcript
    pub grade: Grade,

    /// Pass/fail flag derived from the grade at parse time
    pub passing: bool,
}

impl CourseRecord {
    /// Create a record, deriving the pass/fail flag from the grade
    pub fn new(
        course_number: impl Into<String>,
        points: f64,
        grade: Grade,
        config: &GradingConfig,
    ) -> Self {
        let passing = grade.is_passing(config);
        Self {
            course_number: course_number.into(),
            points,
            grade,
            passing,
        }
    }
}

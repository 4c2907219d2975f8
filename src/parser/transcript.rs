//! Course record parsing
//!
//! One pattern applied to the whole extracted text blob: a 6-digit course
//! code, a points token, and a grade token, separated by whitespace. Every
//! non-overlapping match yields exactly one record, in left-to-right order;
//! text that does not match is skipped with no partial-match fallback.

use crate::config::GradingConfig;
use crate::models::{CourseRecord, Grade};
use regex::Regex;

/// One transcript line: 6-digit course code, integer-or-decimal credit
/// points, and a single non-whitespace grade token.
const COURSE_PATTERN: &str = r"(\d{6})\s+(\d+(?:\.\d+)?)\s+(\S+)";

/// Scans transcript text for course records
pub struct TranscriptParser {
    pattern: Regex,
    config: GradingConfig,
}

impl TranscriptParser {
    /// Create a parser that classifies grades with the given config
    pub fn new(config: &GradingConfig) -> Self {
        Self {
            pattern: Regex::new(COURSE_PATTERN).expect("course pattern is valid"),
            config: config.clone(),
        }
    }

    /// Parse every course record in the text, left to right
    ///
    /// Pure and deterministic: the same text always yields the same records
    /// in the same order, one per pattern match.
    pub fn parse(&self, text: &str) -> Vec<CourseRecord> {
        self.pattern
            .captures_iter(text)
            .map(|caps| {
                let points = caps[2].parse().unwrap_or(0.0);
                let grade = classify_token(&caps[3]);
                CourseRecord::new(&caps[1], points, grade, &self.config)
            })
            .collect()
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new(&GradingConfig::default())
    }
}

/// Split a grade token into numeric score or text marker
///
/// Only all-ASCII-digit tokens count as numeric; everything else is kept
/// verbatim as a marker for the substring check against the configured
/// pass markers.
fn classify_token(token: &str) -> Grade {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        match token.parse::<u32>() {
            Ok(score) => Grade::Score(score),
            // A digit run too long for u32 is not a real grade; treat it
            // like any other unrecognized token.
            Err(_) => Grade::Marker(token.to_string()),
        }
    } else {
        Grade::Marker(token.to_string())
    }
}

//! Expected-grades table
//!
//! The externally supplied reference table: category label → (course code →
//! expected grade). Loaded verbatim from JSON and used for lookup and
//! display only. The table is never validated against the transcript, and
//! the comparison never checks the expected grade for correctness.
//!
//! Categories and courses keep the JSON document's own order, which is the
//! order the report is rendered in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading an expected-grades file
#[derive(Debug, Error)]
pub enum ExpectedGradesError {
    #[error("Failed to read expected-grades file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse expected-grades JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Category label → (course number → expected grade), in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpectedGrades(IndexMap<String, IndexMap<String, String>>);

impl ExpectedGrades {
    /// Build a table from an already-ordered map (mostly for tests)
    pub fn new(categories: IndexMap<String, IndexMap<String, String>>) -> Self {
        Self(categories)
    }

    /// Load a table from a JSON file
    ///
    /// No schema enforcement beyond the decode itself: anything that is not
    /// a string-to-(string-to-string) mapping surfaces as a parse error.
    pub fn load(path: &Path) -> Result<Self, ExpectedGradesError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Iterate categories in stored order
    pub fn categories(&self) -> impl Iterator<Item = (&str, &IndexMap<String, String>)> {
        self.0.iter().map(|(label, courses)| (label.as_str(), courses))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the table has no categories at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of course entries across all categories
    pub fn course_count(&self) -> usize {
        self.0.values().map(IndexMap::len).sum()
    }
}

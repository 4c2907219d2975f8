// Gradecheck - Transcript grade checker
// Extracts course grades from a transcript PDF and compares them to an expected list

pub mod cli;
pub mod compare;
pub mod config;
pub mod extract;
pub mod models;
pub mod parser;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use compare::{compare, compare_files};
pub use config::GradingConfig;
pub use models::{ComparisonReport, CourseRecord, ExpectedGrades, Grade};
pub use parser::TranscriptParser;

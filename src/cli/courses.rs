use crate::config::GradingConfig;
use crate::extract;
use crate::models::CourseRecord;
use crate::parser::TranscriptParser;
use crate::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Flags for the `courses` listing
pub struct CoursesOptions {
    /// Explicit grading config file, overrides the user config
    pub config: Option<PathBuf>,
    /// Dump the parsed records as JSON instead of the table
    pub json: bool,
}

pub fn run(transcript: &Path, opts: CoursesOptions) -> Result<()> {
    let config = GradingConfig::resolve(opts.config.as_deref())?;

    let text = extract::extract_text(transcript)
        .with_context(|| format!("Failed to extract text from {}", transcript.display()))?;
    let records = TranscriptParser::new(&config).parse(&text);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    display_records(&records);
    Ok(())
}

fn display_records(records: &[CourseRecord]) {
    if records.is_empty() {
        println!("{}", "No course records found in the transcript.".yellow());
        return;
    }

    println!("\n{}", "Parsed courses:".green().bold());
    println!();
    println!(
        "{:<10} {:<8} {:<12} {}",
        "Course".bold(),
        "Points".bold(),
        "Grade".bold(),
        "Status".bold()
    );
    println!("{}", "─".repeat(44));

    for record in records {
        let status = if record.passing {
            "passing".green()
        } else {
            "not passing".red()
        };
        println!(
            "{:<10} {:<8} {:<12} {}",
            record.course_number,
            record.points,
            record.grade.to_string(),
            status
        );
    }

    println!();
    println!("{}", format!("{} record(s)", records.len()).dimmed());
}

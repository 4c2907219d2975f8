use crate::compare::compare_files;
use crate::config::GradingConfig;
use crate::models::ComparisonReport;
use crate::{Context, Result};
use colored::Colorize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Flags shared by the `compare` invocation
pub struct CompareOptions {
    /// Explicit grading config file, overrides the user config
    pub config: Option<PathBuf>,
    /// Print the structured report as JSON instead of the text view
    pub json: bool,
    /// Also write the rendered report text to this file
    pub output: Option<PathBuf>,
}

pub fn run(
    transcript: Option<PathBuf>,
    expected: Option<PathBuf>,
    opts: CompareOptions,
) -> Result<()> {
    let transcript = match resolve_input(transcript, "Path to transcript PDF") {
        Some(path) => path,
        None => return Ok(()),
    };
    let expected = match resolve_input(expected, "Path to expected grades JSON") {
        Some(path) => path,
        None => return Ok(()),
    };

    let config = GradingConfig::resolve(opts.config.as_deref())?;

    let progress = if !opts.json {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        pb.set_message("Comparing grades...");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = compare_files(&transcript, &expected, &config);

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    let report = result?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }

    if let Some(path) = &opts.output {
        std::fs::write(path, report.render())
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        if !opts.json {
            println!("{}", format!("✓ Report written to {}", path.display()).green());
        }
    }

    Ok(())
}

/// Use the given argument, or prompt for a path when it is missing
///
/// An empty answer, or a prompt that cannot be read at all, cancels the
/// command; the caller returns cleanly with no error.
fn resolve_input(arg: Option<PathBuf>, prompt: &str) -> Option<PathBuf> {
    if let Some(path) = arg {
        return Some(path);
    }

    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .unwrap_or_default();

    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(PathBuf::from(answer))
    }
}

fn display_report(report: &ComparisonReport) {
    println!("\n{}", "Comparison Result".cyan().bold());
    println!("{}", "─".repeat(60));
    print!("{}", report.render());
    println!("{}", "─".repeat(60));
    println!(
        "{}",
        format!(
            "{} course(s) checked: {} found, {} not found",
            report.course_count(),
            report.found_count(),
            report.missing_count()
        )
        .dimmed()
    );
}

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use gradecheck::cli;
use gradecheck::cli::compare::CompareOptions;
use gradecheck::cli::courses::CoursesOptions;
use gradecheck::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gradecheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare transcript PDF grades against an expected grade list", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract grades from a transcript PDF and compare them to an expected list
    ///
    /// Both paths are prompted for when not given on the command line; an
    /// empty answer cancels.
    Compare {
        /// Transcript PDF
        transcript: Option<PathBuf>,

        /// Expected grades JSON (categories of course number to grade)
        expected: Option<PathBuf>,

        /// Grading config file (pass threshold, pass markers)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output the structured report in JSON format
        #[arg(short, long)]
        json: bool,

        /// Also write the report text to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List every course record parsed from a transcript PDF
    Courses {
        /// Transcript PDF
        transcript: PathBuf,

        /// Grading config file (pass threshold, pass markers)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output the parsed records in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Print the raw text extracted from a transcript PDF
    Text {
        /// Transcript PDF
        transcript: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compare {
            transcript,
            expected,
            config,
            json,
            output,
        } => {
            cli::compare::run(
                transcript,
                expected,
                CompareOptions {
                    config,
                    json,
                    output,
                },
            )?;
        }

        Commands::Courses {
            transcript,
            config,
            json,
        } => {
            cli::courses::run(&transcript, CoursesOptions { config, json })?;
        }

        Commands::Text { transcript } => {
            cli::text::run(&transcript)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "gradecheck", &mut io::stdout());
        }
    }

    Ok(())
}

//! examlens CLI: analyze exam-report documents and compute scaled scores.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "examlens",
    version,
    about = "Exam report analytics and scaled scoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract sections and questions from a report document and score them
    Analyze {
        /// Path to the report document (JSON element tree)
        #[arg(long)]
        document: PathBuf,

        /// Output format: json, html, markdown, all (comma-separated)
        #[arg(long)]
        format: Option<String>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Prorate partial attempts to the full-test question count
        #[arg(long)]
        full_test: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compute a scaled score from raw counts
    Score {
        /// Number of correct answers
        #[arg(long, allow_hyphen_values = true)]
        correct: i32,

        /// Number of questions
        #[arg(long)]
        total: f64,

        /// Subject hint, usually a section name
        #[arg(long, default_value = "")]
        subject: String,

        /// Fallback subject hint
        #[arg(long, default_value = "")]
        subject2: String,

        /// Prorate partial attempts to the full-test question count
        #[arg(long)]
        full_test: bool,

        /// Score one module on the sectional tables
        #[arg(long, conflicts_with_all = ["full_test", "combined"])]
        sectional: bool,

        /// Treat the counts as one module of a two-module section
        #[arg(long, conflicts_with = "full_test")]
        combined: bool,
    },

    /// Check that a report document extracts cleanly
    Validate {
        /// Path to the report document (JSON element tree)
        #[arg(long)]
        document: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter examlens.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examlens=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            document,
            format,
            output,
            full_test,
            config,
        } => commands::analyze::execute(document, format, output, full_test, config),
        Commands::Score {
            correct,
            total,
            subject,
            subject2,
            full_test,
            sectional,
            combined,
        } => commands::score::execute(
            correct, total, &subject, &subject2, full_test, sectional, combined,
        ),
        Commands::Validate { document, config } => commands::validate::execute(document, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

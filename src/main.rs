//! CLI entry point for the student grade rater.
//!
//! Reads the student roster CSV, evaluates every student, and writes the
//! summary CSV next to it.

use anyhow::Result;
use clap::Parser;
use student_grader::evaluator::evaluate::evaluate_all;
use student_grader::output::write_results;
use student_grader::reader::read_students;
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Input roster, one row per student.
const INPUT_FILE: &str = "students.csv";

/// Output summary, one row per evaluated student.
const OUTPUT_FILE: &str = "student_results.csv";

#[derive(Parser)]
#[command(name = "student_grader")]
#[command(about = "Computes grade summaries from a student score CSV", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    // Logging setup: colored stderr filtered by RUST_LOG, defaulting to info
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    tracing_subscriber::registry().with(stderr_layer).init();

    let _cli = Cli::parse();

    run(INPUT_FILE, OUTPUT_FILE)?;

    info!("Processing complete");
    Ok(())
}

/// Runs the pipeline stages in order: read, evaluate, write.
fn run(input: &str, output: &str) -> Result<()> {
    let students = read_students(input)?;
    info!(count = students.len(), "Student records loaded");

    let results = evaluate_all(&students);
    write_results(output, &results)?;

    Ok(())
}

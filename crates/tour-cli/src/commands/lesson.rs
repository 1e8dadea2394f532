//! Lesson commands - run one or all lessons and print the result.

use anyhow::{Context, Result};
use tour::runes;
use tour::{Lesson, Report};
use tour_config::{OutputFormat, TourConfig};
use tracing::info;

use crate::style::{colors::SemanticStyle, print_spacer};

/// Runs a single lesson with the configured inputs.
pub fn run_one(lesson: Lesson, config: &TourConfig) -> Result<()> {
    let report = lesson
        .run(&config.inputs())
        .with_context(|| format!("Lesson '{lesson}' failed"))?;
    info!(lesson = lesson.name(), "lesson finished");
    print_report(&report, config.output.format)
}

/// Runs every lesson in order, separated by headers in text mode.
pub fn run_all(config: &TourConfig) -> Result<()> {
    let inputs = config.inputs();
    let reports = Lesson::ALL
        .into_iter()
        .map(|lesson| {
            lesson
                .run(&inputs)
                .with_context(|| format!("Lesson '{lesson}' failed"))
        })
        .collect::<Result<Vec<_>>>()?;
    info!(count = reports.len(), "all lessons finished");

    match config.output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    print_spacer();
                }
                print_header(report.lesson());
                println!("{}", report.transcript());
            }
        }
    }
    Ok(())
}

/// Runs the runes lesson over raw bytes given as hex.
pub fn run_runes_hex(hex: &str, config: &TourConfig) -> Result<()> {
    let bytes = runes::parse_hex(hex).context("Failed to parse --hex bytes")?;
    let report = Report::Runes(runes::run_bytes(&bytes));
    print_report(&report, config.output.format)
}

fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => println!("{}", report.transcript()),
    }
    Ok(())
}

fn print_header(lesson: Lesson) {
    println!("{} {}", "==".muted(), lesson.name().header());
}

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::scenarios::ScenarioResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

/// Identifies the run at the top of every report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportHeader {
    pub feed_source: String,
    pub feed_sha256: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    header: &'a ReportHeader,
    passed: bool,
    results: &'a [ScenarioResult],
}

#[allow(clippy::cast_precision_loss)]
fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    passed as f64 / results.len() as f64 * 100.0
}

pub fn write_report(
    out: &mut dyn Write,
    format: ReportFormat,
    header: &ReportHeader,
    results: &[ScenarioResult],
    total: Duration,
) -> Result<()> {
    match format {
        ReportFormat::Console => write_console(out, header, results, total),
        ReportFormat::Json => write_json(out, header, results),
        ReportFormat::Markdown => write_markdown(out, header, results),
    }
}

fn write_console(
    out: &mut dyn Write,
    header: &ReportHeader,
    results: &[ScenarioResult],
    total: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "======================".cyan())?;
    writeln!(out, "Feed: {} (sha256 {})", header.feed_source, header.feed_sha256)?;
    writeln!(out, "Generated: {}", header.generated_at.to_rfc3339())?;

    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Total scenarios: {}", results.len())?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (results.len() - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{status} {} (seed {})", result.scenario_name.bold(), result.seed)?;
        writeln!(
            out,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "   Average time: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_json(out: &mut dyn Write, header: &ReportHeader, results: &[ScenarioResult]) -> Result<()> {
    let report = JsonReport {
        header,
        passed: results.iter().all(|r| r.passed),
        results,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn write_markdown(
    out: &mut dyn Write,
    header: &ReportHeader,
    results: &[ScenarioResult],
) -> Result<()> {
    writeln!(out, "# Coffee Hut Test Results\n")?;
    writeln!(out, "- **Feed**: `{}`", header.feed_source)?;
    writeln!(out, "- **SHA-256**: `{}`", header.feed_sha256)?;
    writeln!(out, "- **Generated**: {}\n", header.generated_at.to_rfc3339())?;

    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {}", results.len())?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", results.len() - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "### {status} {} (seed {})\n", result.scenario_name, result.seed)?;
        writeln!(
            out,
            "- **Iterations**: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(out, "- **Average time**: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "- **Failures**:")?;
            for failure in &result.failures {
                writeln!(out, "  - {failure}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

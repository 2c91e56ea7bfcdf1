//! CLI entrypoint for the myconsts conformance harness.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use myconsts_core::CATALOG;
use myconsts_harness::capture::capture_catalog;
use myconsts_harness::structured_log::{
    LogEmitter, LogLevel, Outcome, now_utc, validate_log_content,
};
use myconsts_harness::{
    ConformanceReport, FixtureSet, HarnessError, TestRunner, VerificationSummary,
};

/// Conformance tooling for myconsts.
#[derive(Debug, Parser)]
#[command(name = "myconsts-harness")]
#[command(about = "Conformance testing harness for myconsts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture the current constant catalog as a fixture file.
    Capture {
        /// Output path for fixture JSON.
        #[arg(long)]
        output: PathBuf,
        /// Fixed capture timestamp for deterministic output.
        #[arg(long, env = "MYCONSTS_HARNESS_TIMESTAMP")]
        timestamp: Option<String>,
    },
    /// Verify the current build against a fixture file.
    Verify {
        /// Fixture JSON path.
        #[arg(long, default_value = "tests/conformance/fixtures/constants.v1.json")]
        fixture: PathBuf,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Fixed timestamp for report and log lines.
        #[arg(long, env = "MYCONSTS_HARNESS_TIMESTAMP")]
        timestamp: Option<String>,
    },
    /// Print the constant catalog.
    Show {
        #[arg(long, value_enum, default_value_t = ShowFormat::Plain)]
        format: ShowFormat,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        #[arg(long)]
        log: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShowFormat {
    Plain,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Capture { output, timestamp } => capture(&output, timestamp),
        Command::Verify {
            fixture,
            report,
            log,
            timestamp,
        } => verify(&fixture, report.as_deref(), log.as_deref(), timestamp),
        Command::Show { format } => show(format),
        Command::ValidateLog { log } => validate_log(&log),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn capture(output: &Path, timestamp: Option<String>) -> Result<ExitCode, HarnessError> {
    let set = capture_catalog(timestamp.unwrap_or_else(now_utc))?;
    set.write_file(output)?;
    println!(
        "captured {} cases ({}@{}) to {}",
        set.cases.len(),
        set.family,
        set.version,
        output.display()
    );
    Ok(ExitCode::SUCCESS)
}

fn verify(
    fixture: &Path,
    report: Option<&Path>,
    log: Option<&Path>,
    timestamp: Option<String>,
) -> Result<ExitCode, HarnessError> {
    let set = FixtureSet::from_file(fixture)?;
    set.verify_digest()?;

    let runner = TestRunner::new("verify");
    let results = runner.run(&set);

    if let Some(log_path) = log {
        let run_id = set.digest.as_deref().map_or("nodigest", |d| &d[..d.len().min(12)]);
        let mut emitter = LogEmitter::to_file(log_path, &runner.campaign, run_id)?
            .with_fixed_timestamp(timestamp.clone());
        let start = emitter
            .entry(LogLevel::Info, "verify_start")
            .with_details(serde_json::json!({
                "fixture": fixture.display().to_string(),
                "cases": set.cases.len(),
            }));
        emitter.write_entry(&start)?;
        for r in &results {
            let level = if r.passed { LogLevel::Info } else { LogLevel::Error };
            let entry = emitter
                .entry(level, "case_result")
                .with_case(&r.case_name, &r.constant)
                .with_outcome(Outcome::from_result(r));
            emitter.write_entry(&entry)?;
        }
        let failed = results.iter().filter(|r| !r.passed).count();
        let end = emitter
            .entry(LogLevel::Info, "verify_end")
            .with_outcome(Outcome::from_passed(failed == 0))
            .with_details(serde_json::json!({ "failed": failed }));
        emitter.write_entry(&end)?;
        emitter.flush()?;
    }

    let summary = VerificationSummary::from_results(results);
    for r in summary.results.iter().filter(|r| !r.passed) {
        eprintln!("FAIL {}: expected {}, got {}", r.case_name, r.expected, r.actual);
    }
    println!(
        "{}@{}: {}/{} passed",
        set.family, set.version, summary.passed, summary.total
    );

    let all_passed = summary.all_passed();
    if let Some(report_path) = report {
        let report = ConformanceReport {
            title: "myconsts conformance".to_string(),
            fixture: format!("{}@{}", set.family, set.version),
            timestamp: timestamp.unwrap_or_else(now_utc),
            summary,
        };
        std::fs::write(report_path, report.to_markdown())?;
    }

    Ok(if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn show(format: ShowFormat) -> Result<ExitCode, HarnessError> {
    match format {
        ShowFormat::Plain => {
            for entry in CATALOG.iter() {
                println!(
                    "{:<8} {:>4}  {:<10} {}",
                    entry.name,
                    entry.value.as_c_int(),
                    entry.role.as_str(),
                    entry.summary
                );
            }
        }
        ShowFormat::Json => {
            let rows: Vec<_> = CATALOG
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "name": entry.name,
                        "value": entry.value.as_c_int(),
                        "role": entry.role.as_str(),
                        "aliases": entry.aliases,
                        "summary": entry.summary,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn validate_log(log: &Path) -> Result<ExitCode, HarnessError> {
    let content = std::fs::read_to_string(log)?;
    match validate_log_content(&content) {
        Ok(count) => {
            println!("{}: {count} valid entries", log.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            for e in &errors {
                eprintln!("{e}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

//! CLI entry point for relguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `relguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use relguard_app::{batch_exit_code, render_summary, run_batch, serialize_report, BatchInput, NamedScenario};

#[derive(Parser, Debug)]
#[command(
    name = "relguard",
    version,
    about = "Deployment governance gate: validates deployment requests against policy"
)]
struct Cli {
    /// Path to the policy JSON document.
    #[arg(long, default_value = "policies/policy.json")]
    policy: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every scenario in a directory and print a summary.
    Validate {
        /// Directory of scenario JSON files (one named scenario per file).
        #[arg(long, default_value = "test-inputs")]
        inputs: Utf8PathBuf,

        /// Where to write the JSON report (omitted: no artifact is written).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Validate { inputs, report_out } => cmd_validate(&cli.policy, &inputs, report_out),
    }
}

fn cmd_validate(
    policy_path: &Utf8Path,
    inputs_dir: &Utf8Path,
    report_out: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let policy_text = std::fs::read_to_string(policy_path)
            .with_context(|| format!("read policy: {policy_path}"))?;

        let scenarios = load_scenarios(inputs_dir)?;

        let output = run_batch(BatchInput {
            policy_text: &policy_text,
            scenarios,
        })?;

        print!("{}", render_summary(&output.report));

        if let Some(path) = &report_out {
            write_report_file(path, &serialize_report(&output.report)?)?;
        }

        Ok(batch_exit_code(&output.report))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("relguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Load every `*.json` file in the inputs directory as a named scenario.
/// Files are taken in name order so runs are deterministic.
fn load_scenarios(dir: &Utf8Path) -> anyhow::Result<Vec<NamedScenario>> {
    let entries =
        std::fs::read_dir(dir.as_std_path()).with_context(|| format!("read inputs: {dir}"))?;

    let mut paths: Vec<Utf8PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read inputs: {dir}"))?;
        let path = Utf8PathBuf::from_path_buf(entry.path())
            .map_err(|p| anyhow::anyhow!("non-UTF-8 path in inputs: {}", p.display()))?;
        if path.extension() == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut scenarios = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_stem()
            .context("scenario file has no stem")?
            .to_string();
        let text =
            std::fs::read_to_string(&path).with_context(|| format!("read scenario: {path}"))?;
        scenarios.push(NamedScenario { name, text });
    }
    Ok(scenarios)
}

fn write_report_file(path: &Utf8Path, json: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, json).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

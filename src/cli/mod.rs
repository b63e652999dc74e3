//! Command-line interface for stache
//!
//! `stache [--layout FILE] [--override FILE] [DATA] <TEMPLATE>`

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::domain::Invocation;
use crate::engine::MustacheEngine;
use crate::pipeline::run_pipeline;

const EXAMPLES: &str = "\
Examples:
  $ stache data.yml template.mustache
  $ cat data.yml | stache template.mustache
  $ stache --layout wrapper.mustache data.yml template.mustache
  $ stache --override over.yml data.yml template.mustache";

/// Render a mustache-style template against YAML data
#[derive(Parser, Debug)]
#[command(name = "stache")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "stache [OPTIONS] [DATA] <TEMPLATE>")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Data file followed by the template; with a single argument data is read from stdin
    #[arg(value_name = "ARGS")]
    args: Vec<PathBuf>,

    /// Layout template to wrap the rendered output in
    #[arg(long, value_name = "FILE")]
    layout: Option<OsString>,

    /// YAML file whose top-level keys override those of the data
    #[arg(long = "override", value_name = "FILE")]
    override_data: Option<OsString>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    // RUST_LOG directives win; without them --verbose picks DEBUG over WARN.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    // Flags stay raw strings so that an explicit empty value means "not set".
    let layout = cli.layout.map(PathBuf::from);
    let override_data = cli.override_data.map(PathBuf::from);
    let Some(invocation) = Invocation::from_args(cli.args, layout, override_data)? else {
        Cli::command().print_help().context("Failed to print usage")?;
        return Ok(());
    };
    tracing::debug!("Resolved invocation: {:?}", invocation);

    let output = run_pipeline(&invocation, &MustacheEngine::new())?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes()).context("Failed writing output")?;
    stdout.flush().context("Failed writing output")?;
    Ok(())
}

/// Help and version go to stdout with success; every other parse failure is
/// reduced to its one-line summary and reported like any other error.
fn handle_parse_error(err: clap::Error) -> Result<()> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print().context("Failed to print help")?;
            Ok(())
        }
        _ => Err(anyhow::anyhow!(summarize_parse_error(&err))),
    }
}

/// The error chain as one `: `-separated line; multi-line causes are folded
/// onto it so stderr always carries exactly one line.
pub fn error_line(err: &anyhow::Error) -> String {
    format!("{err:#}")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn summarize_parse_error(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_and_positionals_parse() {
        let cli = Cli::try_parse_from([
            "stache",
            "--layout",
            "wrap.mustache",
            "--override",
            "over.yml",
            "data.yml",
            "page.mustache",
        ])
        .expect("parse");
        assert_eq!(cli.layout, Some(OsString::from("wrap.mustache")));
        assert_eq!(cli.override_data, Some(OsString::from("over.yml")));
        assert_eq!(cli.args, vec![PathBuf::from("data.yml"), PathBuf::from("page.mustache")]);
        assert!(!cli.verbose);
    }

    #[test]
    fn extra_positionals_reach_argument_count_validation() {
        let cli = Cli::try_parse_from(["stache", "a", "b", "c"]).expect("parse");
        assert_eq!(cli.args.len(), 3);
        assert!(Invocation::from_args(cli.args, None, None).is_err());
    }

    #[test]
    fn unknown_flag_summary_is_one_line() {
        let err = Cli::try_parse_from(["stache", "--bogus"]).unwrap_err();
        let summary = summarize_parse_error(&err);
        assert!(summary.contains("--bogus"), "summary was: {summary}");
        assert!(!summary.contains('\n'));
        assert!(!summary.starts_with("error:"));
    }

    #[test]
    fn error_line_folds_multi_line_causes() {
        let err = anyhow::anyhow!("line one\n   |\n  line two\n")
            .context("failed to compile template page.mustache");
        assert_eq!(
            error_line(&err),
            "failed to compile template page.mustache: line one | line two"
        );
    }

    #[test]
    fn error_line_keeps_single_line_chains() {
        let err = anyhow::anyhow!("not found").context("failed to read data from d.yml");
        assert_eq!(error_line(&err), "failed to read data from d.yml: not found");
    }

    #[test]
    fn empty_flag_values_are_accepted() {
        let cli = Cli::try_parse_from(["stache", "--layout", "", "page.mustache"]).expect("parse");
        assert_eq!(cli.layout, Some(OsString::new()));
    }

    #[test]
    fn missing_flag_value_is_an_error() {
        assert!(Cli::try_parse_from(["stache", "page.mustache", "--layout"]).is_err());
    }
}

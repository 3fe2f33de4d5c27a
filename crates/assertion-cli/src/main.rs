//! Harness for running a registered assertion against a saved response.
//!
//! Starts the XPath assertion in a fresh registry, looks up the requested
//! assertion by name and evaluates it once. The exit code is 0 when the
//! assertion passes, 1 when it fails and 2 when the harness itself fails.

mod logging;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use assertion_traits::{AssertionRegistry, AssertionStatus, Response};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use xpath_assertion::XPathAssertion;

#[derive(Parser, Debug)]
#[command(
    name = "xpath-assert",
    version,
    about = "Check an XPath boolean expression against an XML response"
)]
struct Cli {
    /// XPath expression that must evaluate to true.
    #[arg(short, long)]
    expression: Option<String>,

    /// File holding the processor response (`-` reads stdin).
    #[arg(short, long)]
    response: Option<PathBuf>,

    /// Name of the registered assertion to run.
    #[arg(long, default_value = XPathAssertion::NAME)]
    assertion: String,

    /// How to print the result.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    logging::init();

    match run(Cli::parse()) {
        Ok(status) if status.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<AssertionStatus> {
    let mut registry = AssertionRegistry::new();
    XPathAssertion::start(&mut registry).context("Failed to start XPath assertion")?;
    debug!(?registry, "Assertions registered");

    let assertion = registry.get(&cli.assertion).with_context(|| {
        format!("Available assertions: {}", registry.names().join(", "))
    })?;

    let response = match &cli.response {
        Some(path) => Response::from_bytes(read_response(path)?),
        None => Response::none(),
    };

    let status = assertion.evaluate_assertion(cli.expression.as_deref(), &response);
    info!(
        assertion = assertion.name(),
        success = status.is_success(),
        "Assertion evaluated"
    );
    println!("{}", render(&status, cli.format)?);

    XPathAssertion::stop(&mut registry).context("Failed to stop XPath assertion")?;
    Ok(status)
}

fn read_response(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read response from stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("Failed to read response {}", path.display()))
}

fn render(status: &AssertionStatus, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match status.failure_details() {
            None => "PASS".to_string(),
            Some(details) => format!("FAIL: {}", details),
        }),
        OutputFormat::Json => {
            serde_json::to_string_pretty(status).context("Failed to serialize assertion status")
        }
    }
}

//! `tablecalc` — Interactive table interpolation calculator.
//!
//! Prompts for `x y z` and a text token on stdin, evaluates the formula chain
//! and prints `r`, `k` and `Variant(r, k)`.
//!
//! **Usage:**
//! ```
//! tablecalc [--config <path>] [--policy strict|lenient] [--precision <n>] [--json] [-v]
//! ```
//!
//! Lookup and input failures are printed as a diagnostic line and still exit
//! zero. Only an unreadable config file or a broken stdout exits non-zero.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tablecalc::{Config, Outcome, OutputFormat, Policy};

/// Evaluate the table interpolation formula chain.
#[derive(Parser)]
#[command(
    name = "tablecalc",
    about = "Interpolate fixed tables and blend the results",
    version
)]
struct Args {
    /// TOML config file (keys: policy, precision, format).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lookup policy; overrides the config file.
    #[arg(long, value_enum)]
    policy: Option<Policy>,

    /// Decimals in text output (0-255); overrides the config file.
    #[arg(long)]
    precision: Option<u8>,

    /// Print results as one JSON object.
    #[arg(long)]
    json: bool,

    /// Log lookups at debug level unless RUST_LOG is set.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if self.json {
            config.format = OutputFormat::Json;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let config = args.resolve_config()?;
    log::debug!("resolved config: {config:?}");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let outcome = tablecalc::run(stdin.lock(), &mut stdout, &config)
        .context("writing results to stdout")?;

    if let Outcome::Reported(message) = &outcome {
        log::debug!("reported instead of results: {message}");
    }
    Ok(())
}

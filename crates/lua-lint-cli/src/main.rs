//! lua-lint command-line front end.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p lua-lint-cli -- init.lua lib/*.lua
//! cat init.lua | cargo run -p lua-lint-cli -- --format json
//! ```
//!
//! # Configuration
//!
//! Options are read from `--config <FILE>`, or from `lua-lint.yaml` in the current directory
//! when present:
//!
//! ```yaml
//! rules:
//!   missing_then: false
//!   unclosed_block_width: 10
//! language:
//!   line_comment: "--"
//! ```
//!
//! # Logging
//!
//! Set `LUA_LINT_LOG` (e.g. `LUA_LINT_LOG=debug`) to see what the linter is doing; logs go to
//! stderr.
//!
//! # Exit status
//!
//! - 0: no errors (and no warnings with `--deny-warnings`)
//! - 1: diagnostics failed the run
//! - 2: an input or configuration file could not be read

mod output;

use anyhow::{Context, Result};
use clap::Parser;
use lua_lint::{LintConfig, Validator};
use output::{FileReport, OutputFormat};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_CONFIG_FILE: &str = "lua-lint.yaml";
const LOG_ENV: &str = "LUA_LINT_LOG";
const STDIN_PATH: &str = "-";
const STDIN_LABEL: &str = "<stdin>";

/// Structural linter for Lua source files
#[derive(Parser, Debug)]
#[command(name = "lua-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to lint; `-` or no files reads standard input
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to ./lua-lint.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat warnings as failures
    #[arg(long)]
    deny_warnings: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    exit_status(run(&cli, &mut std::io::stdin()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Map the outcome of a run to the process exit status; errors exit with 2.
fn exit_status(result: Result<ExitCode>) -> ExitCode {
    match result {
        Ok(status) => status,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli, stdin: &mut impl Read) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref(), Path::new("."))?;
    let validator = Validator::from_config(config).context("invalid configuration")?;

    let mut reports = Vec::new();
    for (path, text) in read_inputs(&cli.files, stdin)? {
        let diagnostics = validator.validate(&text);
        tracing::info!(path = %path, diagnostics = diagnostics.len(), "linted");
        reports.push(FileReport { path, diagnostics });
    }

    let rendered = output::render(cli.format, &reports).context("failed to render report")?;
    print!("{rendered}");

    if output::fails(&reports, cli.deny_warnings) {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Load `explicit`, else `lua-lint.yaml` in `search_dir` when present, else the defaults.
fn load_config(explicit: Option<&Path>, search_dir: &Path) -> Result<LintConfig> {
    let discovered = search_dir.join(DEFAULT_CONFIG_FILE);
    let path = match explicit {
        Some(path) => path,
        None if discovered.is_file() => discovered.as_path(),
        None => {
            tracing::debug!("no configuration file, using defaults");
            return Ok(LintConfig::default());
        }
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    LintConfig::from_path(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

fn read_inputs(files: &[PathBuf], stdin: &mut impl Read) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        return Ok(vec![(STDIN_LABEL.to_string(), read_stdin(stdin)?)]);
    }

    let mut inputs = Vec::with_capacity(files.len());
    for path in files {
        if path.as_os_str() == STDIN_PATH {
            inputs.push((STDIN_LABEL.to_string(), read_stdin(stdin)?));
            continue;
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        inputs.push((path.display().to_string(), text));
    }
    Ok(inputs)
}

fn read_stdin(stdin: &mut impl Read) -> Result<String> {
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("failed to read standard input")?;
    Ok(text)
}

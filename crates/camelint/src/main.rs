//! camelint - flags JavaScript identifiers that are not in camelCase.

mod discover;
mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use camelint_config::Config;
use camelint_diagnostics::Applicability;
use camelint_linter::fix::apply_fixes;
use camelint_linter::rules::Camelcase;
use camelint_linter::{FromConfig, Linter};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use rayon::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::report::FileReport;

#[derive(Parser, Debug)]
#[command(name = "camelint")]
#[command(version, about = "Flags JavaScript identifiers that are not in camelCase")]
struct Cli {
    /// Files or directories to check
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Path to a camelint.toml (defaults to ./camelint.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Whether property names are checked: "always" or "never"
    #[arg(long, value_name = "MODE")]
    properties: Option<String>,

    /// Apply fixes and write the files back
    #[arg(long)]
    fix: bool,

    /// Also apply fixes marked unsafe
    #[arg(long)]
    unsafe_fixes: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Checkstyle,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}

/// Logs go to stderr; `CAMELINT_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("CAMELINT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = load_config(cli)?;
    let linter = Linter::from_config(&config);

    let files = discover::collect_files(&cli.paths)?;
    info!(files = files.len(), "checking");

    let fix = if cli.fix {
        Some(if cli.unsafe_fixes {
            Applicability::Unsafe
        } else {
            Applicability::Safe
        })
    } else {
        None
    };

    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| lint_file(&linter, path, fix))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    match cli.format {
        OutputFormat::Text => report::print_text(&reports, cli.unsafe_fixes),
        OutputFormat::Checkstyle => {
            let stdout = std::io::stdout();
            report::write_checkstyle(&reports, stdout.lock())?;
        }
    }

    let remaining: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    Ok(if remaining > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            match Config::discover(&cwd)? {
                Some((path, config)) => {
                    debug!(path = %path.display(), "using configuration file");
                    config
                }
                None => Config::default(),
            }
        }
    };

    if let Some(mode) = &cli.properties {
        config.set_option(Camelcase::MODULE_NAME, "properties", mode);
    }
    Ok(config)
}

/// Lint one file, applying fixes first when requested.
///
/// Unreadable or unparsable files are skipped with a warning.
fn lint_file(
    linter: &Linter,
    path: &Path,
    fix: Option<Applicability>,
) -> Result<Option<FileReport>> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "skipping unreadable file");
            return Ok(None);
        }
    };

    let Some(diagnostics) = linter.check(&source) else {
        warn!(path = %path.display(), "failed to parse, skipping");
        return Ok(None);
    };
    debug!(path = %path.display(), violations = diagnostics.len(), "checked");

    let mut report = FileReport {
        path: path.to_path_buf(),
        source,
        diagnostics,
        fixed: 0,
    };

    if let Some(required) = fix {
        let result = apply_fixes(&report.source, &report.diagnostics, required);
        if result.fixed > 0 {
            fs::write(path, &result.code)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(path = %path.display(), fixed = result.fixed, "applied fixes");

            // Positions of what is left refer to the rewritten text.
            report.diagnostics = linter.check(&result.code).unwrap_or_default();
            report.source = result.code;
            report.fixed = result.fixed;
        }
    }

    Ok(Some(report))
}

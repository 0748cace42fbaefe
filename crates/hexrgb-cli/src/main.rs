//! hexrgb: command-line front end for the RGB/hex color converter.
//!
//! Results go to stdout; logs go to stderr through `tracing`.

mod cli;
mod commands;

use std::io::Write;
use std::process::ExitCode;

use hexrgb_common::HexrgbError;
use hexrgb_config::{HexrgbConfig, LogLevel, OutputFormat};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command, FormatArg};

/// Pick the log filter directive: `--log-level` if it parses, else `fallback`.
fn filter_directive(log_level: Option<&str>, fallback: LogLevel) -> &str {
    match log_level {
        Some(directive) if EnvFilter::try_new(directive).is_ok() => directive,
        _ => fallback.as_directive(),
    }
}

/// Initialize logging: `RUST_LOG` wins, then `--log-level`, then the config.
fn init_logging(log_level: Option<&str>, fallback: LogLevel) {
    let directive = filter_directive(log_level, fallback);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `--format` overrides `output.format`.
fn effective_format(format: Option<FormatArg>, config: &HexrgbConfig) -> OutputFormat {
    format.map_or(config.output.format, OutputFormat::from)
}

/// Strict encoding is on if either `--strict` or `encode.strict` asks for it.
fn effective_strict(strict: bool, config: &HexrgbConfig) -> bool {
    strict || config.encode.strict
}

/// Process exit status for a failed run.
fn exit_code(err: &HexrgbError) -> u8 {
    match err {
        HexrgbError::Config(_) => 2,
        _ => 1,
    }
}

fn run(args: Args, config: &HexrgbConfig) -> hexrgb_common::Result<()> {
    let format = effective_format(args.format, config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        None => commands::demo(&mut out, &config.demo, format)?,
        Some(Command::Encode { r, g, b, strict }) => {
            commands::encode(&mut out, [r, g, b], effective_strict(strict, config), format)?
        }
        Some(Command::Decode { hex }) => commands::decode(&mut out, &hex, format)?,
        Some(Command::Config { template }) => commands::show_config(&mut out, config, template)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let config = match hexrgb_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let err = HexrgbError::from(e);
            eprintln!("hexrgb: {err}");
            return ExitCode::from(exit_code(&err));
        }
    };

    init_logging(args.log_level.as_deref(), config.logging.level);
    match &args.config {
        Some(path) => tracing::info!("using config override: {}", path.display()),
        None => tracing::debug!("config resolved (format: {:?})", config.output.format),
    }

    match run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("hexrgb: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

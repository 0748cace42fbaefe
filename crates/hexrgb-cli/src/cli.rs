use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use hexrgb_config::OutputFormat;

/// hexrgb: convert between RGB channel triples and hex color codes.
///
/// Runs a short demo when no subcommand is given.
#[derive(Parser, Debug)]
#[command(name = "hexrgb", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `hexrgb=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format override.
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Encode three channels as `#RRGGBB`. Out-of-range values are clamped.
    Encode {
        #[arg(allow_negative_numbers = true)]
        r: i64,
        #[arg(allow_negative_numbers = true)]
        g: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,

        /// Fail on channels outside 0-255 instead of clamping.
        #[arg(long)]
        strict: bool,
    },

    /// Decode a hex color code (`#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`).
    Decode { hex: String },

    /// Print the effective configuration.
    Config {
        /// Print the commented default config file instead.
        #[arg(long)]
        template: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

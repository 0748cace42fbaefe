//! Subcommand implementations.
//!
//! Every command writes its result to the given writer so stdout stays
//! free of log output and the commands can be exercised in tests.

use std::io::Write;

use hexrgb_common::{
    clamp_channel, hex_to_rgb, parse_hex, rgb_to_hex, rgb_to_hex_strict, Rgb,
};
use hexrgb_config::schema::DemoConfig;
use hexrgb_config::{HexrgbConfig, OutputFormat};
use serde::Serialize;
use tracing::debug;

/// One conversion result as printed in JSON mode.
#[derive(Debug, Serialize)]
struct Conversion {
    hex: String,
    #[serde(flatten)]
    rgb: Rgb,
}

#[derive(Debug, Serialize)]
struct Failure<'a> {
    hex: &'a str,
    error: &'static str,
}

const INVALID_HEX: &str = "Invalid HEX value";

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> hexrgb_common::Result<()> {
    serde_json::to_writer(&mut *out, value)
        .map_err(|e| hexrgb_common::HexrgbError::Other(format!("failed to write JSON: {e}")))?;
    writeln!(out)?;
    Ok(())
}

/// Encode one RGB triple and print the hex code.
pub fn encode<W: Write>(
    out: &mut W,
    channels: [i64; 3],
    strict: bool,
    format: OutputFormat,
) -> hexrgb_common::Result<()> {
    let [r, g, b] = channels;
    let hex = if strict {
        rgb_to_hex_strict(r, g, b)?
    } else {
        rgb_to_hex(r, g, b)
    };
    debug!(r, g, b, strict, %hex, "encoded");

    match format {
        OutputFormat::Text => writeln!(out, "{hex}")?,
        OutputFormat::Json => {
            let rgb = Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b));
            write_json(out, &Conversion { hex, rgb })?;
        }
    }
    Ok(())
}

/// Decode one hex code and print its channels.
pub fn decode<W: Write>(out: &mut W, hex: &str, format: OutputFormat) -> hexrgb_common::Result<()> {
    let rgb = parse_hex(hex)?;
    debug!(input = hex, %rgb, "decoded");

    match format {
        OutputFormat::Text => writeln!(out, "R={}, G={}, B={}", rgb.r, rgb.g, rgb.b)?,
        OutputFormat::Json => write_json(
            out,
            &Conversion {
                hex: rgb.to_hex(),
                rgb,
            },
        )?,
    }
    Ok(())
}

/// Convert the configured demo inputs both ways.
pub fn demo<W: Write>(
    out: &mut W,
    demo: &DemoConfig,
    format: OutputFormat,
) -> hexrgb_common::Result<()> {
    let [r, g, b] = demo.rgb;
    let hex = rgb_to_hex(r, g, b);
    let decoded = hex_to_rgb(&demo.hex);

    match format {
        OutputFormat::Text => {
            writeln!(out, "RGB({r}, {g}, {b}) → {hex}")?;
            match decoded {
                Some(rgb) => writeln!(out, "{} → R={}, G={}, B={}", demo.hex, rgb.r, rgb.g, rgb.b)?,
                None => writeln!(out, "{INVALID_HEX}")?,
            }
        }
        OutputFormat::Json => {
            let rgb = Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b));
            write_json(out, &Conversion { hex, rgb })?;
            match decoded {
                Some(rgb) => write_json(
                    out,
                    &Conversion {
                        hex: rgb.to_hex(),
                        rgb,
                    },
                )?,
                None => write_json(
                    out,
                    &Failure {
                        hex: &demo.hex,
                        error: INVALID_HEX,
                    },
                )?,
            }
        }
    }
    Ok(())
}

/// Print the effective config, or the commented default template.
pub fn show_config<W: Write>(
    out: &mut W,
    config: &HexrgbConfig,
    template: bool,
) -> hexrgb_common::Result<()> {
    let rendered = if template {
        hexrgb_config::default_config_toml()
    } else {
        hexrgb_config::config_to_toml(config)?
    };
    write!(out, "{rendered}")?;
    Ok(())
}

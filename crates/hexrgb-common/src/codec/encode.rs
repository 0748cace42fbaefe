use tracing::debug;

use crate::errors::ColorError;
use crate::types::{Channel, Rgb};

/// Clamp an arbitrary integer into the `[0, 255]` channel range.
pub fn clamp_channel(value: i64) -> u8 {
    // In range after the clamp, so the cast is lossless.
    value.clamp(0, i64::from(u8::MAX)) as u8
}

fn clamp_logged(channel: Channel, value: i64) -> u8 {
    let clamped = clamp_channel(value);
    if i64::from(clamped) != value {
        debug!(%channel, value, clamped, "channel clamped");
    }
    clamped
}

fn strict_channel(channel: Channel, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { channel, value })
}

/// Encode three channels as `#RRGGBB`.
///
/// Never fails: each channel is clamped to `[0, 255]` independently, so
/// `rgb_to_hex(300, -10, 50)` yields `#FF0032`.
pub fn rgb_to_hex(r: i64, g: i64, b: i64) -> String {
    Rgb::new(
        clamp_logged(Channel::Red, r),
        clamp_logged(Channel::Green, g),
        clamp_logged(Channel::Blue, b),
    )
    .to_hex()
}

/// Encode three channels as `#RRGGBB`, rejecting any channel outside `[0, 255]`.
///
/// Channels are checked in red, green, blue order; the first offender is reported.
pub fn rgb_to_hex_strict(r: i64, g: i64, b: i64) -> Result<String, ColorError> {
    let rgb = Rgb::new(
        strict_channel(Channel::Red, r)?,
        strict_channel(Channel::Green, g)?,
        strict_channel(Channel::Blue, b)?,
    );
    Ok(rgb.to_hex())
}

//! Conversion between integer RGB triples and `#RRGGBB` hex codes.
//!
//! Encoding is total: channels outside `[0, 255]` are clamped before
//! formatting. [`rgb_to_hex_strict`] rejects them instead.
//!
//! Decoding accepts an optional leading `#`, either case, and the 3-digit
//! shorthand (`"ABC"` is read as `"AABBCC"`). Shorthand expansion runs before
//! the hex-digit check, so a malformed 3-character input fails as a malformed
//! 6-character one.

mod decode;
mod encode;

#[cfg(test)]
mod tests;

pub use decode::{hex_to_rgb, normalize_hex, parse_hex};
pub use encode::{clamp_channel, rgb_to_hex, rgb_to_hex_strict};

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::debug;

use crate::errors::ColorError;
use crate::types::Rgb;

/// Exactly six hex digits, either case.
static HEX6_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("hex pattern compiles"));

/// Trim, drop one leading `#`, and expand a 3-character body to 6.
///
/// The result is not validated yet.
fn expand(hex: &str) -> Cow<'_, str> {
    let body = hex.trim();
    let body = body.strip_prefix('#').unwrap_or(body);

    let mut chars = body.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(r), Some(g), Some(b), None) => Cow::Owned([r, r, g, g, b, b].iter().collect()),
        _ => Cow::Borrowed(body),
    }
}

fn validated(hex: &str) -> Option<Cow<'_, str>> {
    let expanded = expand(hex);
    if HEX6_RE.is_match(&expanded) {
        Some(expanded)
    } else {
        debug!(input = hex, "rejected hex color");
        None
    }
}

/// Parse a hex color code into an [`Rgb`].
///
/// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB` in either case, with
/// surrounding whitespace. Every other input is
/// [`ColorError::InvalidHexFormat`], carrying the original string.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidHexFormat(hex.to_string());
    let digits = validated(hex).ok_or_else(invalid)?;

    // Six ASCII digits, so byte slicing is on char boundaries.
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Decode a hex color code, returning `None` for anything malformed.
///
/// ```
/// use hexrgb_common::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#FF6432"), Some(Rgb::new(255, 100, 50)));
/// assert_eq!(hex_to_rgb("fff"), Some(Rgb::new(255, 255, 255)));
/// assert_eq!(hex_to_rgb("#12345"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    parse_hex(hex).ok()
}

/// The canonical uppercase six-digit body of a hex color code, without `#`.
pub fn normalize_hex(hex: &str) -> Option<String> {
    validated(hex).map(|digits| digits.to_ascii_uppercase())
}

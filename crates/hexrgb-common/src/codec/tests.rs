//! Tests for hex encoding and decoding.

use super::*;
use crate::errors::ColorError;
use crate::types::{Channel, Rgb};

fn is_canonical_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

#[test]
fn encode_basic() {
    assert_eq!(rgb_to_hex(255, 100, 50), "#FF6432");
}

#[test]
fn encode_zero_pads_each_channel() {
    assert_eq!(rgb_to_hex(5, 0, 15), "#05000F");
    assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
}

#[test]
fn encode_clamps_out_of_range() {
    assert_eq!(rgb_to_hex(300, -10, 50), "#FF0032");
    assert_eq!(rgb_to_hex(i64::MAX, i64::MIN, 256), "#FF00FF");
}

#[test]
fn encode_clamped_matches_encode_of_clamped() {
    let samples = [-1_000, -1, 256, 1_000, i64::MIN, i64::MAX];
    for &v in &samples {
        let clamped = i64::from(clamp_channel(v));
        assert_eq!(rgb_to_hex(v, v, v), rgb_to_hex(clamped, clamped, clamped));
        assert_eq!(rgb_to_hex(v, 7, 9), rgb_to_hex(clamped, 7, 9));
    }
}

#[test]
fn clamp_channel_bounds() {
    assert_eq!(clamp_channel(-1), 0);
    assert_eq!(clamp_channel(0), 0);
    assert_eq!(clamp_channel(128), 128);
    assert_eq!(clamp_channel(255), 255);
    assert_eq!(clamp_channel(256), 255);
}

#[test]
fn encode_output_is_always_canonical() {
    for v in (-300..=600).step_by(17) {
        let hex = rgb_to_hex(v, 255 - v, v / 2);
        assert!(is_canonical_hex(&hex), "not canonical: {hex}");
    }
}

#[test]
fn strict_encode_accepts_in_range() {
    assert_eq!(rgb_to_hex_strict(255, 100, 50).unwrap(), "#FF6432");
    assert_eq!(rgb_to_hex_strict(0, 0, 0).unwrap(), "#000000");
}

#[test]
fn strict_encode_rejects_first_offending_channel() {
    assert_eq!(
        rgb_to_hex_strict(300, -10, 50),
        Err(ColorError::ChannelOutOfRange {
            channel: Channel::Red,
            value: 300
        })
    );
    assert_eq!(
        rgb_to_hex_strict(0, -10, 999),
        Err(ColorError::ChannelOutOfRange {
            channel: Channel::Green,
            value: -10
        })
    );
    assert_eq!(
        rgb_to_hex_strict(0, 0, 256),
        Err(ColorError::ChannelOutOfRange {
            channel: Channel::Blue,
            value: 256
        })
    );
}

#[test]
fn decode_with_hash() {
    assert_eq!(hex_to_rgb("#FF6432"), Some(Rgb::new(255, 100, 50)));
}

#[test]
fn decode_is_case_insensitive() {
    assert_eq!(hex_to_rgb("#ff6432"), hex_to_rgb("#FF6432"));
    assert_eq!(hex_to_rgb("#fF6a3B"), Some(Rgb::new(255, 106, 59)));
}

#[test]
fn decode_hash_is_optional() {
    assert_eq!(hex_to_rgb("#A1B2C3"), hex_to_rgb("A1B2C3"));
    assert_eq!(hex_to_rgb("A1B2C3"), Some(Rgb::new(161, 178, 195)));
}

#[test]
fn decode_shorthand() {
    let expected = Some(Rgb::new(170, 187, 204));
    assert_eq!(hex_to_rgb("ABC"), expected);
    assert_eq!(hex_to_rgb("AABBCC"), expected);
    assert_eq!(hex_to_rgb("#abc"), expected);
    assert_eq!(hex_to_rgb("fff"), Some(Rgb::new(255, 255, 255)));
}

#[test]
fn decode_trims_whitespace() {
    assert_eq!(hex_to_rgb("  #FF6432\n"), Some(Rgb::new(255, 100, 50)));
    assert_eq!(hex_to_rgb("\t0f0 "), Some(Rgb::new(0, 255, 0)));
}

#[test]
fn decode_rejects_malformed() {
    for input in ["", "#", "12", "GGGGGG", "1234567", "#12345", "12 45 6", "#FF643"] {
        assert_eq!(hex_to_rgb(input), None, "accepted {input:?}");
    }
}

#[test]
fn decode_strips_only_one_hash() {
    assert_eq!(hex_to_rgb("##ABC"), None);
    assert_eq!(hex_to_rgb("##FF6432"), None);
    assert_eq!(hex_to_rgb("FF#432"), None);
}

#[test]
fn decode_expands_before_validating() {
    // Bad shorthand is expanded, then fails the six-digit check.
    assert_eq!(hex_to_rgb("XYZ"), None);
    assert_eq!(normalize_hex("XYZ"), None);
    // Multi-byte characters never reach byte slicing.
    assert_eq!(hex_to_rgb("é12"), None);
    assert_eq!(hex_to_rgb("ééé"), None);
}

#[test]
fn decode_does_not_expand_other_lengths() {
    assert_eq!(hex_to_rgb("ABCD"), None);
    assert_eq!(hex_to_rgb("AB"), None);
}

#[test]
fn parse_hex_reports_original_input() {
    assert_eq!(
        parse_hex(" #12345 "),
        Err(ColorError::InvalidHexFormat(" #12345 ".into()))
    );
}

#[test]
fn parse_hex_matches_hex_to_rgb() {
    for input in ["#FF6432", "abc", "zzz", ""] {
        assert_eq!(parse_hex(input).ok(), hex_to_rgb(input));
    }
}

#[test]
fn normalize_hex_canonical_form() {
    assert_eq!(normalize_hex("#ff6432").as_deref(), Some("FF6432"));
    assert_eq!(normalize_hex(" abc ").as_deref(), Some("AABBCC"));
    assert_eq!(normalize_hex("#12345"), None);
}

#[test]
fn round_trip_over_channel_cube() {
    for r in (0..=255).step_by(15) {
        for g in (0..=255).step_by(51) {
            for b in [0, 1, 127, 128, 254, 255] {
                let hex = rgb_to_hex(r, g, b);
                let rgb = hex_to_rgb(&hex).unwrap();
                assert_eq!(
                    (i64::from(rgb.r), i64::from(rgb.g), i64::from(rgb.b)),
                    (r, g, b)
                );
            }
        }
    }
}

#[test]
fn decode_then_encode_is_uppercase_identity() {
    let rgb = hex_to_rgb("#a1b2c3").unwrap();
    assert_eq!(
        rgb_to_hex(rgb.r.into(), rgb.g.into(), rgb.b.into()),
        "#A1B2C3"
    );
}

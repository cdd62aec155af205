//! Integer color value types — the public representations for floem-chroma.
//!
//! [`Rgb`] is the canonical value: every other format is derived from it on
//! demand and committed back through it, so representations can never fall
//! out of sync. Conversions quantize to the data model's integer ranges at
//! this boundary; the underlying arithmetic lives in [`crate::math`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::math;

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue (degrees, `0..360`), saturation and lightness (percent, `0..=100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Cyan/magenta/yellow/key percentages, `0..=100` each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex string (with or without `#`, 3 or 6 digits).
    ///
    /// 3-digit shorthand expands by doubling each digit (`F0A` → `FF00AA`).
    /// Anything else returns `None`; malformed input never maps to a color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let r = u8::from_str_radix(&digits[0..1], 16).ok()?;
                let g = u8::from_str_radix(&digits[1..2], 16).ok()?;
                let b = u8::from_str_radix(&digits[2..3], 16).ok()?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Format as uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl Cmyk {
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }
}

/// Whether `input` is acceptable to [`Rgb::from_hex`]: at most one leading
/// `#`, then exactly 3 or 6 ASCII hex digits.
pub fn is_valid_hex(input: &str) -> bool {
    let digits = input.strip_prefix('#').unwrap_or(input);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let (h, s, l) = math::rgb_to_hsl(
            rgb.r as f64 / 255.0,
            rgb.g as f64 / 255.0,
            rgb.b as f64 / 255.0,
        );
        Self {
            // A hue that rounds up to a full turn wraps back to zero.
            h: ((h * 360.0).round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let (r, g, b) = math::hsl_to_rgb(
            (hsl.h % 360) as f64 / 360.0,
            hsl.s.min(100) as f64 / 100.0,
            hsl.l.min(100) as f64 / 100.0,
        );
        Self {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
        }
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        let (c, m, y, k) = math::rgb_to_cmyk(
            rgb.r as f64 / 255.0,
            rgb.g as f64 / 255.0,
            rgb.b as f64 / 255.0,
        );
        Self {
            c: (c * 100.0).round() as u8,
            m: (m * 100.0).round() as u8,
            y: (y * 100.0).round() as u8,
            k: (k * 100.0).round() as u8,
        }
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        let (r, g, b) = math::cmyk_to_rgb(
            cmyk.c.min(100) as f64 / 100.0,
            cmyk.m.min(100) as f64 / 100.0,
            cmyk.y.min(100) as f64 / 100.0,
            cmyk.k.min(100) as f64 / 100.0,
        );
        Self {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

// Schemes and palettes serialize colors as their hex strings, matching the
// exported document formats.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Rgb::from_hex("#3B82F6"), Some(Rgb::new(59, 130, 246)));
        assert_eq!(Rgb::from_hex("3B82F6"), Some(Rgb::new(59, 130, 246)));
        assert_eq!(Rgb::from_hex("#ff6b6b"), Some(Rgb::new(255, 107, 107)));
    }

    #[test]
    fn expands_shorthand_by_digit_doubling() {
        assert_eq!(Rgb::from_hex("F0A"), Some(Rgb::new(0xFF, 0x00, 0xAA)));
        assert_eq!(Rgb::from_hex("#ABC"), Some(Rgb::new(0xAA, 0xBB, 0xCC)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Rgb::from_hex(""), None);
        assert_eq!(Rgb::from_hex("#12"), None);
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#1234567"), None);
        assert_eq!(Rgb::from_hex("GGGGGG"), None);
        assert_eq!(Rgb::from_hex("##ABC"), None);
    }

    #[test]
    fn validity_matches_parser() {
        for input in ["#FFF", "fff", "#3B82F6", "3b82f6"] {
            assert!(is_valid_hex(input), "{input}");
            assert!(Rgb::from_hex(input).is_some(), "{input}");
        }
        for input in ["", "#", "#FFFF", "#12345G", "##FFF", "rgb(0,0,0)"] {
            assert!(!is_valid_hex(input), "{input}");
            assert!(Rgb::from_hex(input).is_none(), "{input}");
        }
    }

    #[test]
    fn hex_formats_uppercase_with_prefix() {
        assert_eq!(Rgb::new(59, 130, 246).to_hex(), "#3B82F6");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn known_hsl_conversions() {
        assert_eq!(Hsl::from(Rgb::new(59, 130, 246)), Hsl::new(217, 91, 60));
        assert_eq!(Hsl::from(Rgb::new(255, 107, 107)), Hsl::new(0, 100, 71));
        assert_eq!(Hsl::from(Rgb::BLACK), Hsl::new(0, 0, 0));
        assert_eq!(Hsl::from(Rgb::WHITE), Hsl::new(0, 0, 100));
        assert_eq!(Hsl::from(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
        assert_eq!(Hsl::from(Rgb::new(0, 255, 0)), Hsl::new(120, 100, 50));
        assert_eq!(Hsl::from(Rgb::new(0, 0, 255)), Hsl::new(240, 100, 50));
    }

    #[test]
    fn hue_that_rounds_to_full_turn_wraps_to_zero() {
        // A red minutely tinted blue sits at 359.765°, which rounds to 360.
        let hsl = Hsl::from(Rgb::new(255, 0, 1));
        assert_eq!(hsl.h, 0);
    }

    #[test]
    fn known_cmyk_conversions() {
        assert_eq!(Cmyk::from(Rgb::new(59, 130, 246)), Cmyk::new(76, 47, 0, 4));
        assert_eq!(Cmyk::from(Rgb::BLACK), Cmyk::new(0, 0, 0, 100));
        assert_eq!(Cmyk::from(Rgb::WHITE), Cmyk::new(0, 0, 0, 0));
        assert_eq!(Cmyk::from(Rgb::new(255, 0, 0)), Cmyk::new(0, 100, 100, 0));
        assert_eq!(Rgb::from(Cmyk::new(0, 0, 0, 100)), Rgb::BLACK);
    }

    #[test]
    fn hsl_round_trip_drift_stays_within_one() {
        // Representative inputs; integer quantization keeps each channel
        // within ±1 of the input here.
        let samples = [
            Rgb::new(59, 130, 246),
            Rgb::new(255, 107, 107),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
            Rgb::new(128, 128, 128),
            Rgb::new(100, 100, 100),
            Rgb::new(200, 100, 100),
            Rgb::new(107, 255, 107),
            Rgb::new(250, 5, 0),
        ];
        for rgb in samples {
            let back = Rgb::from(Hsl::from(rgb));
            assert!(
                (back.r as i16 - rgb.r as i16).abs() <= 1
                    && (back.g as i16 - rgb.g as i16).abs() <= 1
                    && (back.b as i16 - rgb.b as i16).abs() <= 1,
                "{rgb:?} -> {back:?}"
            );
        }
    }

    #[test]
    fn cmyk_round_trip_drift_stays_within_one() {
        let samples = [
            Rgb::new(59, 130, 246),
            Rgb::new(255, 107, 107),
            Rgb::new(0, 133, 202),
            Rgb::new(45, 41, 38),
            Rgb::new(255, 0, 0),
            Rgb::new(128, 128, 128),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
        ];
        for rgb in samples {
            let back = Rgb::from(Cmyk::from(rgb));
            assert!(
                (back.r as i16 - rgb.r as i16).abs() <= 1
                    && (back.g as i16 - rgb.g as i16).abs() <= 1
                    && (back.b as i16 - rgb.b as i16).abs() <= 1,
                "{rgb:?} -> {back:?}"
            );
        }
    }

    #[test]
    fn display_strings_match_clipboard_formats() {
        assert_eq!(Rgb::new(59, 130, 246).to_string(), "rgb(59, 130, 246)");
        assert_eq!(Hsl::new(217, 91, 60).to_string(), "hsl(217, 91%, 60%)");
        assert_eq!(Cmyk::new(76, 47, 0, 4).to_string(), "cmyk(76%, 47%, 0%, 4%)");
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(59, 130, 246)).unwrap();
        assert_eq!(json, "\"#3B82F6\"");
    }

    proptest! {
        #[test]
        fn hex_round_trip_is_exact(r: u8, g: u8, b: u8) {
            let rgb = Rgb::new(r, g, b);
            prop_assert_eq!(Rgb::from_hex(&rgb.to_hex()), Some(rgb));
        }

        #[test]
        fn hsl_output_is_in_range(r: u8, g: u8, b: u8) {
            let hsl = Hsl::from(Rgb::new(r, g, b));
            prop_assert!(hsl.h < 360);
            prop_assert!(hsl.s <= 100);
            prop_assert!(hsl.l <= 100);
        }

        #[test]
        fn cmyk_output_is_in_range(r: u8, g: u8, b: u8) {
            let cmyk = Cmyk::from(Rgb::new(r, g, b));
            prop_assert!(cmyk.c <= 100);
            prop_assert!(cmyk.m <= 100);
            prop_assert!(cmyk.y <= 100);
            prop_assert!(cmyk.k <= 100);
        }

        #[test]
        fn conversions_are_deterministic(r: u8, g: u8, b: u8) {
            let rgb = Rgb::new(r, g, b);
            prop_assert_eq!(Hsl::from(rgb), Hsl::from(rgb));
            prop_assert_eq!(Cmyk::from(rgb), Cmyk::from(rgb));
        }
    }
}

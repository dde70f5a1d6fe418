//! Color types and conversion functions for the hue wheel.
//!
//! Provides three representations (`Hsv`, `Rgb`, `HexColor`) and pure
//! conversion functions between them. Conversions into `Rgb` quantize to
//! 8 bits, so HSV -> RGB -> HSV is lossy by a fraction of a degree while
//! RGB -> hex -> RGB is exact.

use crate::error::WheelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// HSV color. Hue in degrees, saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// 8-bit RGB color.
///
/// Displays as `rgb(r,g,b)`, the form SVG accepts for fills and strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A validated `#rrggbb` color string.
///
/// Parsing is case insensitive; the stored form is always lowercase.
/// Serializes as the hex string and validates on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Fully saturated, full value color at hue `h`, as sampled on the wheel.
    pub fn pure(h: f64) -> Self {
        Self { h, s: 1.0, v: 1.0 }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> HexColor {
        rgb_to_hex(self)
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl HexColor {
    /// Parses a strict `#rrggbb` string (case insensitive).
    ///
    /// Returns `WheelError::InvalidFormat` for a missing `#`, a length other
    /// than six digits, or any non-hex character.
    pub fn parse(s: &str) -> Result<Self, WheelError> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| WheelError::InvalidFormat(format!("{s:?}, expected #rrggbb")))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| WheelError::InvalidFormat(format!("{s:?}: {e}")))
        };
        Ok(rgb_to_hex(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        }))
    }

    /// Canonical lowercase form, e.g. `"#80ff00"`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Uppercase form for display only, e.g. `"#80FF00"`.
    pub fn to_display(&self) -> String {
        self.text.to_uppercase()
    }

    pub fn to_rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn to_hsv(&self) -> Hsv {
        rgb_to_hsv(self.rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for HexColor {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HexColor::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Maps NaN and infinities to 0 so every input has a defined output.
fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Converts HSV to 8-bit RGB.
///
/// `h` wraps modulo 360 (negative hues included); `s` and `v` are clamped to
/// [0, 1]. Each channel is rounded to the nearest integer independently.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = finite_or_zero(h).rem_euclid(360.0);
    let s = finite_or_zero(s).clamp(0.0, 1.0);
    let v = finite_or_zero(v).clamp(0.0, 1.0);

    let channel = |n: f64| {
        let k = (n + h / 60.0) % 6.0;
        let f = v - v * s * k.min(4.0 - k).min(1.0).max(0.0);
        (f * 255.0).round() as u8
    };

    Rgb {
        r: channel(5.0),
        g: channel(3.0),
        b: channel(1.0),
    }
}

/// Formats as `#rrggbb`, two lowercase zero-padded digits per channel.
pub fn rgb_to_hex(c: Rgb) -> HexColor {
    HexColor {
        text: format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b),
        rgb: c,
    }
}

/// Parses a strict `#rrggbb` string into its exact 8-bit channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, WheelError> {
    HexColor::parse(hex).map(|c| c.to_rgb())
}

/// Converts 8-bit RGB to HSV.
///
/// Achromatic colors (max == min) get hue 0. The sector formula already
/// lands in [0, 6) before scaling, so the hue is in [0, 360) without a
/// further wrap.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let sector = if d == 0.0 {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsv {
        h: sector * 60.0,
        s,
        v: max,
    }
}

/// Parses a strict `#rrggbb` string and converts it to HSV.
///
/// Returns `WheelError::InvalidFormat` when the input is not six hex digits
/// prefixed with `#`.
pub fn hex_to_hsv(hex: &str) -> Result<Hsv, WheelError> {
    HexColor::parse(hex).map(|c| c.to_hsv())
}

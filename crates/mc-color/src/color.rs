// SPDX-License-Identifier: MIT
//
// mc-color color system: one value type, two interchangeable encodings.
//
// A Color is either RGB (channels 0–255) or HSL (hue 0–360, saturation and
// lightness 0–100). Channels are clamped and rounded when the value is
// built, so an out-of-range Color cannot exist. Conversions always produce
// a fresh value; converting to the encoding a color already has returns an
// identical copy.
//
// There is no alpha channel. "Transparent" is a reserved RGB triple,
// (255, 255, 254), that no HSL value converts to and that the rule editor
// never produces from a color picker.
//
// Accepted string forms (case-insensitive, first match wins):
//
//   rgb(n, n, n)    hsl(n, n%, n%)    #rrggbb    #rgb
//
// Anything else falls back to opaque white.

// Single-character variable names (r, g, b, h, s, l) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Compile a fixed regex once and hand out the cached instance.
macro_rules! cached_regex {
    ($pattern:expr) => {{
        static REGEX: OnceLock<Regex> = OnceLock::new();
        REGEX.get_or_init(|| Regex::new($pattern).unwrap_or_else(|e| panic!("{e}")))
    }};
}

// ─── Encoding ────────────────────────────────────────────────────────────────

/// Which channel space a [`Color`] stores its three values in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Red, green, blue, each 0 to 255.
    Rgb,
    /// Hue 0 to 360, saturation and lightness 0 to 100.
    Hsl,
}

impl Encoding {
    /// Lower-case name used in CSS and in persisted rule sets.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }

    /// Parse an encoding name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("rgb") {
            Some(Self::Rgb)
        } else if name.eq_ignore_ascii_case("hsl") {
            Some(Self::Hsl)
        } else {
            None
        }
    }

    /// Upper bounds for the three channels of this encoding.
    const fn limits(self) -> (u16, u16, u16) {
        match self {
            Self::Rgb => (255, 255, 255),
            Self::Hsl => (360, 100, 100),
        }
    }
}

// ─── CssFormat ───────────────────────────────────────────────────────────────

/// Output syntax for [`Color::to_css`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssFormat {
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `rgb(r, g, b)`
    Rgb,
    /// `#rrggbb`
    Hex,
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color in RGB or HSL encoding with clamped, integral channels.
///
/// # Examples
///
/// ```
/// use mc_color::{Color, CssFormat, Encoding};
///
/// let red = Color::parse("rgb(255, 0, 0)");
/// assert_eq!(red.encoding(), Encoding::Rgb);
/// assert_eq!(red.to_css(CssFormat::Hsl), "hsl(0, 100%, 50%)");
///
/// // Out-of-range channels are clamped at construction.
/// let loud = Color::hsl(400.0, 150.0, -3.0);
/// assert_eq!(loud.channels(), (360, 100, 0));
///
/// // Unparseable input falls back to white.
/// assert_eq!(Color::parse("not a color"), Color::WHITE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ColorRecord")]
pub struct Color {
    enc: Encoding,
    c1: u16,
    c2: u16,
    c3: u16,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an RGB color. Channels are clamped to 0–255 and rounded.
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::with_encoding(Encoding::Rgb, r, g, b)
    }

    /// Create an HSL color. Hue is clamped to 0–360, saturation and
    /// lightness to 0–100; all three are rounded.
    #[must_use]
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::with_encoding(Encoding::Hsl, h, s, l)
    }

    /// Create an RGB color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            enc: Encoding::Rgb,
            c1: r as u16,
            c2: g as u16,
            c3: b as u16,
        }
    }

    /// Create a color from an encoding name and three numeric channels.
    ///
    /// `"rgb"` (any case) sets RGB channels. Any other name is treated as
    /// HSL; names other than `"hsl"` are logged as a warning.
    #[must_use]
    pub fn from_components(encoding: &str, c1: f64, c2: f64, c3: f64) -> Self {
        let enc = Encoding::from_name(encoding).unwrap_or_else(|| {
            warn!(encoding, "unknown color encoding, treating as hsl");
            Encoding::Hsl
        });
        Self::with_encoding(enc, c1, c2, c3)
    }

    fn with_encoding(enc: Encoding, c1: f64, c2: f64, c3: f64) -> Self {
        let (m1, m2, m3) = enc.limits();
        Self {
            enc,
            c1: standardize(c1, m1),
            c2: standardize(c2, m2),
            c3: standardize(c3, m3),
        }
    }

    /// Parse a CSS-like color string.
    ///
    /// Tries `rgb(...)`, `hsl(...)`, `#rrggbb` and `#rgb` in that order. The
    /// patterns are searched anywhere in the input, and percent signs after
    /// channel values are ignored. Returns [`Color::WHITE`] when nothing
    /// matches.
    #[must_use]
    pub fn parse(css: &str) -> Self {
        let css = css.to_lowercase();

        let rgb = cached_regex!(r"rgb\(([0-9]+)%?, *([0-9]+)%?, *([0-9]+)%?\)");
        if let Some(caps) = rgb.captures(&css) {
            return Self::rgb(channel(&caps[1]), channel(&caps[2]), channel(&caps[3]));
        }

        let hsl = cached_regex!(r"hsl\(([0-9]+)%?, *([0-9]+)%?, *([0-9]+)%?\)");
        if let Some(caps) = hsl.captures(&css) {
            return Self::hsl(channel(&caps[1]), channel(&caps[2]), channel(&caps[3]));
        }

        let hex6 = cached_regex!(r"#([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})");
        if let Some(caps) = hex6.captures(&css) {
            return Self::rgb8(hex_byte(&caps[1]), hex_byte(&caps[2]), hex_byte(&caps[3]));
        }

        let hex3 = cached_regex!(r"#([0-9a-f])([0-9a-f])([0-9a-f])");
        if let Some(caps) = hex3.captures(&css) {
            // Each digit is doubled: #f80 == #ff8800.
            let d = |s: &str| hex_digit_pair(s, s);
            return Self::rgb8(d(&caps[1]), d(&caps[2]), d(&caps[3]));
        }

        debug!(input = %css, "unrecognized color string, using white");
        Self::WHITE
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    /// The "no color" sentinel. Renders as fully transparent.
    pub const TRANSPARENT: Self = Self::rgb8(255, 255, 254);

    // ─── Accessors ───────────────────────────────────────────────────────

    /// The encoding the channels are stored in.
    #[inline]
    #[must_use]
    pub const fn encoding(self) -> Encoding {
        self.enc
    }

    /// The three stored channel values, in encoding order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> (u16, u16, u16) {
        (self.c1, self.c2, self.c3)
    }

    /// Whether this is the [`Color::TRANSPARENT`] sentinel.
    #[inline]
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self == Self::TRANSPARENT
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to RGB. Returns an identical copy if already RGB.
    #[must_use]
    pub fn to_rgb(self) -> Self {
        if self.enc == Encoding::Rgb {
            return self;
        }
        let (r, g, b) = hsl_to_rgb(f64::from(self.c1), f64::from(self.c2), f64::from(self.c3));
        Self::rgb(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Convert to HSL. Returns an identical copy if already HSL.
    #[must_use]
    pub fn to_hsl(self) -> Self {
        if self.enc == Encoding::Hsl {
            return self;
        }
        let (h, s, l) = rgb_to_hsl(self.c1, self.c2, self.c3);
        Self::hsl(h, s * 100.0, l * 100.0)
    }

    /// The stored channels as floats, after converting to HSL.
    pub(crate) fn hsl_channels(self) -> (f64, f64, f64) {
        let (h, s, l) = self.to_hsl().channels();
        (f64::from(h), f64::from(s), f64::from(l))
    }

    /// Mix toward `other` in HSL space.
    ///
    /// `weight` = 0.0 returns `self` (as HSL), 1.0 returns `other` (as HSL).
    /// Hue is interpolated linearly, not around the wheel.
    #[must_use]
    pub fn mix(self, other: Self, weight: f64) -> Self {
        let (h1, s1, l1) = self.hsl_channels();
        let (h2, s2, l2) = other.hsl_channels();
        Self::hsl(
            (h2 - h1).mul_add(weight, h1),
            (s2 - s1).mul_add(weight, s1),
            (l2 - l1).mul_add(weight, l1),
        )
    }

    // ─── CSS Output ──────────────────────────────────────────────────────

    /// Format as a CSS color value.
    #[must_use]
    pub fn to_css(self, format: CssFormat) -> String {
        match format {
            CssFormat::Hsl => {
                let (h, s, l) = self.to_hsl().channels();
                format!("hsl({h}, {s}%, {l}%)")
            }
            CssFormat::Rgb => {
                let (r, g, b) = self.to_rgb().channels();
                format!("rgb({r}, {g}, {b})")
            }
            CssFormat::Hex => self.to_hex(),
        }
    }

    /// Format as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb().channels();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Format as `#rrggbbaa`: alpha `ff`, or `00` for the transparent
    /// sentinel so it renders as no color at all.
    #[must_use]
    pub fn to_css_alpha_hex(self) -> String {
        let alpha = if self.is_transparent() { "00" } else { "ff" };
        format!("{}{alpha}", self.to_hex())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::{}({}, {}, {})", self.enc.name(), self.c1, self.c2, self.c3)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Persisted Form ──────────────────────────────────────────────────────────

/// Wire shape of a color: `{"enc": "hsl", "c1": 130, "c2": 70, "c3": 43}`.
///
/// Deserialization goes through [`Color::from_components`], so stored
/// values are re-clamped and unknown encodings are handled the same way as
/// explicit construction.
#[derive(Deserialize)]
struct ColorRecord {
    enc: String,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl From<ColorRecord> for Color {
    fn from(record: ColorRecord) -> Self {
        Self::from_components(&record.enc, record.c1, record.c2, record.c3)
    }
}

// ─── Channel Math ────────────────────────────────────────────────────────────

/// Clamp to `[0, max]` and round. NaN becomes 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn standardize(value: f64, max: u16) -> u16 {
    if value.is_nan() {
        warn!("color channel is NaN, using 0");
        return 0;
    }
    // Safe: clamp guarantees 0.0 <= value <= max before the cast.
    value.clamp(0.0, f64::from(max)).round() as u16
}

/// Numeric value of a run of ASCII digits.
fn channel(digits: &str) -> f64 {
    digits.parse().unwrap_or(0.0)
}

/// Piecewise hue-to-channel function over six hue sectors.
fn hue_to_channel(t1: f64, t2: f64, hue: f64) -> f64 {
    let hue = if hue < 0.0 {
        hue + 6.0
    } else if hue >= 6.0 {
        hue - 6.0
    } else {
        hue
    };

    if hue < 1.0 {
        (t2 - t1).mul_add(hue, t1)
    } else if hue < 3.0 {
        t2
    } else if hue < 4.0 {
        (t2 - t1).mul_add(4.0 - hue, t1)
    } else {
        t1
    }
}

/// HSL (degrees, percent, percent) → RGB (0.0–1.0 each).
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let hue = ((h + 360.0) % 360.0) / 60.0;
    let light = (l / 100.0).clamp(0.0, 1.0);
    let sat = (s / 100.0).clamp(0.0, 1.0);
    let t2 = if light <= 0.5 {
        light * (sat + 1.0)
    } else {
        light.mul_add(-sat, light + sat)
    };
    let t1 = light.mul_add(2.0, -t2);
    (
        hue_to_channel(t1, t2, hue + 2.0),
        hue_to_channel(t1, t2, hue),
        hue_to_channel(t1, t2, hue - 2.0),
    )
}

/// RGB (0–255 each) → HSL (degrees, 0.0–1.0, 0.0–1.0).
///
/// Achromatic input (all channels equal) has hue 0 and saturation 0.
fn rgb_to_hsl(r: u16, g: u16, b: u16) -> (f64, f64, f64) {
    let max_i = r.max(g).max(b);
    let min_i = r.min(g).min(b);

    let rf = f64::from(r) / 255.0;
    let gf = f64::from(g) / 255.0;
    let bf = f64::from(b) / 255.0;
    let max = f64::from(max_i) / 255.0;
    let min = f64::from(min_i) / 255.0;
    let delta = max - min;

    let sector = if max_i == min_i {
        0.0
    } else if r == max_i {
        (gf - bf) / delta
    } else if g == max_i {
        2.0 + (bf - rf) / delta
    } else {
        4.0 + (rf - gf) / delta
    };

    let mut h = (sector * 60.0).min(360.0);
    if h < 0.0 {
        h += 360.0;
    }

    let l = (min + max) / 2.0;
    let s = if max_i == min_i {
        0.0
    } else if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    (h, s, l)
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

#[inline]
const fn parse_hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

/// Two hex digits (already validated by the caller's regex) as a byte.
fn hex_digit_pair(hi: &str, lo: &str) -> u8 {
    let hi = hi.bytes().next().map_or(0, parse_hex_digit);
    let lo = lo.bytes().next().map_or(0, parse_hex_digit);
    (hi << 4) | lo
}

fn hex_byte(pair: &str) -> u8 {
    let (hi, lo) = pair.split_at(1);
    hex_digit_pair(hi, lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: assert two colors' RGB channels are within ±1.
    fn assert_rgb_close(actual: Color, expected: Color) {
        let (ar, ag, ab) = actual.to_rgb().channels();
        let (er, eg, eb) = expected.to_rgb().channels();
        assert!(
            ar.abs_diff(er) <= 1 && ag.abs_diff(eg) <= 1 && ab.abs_diff(eb) <= 1,
            "RGB mismatch: got ({ar}, {ag}, {ab}), expected ({er}, {eg}, {eb})"
        );
    }

    // ── String Parsing ───────────────────────────────────────────────────

    #[test]
    fn parse_rgb_function() {
        let c = Color::parse("rgb(10, 20, 30)");
        assert_eq!(c.encoding(), Encoding::Rgb);
        assert_eq!(c.channels(), (10, 20, 30));
    }

    #[test]
    fn parse_rgb_without_spaces() {
        assert_eq!(Color::parse("rgb(1,2,3)").channels(), (1, 2, 3));
    }

    #[test]
    fn parse_hsl_with_percent_signs() {
        let c = Color::parse("hsl(130, 70%, 43%)");
        assert_eq!(c.encoding(), Encoding::Hsl);
        assert_eq!(c.channels(), (130, 70, 43));
    }

    #[test]
    fn parse_hsl_without_percent_signs() {
        assert_eq!(Color::parse("hsl(0,0,100)").channels(), (0, 0, 100));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Color::parse("HSL(240, 100%, 70%)").channels(), (240, 100, 70));
        assert_eq!(Color::parse("#FF8000"), Color::rgb8(255, 128, 0));
    }

    #[test]
    fn parse_hex_long() {
        assert_eq!(Color::parse("#c86432"), Color::rgb8(0xc8, 0x64, 0x32));
    }

    #[test]
    fn parse_hex_short_doubles_digits() {
        assert_eq!(Color::parse("#f80"), Color::rgb8(0xff, 0x88, 0x00));
    }

    #[test]
    fn parse_clamps_rgb_channels() {
        assert_eq!(Color::parse("rgb(300, 0, 999)").channels(), (255, 0, 255));
    }

    #[test]
    fn parse_clamps_hsl_channels() {
        assert_eq!(Color::parse("hsl(400, 150%, 50%)").channels(), (360, 100, 50));
    }

    #[test]
    fn parse_garbage_falls_back_to_white() {
        assert_eq!(Color::parse(""), Color::WHITE);
        assert_eq!(Color::parse("chartreuse"), Color::WHITE);
        assert_eq!(Color::parse("#12"), Color::WHITE);
    }

    // ── Explicit Construction ────────────────────────────────────────────

    #[test]
    fn components_rgb_name() {
        let c = Color::from_components("RGB", 1.4, 2.6, 300.0);
        assert_eq!(c.encoding(), Encoding::Rgb);
        assert_eq!(c.channels(), (1, 3, 255));
    }

    #[test]
    fn components_unknown_name_is_hsl() {
        let c = Color::from_components("cmyk", 10.0, 20.0, 30.0);
        assert_eq!(c.encoding(), Encoding::Hsl);
        assert_eq!(c.channels(), (10, 20, 30));
    }

    #[test]
    fn nan_channel_becomes_zero() {
        let c = Color::rgb(f64::NAN, 12.0, f64::NAN);
        assert_eq!(c.channels(), (0, 12, 0));
    }

    #[test]
    fn negative_channels_clamp_to_zero() {
        assert_eq!(Color::hsl(-20.0, -1.0, -0.4).channels(), (0, 0, 0));
    }

    // ── Conversions ──────────────────────────────────────────────────────

    #[test]
    fn red_to_hsl() {
        assert_eq!(Color::rgb8(255, 0, 0).to_hsl(), Color::hsl(0.0, 100.0, 50.0));
    }

    #[test]
    fn gray_is_achromatic() {
        let (h, s, _) = Color::rgb8(128, 128, 128).to_hsl().channels();
        assert_eq!((h, s), (0, 0));
    }

    #[test]
    fn hsl_white_and_black() {
        assert_eq!(Color::hsl(0.0, 0.0, 100.0).to_rgb(), Color::WHITE);
        assert_eq!(Color::hsl(0.0, 0.0, 0.0).to_rgb(), Color::BLACK);
    }

    #[test]
    fn hsl_to_rgb_known_value() {
        // hsl(130, 70%, 43%) ≈ rgb(33, 186, 58)
        assert_rgb_close(Color::hsl(130.0, 70.0, 43.0), Color::rgb8(33, 186, 58));
    }

    #[test]
    fn conversion_to_same_encoding_is_identity() {
        let rgb = Color::rgb8(12, 34, 56);
        assert_eq!(rgb.to_rgb(), rgb);
        let hsl = Color::hsl(200.0, 30.0, 40.0);
        assert_eq!(hsl.to_hsl(), hsl);
    }

    #[test]
    fn to_rgb_is_idempotent() {
        let c = Color::hsl(275.0, 64.0, 38.0);
        assert_eq!(c.to_rgb().to_rgb(), c.to_rgb());
    }

    #[test]
    fn rgb_roundtrip_through_hsl() {
        let samples = [
            Color::rgb8(255, 0, 0),
            Color::rgb8(0, 255, 0),
            Color::rgb8(0, 0, 255),
            Color::rgb8(255, 255, 0),
            Color::rgb8(0, 255, 255),
            Color::rgb8(255, 0, 255),
            Color::rgb8(128, 128, 128),
            Color::WHITE,
            Color::BLACK,
        ];
        for c in samples {
            assert_rgb_close(c.to_hsl().to_rgb(), c);
        }
    }

    #[test]
    fn hsl_roundtrip_through_rgb() {
        for c in [Color::hsl(130.0, 70.0, 43.0), Color::hsl(4.0, 90.0, 50.0)] {
            assert_eq!(c.to_rgb().to_hsl(), c, "roundtrip of {c:?}");
        }
    }

    // ── Mixing ───────────────────────────────────────────────────────────

    #[test]
    fn mix_endpoints() {
        let a = Color::hsl(100.0, 50.0, 20.0);
        let b = Color::hsl(200.0, 10.0, 80.0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }

    #[test]
    fn mix_midpoint_is_linear() {
        let a = Color::hsl(100.0, 50.0, 20.0);
        let b = Color::hsl(200.0, 10.0, 80.0);
        assert_eq!(a.mix(b, 0.5).channels(), (150, 30, 50));
    }

    // ── CSS Output ───────────────────────────────────────────────────────

    #[test]
    fn css_formats() {
        let c = Color::rgb8(255, 0, 0);
        assert_eq!(c.to_css(CssFormat::Rgb), "rgb(255, 0, 0)");
        assert_eq!(c.to_css(CssFormat::Hex), "#ff0000");
        assert_eq!(c.to_css(CssFormat::Hsl), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn hex_pads_small_channels() {
        assert_eq!(Color::rgb8(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn alpha_hex_marks_transparent() {
        assert_eq!(Color::BLACK.to_css_alpha_hex(), "#000000ff");
        assert_eq!(Color::TRANSPARENT.to_css_alpha_hex(), "#fffffe00");
    }

    #[test]
    fn transparent_is_not_white() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::WHITE.is_transparent());
        assert!(!Color::hsl(0.0, 0.0, 100.0).to_rgb().is_transparent());
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color::hsl(0.0, 0.0, 0.0).to_string(), "#000000");
    }

    #[test]
    fn debug_shows_encoding() {
        assert_eq!(format!("{:?}", Color::hsl(1.0, 2.0, 3.0)), "Color::hsl(1, 2, 3)");
    }

    // ── Serialization ────────────────────────────────────────────────────

    #[test]
    fn serializes_as_record() {
        let json = serde_json::to_string(&Color::hsl(130.0, 70.0, 43.0)).unwrap();
        assert_eq!(json, r#"{"enc":"hsl","c1":130,"c2":70,"c3":43}"#);
    }

    #[test]
    fn deserialize_reclamps() {
        let c: Color = serde_json::from_str(r#"{"enc":"rgb","c1":-5,"c2":12.6,"c3":400}"#).unwrap();
        assert_eq!(c.channels(), (0, 13, 255));
    }

    #[test]
    fn deserialize_unknown_encoding_as_hsl() {
        let c: Color = serde_json::from_str(r#"{"enc":"lab","c1":10,"c2":20,"c3":30}"#).unwrap();
        assert_eq!(c, Color::hsl(10.0, 20.0, 30.0));
    }
}

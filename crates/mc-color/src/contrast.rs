//! WCAG luminance, contrast selection, and complementary color pairs.
//!
//! Everything in this module reads colors through RGB for luminance and
//! through HSL for hue arithmetic. Results are always returned in HSL
//! encoding.

use std::f64::consts::PI;

use crate::color::Color;

/// Weight used when pulling the light/dark scale pair toward the base color.
pub const DEFAULT_SCALE_AMOUNT: f64 = 0.15;

/// sRGB channel (0–255) to linear light, with the WCAG 2.0 threshold.
fn srgb_to_linear(channel: u16) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the WCAG 2.0 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]; argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = a.luma();
    let lb = b.luma();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

impl Color {
    /// Relative luminance per WCAG 2.0, in [0.0, 1.0].
    ///
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    #[must_use]
    pub fn luma(self) -> f64 {
        let (r, g, b) = self.to_rgb().channels();
        0.2126f64.mul_add(
            srgb_to_linear(r),
            0.7152f64.mul_add(srgb_to_linear(g), 0.0722 * srgb_to_linear(b)),
        )
    }

    /// Pick whichever of `dark` or `light` has the higher contrast ratio
    /// against `self`. Ties go to `light`. The winner is returned as HSL.
    #[must_use]
    pub fn contrast(self, dark: Self, light: Self) -> Self {
        let dark = dark.to_hsl();
        let light = light.to_hsl();
        if contrast_ratio(self, dark) > contrast_ratio(self, light) {
            dark
        } else {
            light
        }
    }

    /// Derive a `(light, dark)` pair from this color.
    ///
    /// The light member starts at white; the dark member applies an
    /// empirical hue/saturation/lightness shift that keeps the darkened tone
    /// perceptually in the same hue family. Both are then mixed toward
    /// `self` by `amount`.
    #[must_use]
    pub fn scale(self, amount: f64) -> (Self, Self) {
        let (h, s, l) = self.hsl_channels();
        let phase = h / 360.0;
        let wobble = (4.0 * PI * phase).sin();

        let shifted = Self::hsl(
            20.0f64.mul_add(-wobble, h),
            20.0f64.mul_add((2.0 * PI * phase).sin(), s),
            if h >= 180.0 {
                l - 35.0
            } else {
                10.0f64.mul_add(wobble, l - 20.0)
            },
        );
        let white = Self::hsl(0.0, 0.0, 100.0);

        (white.mix(self, amount), shifted.mix(self, amount))
    }

    /// Complementary `(foreground, background)` pair.
    ///
    /// The background is this color rotated 180° around the hue wheel. The
    /// foreground is whichever member of the background's scale pair reads
    /// best on it.
    #[must_use]
    pub fn to_complementary(self) -> (Self, Self) {
        let (h, s, l) = self.hsl_channels();
        let bg = Self::hsl((h + 180.0) % 360.0, s, l);
        let (light, dark) = bg.scale(DEFAULT_SCALE_AMOUNT);
        (bg.contrast(dark, light), bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Luminance ────────────────────────────────────────────────────────

    #[test]
    fn luma_extremes() {
        assert!(Color::BLACK.luma().abs() < 1e-9);
        assert!((Color::WHITE.luma() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn luma_reads_hsl_through_rgb() {
        let hsl = Color::hsl(120.0, 100.0, 50.0);
        assert!((hsl.luma() - Color::rgb8(0, 255, 0).luma()).abs() < 1e-9);
    }

    #[test]
    fn ratio_black_white_is_21() {
        let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = Color::rgb8(200, 50, 10);
        let b = Color::rgb8(10, 30, 90);
        assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < 1e-12);
    }

    // ── Contrast Selection ───────────────────────────────────────────────

    #[test]
    fn contrast_picks_the_higher_ratio() {
        let base = Color::hsl(0.0, 0.0, 50.0);
        let dark = Color::BLACK;
        let light = Color::WHITE;
        let expected = if contrast_ratio(base, dark) > contrast_ratio(base, light) {
            dark.to_hsl()
        } else {
            light.to_hsl()
        };
        let picked = base.contrast(dark, light);
        assert_eq!(picked, expected);
        // Mid gray (rgb 128) reads better against black: 5.3 vs 3.9.
        assert_eq!(picked, Color::hsl(0.0, 0.0, 0.0));
    }

    #[test]
    fn contrast_on_dark_base_picks_light() {
        let picked = Color::rgb8(20, 20, 40).contrast(Color::BLACK, Color::WHITE);
        assert_eq!(picked, Color::hsl(0.0, 0.0, 100.0));
    }

    #[test]
    fn contrast_returns_hsl() {
        let picked = Color::WHITE.contrast(Color::rgb8(0, 0, 128), Color::rgb8(250, 250, 250));
        assert_eq!(picked.encoding(), crate::Encoding::Hsl);
    }

    // ── Scale ────────────────────────────────────────────────────────────

    #[test]
    fn scale_gray() {
        let (light, dark) = Color::hsl(0.0, 0.0, 50.0).scale(DEFAULT_SCALE_AMOUNT);
        // Dark: lightness 50 - 20 = 30, pulled 15% back toward 50.
        assert_eq!(dark, Color::hsl(0.0, 0.0, 33.0));
        // Light: white pulled 15% toward the base.
        let (_, s, l) = light.channels();
        assert_eq!(s, 0);
        assert!((92..=93).contains(&l), "light lightness {l}");
    }

    #[test]
    fn scale_zero_amount_keeps_endpoints() {
        let (light, dark) = Color::hsl(200.0, 40.0, 60.0).scale(0.0);
        assert_eq!(light, Color::hsl(0.0, 0.0, 100.0));
        // Cool hues darken by a flat 35.
        assert_eq!(dark.channels().2, 25);
    }

    // ── Complementary ────────────────────────────────────────────────────

    #[test]
    fn complementary_of_red() {
        let red = Color::rgb8(255, 0, 0);
        let (fg, bg) = red.to_complementary();
        assert_eq!(bg, Color::hsl(180.0, 100.0, 50.0));
        // Cyan is bright, so the darkened scale member wins.
        assert_eq!(fg, Color::hsl(180.0, 100.0, 20.0));
        assert_eq!(red, Color::rgb8(255, 0, 0));
    }

    #[test]
    fn complementary_hue_wraps() {
        let (_, bg) = Color::hsl(270.0, 50.0, 50.0).to_complementary();
        assert_eq!(bg.channels().0, 90);
    }

    #[test]
    fn complementary_fg_contrasts_at_least_as_well_as_alternative() {
        let (fg, bg) = Color::hsl(45.0, 80.0, 40.0).to_complementary();
        let (light, dark) = bg.scale(DEFAULT_SCALE_AMOUNT);
        let best = contrast_ratio(bg, dark).max(contrast_ratio(bg, light));
        assert!((contrast_ratio(bg, fg) - best).abs() < 1e-9);
    }
}

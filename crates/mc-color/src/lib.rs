// SPDX-License-Identifier: MIT
//
// mc-color: the color model for mathcolor.
//
// A small value type with two encodings (RGB and HSL) and the handful of
// operations the rule editor and renderer need: CSS parsing and output,
// WCAG luminance and contrast selection, linear HSL mixing, and derivation
// of a readable complementary foreground/background pair.
//
// Colors are plain `Copy` values. Nothing here mutates in place; every
// conversion or derivation hands back a new color.

pub mod color;
pub mod contrast;

pub use color::{Color, CssFormat, Encoding};
pub use contrast::{DEFAULT_SCALE_AMOUNT, contrast_ratio};

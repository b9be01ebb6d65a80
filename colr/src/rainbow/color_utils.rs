// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineEscCode, RgbValue, SgrCode, extended_from_rgb};
use std::f64::consts::PI;

/// Lower frequencies than this barely change color from one character to the next.
pub const MIN_FREQ: f64 = 0.1;

/// Used in place of an offset of `0`, which starts on an undersaturated color.
pub const DEFAULT_OFFSET: usize = 3;

/// The color at `offset` steps into the rainbow. `freq` is how tightly the colors are
/// packed; it is clamped to at least [`MIN_FREQ`]. An `offset` of `0` is treated as
/// [`DEFAULT_OFFSET`].
///
/// ```
/// use r3bl_colr::{RgbValue, step};
///
/// assert_eq!(step(0.1, 3), RgbValue::from_u8(165, 214, 4));
/// assert_eq!(step(0.0, 0), step(0.1, 3));
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn step(freq: f64, offset: usize) -> RgbValue {
    let freq = freq.max(MIN_FREQ);
    let offset = if offset == 0 { DEFAULT_OFFSET } else { offset };
    let i = freq * offset as f64;
    // Always in 1..=255.
    let channel = |phase: f64| ((i + phase).sin() * 127.0 + 128.0) as u8;
    RgbValue::from_u8(channel(0.0), channel(PI * 2.0 / 3.0), channel(PI * 4.0 / 3.0))
}

/// Turns one rainbow step into an escape code.
pub type RgbFormatter = fn(RgbValue) -> InlineEscCode;

/// Truecolor foreground.
#[must_use]
pub fn fg_rgb_formatter(rgb: RgbValue) -> InlineEscCode {
    SgrCode::ForegroundRGB(rgb.red, rgb.green, rgb.blue).to_inline()
}

/// Truecolor background.
#[must_use]
pub fn bg_rgb_formatter(rgb: RgbValue) -> InlineEscCode {
    SgrCode::BackgroundRGB(rgb.red, rgb.green, rgb.blue).to_inline()
}

/// Nearest 256-color foreground.
#[must_use]
pub fn fg_rgb_term_formatter(rgb: RgbValue) -> InlineEscCode {
    SgrCode::ForegroundAnsi256(extended_from_rgb(rgb)).to_inline()
}

/// Nearest 256-color background.
#[must_use]
pub fn bg_rgb_term_formatter(rgb: RgbValue) -> InlineEscCode {
    SgrCode::BackgroundAnsi256(extended_from_rgb(rgb)).to_inline()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(0.1, 3, (165, 214, 4))]
    #[test_case(0.1, 4, (177, 204, 1))]
    #[test_case(0.5, 1, (188, 194, 1))]
    #[test_case(1.0, 10, (58, 70, 254))]
    fn steps(freq: f64, offset: usize, expected: (u8, u8, u8)) {
        assert_eq2!(step(freq, offset), RgbValue::from(expected));
    }

    #[test]
    fn clamps() {
        assert_eq2!(step(0.0, 3), step(MIN_FREQ, 3));
        assert_eq2!(step(-4.0, 3), step(MIN_FREQ, 3));
        assert_eq2!(step(0.1, 0), step(0.1, DEFAULT_OFFSET));
    }

    #[test]
    fn formatters() {
        let rgb = RgbValue::from_u8(165, 214, 4);
        assert_eq2!(fg_rgb_formatter(rgb).as_str(), "\x1b[38;2;165;214;4m");
        assert_eq2!(bg_rgb_formatter(rgb).as_str(), "\x1b[48;2;165;214;4m");
        let black = RgbValue::from_u8(0, 0, 0);
        assert_eq2!(fg_rgb_term_formatter(black).as_str(), "\x1b[38;5;0m");
        assert_eq2!(bg_rgb_term_formatter(black).as_str(), "\x1b[48;5;0m");
    }
}

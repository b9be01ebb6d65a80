// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use crate::{CSI, ColorValue, InlineEscCode, RgbValue, Role, SGR, SGR_BG_EXTENDED,
            SGR_FG_EXTENDED, SGR_SELECT_ANSI256, SGR_SELECT_RGB, extended_from_rgb};
use std::fmt::{Display, Formatter, Result, Write};

/// One SGR escape code, ready to be written. [`SgrCode::byte_len`] and the
/// [`Display`] impl must always agree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    /// A single parameter: basic colors and styles.
    Param(u8),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

impl SgrCode {
    /// The code for `value` in `role`, or [`None`] if nothing should be written:
    /// - `value` is empty or invalid.
    /// - `role` is [`Role::None`].
    /// - `role` is [`Role::Style`] but `value` is a color.
    ///
    /// A style value is written as a style under any role.
    #[must_use]
    pub fn from_role_value(role: Role, value: &ColorValue) -> Option<SgrCode> {
        match (role, value) {
            (Role::None, _) | (_, ColorValue::Empty | ColorValue::Invalid(_)) => None,
            (_, ColorValue::Style(it)) => Some(SgrCode::Param(it.code())),
            (Role::Style, _) => None,
            (Role::Foreground, ColorValue::Basic(it)) => Some(SgrCode::Param(it.fore_code())),
            (Role::Background, ColorValue::Basic(it)) => Some(SgrCode::Param(it.back_code())),
            (Role::Foreground, ColorValue::Extended(it)) => Some(SgrCode::ForegroundAnsi256(*it)),
            (Role::Background, ColorValue::Extended(it)) => Some(SgrCode::BackgroundAnsi256(*it)),
            (Role::Foreground, ColorValue::Rgb(it)) => {
                Some(SgrCode::ForegroundRGB(it.red, it.green, it.blue))
            }
            (Role::Background, ColorValue::Rgb(it)) => {
                Some(SgrCode::BackgroundRGB(it.red, it.green, it.blue))
            }
        }
    }

    /// Exact number of bytes the [`Display`] impl writes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        // "38;5;" and "38;2;" are both this long.
        const PREFIX_LEN: usize = 5;
        let params_len = match *self {
            SgrCode::Param(n) => digit_count(n),
            SgrCode::ForegroundAnsi256(n) | SgrCode::BackgroundAnsi256(n) => {
                PREFIX_LEN + digit_count(n)
            }
            SgrCode::ForegroundRGB(r, g, b) | SgrCode::BackgroundRGB(r, g, b) => {
                PREFIX_LEN + digit_count(r) + 1 + digit_count(g) + 1 + digit_count(b)
            }
        };
        CSI.len() + params_len + SGR.len()
    }

    /// Write into stack allocated storage.
    #[must_use]
    pub fn to_inline(&self) -> InlineEscCode {
        let mut acc = InlineEscCode::new();
        // Writing into memory never fails.
        let _unused = write!(acc, "{self}");
        acc
    }
}

fn digit_count(n: u8) -> usize {
    match n {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}

impl Display for SgrCode {
    /// SGR: set graphics mode command.
    /// More info:
    /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
    /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let (fg, bg) = (SGR_FG_EXTENDED, SGR_BG_EXTENDED);
        let (ansi256, rgb) = (SGR_SELECT_ANSI256, SGR_SELECT_RGB);
        match *self {
            SgrCode::Param(n)                 => write!(f, "{CSI}{n}{SGR}"),
            SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}{fg};{ansi256};{index}{SGR}"),
            SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}{bg};{ansi256};{index}{SGR}"),
            SgrCode::ForegroundRGB(r, g, b)   => write!(f, "{CSI}{fg};{rgb};{r};{g};{b}{SGR}"),
            SgrCode::BackgroundRGB(r, g, b)   => write!(f, "{CSI}{bg};{rgb};{r};{g};{b}{SGR}"),
        }
    }
}

/// The escape code for `value` in `role`. Invalid and empty values, and mismatched
/// roles (see [`SgrCode::from_role_value`]) produce an empty string. The string is
/// allocated with exactly [`ColorValue::length_for`] bytes.
#[must_use]
pub fn format_esc_code(role: Role, value: &ColorValue) -> String {
    match SgrCode::from_role_value(role, value) {
        Some(code) => {
            let mut acc = String::with_capacity(code.byte_len());
            // Writing into a String never fails.
            let _unused = write!(acc, "{code}");
            acc
        }
        None => String::new(),
    }
}

/// Same as [`format_esc_code`] but without a heap allocation.
#[must_use]
pub fn format_esc_code_inline(role: Role, value: &ColorValue) -> InlineEscCode {
    SgrCode::from_role_value(role, value)
        .map(|code| code.to_inline())
        .unwrap_or_default()
}

/// Write `rgb` as the nearest 256-color code, for terminals without truecolor.
#[must_use]
pub fn format_rgb_term(role: Role, rgb: RgbValue) -> String {
    format_esc_code(role, &ColorValue::Extended(extended_from_rgb(rgb)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicValue, InvalidReason, StyleValue, assert_eq2};
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test]
    fn param() {
        assert_eq2!(SgrCode::Param(1).to_string(), "\x1b[1m");
        assert_eq2!(SgrCode::Param(0).to_string(), "\x1b[0m");
        assert_eq2!(SgrCode::Param(107).to_string(), "\x1b[107m");
    }

    #[test]
    fn fg_color_ansi256() {
        let sgr_code = SgrCode::ForegroundAnsi256(150);
        assert_eq2!(sgr_code.to_string(), "\x1b[38;5;150m");
    }

    #[test]
    fn bg_color_ansi256() {
        let sgr_code = SgrCode::BackgroundAnsi256(150);
        assert_eq2!(sgr_code.to_string(), "\x1b[48;5;150m");
    }

    #[test]
    fn fg_color_rgb() {
        let sgr_code = SgrCode::ForegroundRGB(175, 215, 135);
        assert_eq2!(sgr_code.to_string(), "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn bg_color_rgb() {
        let sgr_code = SgrCode::BackgroundRGB(175, 215, 135);
        assert_eq2!(sgr_code.to_string(), "\x1b[48;2;175;215;135m");
    }

    #[test]
    fn byte_len_matches_display() {
        let samples = [0, 9, 10, 99, 100, 255];
        for n in samples {
            for code in [
                SgrCode::Param(n),
                SgrCode::ForegroundAnsi256(n),
                SgrCode::BackgroundAnsi256(n),
                SgrCode::ForegroundRGB(n, 5, 200),
                SgrCode::BackgroundRGB(42, n, n),
            ] {
                assert_eq2!(code.byte_len(), code.to_string().len());
                assert_eq2!(code.to_inline().as_str(), code.to_string());
            }
        }
    }

    #[test_case(Role::Foreground, ColorValue::Basic(BasicValue::Red), "\x1b[31m")]
    #[test_case(Role::Background, ColorValue::Basic(BasicValue::Red), "\x1b[41m")]
    #[test_case(Role::Foreground, ColorValue::Basic(BasicValue::LightRed), "\x1b[91m")]
    #[test_case(Role::Background, ColorValue::Basic(BasicValue::LightRed), "\x1b[101m")]
    #[test_case(Role::Foreground, ColorValue::Basic(BasicValue::Reset), "\x1b[39m")]
    #[test_case(Role::Background, ColorValue::Basic(BasicValue::Reset), "\x1b[49m")]
    #[test_case(Role::Foreground, ColorValue::Extended(7), "\x1b[38;5;7m")]
    #[test_case(Role::Background, ColorValue::Extended(7), "\x1b[48;5;7m")]
    #[test_case(Role::Foreground, ColorValue::from_rgb(1, 1, 1), "\x1b[38;2;1;1;1m")]
    #[test_case(Role::Background, ColorValue::from_rgb(1, 1, 1), "\x1b[48;2;1;1;1m")]
    #[test_case(Role::Style, ColorValue::Style(StyleValue::Underline), "\x1b[4m")]
    #[test_case(Role::Foreground, ColorValue::Style(StyleValue::Bright), "\x1b[1m")]
    #[test_case(Role::Style, ColorValue::Basic(BasicValue::Red), "")]
    #[test_case(Role::None, ColorValue::Basic(BasicValue::Red), "")]
    #[test_case(Role::Foreground, ColorValue::Empty, "")]
    #[test_case(Role::Foreground, ColorValue::Invalid(InvalidReason::UnknownName), "")]
    fn format(role: Role, value: ColorValue, expected: &str) {
        let actual = format_esc_code(role, &value);
        assert_eq2!(actual, expected);
        assert_eq2!(actual.len(), value.length_for(role));
        assert_eq2!(format_esc_code_inline(role, &value).as_str(), expected);
    }

    #[test]
    fn every_basic_and_style_value_is_exact() {
        for role in Role::iter() {
            for value in BasicValue::iter().map(ColorValue::Basic) {
                assert_eq2!(format_esc_code(role, &value).len(), value.length_for(role));
            }
            for value in StyleValue::iter().map(ColorValue::Style) {
                assert_eq2!(format_esc_code(role, &value).len(), value.length_for(role));
            }
            for index in 0..=u8::MAX {
                let value = ColorValue::Extended(index);
                assert_eq2!(format_esc_code(role, &value).len(), value.length_for(role));
            }
        }
    }

    #[test]
    fn rgb_term() {
        assert_eq2!(
            format_rgb_term(Role::Foreground, RgbValue::from_u8(255, 255, 255)),
            "\x1b[38;5;15m"
        );
        assert_eq2!(
            format_rgb_term(Role::Background, RgbValue::from_u8(0, 0, 0)),
            "\x1b[48;5;0m"
        );
    }
}

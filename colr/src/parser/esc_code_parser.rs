// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reverse-parse SGR escape codes, eg: `"\x1b[38;5;208m"`, back into a [`Role`] and a
//! [`ColorValue`].
//!
//! Only the shapes this crate generates are recognized:
//!
//! | Shape                                      | Meaning              |
//! |--------------------------------------------|----------------------|
//! | `ESC [ 30..=39 m`, `ESC [ 90..=97 m`       | basic foreground     |
//! | `ESC [ 40..=49 m`, `ESC [ 100..=107 m`     | basic background     |
//! | `ESC [ 38;5;n m`, `ESC [ 48;5;n m`         | extended fore / back |
//! | `ESC [ 38;2;r;g;b m`, `ESC [ 48;2;r;g;b m` | RGB fore / back      |
//! | `ESC [ n m`, n one of [`StyleValue`]       | style                |

use crate::{BasicValue, CSI, ColorValue, ColrError, ColrResult, InlineVec, RgbValue, Role,
            SGR, SGR_BG_EXTENDED, SGR_FG_EXTENDED, SGR_SELECT_ANSI256, SGR_SELECT_RGB,
            StyleValue};

/// Byte length of the SGR code (`ESC [` digits and semicolons `m`) that `text` starts
/// with, if it starts with one.
#[must_use]
pub fn sgr_code_len(text: &str) -> Option<usize> {
    let params = text.strip_prefix(CSI)?;
    for (index, byte) in params.bytes().enumerate() {
        match byte {
            b'0'..=b'9' | b';' => {}
            b'm' => return Some(CSI.len() + index + SGR.len()),
            _ => return None,
        }
    }
    None
}

/// Every well formed SGR code in `text`, in order. Malformed sequences are skipped.
pub fn find_sgr_codes(text: &str) -> impl Iterator<Item = &str> {
    let mut pos = 0;
    std::iter::from_fn(move || {
        while let Some(offset) = text[pos..].find(CSI) {
            let start = pos + offset;
            if let Some(len) = sgr_code_len(&text[start..]) {
                pos = start + len;
                return Some(&text[start..pos]);
            }
            pos = start + CSI.len();
        }
        pos = text.len();
        None
    })
}

/// The numeric parameters of `code` if it is exactly one SGR code. Empty parameters are
/// rejected. Parameters too large for a [`u32`] saturate.
#[must_use]
pub fn parse_sgr_params(code: &str) -> Option<InlineVec<u32>> {
    if sgr_code_len(code)? != code.len() {
        return None;
    }
    let body = &code[CSI.len()..code.len() - SGR.len()];
    let mut params = InlineVec::new();
    for field in body.split(';') {
        if field.is_empty() {
            return None;
        }
        params.push(field.parse::<u32>().unwrap_or(u32::MAX));
    }
    Some(params)
}

/// Parse one escape code into the [`Role`] it was written for and its value.
///
/// # Errors
///
/// - [`ColrError::OutOfRangeExtended`] for `ESC [ 38;5;n m` with `n > 255`.
/// - [`ColrError::OutOfRangeRgb`] for `ESC [ 38;2;r;g;b m` with a component `> 255`.
/// - [`ColrError::InvalidEscapeCode`] for anything else that isn't listed in the
///   [module docs](self).
pub fn parse_esc_code(code: &str) -> Result<(Role, ColorValue), ColrError> {
    let invalid = || ColrError::InvalidEscapeCode { input: code.into() };
    let params = parse_sgr_params(code).ok_or_else(invalid)?;

    match params.as_slice() {
        [single] => {
            if let Some(it) = BasicValue::from_fore_code(*single) {
                Ok((Role::Foreground, ColorValue::Basic(it)))
            } else if let Some(it) = BasicValue::from_back_code(*single) {
                Ok((Role::Background, ColorValue::Basic(it)))
            } else if let Some(it) = StyleValue::from_code(*single) {
                Ok((Role::Style, ColorValue::Style(it)))
            } else {
                Err(invalid())
            }
        }
        [prefix, selector, index] if *selector == u32::from(SGR_SELECT_ANSI256) => {
            let role = extended_role(*prefix).ok_or_else(invalid)?;
            match u8::try_from(*index) {
                Ok(index) => Ok((role, ColorValue::Extended(index))),
                Err(_) => Err(ColrError::OutOfRangeExtended { input: code.into() }),
            }
        }
        [prefix, selector, red, green, blue] if *selector == u32::from(SGR_SELECT_RGB) => {
            let role = extended_role(*prefix).ok_or_else(invalid)?;
            match (u8::try_from(*red), u8::try_from(*green), u8::try_from(*blue)) {
                (Ok(red), Ok(green), Ok(blue)) => {
                    Ok((role, ColorValue::Rgb(RgbValue::from_u8(red, green, blue))))
                }
                _ => Err(ColrError::OutOfRangeRgb { input: code.into() }),
            }
        }
        _ => Err(invalid()),
    }
}

fn extended_role(prefix: u32) -> Option<Role> {
    if prefix == u32::from(SGR_FG_EXTENDED) {
        Some(Role::Foreground)
    } else if prefix == u32::from(SGR_BG_EXTENDED) {
        Some(Role::Background)
    } else {
        None
    }
}

impl ColorValue {
    /// Parse one escape code, dropping its role. An unrecognized code becomes
    /// [`ColorValue::Invalid`].
    #[must_use]
    pub fn from_escape(code: &str) -> ColorValue {
        match parse_esc_code(code) {
            Ok((_, value)) => value,
            Err(err) => {
                tracing::debug!(?code, %err, "escape code did not parse");
                ColorValue::Invalid(err.reason())
            }
        }
    }

    /// Same as [`ColorValue::from_escape`] but surfaces the failure.
    ///
    /// # Errors
    ///
    /// See [`parse_esc_code`].
    pub fn try_from_escape(code: &str) -> ColrResult<ColorValue> {
        let (_, value) = parse_esc_code(code)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InvalidReason, assert_eq2};
    use test_case::test_case;

    #[test_case("\x1b[31m", Some(5))]
    #[test_case("\x1b[38;2;1;2;3mtest", Some(13))]
    #[test_case("\x1b[m", Some(3))]
    #[test_case("\x1b[31", None)]
    #[test_case("\x1b[3x1m", None)]
    #[test_case("x\x1b[31m", None)]
    fn code_len(text: &str, expected: Option<usize>) {
        assert_eq2!(sgr_code_len(text), expected);
    }

    #[test]
    fn find_codes_skips_malformed() {
        let text = "\x1b[4m\x1b[xm\x1b[31mtest\x1b[2J\x1b[0m";
        let codes: Vec<&str> = find_sgr_codes(text).collect();
        assert_eq2!(codes, vec!["\x1b[4m", "\x1b[31m", "\x1b[0m"]);
        assert_eq2!(find_sgr_codes("plain").count(), 0);
        assert_eq2!(find_sgr_codes("").count(), 0);
    }

    #[test_case("\x1b[31m", Role::Foreground, ColorValue::Basic(BasicValue::Red))]
    #[test_case("\x1b[38m", Role::Foreground, ColorValue::Basic(BasicValue::Unused))]
    #[test_case("\x1b[39m", Role::Foreground, ColorValue::Basic(BasicValue::Reset))]
    #[test_case("\x1b[97m", Role::Foreground, ColorValue::Basic(BasicValue::LightWhite))]
    #[test_case("\x1b[47m", Role::Background, ColorValue::Basic(BasicValue::White))]
    #[test_case("\x1b[100m", Role::Background, ColorValue::Basic(BasicValue::LightBlack))]
    #[test_case("\x1b[38;5;7m", Role::Foreground, ColorValue::Extended(7))]
    #[test_case("\x1b[48;5;255m", Role::Background, ColorValue::Extended(255))]
    #[test_case("\x1b[38;2;1;2;3m", Role::Foreground, ColorValue::from_rgb(1, 2, 3))]
    #[test_case("\x1b[48;2;255;0;0m", Role::Background, ColorValue::from_rgb(255, 0, 0))]
    #[test_case("\x1b[0m", Role::Style, ColorValue::Style(StyleValue::ResetAll))]
    #[test_case("\x1b[4m", Role::Style, ColorValue::Style(StyleValue::Underline))]
    #[test_case("\x1b[53m", Role::Style, ColorValue::Style(StyleValue::Overline))]
    fn valid(code: &str, role: Role, value: ColorValue) {
        assert_eq2!(parse_esc_code(code), Ok((role, value)));
        assert_eq2!(ColorValue::from_escape(code), value);
    }

    #[test_case("\x1b[38;5;256m", InvalidReason::OutOfRangeExtended)]
    #[test_case("\x1b[38;2;1;2;256m", InvalidReason::OutOfRangeRgb)]
    #[test_case("\x1b[xm", InvalidReason::UnknownName)]
    #[test_case("\x1b[m", InvalidReason::UnknownName)]
    #[test_case("\x1b[;m", InvalidReason::UnknownName)]
    #[test_case("\x1b[6m", InvalidReason::UnknownName)]
    #[test_case("\x1b[38;4;1m", InvalidReason::UnknownName)]
    #[test_case("\x1b[39;5;1m", InvalidReason::UnknownName)]
    #[test_case("\x1b[31mtext", InvalidReason::UnknownName)]
    #[test_case("red", InvalidReason::UnknownName)]
    #[test_case("", InvalidReason::UnknownName)]
    fn invalid(code: &str, reason: InvalidReason) {
        assert_eq2!(ColorValue::from_escape(code).invalid_reason(), Some(reason));
        assert!(ColorValue::try_from_escape(code).is_err());
    }

    #[test]
    fn per_kind_parsers() {
        assert_eq2!(BasicValue::from_escape("\x1b[91m"), Some(BasicValue::LightRed));
        assert_eq2!(BasicValue::from_escape("\x1b[4m"), None);
        assert_eq2!(StyleValue::from_escape("\x1b[4m"), Some(StyleValue::Underline));
        assert_eq2!(crate::extended_from_escape("\x1b[48;5;9m"), Some(9));
        assert_eq2!(
            RgbValue::from_escape("\x1b[38;2;4;5;6m"),
            Some(RgbValue::from_u8(4, 5, 6))
        );
    }
}

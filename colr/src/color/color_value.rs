// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`ColorValue`] holds any one color or style, "no value", or the reason a parse
//! failed. Escape codes are generated from it in [`crate::generator`].

use crate::{BasicValue, CODE_LEN, CODE_RGB_LEN, CODEX_LEN, EMPTY_CODE_LEN, RgbValue, Role,
            STYLE_LEN, SgrCode, StyleValue, extended_name};
use std::fmt::{Display, Formatter, Result};

/// Why a [`ColorValue`] could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// Not a known color or style, and not numeric, RGB or hex either.
    UnknownName,
    /// A number outside `0..=255`.
    OutOfRangeExtended,
    /// An RGB triple with a component outside `0..=255`.
    OutOfRangeRgb,
    /// A style lookup failed.
    UnknownStyle,
}

impl Display for InvalidReason {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            InvalidReason::UnknownName        => write!(f, "unknown name"),
            InvalidReason::OutOfRangeExtended => write!(f, "extended value out of range"),
            InvalidReason::OutOfRangeRgb      => write!(f, "rgb value out of range"),
            InvalidReason::UnknownStyle       => write!(f, "unknown style"),
        }
    }
}

/// The kind of a [`ColorValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    Empty,
    Basic,
    Extended,
    Rgb,
    Style,
    Invalid(InvalidReason),
}

/// One color or style value.
///
/// [`ColorValue::Empty`] means "nothing was specified" and is valid. It produces no
/// escape code, same as [`ColorValue::Invalid`], but only the latter is an error.
///
/// Equality is structural, except that all [`ColorValue::Invalid`] values are equal to
/// each other regardless of their [`InvalidReason`]. Use [`ColorValue::invalid_reason`]
/// to tell them apart.
#[derive(Debug, Clone, Copy, Default)]
pub enum ColorValue {
    #[default]
    Empty,
    Basic(BasicValue),
    Extended(u8),
    Rgb(RgbValue),
    Style(StyleValue),
    Invalid(InvalidReason),
}

impl PartialEq for ColorValue {
    #[rustfmt::skip]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ColorValue::Empty, ColorValue::Empty)             => true,
            (ColorValue::Basic(a), ColorValue::Basic(b))       => a == b,
            (ColorValue::Extended(a), ColorValue::Extended(b)) => a == b,
            (ColorValue::Rgb(a), ColorValue::Rgb(b))           => a == b,
            (ColorValue::Style(a), ColorValue::Style(b))       => a == b,
            (ColorValue::Invalid(_), ColorValue::Invalid(_))   => true,
            _ => false,
        }
    }
}

impl Eq for ColorValue {}

impl From<BasicValue> for ColorValue {
    fn from(it: BasicValue) -> Self { ColorValue::Basic(it) }
}

impl From<RgbValue> for ColorValue {
    fn from(it: RgbValue) -> Self { ColorValue::Rgb(it) }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from(it: (u8, u8, u8)) -> Self { ColorValue::Rgb(it.into()) }
}

impl From<StyleValue> for ColorValue {
    fn from(it: StyleValue) -> Self { ColorValue::Style(it) }
}

impl From<InvalidReason> for ColorValue {
    fn from(it: InvalidReason) -> Self { ColorValue::Invalid(it) }
}

impl ColorValue {
    #[must_use]
    pub const fn empty() -> Self { ColorValue::Empty }

    #[must_use]
    pub const fn from_basic(it: BasicValue) -> Self { ColorValue::Basic(it) }

    #[must_use]
    pub const fn from_extended(index: u8) -> Self { ColorValue::Extended(index) }

    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        ColorValue::Rgb(RgbValue::from_u8(red, green, blue))
    }

    #[must_use]
    pub const fn from_style(it: StyleValue) -> Self { ColorValue::Style(it) }

    #[must_use]
    pub const fn kind(&self) -> ColorKind {
        match self {
            ColorValue::Empty => ColorKind::Empty,
            ColorValue::Basic(_) => ColorKind::Basic,
            ColorValue::Extended(_) => ColorKind::Extended,
            ColorValue::Rgb(_) => ColorKind::Rgb,
            ColorValue::Style(_) => ColorKind::Style,
            ColorValue::Invalid(reason) => ColorKind::Invalid(*reason),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool { matches!(self, ColorValue::Empty) }

    #[must_use]
    pub const fn is_valid(&self) -> bool { !self.is_invalid() }

    #[must_use]
    pub const fn is_invalid(&self) -> bool { matches!(self, ColorValue::Invalid(_)) }

    #[must_use]
    pub const fn invalid_reason(&self) -> Option<InvalidReason> {
        match self {
            ColorValue::Invalid(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Exact byte length of the escape code [`crate::format_esc_code`] produces for this
    /// value in `role`. Zero when no code is produced.
    #[must_use]
    pub fn length_for(&self, role: Role) -> usize {
        SgrCode::from_role_value(role, self).map_or(0, |code| code.byte_len())
    }

    /// Worst case buffer size for any value of this kind, counting one byte for a
    /// terminator. Always greater than [`ColorValue::length_for`].
    #[must_use]
    pub const fn max_length_for(&self) -> usize {
        match self {
            ColorValue::Basic(_) => CODE_LEN,
            ColorValue::Extended(_) => CODEX_LEN,
            ColorValue::Rgb(_) => CODE_RGB_LEN,
            ColorValue::Style(_) => STYLE_LEN,
            ColorValue::Empty | ColorValue::Invalid(_) => EMPTY_CODE_LEN,
        }
    }
}

impl Display for ColorValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ColorValue::Empty => write!(f, "empty"),
            ColorValue::Basic(it) => write!(f, "{it}"),
            ColorValue::Extended(index) => match extended_name(*index) {
                Some(name) => write!(f, "{name}"),
                None => write!(f, "38;5;{index}"),
            },
            ColorValue::Rgb(it) => write!(f, "{it}"),
            ColorValue::Style(it) => write!(f, "{it}"),
            ColorValue::Invalid(reason) => write!(f, "invalid: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn empty_is_valid_but_not_invalid() {
        let it = ColorValue::empty();
        assert!(it.is_empty());
        assert!(it.is_valid());
        assert!(!it.is_invalid());
        assert_eq2!(it.kind(), ColorKind::Empty);
        assert_eq2!(it, ColorValue::default());
    }

    #[test]
    fn invalid_values_are_equal() {
        let a = ColorValue::Invalid(InvalidReason::UnknownName);
        let b = ColorValue::Invalid(InvalidReason::OutOfRangeRgb);
        assert_eq2!(a, b);
        assert_eq2!(a.invalid_reason(), Some(InvalidReason::UnknownName));
        assert_eq2!(b.kind(), ColorKind::Invalid(InvalidReason::OutOfRangeRgb));
        assert!(!a.is_valid());
    }

    #[test]
    fn kinds_must_match() {
        assert_ne!(ColorValue::from_extended(1), ColorValue::from(BasicValue::Red));
        assert_ne!(ColorValue::empty(), ColorValue::from(BasicValue::Reset));
        assert_ne!(
            ColorValue::from_style(StyleValue::ResetAll),
            ColorValue::from(BasicValue::Reset)
        );
        assert_eq2!(ColorValue::from((1, 2, 3)), ColorValue::from_rgb(1, 2, 3));
    }

    #[test_case(ColorValue::from(BasicValue::Red), "red")]
    #[test_case(ColorValue::from_extended(7), "xwhite")]
    #[test_case(ColorValue::from_extended(208), "38;5;208")]
    #[test_case(ColorValue::from_rgb(1, 2, 3), "rgb(1, 2, 3)")]
    #[test_case(ColorValue::from_style(StyleValue::Bright), "bright")]
    #[test_case(ColorValue::from(InvalidReason::UnknownName), "invalid: unknown name")]
    #[test_case(ColorValue::empty(), "empty")]
    fn display(value: ColorValue, expected: &str) {
        assert_eq2!(value.to_string(), expected);
    }

    #[test_case(ColorValue::from(BasicValue::LightWhite), Role::Background, 6)]
    #[test_case(ColorValue::from(BasicValue::Red), Role::Foreground, 5)]
    #[test_case(ColorValue::from_extended(255), Role::Foreground, 11)]
    #[test_case(ColorValue::from_extended(0), Role::Background, 9)]
    #[test_case(ColorValue::from_rgb(255, 255, 255), Role::Foreground, 19)]
    #[test_case(ColorValue::from_rgb(1, 1, 1), Role::Foreground, 13)]
    #[test_case(ColorValue::from_style(StyleValue::Overline), Role::Style, 5)]
    #[test_case(ColorValue::from_style(StyleValue::Bright), Role::Foreground, 4)]
    #[test_case(ColorValue::empty(), Role::Foreground, 0)]
    #[test_case(ColorValue::from(InvalidReason::UnknownStyle), Role::Style, 0)]
    #[test_case(ColorValue::from(BasicValue::Red), Role::None, 0)]
    fn length_for(value: ColorValue, role: Role, expected: usize) {
        assert_eq2!(value.length_for(role), expected);
        assert!(value.length_for(role) < value.max_length_for());
    }
}

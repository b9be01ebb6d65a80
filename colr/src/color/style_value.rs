// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words strikethru encircle

//! Text attributes (bold, underline, etc.), each with its own SGR parameter.

use crate::{ColorValue, STYLE_NAMES, lookup_name, name_of};
use std::fmt::{Display, Formatter, Result};
use strum_macros::{EnumCount, EnumIter, FromRepr};

/// A text style. The discriminant is the SGR parameter.
///
/// More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr)]
#[repr(u8)]
pub enum StyleValue {
    /// Same bytes as the reset code.
    ResetAll = 0,
    Bright = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    Flash = 5,
    Highlight = 7,
    Strikethru = 9,
    /// Neither bright nor dim.
    Normal = 22,
    Frame = 51,
    Encircle = 52,
    Overline = 53,
}

impl StyleValue {
    #[must_use]
    pub const fn code(self) -> u8 { self as u8 }

    /// Inverse of [`StyleValue::code`].
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    /// Case-insensitive lookup in [`STYLE_NAMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> { lookup_name(STYLE_NAMES, name) }

    /// Parse a style escape code, eg: `"\x1b[4m"`.
    #[must_use]
    pub fn from_escape(code: &str) -> Option<Self> {
        match ColorValue::from_escape(code) {
            ColorValue::Style(it) => Some(it),
            _ => None,
        }
    }

    /// Canonical name, eg: `"underline"`.
    #[must_use]
    pub fn name(self) -> &'static str { name_of(STYLE_NAMES, self).unwrap_or_default() }
}

impl Display for StyleValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.name()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case("bold", StyleValue::Bright)]
    #[test_case("BRIGHT", StyleValue::Bright)]
    #[test_case("strike", StyleValue::Strikethru)]
    #[test_case("strikethrough", StyleValue::Strikethru)]
    #[test_case("circle", StyleValue::Encircle)]
    #[test_case("reset_all", StyleValue::ResetAll)]
    fn aliases(name: &str, expected: StyleValue) {
        assert_eq2!(StyleValue::from_name(name), Some(expected));
    }

    #[test_case(6)]
    #[test_case(8)]
    #[test_case(300)]
    fn unknown_code(code: u32) {
        assert_eq2!(StyleValue::from_code(code), None);
    }

    #[test]
    fn codes_invert() {
        for value in StyleValue::iter() {
            assert_eq2!(StyleValue::from_code(u32::from(value.code())), Some(value));
            assert_eq2!(StyleValue::from_name(value.name()), Some(value));
        }
    }

    #[test]
    fn not_a_style() {
        assert_eq2!(StyleValue::from_name("white"), None);
        assert_eq2!(StyleValue::from_name("255;255;255"), None);
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 16 basic terminal colors, plus `unused` and `reset`.

use crate::{BASIC_NAMES, ColorValue, lookup_name, name_of};
use std::fmt::{Display, Formatter, Result};
use strum_macros::{EnumCount, EnumIter, FromRepr};

/// A basic (16-color) terminal color. The discriminant is the value used to compute
/// the SGR parameter, see [`BasicValue::fore_code`] and [`BasicValue::back_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr)]
#[repr(u8)]
pub enum BasicValue {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    Unused = 8,
    Reset = 9,
    LightBlack = 10,
    LightRed = 11,
    LightGreen = 12,
    LightYellow = 13,
    LightBlue = 14,
    LightMagenta = 15,
    LightCyan = 16,
    LightWhite = 17,
}

/// Values below this are the "dark" colors, `unused` and `reset`.
const LIGHT_START: u8 = 10;

impl BasicValue {
    #[must_use]
    pub const fn value(self) -> u8 { self as u8 }

    #[must_use]
    pub const fn is_light(self) -> bool { self.value() >= LIGHT_START }

    /// SGR parameter when used as a foreground: `30..=39`, or `90..=97` for the light
    /// variants (value + 80).
    #[must_use]
    pub const fn fore_code(self) -> u8 {
        if self.is_light() {
            self.value() + 80
        } else {
            self.value() + 30
        }
    }

    /// SGR parameter when used as a background: `40..=49`, or `100..=107` for the light
    /// variants (value + 90).
    #[must_use]
    pub const fn back_code(self) -> u8 {
        if self.is_light() {
            self.value() + 90
        } else {
            self.value() + 40
        }
    }

    /// Inverse of [`BasicValue::fore_code`].
    #[must_use]
    pub fn from_fore_code(code: u32) -> Option<Self> {
        match code {
            30..=39 => Self::from_code_offset(code, 30),
            90..=97 => Self::from_code_offset(code, 80),
            _ => None,
        }
    }

    /// Inverse of [`BasicValue::back_code`].
    #[must_use]
    pub fn from_back_code(code: u32) -> Option<Self> {
        match code {
            40..=49 => Self::from_code_offset(code, 40),
            100..=107 => Self::from_code_offset(code, 90),
            _ => None,
        }
    }

    fn from_code_offset(code: u32, offset: u32) -> Option<Self> {
        u8::try_from(code - offset).ok().and_then(Self::from_repr)
    }

    /// Case-insensitive lookup in [`BASIC_NAMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> { lookup_name(BASIC_NAMES, name) }

    /// Parse a basic foreground or background escape code, eg: `"\x1b[31m"`.
    #[must_use]
    pub fn from_escape(code: &str) -> Option<Self> {
        match ColorValue::from_escape(code) {
            ColorValue::Basic(it) => Some(it),
            _ => None,
        }
    }

    /// Canonical name, eg: `"lightblue"`.
    #[must_use]
    pub fn name(self) -> &'static str { name_of(BASIC_NAMES, self).unwrap_or_default() }
}

impl Display for BasicValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.name()) }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! This is the most precise color representation supported by modern terminals.

use crate::{ColorValue, ColrError, extended_from_rgb, rgb_from_hex, rgb_to_terminal_rgb};
use std::fmt::{Display, Formatter, Result};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<RgbValue> for (u8, u8, u8) {
    fn from(it: RgbValue) -> Self { (it.red, it.green, it.blue) }
}

/// From a `0xRRGGBB` value. The top byte is ignored.
impl From<u32> for RgbValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parse `"#rrggbb"`, `"rrggbb"`, `"#rgb"` or `"rgb"`.
    ///
    /// # Errors
    ///
    /// Returns [`ColrError::InvalidHexColor`] if the input isn't 3 or 6 hex digits with
    /// an optional single leading `#`.
    pub fn from_hex(input: &str) -> std::result::Result<RgbValue, ColrError> {
        rgb_from_hex(input)
    }

    /// Lowercase `"#rrggbb"`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Parse a truecolor escape code, eg: `"\x1b[38;2;1;2;3m"`.
    #[must_use]
    pub fn from_escape(code: &str) -> Option<Self> {
        match ColorValue::from_escape(code) {
            ColorValue::Rgb(it) => Some(it),
            _ => None,
        }
    }

    /// Nearest color in the 6x6x6 cube of the 256-color palette.
    #[must_use]
    pub fn as_terminal_rgb(&self) -> RgbValue { rgb_to_terminal_rgb(*self) }

    /// Index of [`RgbValue::as_terminal_rgb`] in the 256-color palette.
    #[must_use]
    pub fn as_extended(&self) -> u8 { extended_from_rgb(*self) }
}

impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

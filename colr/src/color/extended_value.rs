// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Extended colors are plain `u8` indices into [`ANSI_COLOR_PALETTE`].

use crate::{ANSI_COLOR_PALETTE, ColorValue, ColrError, EXTENDED_NAMES, RgbValue,
            extended_from_rgb, lookup_name, name_of, parse_decimal, rgb_from_hex};

/// Parse an extended color, trying in order:
/// 1. A known name, eg: `"xred"`.
/// 2. A hex color, which **must** start with `#` so that `"123"` stays a number, eg:
///    `"#ff8700"`. It is mapped to the nearest palette entry.
/// 3. A decimal integer in `0..=255`, with an optional sign, eg: `"208"`, `"+5"`.
///
/// # Errors
///
/// - [`ColrError::OutOfRangeExtended`] if the input is an integer outside `0..=255`,
///   negative numbers included.
/// - [`ColrError::UnknownName`] for anything else.
pub fn extended_from_name(name: &str) -> Result<u8, ColrError> {
    if let Some(index) = lookup_name(EXTENDED_NAMES, name) {
        return Ok(index);
    }

    if name.starts_with('#') {
        return rgb_from_hex(name).map(extended_from_rgb).map_err(|_| {
            ColrError::UnknownName {
                input: name.into(),
            }
        });
    }

    let Some(number) = parse_decimal(name) else {
        return Err(ColrError::UnknownName {
            input: name.into(),
        });
    };
    u8::try_from(number).map_err(|_| ColrError::OutOfRangeExtended {
        input: name.into(),
    })
}

/// Canonical name of the first 16 extended colors, eg: `"xwhite"` for `7`.
#[must_use]
pub fn extended_name(index: u8) -> Option<&'static str> { name_of(EXTENDED_NAMES, index) }

/// Parse an extended escape code, eg: `"\x1b[38;5;208m"`.
#[must_use]
pub fn extended_from_escape(code: &str) -> Option<u8> {
    match ColorValue::from_escape(code) {
        ColorValue::Extended(it) => Some(it),
        _ => None,
    }
}

/// The RGB value the palette assigns to `index`.
#[must_use]
pub fn extended_to_rgb(index: u8) -> RgbValue { ANSI_COLOR_PALETTE[usize::from(index)].into() }

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColrError, RgbValue, rgb_from_hex};

/// Delimiters tried, in order, by [`rgb_from_string`].
pub const RGB_DELIMITERS: [char; 4] = [',', ' ', ':', ';'];

/// Parse an RGB triple like `"255,0,128"`, `"255 0 128"`, `"255:0:128"` or
/// `"255;0;128"`. If none of the delimiters give exactly three integers and the input
/// starts with `#`, it is parsed as a hex color instead.
///
/// # Errors
///
/// - [`ColrError::OutOfRangeRgb`] if the input is a triple of integers but one of them
///   is outside `0..=255`.
/// - [`ColrError::InvalidHexColor`] if the input starts with `#` but is not a valid hex
///   color.
/// - [`ColrError::InvalidRgbString`] for anything else.
pub fn rgb_from_string(input: &str) -> Result<RgbValue, ColrError> {
    for delimiter in RGB_DELIMITERS {
        let Some([red, green, blue]) = split_int_triple(input, delimiter) else {
            continue;
        };
        return match (to_channel(red), to_channel(green), to_channel(blue)) {
            (Some(red), Some(green), Some(blue)) => Ok(RgbValue::from_u8(red, green, blue)),
            _ => Err(ColrError::OutOfRangeRgb {
                input: input.into(),
            }),
        };
    }

    if input.starts_with('#') {
        return rgb_from_hex(input);
    }

    Err(ColrError::InvalidRgbString {
        input: input.into(),
    })
}

/// Exactly three integer fields separated by `delimiter`. Whitespace around each field
/// is ignored. Integers too large for an [`i64`] saturate, so they still count as
/// integers and are caught by the range check.
fn split_int_triple(input: &str, delimiter: char) -> Option<[i64; 3]> {
    let mut fields: [i64; 3] = [0; 3];
    let mut count = 0;
    // Runs of spaces count as one delimiter.
    let parts = input
        .split(delimiter)
        .filter(|it| delimiter != ' ' || !it.is_empty());
    for part in parts {
        let slot = fields.get_mut(count)?;
        *slot = parse_decimal(part.trim())?;
        count += 1;
    }
    (count == 3).then_some(fields)
}

/// A decimal integer with an optional leading `+` or `-`, eg: `"208"`, `"+5"`, `"-1"`.
/// Integers too large for an [`i64`] saturate. [`None`] if `field` has anything else in
/// it, whitespace included.
#[must_use]
pub fn parse_decimal(field: &str) -> Option<i64> {
    let (is_negative, digits) = match field.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field.strip_prefix('+').unwrap_or(field)),
    };
    if digits.is_empty() || !digits.bytes().all(|it| it.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if is_negative { -magnitude } else { magnitude })
}

fn to_channel(value: i64) -> Option<u8> { u8::try_from(value).ok() }

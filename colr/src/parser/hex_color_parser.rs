// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string can be in the following formats:
//! - `#RRGGBB` or `RRGGBB`, eg: `#FF0000` for red.
//! - `#RGB` or `RGB`, where each digit is doubled, eg: `#F80` is `#FF8800`.

use crate::{ColrError, RgbValue};
use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map, map_res, opt},
          sequence::preceded};

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
/// At most one leading `#` is accepted and the whole input must be consumed.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input is not a valid hex color.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    preceded(
        opt(tag("#")),
        alt((
            all_consuming(helper_fns::parse_long_form),
            all_consuming(helper_fns::parse_short_form),
        )),
    )
    .parse(input)
}

/// Parse `"#rrggbb"`, `"rrggbb"`, `"#rgb"` or `"rgb"` into an [`RgbValue`].
///
/// # Errors
///
/// Returns [`ColrError::InvalidHexColor`] for any other input, eg: `"01"`, `"##fff"`,
/// `"ghijkl"`.
pub fn rgb_from_hex(input: &str) -> Result<RgbValue, ColrError> {
    match parse_hex_color(input) {
        Ok((_, color)) => Ok(color),
        Err(_) => Err(ColrError::InvalidHexColor {
            input: input.into(),
        }),
    }
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, RgbValue, map, map_res, take_while_m_n};

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// `"ff"` -> `255`.
    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), |it: &str| {
            u8::from_str_radix(it, 16)
        })
        .parse(input)
    }

    /// `"f"` -> `255`, the digit is doubled.
    pub fn parse_short_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |it: &str| {
            u8::from_str_radix(it, 16).map(|digit| digit * 0x11)
        })
        .parse(input)
    }

    pub fn parse_long_form(input: &str) -> IResult<&str, RgbValue> {
        map(
            (parse_hex_seg, parse_hex_seg, parse_hex_seg),
            |(red, green, blue)| RgbValue { red, green, blue },
        )
        .parse(input)
    }

    pub fn parse_short_form(input: &str) -> IResult<&str, RgbValue> {
        map(
            (parse_short_hex_seg, parse_short_hex_seg, parse_short_hex_seg),
            |(red, green, blue)| RgbValue { red, green, blue },
        )
        .parse(input)
    }
}

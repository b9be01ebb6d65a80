// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BasicValue, ColorValue, ColrError, ColrResult, StyleValue,
            extended_from_name, rgb_from_string};
use std::str::FromStr;

impl ColorValue {
    /// Parse a user supplied color or style name. The order matters:
    /// 1. An RGB string, eg: `"255,0,0"`, `"#ff0000"`. A triple with a component
    ///    outside `0..=255` stops here as [`crate::InvalidReason::OutOfRangeRgb`].
    /// 2. A basic color name, eg: `"red"`.
    /// 3. A style name, eg: `"underline"`.
    /// 4. An extended color, see [`extended_from_name`]. A number outside `0..=255`
    ///    becomes [`crate::InvalidReason::OutOfRangeExtended`].
    /// 5. Otherwise [`crate::InvalidReason::UnknownName`].
    #[must_use]
    pub fn from_name(name: &str) -> ColorValue {
        match Self::parse_name(name) {
            Ok(it) => it,
            Err(err) => {
                tracing::debug!(name, %err, "color name did not parse");
                ColorValue::Invalid(err.reason())
            }
        }
    }

    /// Same as [`ColorValue::from_name`] but surfaces the failure.
    ///
    /// # Errors
    ///
    /// Returns a [`ColrError`] wrapped in a [`miette::Report`] if the name does not
    /// parse.
    pub fn try_from_name(name: &str) -> ColrResult<ColorValue> { Ok(Self::parse_name(name)?) }

    fn parse_name(name: &str) -> Result<ColorValue, ColrError> {
        match rgb_from_string(name) {
            Ok(rgb) => return Ok(ColorValue::Rgb(rgb)),
            Err(err @ ColrError::OutOfRangeRgb { .. }) => return Err(err),
            Err(_) => {}
        }

        if let Some(it) = BasicValue::from_name(name) {
            return Ok(ColorValue::Basic(it));
        }

        if let Some(it) = StyleValue::from_name(name) {
            return Ok(ColorValue::Style(it));
        }

        extended_from_name(name).map(ColorValue::Extended)
    }
}

impl FromStr for ColorValue {
    type Err = ColrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse_name(s) }
}

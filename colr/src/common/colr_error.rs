// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Parsing in this crate is lenient by default: a name that can't be parsed becomes a
//! [`ColorValue::Invalid`] which formats into an empty escape code. The errors in this
//! module are what the strict `try_*` functions surface instead.
//!
//! [`ColorValue::Invalid`]: crate::ColorValue::Invalid

use crate::InvalidReason;
use miette::Diagnostic;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
/// Works hand in hand w/ [`ColrError`], which can be recovered from a report with
/// [`miette::Report::downcast_ref`].
pub type ColrResult<T> = miette::Result<T>;

/// Everything that can go wrong while turning user input into a color or style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ColrError {
    #[error("Unknown color name: '{input}'")]
    #[diagnostic(
        code(r3bl_colr::unknown_name),
        help("Use a basic name (\"red\"), an extended name (\"xred\"), 0-255, \"r,g,b\", or \"#rrggbb\"")
    )]
    UnknownName { input: String },

    #[error("Extended color out of range: '{input}'")]
    #[diagnostic(
        code(r3bl_colr::out_of_range_extended),
        help("Extended colors are palette indices in the range 0-255")
    )]
    OutOfRangeExtended { input: String },

    #[error("RGB component out of range: '{input}'")]
    #[diagnostic(
        code(r3bl_colr::out_of_range_rgb),
        help("Each of red, green and blue must be in the range 0-255")
    )]
    OutOfRangeRgb { input: String },

    #[error("Unknown style name: '{input}'")]
    #[diagnostic(
        code(r3bl_colr::unknown_style),
        help("Try \"bright\", \"dim\", \"italic\", \"underline\", \"flash\", \"highlight\", \"strikethru\" ...")
    )]
    UnknownStyle { input: String },

    #[error("Invalid hex color: '{input}'")]
    #[diagnostic(
        code(r3bl_colr::invalid_hex_color),
        help("Hex colors are 3 or 6 hex digits with an optional single leading '#'")
    )]
    InvalidHexColor { input: String },

    #[error("Invalid RGB string: '{input}'")]
    #[diagnostic(
        code(r3bl_colr::invalid_rgb_string),
        help("Separate three numbers with ',', ' ', ':' or ';', eg: \"255,0,128\"")
    )]
    InvalidRgbString { input: String },

    #[error("Invalid escape code: {input:?}")]
    #[diagnostic(
        code(r3bl_colr::invalid_escape_code),
        help("Only SGR color and style codes (ESC [ <params> m) can be parsed")
    )]
    InvalidEscapeCode { input: String },
}

impl InvalidReason {
    /// Attach the offending `input` to this reason.
    #[must_use]
    pub fn into_error(self, input: impl Into<String>) -> ColrError {
        let input = input.into();
        match self {
            InvalidReason::UnknownName => ColrError::UnknownName { input },
            InvalidReason::OutOfRangeExtended => ColrError::OutOfRangeExtended { input },
            InvalidReason::OutOfRangeRgb => ColrError::OutOfRangeRgb { input },
            InvalidReason::UnknownStyle => ColrError::UnknownStyle { input },
        }
    }
}

impl ColrError {
    /// The [`InvalidReason`] a lenient parser records for this error. Hex and RGB string
    /// errors have no out-of-range component, so they are an unknown name.
    #[must_use]
    pub fn reason(&self) -> InvalidReason {
        match self {
            ColrError::OutOfRangeExtended { .. } => InvalidReason::OutOfRangeExtended,
            ColrError::OutOfRangeRgb { .. } => InvalidReason::OutOfRangeRgb,
            ColrError::UnknownStyle { .. } => InvalidReason::UnknownStyle,
            ColrError::UnknownName { .. }
            | ColrError::InvalidHexColor { .. }
            | ColrError::InvalidRgbString { .. }
            | ColrError::InvalidEscapeCode { .. } => InvalidReason::UnknownName,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(InvalidReason::UnknownName)]
    #[test_case(InvalidReason::OutOfRangeExtended)]
    #[test_case(InvalidReason::OutOfRangeRgb)]
    #[test_case(InvalidReason::UnknownStyle)]
    fn reason_survives_into_error(reason: InvalidReason) {
        assert_eq2!(reason.into_error("x").reason(), reason);
    }

    #[test]
    fn error_message_carries_input() {
        let err = InvalidReason::OutOfRangeRgb.into_error("355,1,1");
        assert_eq2!(err.to_string(), "RGB component out of range: '355,1,1'");
    }

    #[test]
    fn downcast_from_report() {
        let result: ColrResult<()> = Err(ColrError::InvalidHexColor {
            input: "##fff".into(),
        }
        .into());
        let report = result.unwrap_err();
        assert_eq2!(
            report.downcast_ref::<ColrError>(),
            Some(&ColrError::InvalidHexColor {
                input: "##fff".into()
            })
        );
    }
}

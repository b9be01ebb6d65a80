// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types and conversions.
//!
//! This module provides:
//! - **Primitive types**: [`BasicValue`] (16 colors), extended palette indices (`u8`),
//!   [`RgbValue`] (24-bit truecolor) and [`StyleValue`] (text attributes)
//! - **Sum type**: [`ColorValue`] which holds exactly one of the above, or nothing
//!   ([`ColorValue::Empty`]), or the reason parsing failed ([`ColorValue::Invalid`])
//! - **Role**: [`Role`] says whether a value applies to the foreground, the background,
//!   or is a style attribute
//! - **Conversion logic**: RGB to nearest 256-color index, see [`extended_from_rgb`]

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod basic_value;
mod color_value;
mod convert;
mod extended_value;
mod rgb_value;
mod role;
mod style_value;

// Re-export.
pub use basic_value::*;
pub use color_value::*;
pub use convert::*;
pub use extended_value::*;
pub use rgb_value::*;
pub use role::*;
pub use style_value::*;

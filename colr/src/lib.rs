// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words colr rgbs sgr xwhite

//! # r3bl_colr
//!
//! Turn plain text plus a foreground color, background color and text style into an
//! ANSI SGR escape-code-wrapped string.
//!
//! Three color models are supported:
//! 1. [`BasicValue`]: the 16 (plus `unused` and `reset`) terminal colors, eg: `"red"`,
//!    `"lightblue"`.
//! 2. Extended: an index into the 256-color palette, eg: `"xred"`, `"208"`,
//!    `"#ff8700"`.
//! 3. [`RgbValue`]: 24-bit truecolor, eg: `"255,128,0"`, `"255;128;0"`, `"#f80"`.
//!
//! And text styles via [`StyleValue`], eg: `"bright"`, `"underline"`.
//!
//! All of these are carried by the [`ColorValue`] sum type. A [`ColorValue`] paired with
//! a [`Role`] (foreground, background, or style) is a [`RoleArg`], which renders into an
//! escape code. Up to one [`RoleArg`] per role is combined with text in a
//! [`StyledText`].
//!
//! ```
//! use r3bl_colr::{BasicValue, RgbValue, StyledText};
//!
//! let red = StyledText::new("Test").fore(BasicValue::Red);
//! assert_eq!(red.render(), "\x1b[31mTest\x1b[0m");
//!
//! let rgb = StyledText::new("Test").fore(RgbValue::from_u8(1, 1, 1));
//! assert_eq!(rgb.render(), "\x1b[38;2;1;1;1mTest\x1b[0m");
//! ```
//!
//! Names are parsed with [`ColorValue::from_name`]. A name that can't be parsed yields
//! [`ColorValue::Invalid`] with an [`InvalidReason`], which formats into an empty escape
//! code. Use the `try_*` variants to get a [`ColrError`] instead.
//!
//! ```
//! use r3bl_colr::{ColorValue, InvalidReason};
//!
//! assert_eq!(ColorValue::from_name("345").invalid_reason(),
//!            Some(InvalidReason::OutOfRangeExtended));
//! assert!(ColorValue::try_from_name("NOTACOLOR").is_err());
//! ```
//!
//! The escape-code-aware helpers ([`visible_length`], [`strip_codes`], [`justify`]) and
//! the [`rainbow_fg`] family round out the API.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod common;
pub mod constants;
pub mod decl_macros;
pub mod generator;
pub mod misc;
pub mod parser;
pub mod rainbow;
pub mod term;

// Re-export.
pub use color::*;
pub use common::*;
pub use constants::*;
pub use generator::*;
pub use misc::*;
pub use parser::*;
pub use rainbow::*;
pub use term::*;

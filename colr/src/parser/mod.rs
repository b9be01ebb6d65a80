// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn user input (names, numbers, RGB strings, hex colors) and raw escape codes into
//! [`crate::ColorValue`]s.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod esc_code_parser;
mod hex_color_parser;
mod name_parser;
mod rgb_string_parser;

// Re-export.
pub use esc_code_parser::*;
pub use hex_color_parser::*;
pub use name_parser::*;
pub use rgb_string_parser::*;

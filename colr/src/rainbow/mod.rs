// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lolcat style rainbow text. Each character gets its own color, stepped along three
//! phase shifted sine waves.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod color_utils;
mod colorize;

// Re-export.
pub use color_utils::*;
pub use colorize::*;

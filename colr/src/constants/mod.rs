// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Static data: SGR sequence pieces and sizes, the name tables, and the 256-color
//! palette.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod names;
mod palette;
mod sgr;

// Re-export.
pub use names::*;
pub use palette::*;
pub use sgr::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! String helpers that step over escape codes instead of counting them.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod esc_aware_str;
mod justify;

// Re-export.
pub use esc_aware_str::*;
pub use justify::*;

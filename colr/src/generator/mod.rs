// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Generate escape codes ([`SgrCode`]), pair values with roles ([`RoleArg`]), and
//! assemble styled strings ([`StyledText`]).

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
mod role_arg;
mod sgr_code;
mod styled_text;

// Re-export.
pub use role_arg::*;
pub use sgr_code::*;
pub use styled_text::*;

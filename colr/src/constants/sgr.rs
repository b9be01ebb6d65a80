// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) sequence constants.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

/// Control Sequence Introducer. Every code this crate writes starts with it.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const SGR: &str = "m";

/// Resets all text attributes (color, bold, italic, etc.) to default.
pub const SGR_RESET: &str = "\x1b[0m";

/// Parameter prefix for an extended or RGB foreground color.
pub const SGR_FG_EXTENDED: u8 = 38;

/// Parameter prefix for an extended or RGB background color.
pub const SGR_BG_EXTENDED: u8 = 48;

/// Selector that follows [`SGR_FG_EXTENDED`] / [`SGR_BG_EXTENDED`] for 256 colors.
pub const SGR_SELECT_ANSI256: u8 = 5;

/// Selector that follows [`SGR_FG_EXTENDED`] / [`SGR_BG_EXTENDED`] for truecolor.
pub const SGR_SELECT_RGB: u8 = 2;

// Worst case buffer sizes. Each counts one extra byte for a terminator, so they are
// upper bounds on the exact lengths reported by `ColorValue::length_for()`.

/// `"\x1b[107m"` plus terminator, rounded up.
pub const CODE_LEN: usize = 14;
/// `"\x1b[38;5;255m"` plus terminator.
pub const CODEX_LEN: usize = 12;
/// `"\x1b[38;2;255;255;255m"` plus terminator.
pub const CODE_RGB_LEN: usize = 20;
/// `"\x1b[53m"` plus terminator.
pub const STYLE_LEN: usize = 6;
/// [`SGR_RESET`] plus terminator.
pub const CODE_RESET_LEN: usize = 5;
/// An empty string plus terminator.
pub const EMPTY_CODE_LEN: usize = 1;

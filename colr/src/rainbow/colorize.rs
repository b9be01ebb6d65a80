// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CODE_RGB_LEN, DEFAULT_OFFSET, RgbFormatter, SGR_RESET, append_reset,
            bg_rgb_formatter, bg_rgb_term_formatter, fg_rgb_formatter,
            fg_rgb_term_formatter, step};

/// Prefix every character of `text` with the escape code `formatter` makes for the next
/// rainbow [`step`], starting at `offset`, and end with one reset code. Newlines are
/// kept as is and don't use up a step. Empty `text` gives an empty string.
#[must_use]
pub fn colorize(formatter: RgbFormatter, text: &str, freq: f64, offset: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let char_count = text.chars().count();
    let mut acc =
        String::with_capacity(text.len() + char_count * CODE_RGB_LEN + SGR_RESET.len());
    let mut offset = if offset == 0 { DEFAULT_OFFSET } else { offset };
    for ch in text.chars() {
        if ch == '\n' {
            acc.push(ch);
            continue;
        }
        acc.push_str(&formatter(step(freq, offset)));
        acc.push(ch);
        offset = offset.wrapping_add(1);
    }
    append_reset(&mut acc);
    acc
}

/// Rainbow foreground, truecolor.
///
/// ```
/// use r3bl_colr::{rainbow_fg, strip_codes};
///
/// let text = rainbow_fg("hello", 0.1, 0);
/// assert!(text.starts_with("\x1b[38;2;165;214;4mh"));
/// assert_eq!(strip_codes(&text), "hello");
/// ```
#[must_use]
pub fn rainbow_fg(text: &str, freq: f64, offset: usize) -> String {
    colorize(fg_rgb_formatter, text, freq, offset)
}

/// Rainbow background, truecolor.
#[must_use]
pub fn rainbow_bg(text: &str, freq: f64, offset: usize) -> String {
    colorize(bg_rgb_formatter, text, freq, offset)
}

/// Rainbow foreground, 256 colors.
#[must_use]
pub fn rainbow_fg_term(text: &str, freq: f64, offset: usize) -> String {
    colorize(fg_rgb_term_formatter, text, freq, offset)
}

/// Rainbow background, 256 colors.
#[must_use]
pub fn rainbow_bg_term(text: &str, freq: f64, offset: usize) -> String {
    colorize(bg_rgb_term_formatter, text, freq, offset)
}

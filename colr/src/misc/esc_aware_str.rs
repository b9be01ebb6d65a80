// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SGR_RESET, find_sgr_codes};

/// The characters of `text` outside escape sequences. A sequence starts with `ESC [`
/// and ends at the first ASCII letter, so cursor movement codes are skipped as well as
/// SGR codes. An unterminated sequence runs to the end of `text`.
pub fn visible_chars(text: &str) -> impl Iterator<Item = char> {
    let mut chars = text.chars().peekable();
    std::iter::from_fn(move || {
        loop {
            let ch = chars.next()?;
            if ch == '\x1b' && chars.peek() == Some(&'[') {
                for it in chars.by_ref() {
                    if it.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
            return Some(ch);
        }
    })
}

/// Number of characters (not bytes) in `text`, ignoring escape sequences.
///
/// ```
/// use r3bl_colr::visible_length;
///
/// assert_eq!(visible_length("\x1b[31mtest\x1b[0m"), 4);
/// assert_eq!(visible_length("\x1b[2Jé"), 1);
/// ```
#[must_use]
pub fn visible_length(text: &str) -> usize { visible_chars(text).count() }

/// `text` without its escape sequences.
#[must_use]
pub fn strip_codes(text: &str) -> String {
    let mut acc = String::with_capacity(text.len());
    acc.extend(visible_chars(text));
    acc
}

/// `text` contains at least one well formed SGR code (`ESC [` digits and semicolons
/// `m`). Malformed sequences don't count.
#[must_use]
pub fn has_codes(text: &str) -> bool { find_sgr_codes(text).next().is_some() }

/// Byte length of the escape sequence at the start of `text`, using the same rule as
/// [`visible_chars`]: `ESC [` through the first ASCII letter. [`None`] if `text` does
/// not start with a terminated sequence.
#[must_use]
pub fn esc_seq_len(text: &str) -> Option<usize> {
    let rest = text.strip_prefix("\x1b[")?;
    let end = rest.find(|it: char| it.is_ascii_alphabetic())?;
    Some("\x1b[".len() + end + 1)
}

/// `text` is not empty and consists only of back to back escape sequences, SGR or
/// not. These are exactly the non-empty strings with a [`visible_length`] of `0`,
/// minus those ending in an unterminated sequence.
#[must_use]
pub fn is_codes_only(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let mut rest = text;
    while !rest.is_empty() {
        match esc_seq_len(rest) {
            Some(len) => rest = &rest[len..],
            None => return false,
        }
    }
    true
}

/// Append [`SGR_RESET`] to `text`. If `text` ends with newlines, the reset goes before
/// them so it takes effect before the line break.
///
/// ```
/// use r3bl_colr::append_reset;
///
/// let mut text = String::from("line\n\n");
/// append_reset(&mut text);
/// assert_eq!(text, "line\x1b[0m\n\n");
/// ```
pub fn append_reset(text: &mut String) {
    let index = text.trim_end_matches('\n').len();
    text.insert_str(index, SGR_RESET);
}

/// `text` ends with [`SGR_RESET`], ignoring trailing newlines.
#[must_use]
pub fn ends_with_reset(text: &str) -> bool { text.trim_end_matches('\n').ends_with(SGR_RESET) }

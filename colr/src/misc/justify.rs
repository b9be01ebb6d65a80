// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DetectedTermGeometry, TermGeometry, visible_length};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JustifyMethod {
    #[default]
    None,
    /// Text on the left, padding on the right.
    Left,
    /// Padding on the left, text on the right.
    Right,
    /// Padding on both sides. An odd pad character goes on the left.
    Center,
}

impl Display for JustifyMethod {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            JustifyMethod::None   => write!(f, "none"),
            JustifyMethod::Left   => write!(f, "left"),
            JustifyMethod::Right  => write!(f, "right"),
            JustifyMethod::Center => write!(f, "center"),
        }
    }
}

pub const DEFAULT_PAD_CHAR: char = ' ';

/// How to justify text. A `width` of `0` means the width of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JustifySpec {
    pub method: JustifyMethod,
    pub width: usize,
    pub pad_char: char,
}

impl Default for JustifySpec {
    fn default() -> Self {
        Self {
            method: JustifyMethod::None,
            width: 0,
            pad_char: DEFAULT_PAD_CHAR,
        }
    }
}

impl JustifySpec {
    #[must_use]
    pub fn new(method: JustifyMethod, width: usize, pad_char: char) -> Self {
        Self {
            method,
            width,
            pad_char,
        }
    }

    /// No justification.
    #[must_use]
    pub fn empty() -> Self { Self::default() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.method == JustifyMethod::None }

    #[must_use]
    pub fn left(width: usize) -> Self { Self::new(JustifyMethod::Left, width, DEFAULT_PAD_CHAR) }

    #[must_use]
    pub fn right(width: usize) -> Self {
        Self::new(JustifyMethod::Right, width, DEFAULT_PAD_CHAR)
    }

    #[must_use]
    pub fn center(width: usize) -> Self {
        Self::new(JustifyMethod::Center, width, DEFAULT_PAD_CHAR)
    }

    #[must_use]
    pub fn with_pad_char(self, pad_char: char) -> Self { Self { pad_char, ..self } }

    /// The target width, asking `geometry` when it is `0`.
    #[must_use]
    pub fn resolve_width(&self, geometry: &impl TermGeometry) -> usize {
        if self.width != 0 {
            return self.width;
        }
        let cols = geometry.size().cols;
        tracing::debug!(cols, method = %self.method, "justify width is 0, using terminal width");
        usize::from(cols)
    }

    /// Pad characters to add on the left and on the right of `text`.
    #[must_use]
    pub fn padding_for(&self, text: &str, geometry: &impl TermGeometry) -> (usize, usize) {
        if self.is_empty() {
            return (0, 0);
        }
        let deficit = self
            .resolve_width(geometry)
            .saturating_sub(visible_length(text));
        match self.method {
            JustifyMethod::None => (0, 0),
            JustifyMethod::Left => (0, deficit),
            JustifyMethod::Right => (deficit, 0),
            JustifyMethod::Center => (deficit - deficit / 2, deficit / 2),
        }
    }

    /// Justify `text`. Escape codes in `text` take up no width.
    #[must_use]
    pub fn apply(&self, text: &str, geometry: &impl TermGeometry) -> String {
        let (left, right) = self.padding_for(text, geometry);
        let pad_len = self.pad_char.len_utf8();
        let mut acc = String::with_capacity(text.len() + (left + right) * pad_len);
        acc.extend(std::iter::repeat_n(self.pad_char, left));
        acc.push_str(text);
        acc.extend(std::iter::repeat_n(self.pad_char, right));
        acc
    }
}

/// Pad `text` with `pad_char` to `width` visible characters. A `width` of `0` means the
/// terminal width, as reported by `geometry`. Text that is already wide enough is
/// returned unchanged.
///
/// ```
/// use r3bl_colr::{FixedTermGeometry, JustifyMethod, justify};
///
/// let geometry = FixedTermGeometry::new(24, 10);
/// assert_eq!(justify("test", ' ', 8, JustifyMethod::Center, &geometry), "  test  ");
/// assert_eq!(justify("test", '*', 0, JustifyMethod::Right, &geometry), "******test");
/// ```
#[must_use]
pub fn justify(
    text: &str,
    pad_char: char,
    width: usize,
    method: JustifyMethod,
    geometry: &impl TermGeometry,
) -> String {
    JustifySpec::new(method, width, pad_char).apply(text, geometry)
}

/// Left justify with spaces. A `width` of `0` means the terminal width.
#[must_use]
pub fn ljust(text: &str, width: usize) -> String {
    JustifySpec::left(width).apply(text, &DetectedTermGeometry)
}

/// Right justify with spaces. A `width` of `0` means the terminal width.
#[must_use]
pub fn rjust(text: &str, width: usize) -> String {
    JustifySpec::right(width).apply(text, &DetectedTermGeometry)
}

/// Center with spaces. A `width` of `0` means the terminal width.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    JustifySpec::center(width).apply(text, &DetectedTermGeometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedTermGeometry, assert_eq2};
    use test_case::test_case;

    const GEOMETRY: FixedTermGeometry = FixedTermGeometry::new(24, 12);

    #[test_case(JustifyMethod::Left, 8, "test    ")]
    #[test_case(JustifyMethod::Right, 8, "    test")]
    #[test_case(JustifyMethod::Center, 8, "  test  ")]
    #[test_case(JustifyMethod::Center, 9, "   test  ")]
    #[test_case(JustifyMethod::Left, 4, "test")]
    #[test_case(JustifyMethod::Left, 2, "test")]
    #[test_case(JustifyMethod::None, 8, "test")]
    #[test_case(JustifyMethod::Left, 0, "test        ")]
    fn plain(method: JustifyMethod, width: usize, expected: &str) {
        assert_eq2!(justify("test", ' ', width, method, &GEOMETRY), expected);
    }

    #[test]
    fn ignores_codes() {
        let text = "\x1b[31mtest\x1b[0m";
        let actual = justify(text, ' ', 8, JustifyMethod::Center, &GEOMETRY);
        assert_eq2!(actual, "  \x1b[31mtest\x1b[0m  ");
        assert_eq2!(visible_length(&actual), 8);
    }

    #[test]
    fn multi_byte_pad() {
        let actual = justify("ab", '─', 5, JustifyMethod::Right, &GEOMETRY);
        assert_eq2!(actual, "───ab");
        assert_eq2!(actual.len(), 2 + 3 * '─'.len_utf8());
    }

    #[test]
    fn wrappers() {
        assert_eq2!(ljust("test", 8), "test    ");
        assert_eq2!(rjust("test", 8), "    test");
        assert_eq2!(center("test", 8), "  test  ");
    }

    #[test]
    fn spec() {
        assert!(JustifySpec::empty().is_empty());
        assert!(!JustifySpec::left(3).is_empty());
        assert_eq2!(JustifySpec::center(3).with_pad_char('-').pad_char, '-');
        assert_eq2!(JustifyMethod::Center.to_string(), "center");
    }
}

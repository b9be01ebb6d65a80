// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words lightblack lightred lightgreen lightyellow lightblue lightmagenta lightcyan
// cspell:words lightwhite lightnormal xblack xred xgreen xyellow xblue xmagenta xcyan
// cspell:words xwhite xnormal xlightblack xlightred xlightgreen xlightyellow xlightblue
// cspell:words xlightmagenta xlightcyan xlightwhite xlightnormal strikethru encircle

//! Name tables for basic colors, extended colors, and styles.
//!
//! Several names may map to the same value. The first entry for a value is its
//! canonical name, which is what [`name_of`] returns.

use crate::{BasicValue, StyleValue};

/// One row of a name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameEntry<T: 'static> {
    pub name: &'static str,
    pub value: T,
}

const fn entry<T>(name: &'static str, value: T) -> NameEntry<T> { NameEntry { name, value } }

#[rustfmt::skip]
pub const BASIC_NAMES: &[NameEntry<BasicValue>] = &[
    entry("black",        BasicValue::Black),
    entry("red",          BasicValue::Red),
    entry("green",        BasicValue::Green),
    entry("yellow",       BasicValue::Yellow),
    entry("blue",         BasicValue::Blue),
    entry("magenta",      BasicValue::Magenta),
    entry("cyan",         BasicValue::Cyan),
    entry("white",        BasicValue::White),
    entry("unused",       BasicValue::Unused),
    entry("reset",        BasicValue::Reset),
    entry("none",         BasicValue::Reset),
    entry("normal",       BasicValue::White),
    entry("lightblack",   BasicValue::LightBlack),
    entry("lightred",     BasicValue::LightRed),
    entry("lightgreen",   BasicValue::LightGreen),
    entry("lightyellow",  BasicValue::LightYellow),
    entry("lightblue",    BasicValue::LightBlue),
    entry("lightmagenta", BasicValue::LightMagenta),
    entry("lightcyan",    BasicValue::LightCyan),
    entry("lightwhite",   BasicValue::LightWhite),
    entry("lightnormal",  BasicValue::LightWhite),
];

#[rustfmt::skip]
pub const EXTENDED_NAMES: &[NameEntry<u8>] = &[
    entry("xblack",        0),
    entry("xred",          1),
    entry("xgreen",        2),
    entry("xyellow",       3),
    entry("xblue",         4),
    entry("xmagenta",      5),
    entry("xcyan",         6),
    entry("xwhite",        7),
    entry("xnormal",       7),
    entry("xlightblack",   8),
    entry("xlightred",     9),
    entry("xlightgreen",   10),
    entry("xlightyellow",  11),
    entry("xlightblue",    12),
    entry("xlightmagenta", 13),
    entry("xlightcyan",    14),
    entry("xlightwhite",   15),
    entry("xlightnormal",  15),
];

#[rustfmt::skip]
pub const STYLE_NAMES: &[NameEntry<StyleValue>] = &[
    entry("reset_all",     StyleValue::ResetAll),
    entry("reset",         StyleValue::ResetAll),
    entry("bright",        StyleValue::Bright),
    entry("bold",          StyleValue::Bright),
    entry("dim",           StyleValue::Dim),
    entry("italic",        StyleValue::Italic),
    entry("underline",     StyleValue::Underline),
    entry("flash",         StyleValue::Flash),
    entry("highlight",     StyleValue::Highlight),
    entry("normal",        StyleValue::Normal),
    entry("strikethru",    StyleValue::Strikethru),
    entry("strike",        StyleValue::Strikethru),
    entry("strikethrough", StyleValue::Strikethru),
    entry("frame",         StyleValue::Frame),
    entry("encircle",      StyleValue::Encircle),
    entry("circle",        StyleValue::Encircle),
    entry("overline",      StyleValue::Overline),
];

/// In the style role this name means "no style", which is an empty value rather than
/// an entry of [`STYLE_NAMES`].
pub const NO_STYLE_NAME: &str = "none";

/// Case-insensitive lookup of `name` in `table`.
#[must_use]
pub fn lookup_name<T: Copy>(table: &[NameEntry<T>], name: &str) -> Option<T> {
    table
        .iter()
        .find(|it| it.name.eq_ignore_ascii_case(name))
        .map(|it| it.value)
}

/// Canonical (first) name for `value` in `table`.
#[must_use]
pub fn name_of<T: Copy + PartialEq>(table: &[NameEntry<T>], value: T) -> Option<&'static str> {
    table.iter().find(|it| it.value == value).map(|it| it.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("red", Some(BasicValue::Red))]
    #[test_case("RED", Some(BasicValue::Red))]
    #[test_case("LightBlue", Some(BasicValue::LightBlue))]
    #[test_case("none", Some(BasicValue::Reset))]
    #[test_case("normal", Some(BasicValue::White))]
    #[test_case("xred", None)]
    fn basic_lookup(name: &str, expected: Option<BasicValue>) {
        assert_eq2!(lookup_name(BASIC_NAMES, name), expected);
    }

    #[test]
    fn aliases_keep_canonical_name() {
        assert_eq2!(name_of(BASIC_NAMES, BasicValue::White), Some("white"));
        assert_eq2!(name_of(BASIC_NAMES, BasicValue::Reset), Some("reset"));
        assert_eq2!(name_of(STYLE_NAMES, StyleValue::Bright), Some("bright"));
        assert_eq2!(name_of(STYLE_NAMES, StyleValue::ResetAll), Some("reset_all"));
        assert_eq2!(lookup_name(STYLE_NAMES, "RESET"), Some(StyleValue::ResetAll));
        assert_eq2!(name_of(STYLE_NAMES, StyleValue::Strikethru), Some("strikethru"));
        assert_eq2!(name_of(EXTENDED_NAMES, 15), Some("xlightwhite"));
        assert_eq2!(name_of(EXTENDED_NAMES, 16), None);
    }

    #[test]
    fn names_are_lowercase() {
        let all = BASIC_NAMES
            .iter()
            .map(|it| it.name)
            .chain(EXTENDED_NAMES.iter().map(|it| it.name))
            .chain(STYLE_NAMES.iter().map(|it| it.name));
        for name in all {
            assert_eq2!(name, name.to_lowercase());
        }
    }
}

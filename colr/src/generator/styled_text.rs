// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`StyledText`] combines text with up to one foreground, one background and one style
//! [`RoleArg`], plus optional justification, and renders it into an escape-code-wrapped
//! string.
//!
//! Rendered layout, with `[..]` parts only present when set:
//!
//! ```text
//! [left pad] [style code] [fore code] [back code] text [reset] [trailing newlines] [right pad]
//! ```
//!
//! The order style, fore, back is fixed. The reset code is added whenever any arg is
//! present, except for a lone [`StyleValue::ResetAll`] style which already is the reset
//! code.

use crate::{CODE_RESET_LEN, ColorValue, ColrResult, DetectedTermGeometry, JustifySpec,
            Role, RoleArg, SGR_RESET, StyleValue, TermGeometry, append_reset};
use std::fmt::{Display, Formatter, Result, Write};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: String,
    fore: Option<RoleArg>,
    back: Option<RoleArg>,
    style: Option<RoleArg>,
    justify: JustifySpec,
}

impl StyledText {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Place each arg in the slot for its role. A later arg replaces an earlier one for
    /// the same role. Args with [`Role::None`] are dropped.
    ///
    /// ```
    /// use r3bl_colr::{BasicValue, RoleArg, StyleValue, StyledText};
    ///
    /// let text = StyledText::from_args("hi", [
    ///     RoleArg::back(BasicValue::Red),
    ///     RoleArg::style(StyleValue::Bright),
    ///     RoleArg::fore(BasicValue::White),
    /// ]);
    /// assert_eq!(text.render(), "\x1b[1m\x1b[37m\x1b[41mhi\x1b[0m");
    /// ```
    #[must_use]
    pub fn from_args(text: impl Into<String>, args: impl IntoIterator<Item = RoleArg>) -> Self {
        args.into_iter()
            .fold(Self::new(text), |acc, arg| acc.with_arg(arg))
    }

    /// Put `arg` in the slot for its role.
    #[must_use]
    pub fn with_arg(mut self, arg: RoleArg) -> Self {
        match arg.role() {
            Role::Foreground => self.fore = Some(arg),
            Role::Background => self.back = Some(arg),
            Role::Style => self.style = Some(arg),
            Role::None => {}
        }
        self
    }

    #[must_use]
    pub fn fore(self, value: impl Into<ColorValue>) -> Self { self.with_arg(RoleArg::fore(value)) }

    #[must_use]
    pub fn back(self, value: impl Into<ColorValue>) -> Self { self.with_arg(RoleArg::back(value)) }

    #[must_use]
    pub fn style(self, value: StyleValue) -> Self { self.with_arg(RoleArg::style(value)) }

    #[must_use]
    pub fn justify(self, justify: JustifySpec) -> Self { Self { justify, ..self } }

    #[must_use]
    pub fn ljust(self, width: usize) -> Self { self.justify(JustifySpec::left(width)) }

    #[must_use]
    pub fn rjust(self, width: usize) -> Self { self.justify(JustifySpec::right(width)) }

    #[must_use]
    pub fn center(self, width: usize) -> Self { self.justify(JustifySpec::center(width)) }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn fore_arg(&self) -> Option<&RoleArg> { self.fore.as_ref() }

    #[must_use]
    pub fn back_arg(&self) -> Option<&RoleArg> { self.back.as_ref() }

    #[must_use]
    pub fn style_arg(&self) -> Option<&RoleArg> { self.style.as_ref() }

    #[must_use]
    pub fn justify_spec(&self) -> &JustifySpec { &self.justify }

    /// Non-empty args in render order: style, fore, back.
    pub fn args(&self) -> impl Iterator<Item = &RoleArg> {
        [&self.style, &self.fore, &self.back]
            .into_iter()
            .filter_map(Option::as_ref)
            .filter(|it| !it.is_empty())
    }

    #[must_use]
    pub fn has_args(&self) -> bool { self.args().next().is_some() }

    #[must_use]
    pub fn has_arg(&self, arg: &RoleArg) -> bool { self.args().any(|it| it == arg) }

    /// No text and no args.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() && !self.has_args() }

    /// A reset code is written after the text.
    #[must_use]
    pub fn needs_reset(&self) -> bool {
        let mut args = self.args();
        match (args.next(), args.next()) {
            (None, _) => false,
            (Some(only), None) => !(only.role() == Role::Style && only.is_reset_all()),
            (Some(_), Some(_)) => true,
        }
    }

    /// Exact byte length of [`StyledText::render_with`].
    #[must_use]
    pub fn length_with(&self, geometry: &impl TermGeometry) -> usize {
        let codes: usize = self.args().map(RoleArg::length).sum();
        let reset = if self.needs_reset() { SGR_RESET.len() } else { 0 };
        let (left, right) = self.justify.padding_for(&self.text, geometry);
        self.text.len() + codes + reset + (left + right) * self.justify.pad_char.len_utf8()
    }

    /// Exact byte length of [`StyledText::render`].
    #[must_use]
    pub fn length(&self) -> usize { self.length_with(&DetectedTermGeometry) }

    /// Worst case buffer size using the fixed per-kind code sizes, a 5 byte reset
    /// allowance, justification padding and a terminator byte. Always greater than
    /// [`StyledText::length_with`].
    #[must_use]
    pub fn max_length_with(&self, geometry: &impl TermGeometry) -> usize {
        let codes: usize = self.args().map(|it| it.value().max_length_for()).sum();
        let reset = if self.needs_reset() { CODE_RESET_LEN } else { 0 };
        let (left, right) = self.justify.padding_for(&self.text, geometry);
        let padding = (left + right) * self.justify.pad_char.len_utf8();
        self.text.len() + codes + reset + padding + 1
    }

    /// See [`StyledText::max_length_with`].
    #[must_use]
    pub fn max_length(&self) -> usize { self.max_length_with(&DetectedTermGeometry) }

    /// Render, asking `geometry` for the terminal width if the justification width is
    /// `0`. Invalid args write nothing.
    #[must_use]
    pub fn render_with(&self, geometry: &impl TermGeometry) -> String {
        let (left, right) = self.justify.padding_for(&self.text, geometry);
        let pad_char = self.justify.pad_char;

        let mut acc = String::with_capacity(self.max_length_with(geometry));
        acc.extend(std::iter::repeat_n(pad_char, left));
        for code in self.args().filter_map(RoleArg::sgr_code) {
            // Writing into a String never fails.
            let _unused = write!(acc, "{code}");
        }
        acc.push_str(&self.text);
        if self.needs_reset() {
            append_reset(&mut acc);
        }
        acc.extend(std::iter::repeat_n(pad_char, right));
        acc
    }

    /// Render using the real terminal width if needed. See [`StyledText::render_with`].
    #[must_use]
    pub fn render(&self) -> String { self.render_with(&DetectedTermGeometry) }

    /// Same as [`StyledText::render`] but an invalid arg is an error.
    ///
    /// # Errors
    ///
    /// Returns the [`crate::ColrError`] for the first invalid arg, in render order.
    pub fn try_render(&self) -> ColrResult<String> {
        if let Some(arg) = self.args().find(|it| it.is_invalid()) {
            arg.try_to_escape()?;
        }
        Ok(self.render())
    }
}

impl Display for StyledText {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.render()) }
}

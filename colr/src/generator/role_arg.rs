// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorValue, ColrResult, InlineVec, InvalidReason, NO_STYLE_NAME, Role, SgrCode,
            StyleValue, find_sgr_codes, format_esc_code, parse_esc_code};
use std::fmt::{Display, Formatter, Result};

/// A [`ColorValue`] tagged with the [`Role`] it is applied in. This is the unit that
/// [`crate::StyledText`] is built from.
///
/// A [`Role::Style`] arg only ever holds a [`ColorValue::Style`] (or an empty or invalid
/// value). [`RoleArg::new`] turns a color given for the style role into
/// [`InvalidReason::UnknownStyle`]. Fore and back args may hold a style value, which is
/// written as that style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleArg {
    role: Role,
    value: ColorValue,
}

impl RoleArg {
    #[must_use]
    pub fn new(role: Role, value: impl Into<ColorValue>) -> Self {
        let value = value.into();
        let value = match (role, value) {
            (
                Role::Style,
                ColorValue::Basic(_) | ColorValue::Extended(_) | ColorValue::Rgb(_),
            ) => ColorValue::Invalid(InvalidReason::UnknownStyle),
            (_, it) => it,
        };
        Self { role, value }
    }

    #[must_use]
    pub fn fore(value: impl Into<ColorValue>) -> Self { Self::new(Role::Foreground, value) }

    #[must_use]
    pub fn back(value: impl Into<ColorValue>) -> Self { Self::new(Role::Background, value) }

    #[must_use]
    pub fn style(value: StyleValue) -> Self { Self::new(Role::Style, value) }

    /// A placeholder that never produces an escape code.
    #[must_use]
    pub fn empty() -> Self { Self::default() }

    /// Parse `name` for `role`. Unlike [`ColorValue::from_name`], the role is used to
    /// reject names of the wrong kind:
    /// - [`Role::Style`] only accepts style names, anything else is
    ///   [`InvalidReason::UnknownStyle`]. [`NO_STYLE_NAME`] gives an empty arg.
    /// - [`Role::Foreground`] and [`Role::Background`] reject style names with
    ///   [`InvalidReason::UnknownName`].
    #[must_use]
    pub fn from_name(role: Role, name: &str) -> Self {
        let value = match role {
            Role::Style if name.eq_ignore_ascii_case(NO_STYLE_NAME) => ColorValue::Empty,
            Role::Style => StyleValue::from_name(name).map_or(
                ColorValue::Invalid(InvalidReason::UnknownStyle),
                ColorValue::Style,
            ),
            Role::Foreground | Role::Background | Role::None => {
                match ColorValue::from_name(name) {
                    ColorValue::Style(_) => ColorValue::Invalid(InvalidReason::UnknownName),
                    it => it,
                }
            }
        };
        if value.is_invalid() {
            tracing::debug!(%role, name, %value, "role arg did not parse");
        }
        Self::new(role, value)
    }

    /// Parse one escape code, recovering the role it was written for. An unrecognized
    /// code yields [`Role::None`] and an invalid value.
    #[must_use]
    pub fn from_escape(code: &str) -> Self {
        match parse_esc_code(code) {
            Ok((role, value)) => Self::new(role, value),
            Err(err) => Self::new(Role::None, ColorValue::Invalid(err.reason())),
        }
    }

    /// Every valid escape code in `text`, in order of appearance. With `unique`, later
    /// duplicates are dropped.
    ///
    /// ```
    /// use r3bl_colr::{BasicValue, RoleArg, StyleValue};
    ///
    /// let text = "\x1b[4m\x1b[31m\x1b[31m\x1b[47m\x1b[47mtest\x1b[0m";
    /// assert_eq!(RoleArg::all_from_str(text, false).len(), 6);
    /// let unique = RoleArg::all_from_str(text, true);
    /// assert_eq!(unique.as_slice(), &[
    ///     RoleArg::style(StyleValue::Underline),
    ///     RoleArg::fore(BasicValue::Red),
    ///     RoleArg::back(BasicValue::White),
    ///     RoleArg::style(StyleValue::ResetAll),
    /// ]);
    /// ```
    #[must_use]
    pub fn all_from_str(text: &str, unique: bool) -> InlineVec<RoleArg> {
        let mut acc = InlineVec::new();
        for arg in find_sgr_codes(text).map(Self::from_escape) {
            if arg.is_invalid() || (unique && acc.contains(&arg)) {
                continue;
            }
            acc.push(arg);
        }
        acc
    }

    #[must_use]
    pub fn role(&self) -> Role { self.role }

    #[must_use]
    pub fn value(&self) -> &ColorValue { &self.value }

    /// Nothing would be written for this arg.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.role == Role::None || self.value.is_empty() }

    #[must_use]
    pub fn is_valid(&self) -> bool { self.value.is_valid() }

    #[must_use]
    pub fn is_invalid(&self) -> bool { self.value.is_invalid() }

    /// Exact byte length of [`RoleArg::to_escape`].
    #[must_use]
    pub fn length(&self) -> usize { self.value.length_for(self.role) }

    /// This is a [`StyleValue::ResetAll`] style, which is the reset code itself.
    #[must_use]
    pub fn is_reset_all(&self) -> bool {
        matches!(self.value, ColorValue::Style(StyleValue::ResetAll))
    }

    /// The escape code for this arg, empty if it is empty or invalid.
    #[must_use]
    pub fn to_escape(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format_esc_code(self.role, &self.value)
    }

    /// Same as [`RoleArg::to_escape`] but an invalid value is an error.
    ///
    /// # Errors
    ///
    /// Returns the [`crate::ColrError`] matching the [`InvalidReason`] of the value.
    pub fn try_to_escape(&self) -> ColrResult<String> {
        if let ColorValue::Invalid(reason) = self.value {
            return Err(reason.into_error(self.to_string()).into());
        }
        Ok(self.to_escape())
    }

    pub(crate) fn sgr_code(&self) -> Option<SgrCode> {
        SgrCode::from_role_value(self.role, &self.value)
    }
}

impl From<StyleValue> for RoleArg {
    fn from(it: StyleValue) -> Self { Self::style(it) }
}

impl Display for RoleArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}: {}", self.role, self.value) }
}

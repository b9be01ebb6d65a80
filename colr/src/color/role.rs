// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};
use strum_macros::{EnumCount, EnumIter};

/// What a [`crate::ColorValue`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumCount, EnumIter)]
pub enum Role {
    Foreground,
    Background,
    Style,
    /// Placeholder. Never produces an escape code.
    #[default]
    None,
}

impl Display for Role {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Role::Foreground => write!(f, "fore"),
            Role::Background => write!(f, "back"),
            Role::Style      => write!(f, "style"),
            Role::None       => write!(f, "none"),
        }
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Declarative macros shared by the crate and its tests.

/// Wrapper for [`pretty_assertions::assert_eq!`] macro. Prints a colored diff of the two
/// values when they don't match.
///
/// ```
/// use r3bl_colr::assert_eq2;
///
/// assert_eq2!("\x1b[0m", r3bl_colr::SGR_RESET);
/// ```
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

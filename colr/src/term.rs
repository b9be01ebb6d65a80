// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal geometry, used when a justification width of `0` means "the whole
//! terminal width". Everything else in this crate is a pure function of its inputs, so
//! the size query sits behind the [`TermGeometry`] trait and is passed in.

use miette::IntoDiagnostic;

pub const DEFAULT_ROWS: u16 = 35;
pub const DEFAULT_COLS: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermSize {
    pub rows: u16,
    pub cols: u16,
}

impl Default for TermSize {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Something that knows how big the terminal is.
pub trait TermGeometry {
    fn size(&self) -> TermSize;
}

/// Always reports the same size. Use it in tests, or when output goes to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedTermGeometry(pub TermSize);

impl FixedTermGeometry {
    #[must_use]
    pub const fn new(rows: u16, cols: u16) -> Self { Self(TermSize { rows, cols }) }
}

impl TermGeometry for FixedTermGeometry {
    fn size(&self) -> TermSize { self.0 }
}

/// Asks the real terminal. Tries in order:
/// 1. [`crossterm::terminal::size`].
/// 2. The `LINES` and `COLUMNS` environment variables.
/// 3. [`TermSize::default`], which is [`DEFAULT_ROWS`] x [`DEFAULT_COLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectedTermGeometry;

impl TermGeometry for DetectedTermGeometry {
    fn size(&self) -> TermSize {
        if let Ok(size) = get_size() {
            return size;
        }
        if let Some(size) = get_size_from_env() {
            return size;
        }
        let size = TermSize::default();
        tracing::warn!(
            rows = size.rows,
            cols = size.cols,
            "could not detect terminal size, using default"
        );
        size
    }
}

/// Get the terminal size using [`crossterm`].
///
/// # Errors
///
/// Returns an error if:
/// - The terminal size cannot be determined
/// - The terminal is not available or not a TTY
/// - The terminal reports a zero width or height
pub fn get_size() -> miette::Result<TermSize> {
    let (cols, rows) = crossterm::terminal::size().into_diagnostic()?;
    if cols == 0 || rows == 0 {
        miette::bail!("terminal reported a size of {cols}x{rows}");
    }
    Ok(TermSize { rows, cols })
}

/// Read `LINES` and `COLUMNS`. Both must be set to positive numbers.
#[must_use]
pub fn get_size_from_env() -> Option<TermSize> {
    let read = |key: &str| {
        std::env::var(key)
            .ok()?
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|it| *it > 0)
    };
    Some(TermSize {
        rows: read("LINES")?,
        cols: read("COLUMNS")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use serial_test::serial;

    /// Restores the previous value of an environment variable on drop.
    struct EnvGuard {
        key: &'static str,
        prev: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: Option<&str>) -> Self {
            let prev = std::env::var(key).ok();
            set_var(key, value);
            Self { key, prev }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) { set_var(self.key, self.prev.as_deref()); }
    }

    fn set_var(key: &str, value: Option<&str>) {
        // SAFETY: Tests that touch the environment are `#[serial]`.
        unsafe {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }

    #[test]
    fn fixed() {
        let geometry = FixedTermGeometry::new(10, 20);
        assert_eq2!(geometry.size(), TermSize { rows: 10, cols: 20 });
    }

    #[test]
    #[serial]
    fn env_size() {
        let _lines = EnvGuard::set("LINES", Some("24"));
        let _cols = EnvGuard::set("COLUMNS", Some(" 132 "));
        assert_eq2!(get_size_from_env(), Some(TermSize { rows: 24, cols: 132 }));
    }

    #[test]
    #[serial]
    fn env_size_needs_both() {
        let _lines = EnvGuard::set("LINES", Some("24"));
        let _cols = EnvGuard::set("COLUMNS", None);
        assert_eq2!(get_size_from_env(), None);
    }

    #[test]
    #[serial]
    fn env_size_rejects_garbage() {
        let _lines = EnvGuard::set("LINES", Some("0"));
        let _cols = EnvGuard::set("COLUMNS", Some("wide"));
        assert_eq2!(get_size_from_env(), None);
    }

    #[test]
    #[serial]
    fn detected_never_reports_zero() {
        let _lines = EnvGuard::set("LINES", None);
        let _cols = EnvGuard::set("COLUMNS", None);
        let size = DetectedTermGeometry.size();
        assert!(size.rows > 0);
        assert!(size.cols > 0);
    }
}

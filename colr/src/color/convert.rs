// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Map arbitrary RGB values onto the 256-color palette.
//!
//! Each channel is snapped to the nearest of [`CUBE_STEPS`], which always lands on one
//! of the 216 entries of the color cube (indices `16..=231`). The palette is then
//! searched from index `0`, so a cube color that is also one of the 16 standard colors,
//! eg: `#ff0000`, maps to the standard index (`9`) instead of the cube index (`196`).
//! The grayscale ramp is never picked.

use crate::{ANSI_COLOR_PALETTE, CUBE_STEPS, RgbValue};

/// Nearest of [`CUBE_STEPS`] by absolute difference. A tie keeps the smaller step.
#[must_use]
pub fn nearest_cube_step(channel: u8) -> u8 {
    let mut nearest = CUBE_STEPS[0];
    for step in CUBE_STEPS {
        if step.abs_diff(channel) < nearest.abs_diff(channel) {
            nearest = step;
        }
    }
    nearest
}

/// Quantize each channel of `rgb` independently with [`nearest_cube_step`].
#[must_use]
pub fn rgb_to_terminal_rgb(rgb: RgbValue) -> RgbValue {
    RgbValue::from_u8(
        nearest_cube_step(rgb.red),
        nearest_cube_step(rgb.green),
        nearest_cube_step(rgb.blue),
    )
}

/// Lowest palette index whose color equals `rgb` quantized with
/// [`rgb_to_terminal_rgb`].
///
/// # Panics
///
/// If the quantized value is missing from [`ANSI_COLOR_PALETTE`], which means the
/// palette and [`CUBE_STEPS`] disagree.
#[must_use]
pub fn extended_from_rgb(rgb: RgbValue) -> u8 {
    let target = rgb_to_terminal_rgb(rgb);
    for index in 0..=u8::MAX {
        if RgbValue::from(ANSI_COLOR_PALETTE[usize::from(index)]) == target {
            return index;
        }
    }
    unreachable!("{target} is not in the palette, palette and cube steps are out of sync")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CUBE_END, CUBE_START, assert_eq2, extended_to_rgb};
    use test_case::test_case;

    #[test_case(0, 0)]
    #[test_case(47, 0)]
    #[test_case(48, 95)]
    #[test_case(115, 95)]
    #[test_case(116, 135)]
    #[test_case(155, 135)]
    #[test_case(235, 215)]
    #[test_case(236, 255)]
    #[test_case(255, 255)]
    fn snap_channel(channel: u8, expected: u8) {
        assert_eq2!(nearest_cube_step(channel), expected);
    }

    #[test]
    fn tie_keeps_smaller_step() {
        // 115 is 20 away from 95 and 135.
        assert_eq2!(nearest_cube_step(115), 95);
        // 195 is 20 away from 175 and 215.
        assert_eq2!(nearest_cube_step(195), 175);
    }

    #[test_case((0, 0, 0), 0)]
    #[test_case((255, 0, 0), 9)]
    #[test_case((0, 255, 0), 10)]
    #[test_case((255, 255, 0), 11)]
    #[test_case((0, 0, 255), 12)]
    #[test_case((255, 0, 255), 13)]
    #[test_case((0, 255, 255), 14)]
    #[test_case((255, 255, 255), 15)]
    #[test_case((0, 0, 95), 17)]
    #[test_case((250, 10, 5), 9)]
    #[test_case((128, 128, 128), 102)]
    fn standard_colors_win_over_cube(rgb: (u8, u8, u8), expected: u8) {
        assert_eq2!(extended_from_rgb(rgb.into()), expected);
    }

    #[test]
    fn cube_entries_map_to_first_match() {
        for index in CUBE_START..=CUBE_END {
            let rgb = extended_to_rgb(index);
            let mapped = extended_from_rgb(rgb);
            assert!(mapped <= index);
            assert_eq2!(extended_to_rgb(mapped), rgb);
            assert!((0..mapped).all(|it| extended_to_rgb(it) != rgb));
        }
    }

    #[test]
    fn every_palette_entry_maps_to_its_quantized_rgb() {
        for index in 0..=u8::MAX {
            let rgb = extended_to_rgb(index);
            let target = rgb_to_terminal_rgb(rgb);
            let mapped = extended_from_rgb(rgb);
            assert_eq2!(extended_to_rgb(mapped), target);
            assert!((0..mapped).all(|it| extended_to_rgb(it) != target));
        }
    }

    #[test]
    fn quantize_is_idempotent() {
        let rgb = RgbValue::from_u8(12, 140, 201);
        let once = rgb_to_terminal_rgb(rgb);
        assert_eq2!(once, RgbValue::from_u8(0, 135, 215));
        assert_eq2!(rgb_to_terminal_rgb(once), once);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Quantization of host lengths and angles onto integer grids.
//!
//! Lengths arrive in feet and are stored as whole millimetres; angles arrive
//! in radians and are stored as whole degrees. Both use [`f64::round`], which
//! rounds half away from zero, so every caller lands on the same grid cell
//! for the same input.

use crate::error::{Error, Result};

/// Millimetres per foot.
pub const MILLIMETRES_PER_FOOT: f64 = 304.8;

/// Converts a length in feet to whole millimetres.
///
/// Fails on NaN, infinities, and lengths whose rounded value does not fit
/// in an `i32` (roughly ±7000 km).
#[inline]
pub fn feet_to_millimetres(feet: f64) -> Result<i32> {
    quantize(feet * MILLIMETRES_PER_FOOT, feet, "length")
}

/// Converts an angle in radians to whole degrees.
///
/// The result is not wrapped; see [`normalize_degrees`].
#[inline]
pub fn radians_to_degrees(radians: f64) -> Result<i32> {
    quantize(radians.to_degrees(), radians, "angle")
}

/// Wraps an integer degree value into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

fn quantize(scaled: f64, input: f64, quantity: &'static str) -> Result<i32> {
    if !input.is_finite() {
        return Err(Error::NonFinite {
            quantity,
            value: input,
        });
    }

    let rounded = scaled.round();
    if rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
        return Err(Error::OutOfRange {
            quantity,
            value: input,
        });
    }

    Ok(rounded as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn one_foot_rounds_up() {
        assert_eq!(feet_to_millimetres(1.0).unwrap(), 305);
        assert_eq!(feet_to_millimetres(-1.0).unwrap(), -305);
        assert_eq!(feet_to_millimetres(0.0).unwrap(), 0);
        assert_eq!(feet_to_millimetres(10.0).unwrap(), 3048);
    }

    #[test]
    fn half_millimetre_rounds_away_from_zero() {
        // 1.5 mm and 2.5 mm are exactly representable after scaling.
        assert_eq!(quantize(1.5, 0.0, "length").unwrap(), 2);
        assert_eq!(quantize(2.5, 0.0, "length").unwrap(), 3);
        assert_eq!(quantize(-2.5, 0.0, "length").unwrap(), -3);

        // Just either side of half a millimetre expressed in feet.
        let half = 0.5 / MILLIMETRES_PER_FOOT;
        assert_eq!(feet_to_millimetres(half).unwrap(), 1);
        assert_eq!(feet_to_millimetres(-half).unwrap(), -1);
        assert_eq!(feet_to_millimetres(half * 1.001).unwrap(), 1);
        assert_eq!(feet_to_millimetres(half * 0.999).unwrap(), 0);
        assert_eq!(feet_to_millimetres(-half * 1.001).unwrap(), -1);
    }

    #[test]
    fn non_finite_length_is_domain_error() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = feet_to_millimetres(value).unwrap_err();
            assert!(err.is_domain(), "{value} should be rejected");
        }
    }

    #[test]
    fn huge_length_is_out_of_range() {
        let err = feet_to_millimetres(1e12).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { quantity: "length", .. }));
    }

    #[test]
    fn radians_round_to_whole_degrees() {
        assert_eq!(radians_to_degrees(0.0).unwrap(), 0);
        assert_eq!(radians_to_degrees(FRAC_PI_2).unwrap(), 90);
        assert_eq!(radians_to_degrees(PI).unwrap(), 180);
        assert_eq!(radians_to_degrees(-FRAC_PI_2).unwrap(), -90);
        assert_eq!(radians_to_degrees(2.0 * PI).unwrap(), 360);
        assert_eq!(radians_to_degrees(0.6_f64.to_radians()).unwrap(), 1);
    }

    #[test]
    fn non_finite_angle_is_domain_error() {
        assert!(radians_to_degrees(f64::NAN).unwrap_err().is_domain());
        assert!(radians_to_degrees(f64::INFINITY).unwrap_err().is_domain());
    }

    #[test]
    fn normalize_wraps_into_full_turn() {
        assert_eq!(normalize_degrees(0), 0);
        assert_eq!(normalize_degrees(360), 0);
        assert_eq!(normalize_degrees(-90), 270);
        assert_eq!(normalize_degrees(450), 90);
        assert_eq!(normalize_degrees(-720), 0);
    }
}

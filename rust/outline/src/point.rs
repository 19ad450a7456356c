// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integer millimetre points.
//!
//! [`Point2dInt`] is the hashable unit of every exported outline: two points
//! are the same point exactly when both millimetre coordinates match. The
//! ordering is lexicographic on `(x, y)`, compared field by field.
//!
//! Model space is Y-up while SVG is Y-down, so everything written into SVG
//! goes through [`svg_flip_y`].

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::units::feet_to_millimetres;

/// Maps a model-space Y (or a counter-clockwise angle in degrees) into SVG
/// space by negation.
///
/// `i32::MIN` has no positive counterpart and maps to itself.
#[inline]
pub fn svg_flip_y(y: i32) -> i32 {
    y.wrapping_neg()
}

/// A 2D point on the integer millimetre grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point2dInt {
    x: i32,
    y: i32,
}

impl Point2dInt {
    pub const ORIGIN: Point2dInt = Point2dInt { x: 0, y: 0 };

    /// Creates a point from millimetre coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Quantizes a pair of coordinates given in feet.
    pub fn from_feet(x: f64, y: f64) -> Result<Self> {
        Ok(Self {
            x: feet_to_millimetres(x)?,
            y: feet_to_millimetres(y)?,
        })
    }

    /// Quantizes a UV point given in feet.
    pub fn from_uv(p: &Point2<f64>) -> Result<Self> {
        Self::from_feet(p.x, p.y)
    }

    /// Quantizes an XYZ point given in feet, discarding Z.
    pub fn from_xyz(p: &Point3<f64>) -> Result<Self> {
        Self::from_feet(p.x, p.y)
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance in millimetres.
    pub fn distance_to(&self, other: &Point2dInt) -> f64 {
        let (dx, dy) = self.delta(other);
        (dx as f64).hypot(dy as f64)
    }

    /// Direction from this point to `other` in radians, in `(-π, π]`.
    ///
    /// Coincident points give `0.0`, following `atan2(0, 0)`.
    pub fn angle_to(&self, other: &Point2dInt) -> f64 {
        let (dx, dy) = self.delta(other);
        (dy as f64).atan2(dx as f64)
    }

    /// Adds `offset` componentwise, treating it as a translation vector.
    pub fn translate(&self, offset: &Point2dInt) -> Point2dInt {
        Point2dInt::new(self.x + offset.x, self.y + offset.y)
    }

    /// Like [`translate`](Self::translate) but returns `None` on overflow.
    pub fn checked_translate(&self, offset: &Point2dInt) -> Option<Point2dInt> {
        Some(Point2dInt::new(
            self.x.checked_add(offset.x)?,
            self.y.checked_add(offset.y)?,
        ))
    }

    /// One segment of an SVG path `d` attribute.
    ///
    /// Index 0 starts the path with `M`, index 1 switches to `L`, and later
    /// points rely on SVG repeating the previous line-to command.
    pub fn svg_path_token(&self, index: usize) -> String {
        let command = match index {
            0 => "M",
            1 => "L",
            _ => "",
        };
        format!("{}{} {}", command, self.x, svg_flip_y(self.y))
    }

    // i64 deltas cannot overflow for any pair of i32 coordinates.
    fn delta(&self, other: &Point2dInt) -> (i64, i64) {
        (
            other.x as i64 - self.x as i64,
            other.y as i64 - self.y as i64,
        )
    }
}

impl Ord for Point2dInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then_with(|| self.y.cmp(&other.y))
    }
}

impl PartialOrd for Point2dInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Point2dInt {
    type Output = Point2dInt;

    fn add(self, rhs: Point2dInt) -> Point2dInt {
        self.translate(&rhs)
    }
}

impl From<(i32, i32)> for Point2dInt {
    fn from((x, y): (i32, i32)) -> Self {
        Point2dInt::new(x, y)
    }
}

impl fmt::Display for Point2dInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

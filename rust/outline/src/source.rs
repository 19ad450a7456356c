// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Narrow view of a host element, as far as placement extraction needs it.
//!
//! Host adapters implement [`PlacedElement`] by copying plain values out of
//! their model. Nothing here borrows host resources beyond the call.

use nalgebra::Point3;

use crate::identity::HasElementId;

/// A point location with its rotation about the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPoint {
    /// Insertion point in feet.
    pub point: Point3<f64>,
    /// Counter-clockwise rotation in radians.
    pub rotation: f64,
}

impl LocationPoint {
    pub fn new(x: f64, y: f64, z: f64, rotation: f64) -> Self {
        Self {
            point: Point3::new(x, y, z),
            rotation,
        }
    }
}

/// How an element is located in the model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Location {
    /// Placed at a single point, like a family instance.
    Point(LocationPoint),
    /// Driven by a curve, like a wall or a beam.
    Curve,
    #[default]
    None,
}

impl Location {
    pub fn as_point(&self) -> Option<&LocationPoint> {
        match self {
            Location::Point(lp) => Some(lp),
            _ => None,
        }
    }
}

/// Element data consumed from the host model.
pub trait PlacedElement: HasElementId {
    fn location(&self) -> Location;

    /// Unique id of the element's type symbol, if it has one.
    fn symbol_id(&self) -> Option<&str>;

    /// Unique id of the element itself, used for identity placements.
    fn unique_id(&self) -> &str;
}

impl<T: PlacedElement + ?Sized> PlacedElement for &T {
    fn location(&self) -> Location {
        (**self).location()
    }

    fn symbol_id(&self) -> Option<&str> {
        (**self).symbol_id()
    }

    fn unique_id(&self) -> &str {
        (**self).unique_id()
    }
}

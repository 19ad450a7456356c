// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integer placements of symbol instances.
//!
//! A [`Placement2dInt`] is a translation, a rotation in whole degrees, and the
//! id of the symbol being placed. Rotation is always stored wrapped into
//! `[0, 360)`, so equal placements compare, hash, and format identically.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::{svg_flip_y, Point2dInt};
use crate::source::{LocationPoint, PlacedElement};
use crate::units::{normalize_degrees, radians_to_degrees};

/// Translation, rotation, and symbol identity of one placed instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPlacement")]
pub struct Placement2dInt {
    translation: Point2dInt,
    rotation: i32,
    symbol_id: String,
}

/// Wire form of a placement; rotation is wrapped on the way in.
#[derive(Deserialize)]
struct RawPlacement {
    translation: Point2dInt,
    rotation: i32,
    symbol_id: String,
}

impl From<RawPlacement> for Placement2dInt {
    fn from(raw: RawPlacement) -> Self {
        Placement2dInt::new(raw.translation, raw.rotation, raw.symbol_id)
    }
}

impl Placement2dInt {
    /// Creates a placement from already-quantized values.
    pub fn new(translation: Point2dInt, rotation_degrees: i32, symbol_id: impl Into<String>) -> Self {
        Self {
            translation,
            rotation: normalize_degrees(rotation_degrees),
            symbol_id: symbol_id.into(),
        }
    }

    /// Builds the placement of an instance element.
    ///
    /// Fails with an invalid-argument error when the element is not located
    /// by a point or has no symbol, and with a domain error when its
    /// coordinates or rotation cannot be quantized.
    pub fn from_instance<E: PlacedElement + ?Sized>(element: &E) -> Result<Self> {
        let location = element.location();
        let lp = location
            .as_point()
            .ok_or_else(|| Error::NotPointLocation(element.element_id()))?;
        let symbol_id = element
            .symbol_id()
            .ok_or_else(|| Error::MissingSymbol(element.element_id()))?;

        Self::from_location_point(lp, symbol_id)
    }

    /// Builds a placement from a point location in feet and radians.
    pub fn from_location_point(lp: &LocationPoint, symbol_id: &str) -> Result<Self> {
        let translation = Point2dInt::from_xyz(&lp.point)?;
        let rotation = radians_to_degrees(lp.rotation)?;
        Ok(Self::new(translation, rotation, symbol_id))
    }

    /// Zero placement tagged with an arbitrary id, for elements that are not
    /// instances but still need a record to group their outlines under.
    pub fn identity(id: impl Into<String>) -> Self {
        Self::new(Point2dInt::ORIGIN, 0, id)
    }

    pub fn translation(&self) -> Point2dInt {
        self.translation
    }

    /// Rotation in whole degrees, in `[0, 360)`.
    pub fn rotation_degrees(&self) -> i32 {
        self.rotation
    }

    pub fn symbol_id(&self) -> &str {
        &self.symbol_id
    }

    /// True when translation and rotation are both zero. A real instance at
    /// the origin is indistinguishable from an identity placement here.
    pub fn is_zero_transform(&self) -> bool {
        self.translation == Point2dInt::ORIGIN && self.rotation == 0
    }

    /// Compact `R{r}T{x},{y}` transform for the renderer, with Y and the
    /// rotation sense flipped into SVG space.
    pub fn svg_transform_token(&self) -> String {
        format!(
            "R{}T{},{}",
            svg_flip_y(self.rotation),
            self.translation.x(),
            svg_flip_y(self.translation.y())
        )
    }
}

impl fmt::Display for Placement2dInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} rotated {}°",
            self.symbol_id, self.translation, self.rotation
        )
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Element Outline
//!
//! Deterministic, hashable 2D footprints of building elements for SVG export
//! and deduplication.
//!
//! Host coordinates (feet, radians, Y-up) are quantized onto an integer
//! millimetre grid and whole degrees. Equal inputs always produce equal
//! [`Point2dInt`] and [`Placement2dInt`] values and byte-identical SVG
//! tokens, so they can key caches and dedup maps directly.
//!
//! ```
//! use element_outline::{Placement2dInt, LocationPoint};
//!
//! let lp = LocationPoint::new(1.0, 0.0, 0.0, 0.0);
//! let placement = Placement2dInt::from_location_point(&lp, "S1").unwrap();
//! assert_eq!(placement.svg_transform_token(), "R0T305,0");
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod identity;
pub mod outline;
pub mod placement;
pub mod point;
pub mod source;
pub mod units;

pub use batch::{extract_placements, placement_for, Extraction};
pub use config::OutlineConfig;
pub use error::{Error, Result};
pub use identity::{dedup_by_id, ById, ElementId, ElementMap, HasElementId};
pub use outline::{sorted_unique, svg_path_data};
pub use placement::Placement2dInt;
pub use point::{svg_flip_y, Point2dInt};
pub use source::{Location, LocationPoint, PlacedElement};
pub use units::{feet_to_millimetres, normalize_degrees, radians_to_degrees, MILLIMETRES_PER_FOOT};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use element_outline::{
    extract_placements, svg_path_data, ById, ElementId, HasElementId, Location, LocationPoint,
    OutlineConfig, PlacedElement, Placement2dInt, Point2dInt,
};
use rustc_hash::FxHashSet;

/// Minimal host element, as an adapter over a CAD model would hand it out.
#[derive(Debug, Clone)]
struct HostElement {
    id: i64,
    unique_id: String,
    location: Location,
    symbol: Option<String>,
}

impl HasElementId for HostElement {
    fn element_id(&self) -> ElementId {
        ElementId(self.id)
    }
}

impl PlacedElement for HostElement {
    fn location(&self) -> Location {
        self.location
    }

    fn symbol_id(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    fn unique_id(&self) -> &str {
        &self.unique_id
    }
}

fn instance(id: i64, x: f64, y: f64, rotation: f64, symbol: &str) -> HostElement {
    HostElement {
        id,
        unique_id: format!("uid-{id}"),
        location: Location::Point(LocationPoint::new(x, y, 0.0, rotation)),
        symbol: Some(symbol.to_string()),
    }
}

#[test]
fn instance_at_origin_has_zero_transform() {
    let placement = Placement2dInt::from_instance(&instance(1, 0.0, 0.0, 0.0, "S1")).unwrap();
    assert_eq!(placement.svg_transform_token(), "R0T0,0");
}

#[test]
fn instance_one_foot_east_is_305_mm() {
    let placement = Placement2dInt::from_instance(&instance(1, 1.0, 0.0, 0.0, "S1")).unwrap();
    assert_eq!(placement.svg_transform_token(), "R0T305,0");
}

#[test]
fn curve_based_element_cannot_be_an_instance() {
    let wall = HostElement {
        id: 9,
        unique_id: "wall".to_string(),
        location: Location::Curve,
        symbol: Some("WallType".to_string()),
    };
    let result = Placement2dInt::from_instance(&wall);
    assert!(result.unwrap_err().is_invalid_argument());
}

#[test]
fn equal_inputs_give_equal_dedup_keys() {
    // Slightly different host values that land on the same grid cell.
    let a = Placement2dInt::from_instance(&instance(1, 1.0, 2.0, 0.0, "S")).unwrap();
    let b = Placement2dInt::from_instance(&instance(2, 1.0 + 1e-6, 2.0, 1e-6, "S")).unwrap();
    assert_eq!(a, b);

    let mut keys = FxHashSet::default();
    keys.insert(a.clone());
    assert!(keys.contains(&b));

    let json = serde_json::to_string(&a).unwrap();
    let back: Placement2dInt = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);
}

#[test]
fn footprint_path_for_rectangle_in_feet() {
    let corners = [(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0)];
    let points: Vec<Point2dInt> = corners
        .iter()
        .map(|&(x, y)| Point2dInt::from_feet(x, y).unwrap())
        .collect();

    assert_eq!(points[2].to_string(), "(3048,1524)");
    assert_eq!(
        svg_path_data(&points, true),
        "M0 0 L3048 0 3048 -1524 0 -1524 Z"
    );
}

#[test]
fn handles_to_the_same_element_collapse() {
    let first = instance(7, 0.0, 0.0, 0.0, "S");
    let second = instance(7, 3.0, 0.0, 0.0, "S");

    let mut seen = FxHashSet::default();
    assert!(seen.insert(ById(&first)));
    assert!(!seen.insert(ById(&second)));
}

#[test]
fn mixed_batch_skips_only_the_bad_element() {
    let elements = vec![
        instance(1, 1.0, 0.0, 0.0, "Door"),
        HostElement {
            id: 2,
            unique_id: "bad".to_string(),
            location: Location::Point(LocationPoint::new(0.0, f64::INFINITY, 0.0, 0.0)),
            symbol: Some("Door".to_string()),
        },
        HostElement {
            id: 3,
            unique_id: "slab-3".to_string(),
            location: Location::None,
            symbol: None,
        },
        instance(4, 0.0, 1.0, std::f64::consts::PI, "Door"),
    ];

    let extraction = extract_placements(&elements, &OutlineConfig::default()).unwrap();

    assert_eq!(extraction.skipped.len(), 1);
    assert_eq!(extraction.skipped[0].0, ElementId(2));
    assert_eq!(
        extraction.transform_tokens(),
        vec![
            ("Door", "R0T305,0".to_string()),
            ("slab-3", "R0T0,0".to_string()),
            ("Door", "R-180T0,-305".to_string()),
        ]
    );
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SVG path data for integer outlines.

use crate::point::Point2dInt;

/// Joins the path tokens of an ordered polygon into an SVG `d` attribute.
///
/// `close` appends `Z` once there are at least three points.
pub fn svg_path_data(points: &[Point2dInt], close: bool) -> String {
    let mut d = points
        .iter()
        .enumerate()
        .map(|(i, p)| p.svg_path_token(i))
        .collect::<Vec<_>>()
        .join(" ");

    if close && points.len() >= 3 {
        d.push_str(" Z");
    }
    d
}

/// Sorts points by `(x, y)` and drops duplicates.
pub fn sorted_unique(points: &[Point2dInt]) -> Vec<Point2dInt> {
    let mut out = points.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}

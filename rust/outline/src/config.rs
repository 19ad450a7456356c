// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export options.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::outline::svg_path_data;
use crate::point::Point2dInt;

/// Options controlling outline and placement extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutlineConfig {
    /// Close generated paths with `Z`.
    pub close_paths: bool,
    /// Record failing elements and keep going instead of aborting the batch.
    pub skip_invalid: bool,
    /// Collapse handles that share a persistent element id.
    pub dedup_by_id: bool,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            close_paths: true,
            skip_invalid: true,
            dedup_by_id: true,
        }
    }
}

impl OutlineConfig {
    /// Parses options from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// SVG path data for an ordered outline, closed per `close_paths`.
    pub fn path_data(&self, points: &[Point2dInt]) -> String {
        svg_path_data(points, self.close_paths)
    }
}

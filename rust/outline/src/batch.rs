// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement extraction over a batch of host elements.
//!
//! Each element is handled on its own: one element failing to quantize is
//! recorded and the rest of the batch continues, unless the config asks to
//! stop at the first failure.

use rustc_hash::FxHashMap;

use crate::config::OutlineConfig;
use crate::error::{Error, Result};
use crate::identity::{dedup_by_id, ElementId};
use crate::placement::Placement2dInt;
use crate::source::{Location, PlacedElement};

/// Placements produced for a batch, plus the elements that were skipped.
#[derive(Debug, Default, Clone)]
pub struct Extraction {
    pub placements: Vec<(ElementId, Placement2dInt)>,
    pub skipped: Vec<(ElementId, Error)>,
}

impl Extraction {
    /// Placements grouped by symbol id, groups in first-seen order.
    pub fn by_symbol(&self) -> Vec<(&str, Vec<&Placement2dInt>)> {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut groups: Vec<(&str, Vec<&Placement2dInt>)> = Vec::new();

        for (_, placement) in &self.placements {
            let symbol = placement.symbol_id();
            let slot = *index.entry(symbol).or_insert_with(|| {
                groups.push((symbol, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(placement);
        }
        groups
    }

    /// `(symbol id, transform token)` for every placement, in batch order.
    pub fn transform_tokens(&self) -> Vec<(&str, String)> {
        self.placements
            .iter()
            .map(|(_, p)| (p.symbol_id(), p.svg_transform_token()))
            .collect()
    }
}

/// Placement for a single element.
///
/// Point-located elements get an instance placement; anything else gets an
/// identity placement tagged with its own unique id.
pub fn placement_for<E: PlacedElement + ?Sized>(element: &E) -> Result<Placement2dInt> {
    match element.location() {
        Location::Point(_) => Placement2dInt::from_instance(element),
        Location::Curve | Location::None => Ok(Placement2dInt::identity(element.unique_id())),
    }
}

/// Extracts placements for every element in `elements`.
pub fn extract_placements<E, I>(elements: I, config: &OutlineConfig) -> Result<Extraction>
where
    E: PlacedElement,
    I: IntoIterator<Item = E>,
{
    let elements: Vec<E> = if config.dedup_by_id {
        dedup_by_id(elements)
    } else {
        elements.into_iter().collect()
    };

    let mut extraction = Extraction::default();
    for element in &elements {
        let id = element.element_id();
        match placement_for(element) {
            Ok(placement) => extraction.placements.push((id, placement)),
            Err(err) if config.skip_invalid => {
                tracing::warn!(element_id = %id, error = %err, "Skipping element");
                extraction.skipped.push((id, err));
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(
        elements = elements.len(),
        placements = extraction.placements.len(),
        skipped = extraction.skipped.len(),
        "Placement extraction complete"
    );

    Ok(extraction)
}

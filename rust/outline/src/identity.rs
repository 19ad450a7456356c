// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element identity by persistent id.
//!
//! A host model can hand out several in-memory handles for the same stored
//! element. Anything keyed on elements compares and hashes them through
//! [`ElementId`] only, so those handles collapse to one entry.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Persistent integer id of a host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub i64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ElementId {
    fn from(id: i64) -> Self {
        ElementId(id)
    }
}

/// Anything that carries a stable element id.
pub trait HasElementId {
    fn element_id(&self) -> ElementId;
}

impl HasElementId for ElementId {
    fn element_id(&self) -> ElementId {
        *self
    }
}

impl<T: HasElementId + ?Sized> HasElementId for &T {
    fn element_id(&self) -> ElementId {
        (**self).element_id()
    }
}

/// Wrapper whose equality and hash use the element id and nothing else.
#[derive(Debug, Clone, Copy)]
pub struct ById<T>(pub T);

impl<T: HasElementId> ById<T> {
    pub fn id(&self) -> ElementId {
        self.0.element_id()
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: HasElementId> PartialEq for ById<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl<T: HasElementId> Eq for ById<T> {}

impl<T: HasElementId> Hash for ById<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

/// Map keyed by element id.
pub type ElementMap<V> = FxHashMap<ElementId, V>;

/// Keeps the first element for each id, preserving input order.
pub fn dedup_by_id<T, I>(elements: I) -> Vec<T>
where
    T: HasElementId,
    I: IntoIterator<Item = T>,
{
    let mut seen = FxHashSet::default();
    elements
        .into_iter()
        .filter(|e| seen.insert(e.element_id()))
        .collect()
}

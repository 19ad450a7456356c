// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for outline extraction.

use crate::identity::ElementId;

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while quantizing element geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric input was NaN or infinite.
    #[error("non-finite {quantity}: {value}")]
    NonFinite { quantity: &'static str, value: f64 },

    /// A rounded value does not fit on the int32 grid.
    #[error("{quantity} out of range: {value}")]
    OutOfRange { quantity: &'static str, value: f64 },

    /// An instance placement was requested for an element whose location is
    /// not a single point.
    #[error("element {0} has no point location")]
    NotPointLocation(ElementId),

    /// An instance placement was requested for an element without a symbol.
    #[error("element {0} has no symbol id")]
    MissingSymbol(ElementId),

    /// A configuration document could not be parsed.
    #[error("invalid outline config: {0}")]
    Config(String),
}

impl Error {
    /// True for numeric domain failures (non-finite or unrepresentable input).
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::NonFinite { .. } | Error::OutOfRange { .. })
    }

    /// True for invalid-argument failures on placement construction.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::NotPointLocation(_) | Error::MissingSymbol(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

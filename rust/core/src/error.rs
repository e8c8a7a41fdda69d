// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for building generation.

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a generation run.
///
/// Invalid balcony placements are not errors; they are reported as
/// [`PlacementWarning`](crate::balcony::PlacementWarning)s.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A selection entry is not a `x-y-z` triple of finite numbers.
    #[error("malformed node identifier {id:?}: {reason}")]
    MalformedNodeId { id: String, reason: String },

    /// A parameter is outside the range accepted by the input layer.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

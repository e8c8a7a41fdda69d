// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during tessellation and export
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate element: {0}")]
    DegenerateElement(String),

    #[error("Empty scene: {0}")]
    EmptyScene(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

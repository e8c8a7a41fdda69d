// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Parabuild Core
//!
//! Parametric building generator. From a footprint, a floor count and a set
//! of picked lattice nodes it produces:
//!
//! 1. the node lattice (4 x 4 nodes per floor boundary, each with a
//!    selectable identifier),
//! 2. the base frame (corner columns and perimeter beams, repeated per floor),
//! 3. full-height columns and full-footprint slabs at picked nodes,
//! 4. balconies between pairs of picked facade nodes.
//!
//! All geometry is built through a [`GeometryKernel`], so the pipeline runs
//! without a renderer.
//!
//! ```rust,ignore
//! use parabuild_core::{generate, BalconySpec, BuildingParams};
//! use parabuild_geometry::SceneGraphKernel;
//!
//! let params = BuildingParams {
//!     add_columns: vec!["10-10-0".into()],
//!     balconies: vec![BalconySpec::new("0-0-4", "0-30-4")],
//!     ..Default::default()
//! };
//! let generation = generate(&params, &SceneGraphKernel)?;
//! for warning in &generation.warnings {
//!     eprintln!("{warning}");
//! }
//! ```

pub mod additions;
pub mod balcony;
pub mod building;
pub mod config;
pub mod error;
pub mod lattice;
pub mod node;
pub mod params;
pub mod scene;
pub mod selection;

pub use balcony::{BalconyOrientation, PlacementWarning};
pub use config::GenerationConfig;
pub use error::{Error, Result};
pub use lattice::{Node, NodeLattice};
pub use node::{Axis, GridIndex, NodeId};
pub use params::{BalconySpec, BuildingParams, DimensionParameters, FLOOR_RANGE, MIN_EXTENT};
pub use scene::{generate, generate_with_config, Generation, Scene, SCENE_GROUPS};
pub use selection::{ResolvedNode, SelectionResolver};

pub use parabuild_geometry::GeometryKernel;

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parabuild Geometry
//!
//! Value-semantic scene graph for parametric building models: spheres,
//! rectangular extrusions, boxes, groups and linear/bidirectional patterns,
//! behind the [`GeometryKernel`] construction interface. Trees can be
//! expanded into placed solids, tessellated and written as OBJ.

pub mod error;
pub mod expand;
pub mod export;
pub mod kernel;
pub mod material;
pub mod mesh;
pub mod shape;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use error::{Error, Result};
pub use expand::{Bounds, Solid, SolidKind};
pub use export::{write_obj, ObjLayer};
pub use kernel::{GeometryKernel, SceneGraphKernel};
pub use material::{Color, Material};
pub use mesh::{Mesh, TessellationOptions};
pub use shape::{Geometry, Line, PatternAxis, Shape};

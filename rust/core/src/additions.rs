// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Columns and floor slabs added at selected nodes.
//!
//! Selections are not deduplicated: picking the same node twice yields two
//! coincident elements.

use nalgebra::{Point3, Vector3};
use parabuild_geometry::{GeometryKernel, Line};

use crate::config::GenerationConfig;
use crate::params::DimensionParameters;
use crate::selection::ResolvedNode;

/// Full-height columns at the plan position of each selected node.
///
/// The elevation of the selected node is ignored.
pub fn added_columns<K: GeometryKernel>(
    kernel: &K,
    selected: &[ResolvedNode],
    dims: &DimensionParameters,
    config: &GenerationConfig,
) -> Vec<K::Shape> {
    let top = dims.total_height(config);

    selected
        .iter()
        .map(|node| {
            let p = node.position();
            let line = Line::new(Point3::new(p.x, p.y, 0.0), Point3::new(p.x, p.y, top));
            kernel.rectangular_extrusion(config.member_size, config.member_size, line, None)
        })
        .collect()
}

/// Full-footprint slabs at the elevation of each selected node.
///
/// The plan position of the selected node is ignored.
pub fn added_floors<K: GeometryKernel>(
    kernel: &K,
    selected: &[ResolvedNode],
    dims: &DimensionParameters,
    config: &GenerationConfig,
) -> Vec<K::Shape> {
    selected
        .iter()
        .map(|node| {
            let slab = kernel.square_beam(dims.width, dims.length, config.slab_thickness, None);
            kernel.translate(
                slab,
                Vector3::new(dims.width / 2.0, dims.length / 2.0, node.position().z),
            )
        })
        .collect()
}

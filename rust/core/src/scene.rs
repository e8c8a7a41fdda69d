// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene assembly: the full generation pipeline.

use parabuild_geometry::GeometryKernel;
use serde::Serialize;

use crate::additions::{added_columns, added_floors};
use crate::balcony::{place_balconies, PlacementWarning};
use crate::building::base_building;
use crate::config::GenerationConfig;
use crate::error::Result;
use crate::lattice::NodeLattice;
use crate::params::BuildingParams;
use crate::selection::SelectionResolver;

/// The five output groups, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene<S> {
    pub nodes: S,
    pub building: S,
    pub added_columns: S,
    pub added_floors: S,
    pub added_balconies: S,
}

/// Group labels, in the order returned by [`Scene::groups`]
pub const SCENE_GROUPS: [&str; 5] = [
    "nodes",
    "building",
    "added_columns",
    "added_floors",
    "added_balconies",
];

impl<S> Scene<S> {
    pub fn groups(&self) -> [&S; 5] {
        [
            &self.nodes,
            &self.building,
            &self.added_columns,
            &self.added_floors,
            &self.added_balconies,
        ]
    }

    pub fn into_groups(self) -> [S; 5] {
        [
            self.nodes,
            self.building,
            self.added_columns,
            self.added_floors,
            self.added_balconies,
        ]
    }
}

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generation<S> {
    pub scene: Scene<S>,
    /// Advisory messages for balconies that were skipped
    pub warnings: Vec<PlacementWarning>,
}

/// Generate the scene with the default constants.
pub fn generate<K: GeometryKernel>(params: &BuildingParams, kernel: &K) -> Result<Generation<K::Shape>> {
    generate_with_config(params, &GenerationConfig::default(), kernel)
}

/// Generate the scene.
///
/// Every call rebuilds everything from `params`; nothing is cached between
/// runs. Malformed node identifiers abort the run, invalid balconies only
/// add warnings.
pub fn generate_with_config<K: GeometryKernel>(
    params: &BuildingParams,
    config: &GenerationConfig,
    kernel: &K,
) -> Result<Generation<K::Shape>> {
    let dims = params.dimensions();

    let lattice = NodeLattice::build(&dims, config);
    let building = base_building(kernel, &dims, config);

    let resolver = SelectionResolver::new(&lattice);
    let column_nodes = resolver.resolve_all(&params.add_columns)?;
    let floor_nodes = resolver.resolve_all(&params.add_floors)?;

    let columns = added_columns(kernel, &column_nodes, &dims, config);
    let floors = added_floors(kernel, &floor_nodes, &dims, config);
    let balconies = place_balconies(kernel, &params.balconies, &resolver, config)?;

    tracing::debug!(
        nodes = lattice.len(),
        floors = dims.number_floors,
        added_columns = columns.len(),
        added_floors = floors.len(),
        balconies = balconies.shapes.len(),
        warnings = balconies.warnings.len(),
        "Generated building scene"
    );

    let scene = Scene {
        nodes: kernel.group(lattice.spheres(kernel, config)),
        building,
        added_columns: kernel.group(columns),
        added_floors: kernel.group(floors),
        added_balconies: kernel.group(balconies.shapes),
    };

    Ok(Generation {
        scene,
        warnings: balconies.warnings,
    })
}

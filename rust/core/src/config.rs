// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed generation constants.

use parabuild_geometry::{Color, Material};
use serde::{Deserialize, Serialize};

/// Constants shared by every generator in a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Vertical spacing between node layers and floor units
    pub floor_height: f64,
    /// Lattice nodes along each plan axis, corners included
    pub nodes_per_axis: usize,
    pub node_radius: f64,
    pub node_color: Color,
    /// Square section of beams and columns
    pub member_size: f64,
    pub slab_thickness: f64,
    pub balcony_thickness: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            floor_height: 4.0,
            nodes_per_axis: 4,
            node_radius: 0.5,
            node_color: Color::node_blue(),
            member_size: 0.3,
            slab_thickness: 0.3,
            balcony_thickness: 0.3,
        }
    }
}

impl GenerationConfig {
    pub fn node_material(&self) -> Material {
        Material::new("Node", self.node_color)
    }
}

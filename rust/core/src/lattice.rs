// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Node lattice: the addressable points users pick from.

use nalgebra::Point3;
use parabuild_geometry::GeometryKernel;
use rustc_hash::FxHashMap;

use crate::config::GenerationConfig;
use crate::node::{GridIndex, NodeId};
use crate::params::DimensionParameters;

/// A selectable point of the structural grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub grid: GridIndex,
}

impl Node {
    pub fn position(&self) -> Point3<f64> {
        self.id.position()
    }
}

/// `count` evenly spaced values from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the last value so the far facade is exactly `stop`
            values[count - 1] = stop;
            values
        }
    }
}

/// Every node of one generation run, x-major then y then z.
#[derive(Debug, Clone, Default)]
pub struct NodeLattice {
    nodes: Vec<Node>,
    index: FxHashMap<NodeId, usize>,
}

impl NodeLattice {
    pub fn build(dims: &DimensionParameters, config: &GenerationConfig) -> Self {
        let xs = linspace(0.0, dims.width, config.nodes_per_axis);
        let ys = linspace(0.0, dims.length, config.nodes_per_axis);
        let layers = dims.number_floors as usize + 1;

        let capacity = xs.len() * ys.len() * layers;
        let mut nodes = Vec::with_capacity(capacity);
        let mut index = FxHashMap::default();
        index.reserve(capacity);

        for (ix, &x) in xs.iter().enumerate() {
            for (iy, &y) in ys.iter().enumerate() {
                for iz in 0..layers {
                    let z = config.floor_height * iz as f64;
                    let id = NodeId::new(x, y, z);
                    index.insert(id, nodes.len());
                    nodes.push(Node {
                        id,
                        grid: GridIndex::new(ix, iy, iz),
                    });
                }
            }
        }

        debug_assert_eq!(index.len(), nodes.len(), "lattice node identifiers must be unique");

        Self { nodes, index }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Look up a node by identifier
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// One sphere per node, tagged with the node identifier
    pub fn spheres<K: GeometryKernel>(&self, kernel: &K, config: &GenerationConfig) -> Vec<K::Shape> {
        let material = config.node_material();
        self.nodes
            .iter()
            .map(|node| {
                kernel.sphere(
                    node.position(),
                    config.node_radius,
                    material.clone(),
                    node.id.to_string(),
                )
            })
            .collect()
    }
}

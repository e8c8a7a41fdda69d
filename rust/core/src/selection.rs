// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of selected node identifiers.

use nalgebra::Point3;

use crate::error::Result;
use crate::lattice::NodeLattice;
use crate::node::{Axis, GridIndex, NodeId};

/// A selection entry decoded back into coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedNode {
    pub id: NodeId,
    /// Present when the identifier names a node of the current lattice
    pub grid: Option<GridIndex>,
}

impl ResolvedNode {
    pub fn position(&self) -> Point3<f64> {
        self.id.position()
    }

    /// Whether both nodes share a coordinate along `axis`.
    ///
    /// Lattice nodes compare by grid index; anything else compares the parsed
    /// values exactly.
    pub fn shares(&self, other: &ResolvedNode, axis: Axis) -> bool {
        match (self.grid, other.grid) {
            (Some(a), Some(b)) => a.get(axis) == b.get(axis),
            _ => self.id.get(axis) == other.id.get(axis),
        }
    }

    /// Whether the node lies on the `axis = 0` facade plane
    pub fn on_origin_plane(&self, axis: Axis) -> bool {
        match self.grid {
            Some(grid) => grid.get(axis) == 0,
            None => self.id.get(axis) == 0.0,
        }
    }
}

/// Resolves identifiers against the lattice of the current run.
#[derive(Debug, Clone, Copy)]
pub struct SelectionResolver<'a> {
    lattice: &'a NodeLattice,
}

impl<'a> SelectionResolver<'a> {
    pub fn new(lattice: &'a NodeLattice) -> Self {
        Self { lattice }
    }

    /// Decode one identifier.
    ///
    /// Identifiers that parse but are not part of the lattice (for example a
    /// selection kept from an earlier footprint) still resolve to their
    /// coordinates, without a grid index.
    pub fn resolve(&self, raw: &str) -> Result<ResolvedNode> {
        let id: NodeId = raw.parse()?;
        let grid = self.lattice.get(&id).map(|node| node.grid);
        if grid.is_none() {
            tracing::debug!(id = %raw, "Selected node is not part of the current lattice");
        }
        Ok(ResolvedNode { id, grid })
    }

    /// Decode a whole selection, preserving order and duplicates
    pub fn resolve_all(&self, selection: &[String]) -> Result<Vec<ResolvedNode>> {
        selection.iter().map(|raw| self.resolve(raw)).collect()
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Balconies spanning two selected facade nodes.
//!
//! A balcony is a slab extruded along the line between its two nodes and
//! pushed outward so it hangs off the facade. The two nodes must be at the
//! same elevation and differ along exactly one plan axis; anything else is
//! reported as a [`PlacementWarning`] and skipped.
//!
//! The first selected node is the start of the line. Order is kept as given:
//! it decides the rotation pivot and the facade test.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use nalgebra::Vector3;
use parabuild_geometry::{GeometryKernel, Line, Material};
use serde::Serialize;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::node::Axis;
use crate::params::BalconySpec;
use crate::selection::{ResolvedNode, SelectionResolver};

/// Direction a valid balcony runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalconyOrientation {
    /// Endpoints differ only in y; hangs off the x = 0 or x = W facade
    AlongY,
    /// Endpoints differ only in x; hangs off the y = 0 or y = L facade
    AlongX,
}

/// Classify a start/end pair, `None` when the pair is not a facade edge.
///
/// The y-direction test runs first, so identical endpoints count as
/// [`BalconyOrientation::AlongY`].
pub fn classify(start: &ResolvedNode, end: &ResolvedNode) -> Option<BalconyOrientation> {
    if !start.shares(end, Axis::Z) {
        return None;
    }
    if start.shares(end, Axis::X) {
        Some(BalconyOrientation::AlongY)
    } else if start.shares(end, Axis::Y) {
        Some(BalconyOrientation::AlongX)
    } else {
        None
    }
}

/// Advisory message for a balcony that could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementWarning {
    /// 1-based position in the balcony list
    pub balcony: usize,
    pub message: String,
}

impl PlacementWarning {
    pub fn invalid_placement(balcony: usize) -> Self {
        Self {
            balcony,
            message: format!(
                "Placement of balcony {} is invalid, it should be horizontal and connected to a single facade",
                balcony
            ),
        }
    }
}

impl fmt::Display for PlacementWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Balcony shapes plus the warnings raised while placing them.
#[derive(Debug, Clone)]
pub struct BalconyPlacement<S> {
    pub shapes: Vec<S>,
    pub warnings: Vec<PlacementWarning>,
}

/// Build one balcony from its resolved endpoints.
pub fn build_balcony<K: GeometryKernel>(
    kernel: &K,
    spec: &BalconySpec,
    start: &ResolvedNode,
    end: &ResolvedNode,
    config: &GenerationConfig,
) -> Option<K::Shape> {
    let orientation = classify(start, end)?;

    let s = start.position();
    let half = spec.width / 2.0;
    let slab = kernel.rectangular_extrusion(
        spec.width,
        config.balcony_thickness,
        Line::new(s, end.position()),
        Some(Material::from_color(spec.color)),
    );

    let shape = match orientation {
        BalconyOrientation::AlongY => {
            let dx = if start.on_origin_plane(Axis::X) { -half } else { half };
            kernel.translate(slab, Vector3::new(dx, 0.0, 0.0))
        }
        BalconyOrientation::AlongX => {
            // Lay the section flat: for x-running lines the width starts vertical
            let flat = kernel.rotate(slab, FRAC_PI_2, Vector3::x(), s);
            let dy = if start.on_origin_plane(Axis::Y) { -half } else { half };
            kernel.translate(flat, Vector3::new(0.0, dy, 0.0))
        }
    };

    Some(shape)
}

/// Place every balcony in list order.
///
/// Entries with fewer than two selected nodes are still being edited and are
/// skipped without a warning. Entries with more than two use the first two.
pub fn place_balconies<K: GeometryKernel>(
    kernel: &K,
    specs: &[BalconySpec],
    resolver: &SelectionResolver<'_>,
    config: &GenerationConfig,
) -> Result<BalconyPlacement<K::Shape>> {
    let mut shapes = Vec::with_capacity(specs.len());
    let mut warnings = Vec::new();

    for (i, spec) in specs.iter().enumerate() {
        let number = i + 1;
        let (start, end) = match spec.select.as_slice() {
            [start, end, ..] => (resolver.resolve(start)?, resolver.resolve(end)?),
            _ => continue,
        };

        match build_balcony(kernel, spec, &start, &end, config) {
            Some(shape) => shapes.push(shape),
            None => {
                let warning = PlacementWarning::invalid_placement(number);
                tracing::warn!(balcony = number, start = %start.id, end = %end.id, "{}", warning);
                warnings.push(warning);
            }
        }
    }

    Ok(BalconyPlacement { shapes, warnings })
}

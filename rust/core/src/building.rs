// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Base building: one structural floor unit stacked over every floor.

use nalgebra::{Point3, Vector3};
use parabuild_geometry::{GeometryKernel, Line, PatternAxis};

use crate::config::GenerationConfig;
use crate::params::DimensionParameters;

/// Perimeter beams of one floor, at the top of the unit.
///
/// The beams close the ring (0,0) -> (W,0) -> (W,L) -> (0,L) -> (0,0).
pub fn perimeter_beams<K: GeometryKernel>(
    kernel: &K,
    dims: &DimensionParameters,
    config: &GenerationConfig,
) -> Vec<K::Shape> {
    let z = config.floor_height;
    let corners = [
        Point3::new(0.0, 0.0, z),
        Point3::new(dims.width, 0.0, z),
        Point3::new(dims.width, dims.length, z),
        Point3::new(0.0, dims.length, z),
    ];

    (0..corners.len())
        .map(|i| {
            let line = Line::new(corners[i], corners[(i + 1) % corners.len()]);
            kernel.rectangular_extrusion(config.member_size, config.member_size, line, None)
        })
        .collect()
}

/// Columns at the four footprint corners, one floor tall
pub fn corner_columns<K: GeometryKernel>(
    kernel: &K,
    dims: &DimensionParameters,
    config: &GenerationConfig,
) -> K::Shape {
    let column = kernel.rectangular_extrusion(
        config.member_size,
        config.member_size,
        Line::new(Point3::origin(), Point3::new(0.0, 0.0, config.floor_height)),
        None,
    );

    kernel.bidirectional_pattern(
        column,
        PatternAxis::new(Vector3::x(), 2, dims.width),
        PatternAxis::new(Vector3::y(), 2, dims.length),
    )
}

/// One floor: corner columns and the beam ring they carry
pub fn floor_unit<K: GeometryKernel>(
    kernel: &K,
    dims: &DimensionParameters,
    config: &GenerationConfig,
) -> K::Shape {
    let columns = corner_columns(kernel, dims, config);
    let beams = kernel.group(perimeter_beams(kernel, dims, config));
    kernel.group(vec![columns, beams])
}

/// The floor unit repeated `number_floors` times up the building
pub fn base_building<K: GeometryKernel>(
    kernel: &K,
    dims: &DimensionParameters,
    config: &GenerationConfig,
) -> K::Shape {
    let unit = floor_unit(kernel, dims, config);
    kernel.linear_pattern(
        unit,
        PatternAxis::new(
            Vector3::z(),
            dims.number_floors as usize,
            config.floor_height,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use parabuild_geometry::{SceneGraphKernel, SolidKind};

    fn dims() -> DimensionParameters {
        DimensionParameters {
            width: 30.0,
            length: 20.0,
            number_floors: 6,
        }
    }

    #[test]
    fn beams_form_a_closed_ring() {
        let config = GenerationConfig::default();
        let beams = perimeter_beams(&SceneGraphKernel, &dims(), &config);
        assert_eq!(beams.len(), 4);

        let solids: Vec<_> = beams.iter().flat_map(|b| b.expand()).collect();
        let centres: Vec<_> = solids.iter().map(|s| s.centre()).collect();
        assert_relative_eq!(centres[0], Point3::new(15.0, 0.0, 4.0), epsilon = 1e-12);
        assert_relative_eq!(centres[1], Point3::new(30.0, 10.0, 4.0), epsilon = 1e-12);
        assert_relative_eq!(centres[2], Point3::new(15.0, 20.0, 4.0), epsilon = 1e-12);
        assert_relative_eq!(centres[3], Point3::new(0.0, 10.0, 4.0), epsilon = 1e-12);
    }

    #[test]
    fn columns_only_at_corners() {
        let config = GenerationConfig::default();
        let solids = corner_columns(&SceneGraphKernel, &dims(), &config).expand();

        let mut feet: Vec<(f64, f64)> = solids
            .iter()
            .map(|s| (s.centre().x, s.centre().y))
            .collect();
        feet.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(feet, vec![(0.0, 0.0), (0.0, 20.0), (30.0, 0.0), (30.0, 20.0)]);

        for solid in &solids {
            assert_relative_eq!(solid.centre().z, 2.0);
        }
    }

    #[test]
    fn building_repeats_unit_per_floor() {
        let config = GenerationConfig::default();
        let building = base_building(&SceneGraphKernel, &dims(), &config);
        let solids = building.expand();

        // 4 columns + 4 beams per floor
        assert_eq!(solids.len(), 8 * 6);
        for solid in &solids {
            match solid.kind {
                SolidKind::Cuboid { half_extents } => {
                    assert_relative_eq!(half_extents.x, 0.15);
                    assert_relative_eq!(half_extents.y, 0.15);
                }
                SolidKind::Sphere { .. } => panic!("unexpected sphere"),
            }
        }

        let bounds = building.bounds().unwrap();
        assert_relative_eq!(bounds.min.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.z, 24.15, epsilon = 1e-12);
    }

    #[test]
    fn floors_are_spaced_by_floor_height() {
        let config = GenerationConfig::default();
        let solids = base_building(&SceneGraphKernel, &dims(), &config).expand();

        // Traversal order: floor by floor, columns first
        for (floor, chunk) in solids.chunks(8).enumerate() {
            let column_mid = chunk[0].centre().z;
            assert_relative_eq!(column_mid, 2.0 + 4.0 * floor as f64, epsilon = 1e-12);
            let beam_z = chunk[4].centre().z;
            assert_relative_eq!(beam_z, 4.0 * (floor as f64 + 1.0), epsilon = 1e-12);
        }
    }
}

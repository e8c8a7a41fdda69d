// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures and tessellation of expanded solids

use std::f64::consts::PI;

use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};
use crate::expand::{Solid, SolidKind};
use crate::shape::Geometry;

/// Sphere resolution used when tessellating nodes
#[derive(Debug, Clone, Copy)]
pub struct TessellationOptions {
    /// Latitude bands
    pub sphere_stacks: u32,
    /// Longitude segments
    pub sphere_sectors: u32,
}

impl Default for TessellationOptions {
    fn default() -> Self {
        Self {
            sphere_stacks: 8,
            sphere_sectors: 12,
        }
    }
}

/// Triangle mesh
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Add a vertex with normal
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);

        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Merge another mesh into this one
    #[inline]
    pub fn merge(&mut self, other: &Mesh) {
        if other.is_empty() {
            return;
        }

        let vertex_offset = self.vertex_count() as u32;

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|&i| i + vertex_offset));
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Calculate bounds (min, max)
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        if self.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Point3::new(f32::MIN, f32::MIN, f32::MIN);

        self.positions.chunks_exact(3).for_each(|chunk| {
            min.x = min.x.min(chunk[0]);
            min.y = min.y.min(chunk[1]);
            min.z = min.z.min(chunk[2]);
            max.x = max.x.max(chunk[0]);
            max.y = max.y.max(chunk[1]);
            max.z = max.z.max(chunk[2]);
        });

        (min, max)
    }

    /// Tessellate a single placed solid
    pub fn from_solid(solid: &Solid, options: &TessellationOptions) -> Result<Mesh> {
        match solid.kind {
            SolidKind::Cuboid { half_extents } => {
                if !half_extents.iter().all(|v| v.is_finite() && *v >= 0.0) {
                    return Err(Error::DegenerateElement(format!(
                        "cuboid half extents {:?}",
                        half_extents
                    )));
                }
                Ok(cuboid_mesh(solid, half_extents))
            }
            SolidKind::Sphere { radius } => {
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(Error::DegenerateElement(format!(
                        "sphere radius {}",
                        radius
                    )));
                }
                Ok(sphere_mesh(solid, radius, options))
            }
        }
    }
}

impl Geometry {
    /// Expand and tessellate the whole tree into one mesh
    pub fn tessellate(&self, options: &TessellationOptions) -> Result<Mesh> {
        let mut combined = Mesh::new();
        for solid in self.expand() {
            combined.merge(&Mesh::from_solid(&solid, options)?);
        }
        Ok(combined)
    }
}

// (normal axis, sign, u axis, v axis) with u x v pointing along the normal
const CUBOID_FACES: [(usize, f64, usize, usize); 6] = [
    (0, 1.0, 1, 2),
    (0, -1.0, 2, 1),
    (1, 1.0, 2, 0),
    (1, -1.0, 0, 2),
    (2, 1.0, 0, 1),
    (2, -1.0, 1, 0),
];

fn cuboid_mesh(solid: &Solid, half_extents: Vector3<f64>) -> Mesh {
    let mut mesh = Mesh::with_capacity(24, 36);

    for (normal_axis, sign, u_axis, v_axis) in CUBOID_FACES {
        let mut normal = Vector3::zeros();
        normal[normal_axis] = sign;
        let world_normal = solid.pose.rotation * normal;

        let base = mesh.vertex_count() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let mut local = Point3::origin();
            local[normal_axis] = sign * half_extents[normal_axis];
            local[u_axis] = su * half_extents[u_axis];
            local[v_axis] = sv * half_extents[v_axis];
            mesh.add_vertex(solid.pose * local, world_normal);
        }
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    mesh
}

fn sphere_mesh(solid: &Solid, radius: f64, options: &TessellationOptions) -> Mesh {
    let stacks = options.sphere_stacks.max(2);
    let sectors = options.sphere_sectors.max(3);
    let ring = sectors + 1;
    let mut mesh = Mesh::with_capacity(
        ((stacks + 1) * ring) as usize,
        (stacks * sectors * 6) as usize,
    );

    for i in 0..=stacks {
        let phi = PI * i as f64 / stacks as f64;
        for j in 0..=sectors {
            let theta = 2.0 * PI * j as f64 / sectors as f64;
            let normal = Vector3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos());
            let local = Point3::from(normal * radius);
            mesh.add_vertex(solid.pose * local, solid.pose.rotation * normal);
        }
    }

    for i in 0..stacks {
        for j in 0..sectors {
            let k1 = i * ring + j;
            let k2 = k1 + ring;
            if i != 0 {
                mesh.add_triangle(k1, k2, k1 + 1);
            }
            if i != stacks - 1 {
                mesh.add_triangle(k1 + 1, k2, k2 + 1);
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Line;
    use approx::assert_relative_eq;
    use nalgebra::Isometry3;

    #[test]
    fn cuboid_has_flat_shaded_faces() {
        let beam = Geometry::square_beam(2.0, 4.0, 0.3, None);
        let mesh = beam.tessellate(&TessellationOptions::default()).unwrap();

        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);

        let (min, max) = mesh.bounds();
        assert_relative_eq!(min.x, -1.0);
        assert_relative_eq!(max.y, 2.0);
        assert_relative_eq!(max.z, 0.15);
    }

    #[test]
    fn cuboid_faces_wind_outward() {
        let mesh = Geometry::square_beam(1.0, 1.0, 1.0, None)
            .tessellate(&TessellationOptions::default())
            .unwrap();

        for tri in mesh.indices.chunks_exact(3) {
            let p = |i: u32| {
                let i = i as usize * 3;
                Vector3::new(
                    mesh.positions[i] as f64,
                    mesh.positions[i + 1] as f64,
                    mesh.positions[i + 2] as f64,
                )
            };
            let n = tri[0] as usize * 3;
            let normal = Vector3::new(
                mesh.normals[n] as f64,
                mesh.normals[n + 1] as f64,
                mesh.normals[n + 2] as f64,
            );
            let face = (p(tri[1]) - p(tri[0])).cross(&(p(tri[2]) - p(tri[0])));
            assert!(face.dot(&normal) > 0.0);
        }
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let node = Geometry::sphere(Point3::new(3.0, 0.0, 0.0), 0.5, None, None);
        let options = TessellationOptions::default();
        let mesh = node.tessellate(&options).unwrap();

        assert_eq!(
            mesh.vertex_count() as u32,
            (options.sphere_stacks + 1) * (options.sphere_sectors + 1)
        );
        for chunk in mesh.positions.chunks_exact(3) {
            let d = Vector3::new(chunk[0] as f64 - 3.0, chunk[1] as f64, chunk[2] as f64);
            assert_relative_eq!(d.norm(), 0.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn merge_offsets_indices() {
        let column = Geometry::rectangular_extrusion(
            0.3,
            0.3,
            Line::new(Point3::origin(), Point3::new(0.0, 0.0, 4.0)),
            None,
        );
        let single = column.tessellate(&TessellationOptions::default()).unwrap();

        let mut merged = single.clone();
        merged.merge(&single);

        assert_eq!(merged.vertex_count(), 48);
        assert_eq!(merged.indices[36], single.indices[0] + 24);
    }

    #[test]
    fn rejects_degenerate_sphere() {
        let solid = Solid {
            kind: SolidKind::Sphere { radius: 0.0 },
            pose: Isometry3::identity(),
            material: None,
            identifier: None,
        };
        assert!(Mesh::from_solid(&solid, &TessellationOptions::default()).is_err());
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Expansion of groups and patterns into world-space solids

use nalgebra::{Isometry3, Point3, Translation3, Vector3};

use crate::material::Material;
use crate::shape::{profile_rotation, Geometry, Shape};

/// Primitive volume of an expanded solid, in its local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolidKind {
    /// Box centred on the local origin
    Cuboid { half_extents: Vector3<f64> },
    Sphere { radius: f64 },
}

/// A single placed volume with everything needed to draw it
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub kind: SolidKind,
    /// Local-to-world placement
    pub pose: Isometry3<f64>,
    pub material: Option<Material>,
    pub identifier: Option<String>,
}

impl Solid {
    /// World-space centre
    pub fn centre(&self) -> Point3<f64> {
        self.pose * Point3::origin()
    }

    /// World-space bounds
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        match self.kind {
            SolidKind::Cuboid { half_extents } => {
                for sx in [-1.0, 1.0] {
                    for sy in [-1.0, 1.0] {
                        for sz in [-1.0, 1.0] {
                            let local = Point3::new(
                                sx * half_extents.x,
                                sy * half_extents.y,
                                sz * half_extents.z,
                            );
                            bounds.include(&(self.pose * local));
                        }
                    }
                }
            }
            SolidKind::Sphere { radius } => {
                let centre = self.centre();
                let r = Vector3::repeat(radius);
                bounds.include(&(centre - r));
                bounds.include(&(centre + r));
            }
        }
        bounds
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Bounds {
    /// Inverted box that any point will grow
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn include(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    pub fn merge(&mut self, other: &Bounds) {
        if other.is_empty() {
            return;
        }
        self.include(&other.min);
        self.include(&other.max);
    }

    pub fn size(&self) -> Vector3<f64> {
        if self.is_empty() {
            return Vector3::zeros();
        }
        self.max - self.min
    }
}

impl Geometry {
    /// Flatten groups and patterns into placed solids, in traversal order
    pub fn expand(&self) -> Vec<Solid> {
        let mut solids = Vec::new();
        expand_into(self, &Isometry3::identity(), &mut solids);
        solids
    }

    /// World-space bounds of every solid, `None` for an empty tree
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        for solid in self.expand() {
            bounds.merge(&solid.bounds());
        }
        if bounds.is_empty() {
            None
        } else {
            Some(bounds)
        }
    }
}

fn expand_into(geometry: &Geometry, parent: &Isometry3<f64>, out: &mut Vec<Solid>) {
    let frame = parent * geometry.placement;

    match &geometry.shape {
        Shape::Sphere(sphere) => out.push(Solid {
            kind: SolidKind::Sphere {
                radius: sphere.radius,
            },
            pose: frame * Translation3::from(sphere.centre.coords),
            material: sphere.material.clone(),
            identifier: sphere.identifier.clone(),
        }),
        Shape::RectangularExtrusion(extrusion) => {
            let line = &extrusion.line;
            let local = Isometry3::from_parts(
                Translation3::from(line.midpoint().coords),
                profile_rotation(&line.direction()),
            );
            out.push(Solid {
                kind: SolidKind::Cuboid {
                    half_extents: Vector3::new(
                        extrusion.width / 2.0,
                        extrusion.height / 2.0,
                        line.length() / 2.0,
                    ),
                },
                pose: frame * local,
                material: extrusion.material.clone(),
                identifier: None,
            });
        }
        Shape::SquareBeam(beam) => out.push(Solid {
            kind: SolidKind::Cuboid {
                half_extents: Vector3::new(beam.length_x, beam.length_y, beam.length_z) / 2.0,
            },
            pose: frame,
            material: beam.material.clone(),
            identifier: None,
        }),
        Shape::Group { children } => {
            for child in children {
                expand_into(child, &frame, out);
            }
        }
        Shape::LinearPattern(pattern) => {
            for offset in pattern.axis.offsets() {
                expand_into(&pattern.base, &(frame * Translation3::from(offset)), out);
            }
        }
        Shape::BidirectionalPattern(pattern) => {
            for first in pattern.first.offsets() {
                for second in pattern.second.offsets() {
                    let offset = first + second;
                    expand_into(&pattern.base, &(frame * Translation3::from(offset)), out);
                }
            }
        }
    }
}

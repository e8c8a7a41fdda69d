// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene-graph shapes with value semantics
//!
//! Every shape carries a rigid `placement` applied after its own
//! construction. `translate` and `rotate` compose onto that placement and
//! hand the shape back, so callers can chain them like any other value.

use std::f64::consts::PI;

use nalgebra::{Isometry3, Point3, Translation3, Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::material::Material;

/// Straight segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Line {
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Unnormalized direction from start to end
    pub fn direction(&self) -> Vector3<f64> {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    pub fn midpoint(&self) -> Point3<f64> {
        nalgebra::center(&self.start, &self.end)
    }
}

/// Rotation that takes the profile normal (+Z) onto `direction`.
///
/// Profiles are drawn in the local XY plane: section width along local X,
/// section height along local Y. Zero-length directions keep the identity
/// frame; a direction pointing straight down flips the profile about X.
pub fn profile_rotation(direction: &Vector3<f64>) -> UnitQuaternion<f64> {
    if direction.norm() < 1e-12 {
        return UnitQuaternion::identity();
    }
    UnitQuaternion::rotation_between(&Vector3::z(), direction)
        .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI))
}

/// Sphere, used for selectable lattice nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub centre: Point3<f64>,
    pub radius: f64,
    pub material: Option<Material>,
    /// Selection identifier reported back when the sphere is picked
    pub identifier: Option<String>,
}

/// Rectangular section swept along a line (beams, columns, balconies)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangularExtrusion {
    pub width: f64,
    pub height: f64,
    pub line: Line,
    pub material: Option<Material>,
}

/// Axis-aligned box centred on the local origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareBeam {
    pub length_x: f64,
    pub length_y: f64,
    pub length_z: f64,
    pub material: Option<Material>,
}

/// One replication axis of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternAxis {
    pub direction: Vector3<f64>,
    /// Number of copies, including the original
    pub count: usize,
    pub spacing: f64,
}

impl PatternAxis {
    pub fn new(direction: Vector3<f64>, count: usize, spacing: f64) -> Self {
        Self {
            direction,
            count,
            spacing,
        }
    }

    /// Offsets of every copy along this axis, starting with zero
    pub fn offsets(&self) -> impl Iterator<Item = Vector3<f64>> + '_ {
        let unit = self
            .direction
            .try_normalize(1e-12)
            .unwrap_or_else(Vector3::zeros);
        (0..self.count).map(move |i| unit * (self.spacing * i as f64))
    }
}

/// Copies of a base shape along one axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearPattern {
    pub base: Box<Geometry>,
    pub axis: PatternAxis,
}

/// Copies of a base shape over a two-axis grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidirectionalPattern {
    pub base: Box<Geometry>,
    pub first: PatternAxis,
    pub second: PatternAxis,
}

/// Shape variants known to the scene graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Sphere(Sphere),
    RectangularExtrusion(RectangularExtrusion),
    SquareBeam(SquareBeam),
    Group { children: Vec<Geometry> },
    LinearPattern(LinearPattern),
    BidirectionalPattern(BidirectionalPattern),
}

/// A shape together with its rigid placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub shape: Shape,
    pub placement: Isometry3<f64>,
}

impl From<Shape> for Geometry {
    fn from(shape: Shape) -> Self {
        Self {
            shape,
            placement: Isometry3::identity(),
        }
    }
}

impl Geometry {
    pub fn sphere(
        centre: Point3<f64>,
        radius: f64,
        material: Option<Material>,
        identifier: Option<String>,
    ) -> Self {
        Shape::Sphere(Sphere {
            centre,
            radius,
            material,
            identifier,
        })
        .into()
    }

    pub fn rectangular_extrusion(
        width: f64,
        height: f64,
        line: Line,
        material: Option<Material>,
    ) -> Self {
        Shape::RectangularExtrusion(RectangularExtrusion {
            width,
            height,
            line,
            material,
        })
        .into()
    }

    pub fn square_beam(
        length_x: f64,
        length_y: f64,
        length_z: f64,
        material: Option<Material>,
    ) -> Self {
        Shape::SquareBeam(SquareBeam {
            length_x,
            length_y,
            length_z,
            material,
        })
        .into()
    }

    pub fn group(children: Vec<Geometry>) -> Self {
        Shape::Group { children }.into()
    }

    pub fn linear_pattern(base: Geometry, axis: PatternAxis) -> Self {
        Shape::LinearPattern(LinearPattern {
            base: Box::new(base),
            axis,
        })
        .into()
    }

    pub fn bidirectional_pattern(base: Geometry, first: PatternAxis, second: PatternAxis) -> Self {
        Shape::BidirectionalPattern(BidirectionalPattern {
            base: Box::new(base),
            first,
            second,
        })
        .into()
    }

    /// Move the shape by `offset` in its parent frame
    pub fn translate(mut self, offset: Vector3<f64>) -> Self {
        self.placement = Translation3::from(offset) * self.placement;
        self
    }

    /// Rotate the shape by `angle` radians about `axis` passing through `point`
    pub fn rotate(mut self, angle: f64, axis: Vector3<f64>, point: Point3<f64>) -> Self {
        let unit_axis = match Unit::try_new(axis, 1e-15) {
            Some(a) => a,
            None => return self, // degenerate axis
        };

        let rotation = UnitQuaternion::from_axis_angle(&unit_axis, angle);
        let about_point = Isometry3::translation(point.x, point.y, point.z)
            * Isometry3::from_parts(Translation3::identity(), rotation)
            * Isometry3::translation(-point.x, -point.y, -point.z);
        self.placement = about_point * self.placement;
        self
    }
}

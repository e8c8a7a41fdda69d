// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry construction capability
//!
//! Generators build their output only through [`GeometryKernel`], so they can
//! target the in-memory scene graph ([`SceneGraphKernel`]) or any other
//! backend that understands the same primitive set.

use nalgebra::{Point3, Vector3};

use crate::material::Material;
use crate::shape::{Geometry, Line, PatternAxis};

/// Primitive set required by the building generators
pub trait GeometryKernel {
    /// Handle to a constructed shape. Shapes have value semantics: every
    /// transform consumes a shape and returns the moved one.
    type Shape;

    fn sphere(
        &self,
        centre: Point3<f64>,
        radius: f64,
        material: Material,
        identifier: String,
    ) -> Self::Shape;

    fn rectangular_extrusion(
        &self,
        width: f64,
        height: f64,
        line: Line,
        material: Option<Material>,
    ) -> Self::Shape;

    /// Box with the given edge lengths, centred on the origin
    fn square_beam(
        &self,
        length_x: f64,
        length_y: f64,
        length_z: f64,
        material: Option<Material>,
    ) -> Self::Shape;

    fn group(&self, children: Vec<Self::Shape>) -> Self::Shape;

    fn linear_pattern(&self, base: Self::Shape, axis: PatternAxis) -> Self::Shape;

    fn bidirectional_pattern(
        &self,
        base: Self::Shape,
        first: PatternAxis,
        second: PatternAxis,
    ) -> Self::Shape;

    fn translate(&self, shape: Self::Shape, offset: Vector3<f64>) -> Self::Shape;

    fn rotate(
        &self,
        shape: Self::Shape,
        angle: f64,
        axis: Vector3<f64>,
        point: Point3<f64>,
    ) -> Self::Shape;
}

/// Kernel producing the serializable [`Geometry`] scene graph
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneGraphKernel;

impl GeometryKernel for SceneGraphKernel {
    type Shape = Geometry;

    fn sphere(
        &self,
        centre: Point3<f64>,
        radius: f64,
        material: Material,
        identifier: String,
    ) -> Geometry {
        Geometry::sphere(centre, radius, Some(material), Some(identifier))
    }

    fn rectangular_extrusion(
        &self,
        width: f64,
        height: f64,
        line: Line,
        material: Option<Material>,
    ) -> Geometry {
        Geometry::rectangular_extrusion(width, height, line, material)
    }

    fn square_beam(
        &self,
        length_x: f64,
        length_y: f64,
        length_z: f64,
        material: Option<Material>,
    ) -> Geometry {
        Geometry::square_beam(length_x, length_y, length_z, material)
    }

    fn group(&self, children: Vec<Geometry>) -> Geometry {
        Geometry::group(children)
    }

    fn linear_pattern(&self, base: Geometry, axis: PatternAxis) -> Geometry {
        Geometry::linear_pattern(base, axis)
    }

    fn bidirectional_pattern(
        &self,
        base: Geometry,
        first: PatternAxis,
        second: PatternAxis,
    ) -> Geometry {
        Geometry::bidirectional_pattern(base, first, second)
    }

    fn translate(&self, shape: Geometry, offset: Vector3<f64>) -> Geometry {
        shape.translate(offset)
    }

    fn rotate(
        &self,
        shape: Geometry,
        angle: f64,
        axis: Vector3<f64>,
        point: Point3<f64>,
    ) -> Geometry {
        shape.rotate(angle, axis, point)
    }
}

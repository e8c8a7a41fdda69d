// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Node identifiers and grid indices.
//!
//! A node is referenced from selection input only by its identifier, the
//! text `"{x}-{y}-{z}"`. Components use Rust's shortest round-trip float
//! formatting, so parsing an identifier gives back the exact `f64`s it was
//! made from. Lattice coordinates are never negative, which keeps `-` free
//! to act as the separator.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use nalgebra::Point3;

use crate::error::{Error, Result};

/// Separator between the three identifier components.
pub const SEPARATOR: char = '-';

/// Coordinate axis, used when comparing node positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Position of a node in the lattice: one index per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridIndex {
    pub ix: usize,
    pub iy: usize,
    pub iz: usize,
}

impl GridIndex {
    pub fn new(ix: usize, iy: usize, iz: usize) -> Self {
        Self { ix, iy, iz }
    }

    pub fn get(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.ix,
            Axis::Y => self.iy,
            Axis::Z => self.iz,
        }
    }
}

/// Exact-valued node identifier.
///
/// Equality and hashing compare the bit patterns of the components, matching
/// the textual identity of the canonical string.
#[derive(Debug, Clone, Copy)]
pub struct NodeId {
    x: f64,
    y: f64,
    z: f64,
}

impl NodeId {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    fn bits(&self) -> [u64; 3] {
        [self.x.to_bits(), self.y.to_bits(), self.z.to_bits()]
    }
}

impl PartialEq for NodeId {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for NodeId {}

impl Hash for NodeId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}{SEPARATOR}{}", self.x, self.y, self.z)
    }
}

impl FromStr for NodeId {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let malformed = |reason: String| Error::MalformedNodeId {
            id: raw.to_string(),
            reason,
        };

        let parts: Vec<&str> = raw.split(SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(malformed(format!(
                "expected 3 components separated by '{SEPARATOR}', found {}",
                parts.len()
            )));
        }

        let mut values = [0.0f64; 3];
        for (value, part) in values.iter_mut().zip(&parts) {
            let parsed: f64 = part
                .trim()
                .parse()
                .map_err(|e| malformed(format!("component {:?}: {}", part, e)))?;
            if !parsed.is_finite() {
                return Err(malformed(format!("component {:?} is not finite", part)));
            }
            *value = parsed;
        }

        Ok(Self::new(values[0], values[1], values[2]))
    }
}

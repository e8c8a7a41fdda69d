// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input parameters of a generation run.
//!
//! Every field has a default so a partial JSON document is a valid input.

use std::ops::RangeInclusive;

use parabuild_geometry::Color;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::{Error, Result};

/// Floor counts accepted by the input layer.
pub const FLOOR_RANGE: RangeInclusive<u32> = 5..=40;

/// Smallest footprint side accepted by the input layer.
///
/// Lattice spacing is a third of the side; below this the node coordinates
/// are no longer distinct.
pub const MIN_EXTENT: f64 = 0.01;

/// Footprint and floor count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionParameters {
    pub width: f64,
    pub length: f64,
    pub number_floors: u32,
}

impl DimensionParameters {
    /// Height of the top floor boundary
    pub fn total_height(&self, config: &GenerationConfig) -> f64 {
        config.floor_height * self.number_floors as f64
    }
}

/// One user-defined balcony.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalconySpec {
    /// Start and end node identifiers; empty until the user picks them
    pub select: Vec<String>,
    pub width: f64,
    pub color: Color,
}

impl Default for BalconySpec {
    fn default() -> Self {
        Self {
            select: Vec::new(),
            width: 3.0,
            color: Color::gray(),
        }
    }
}

impl BalconySpec {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            select: vec![start.into(), end.into()],
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Everything the input layer hands to the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingParams {
    pub width: f64,
    pub length: f64,
    pub number_floors: u32,
    /// Node identifiers where full-height columns are added
    pub add_columns: Vec<String>,
    /// Node identifiers whose elevation receives a full-footprint slab
    pub add_floors: Vec<String>,
    pub balconies: Vec<BalconySpec>,
}

impl Default for BuildingParams {
    fn default() -> Self {
        Self {
            width: 30.0,
            length: 30.0,
            number_floors: 10,
            add_columns: Vec::new(),
            add_floors: Vec::new(),
            balconies: Vec::new(),
        }
    }
}

impl BuildingParams {
    pub fn dimensions(&self) -> DimensionParameters {
        DimensionParameters {
            width: self.width,
            length: self.length,
            number_floors: self.number_floors,
        }
    }

    /// Range checks normally enforced by the input form.
    ///
    /// `generate` does not call this; hosts that accept free-form input do.
    pub fn validate(&self) -> Result<()> {
        check_extent("width", self.width)?;
        check_extent("length", self.length)?;

        if !FLOOR_RANGE.contains(&self.number_floors) {
            return Err(Error::InvalidParameter {
                name: "number_floors",
                reason: format!(
                    "{} is outside {}..={}",
                    self.number_floors,
                    FLOOR_RANGE.start(),
                    FLOOR_RANGE.end()
                ),
            });
        }

        for balcony in &self.balconies {
            check_positive("balconies.width", balcony.width)?;
        }

        Ok(())
    }
}

fn check_extent(name: &'static str, value: f64) -> Result<()> {
    check_positive(name, value)?;
    if value < MIN_EXTENT {
        return Err(Error::InvalidParameter {
            name,
            reason: format!("{} is below the minimum of {}", value, MIN_EXTENT),
        });
    }
    Ok(())
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            reason: format!("{} must be a positive number", value),
        })
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Colours and materials attached to scene geometry

use serde::{Deserialize, Serialize};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray used for unstyled balconies
    pub const fn gray() -> Self {
        Self::rgb(128, 128, 128)
    }

    /// Blue used for selectable lattice nodes
    pub const fn node_blue() -> Self {
        Self::rgb(0, 110, 195)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::gray()
    }
}

/// Named material with a display colour
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Material {
    pub name: Option<String>,
    pub color: Color,
}

impl Material {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: Some(name.into()),
            color,
        }
    }

    /// Anonymous material carrying only a colour
    pub fn from_color(color: Color) -> Self {
        Self { name: None, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_material_is_anonymous_gray() {
        let material = Material::default();
        assert!(material.name.is_none());
        assert_eq!(material.color, Color::gray());
    }
}

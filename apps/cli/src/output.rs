// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Writing a generated scene as JSON or OBJ.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use parabuild_core::{Generation, Scene, SCENE_GROUPS};
use parabuild_geometry::{write_obj, Geometry, Mesh, ObjLayer, TessellationOptions};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Scene graph and warnings as JSON
    Json,
    /// Tessellated Wavefront OBJ, one object per scene group
    Obj,
}

/// Number of placed solids in each scene group, in display order
pub fn group_counts(scene: &Scene<Geometry>) -> [(&'static str, usize); 5] {
    let groups = scene.groups();
    std::array::from_fn(|i| (SCENE_GROUPS[i], groups[i].expand().len()))
}

pub fn write_json<W: Write>(out: &mut W, generation: &Generation<Geometry>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, generation).context("Failed to serialize scene")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_scene_obj<W: Write>(
    out: &mut W,
    scene: &Scene<Geometry>,
    options: &TessellationOptions,
) -> Result<()> {
    let meshes = scene
        .groups()
        .iter()
        .map(|group| group.tessellate(options))
        .collect::<parabuild_geometry::Result<Vec<Mesh>>>()
        .context("Failed to tessellate scene")?;

    let layers: Vec<ObjLayer<'_>> = SCENE_GROUPS
        .into_iter()
        .zip(&meshes)
        .map(|(name, mesh)| ObjLayer { name, mesh })
        .collect();

    let header = format!("Generated by parabuild {}", env!("CARGO_PKG_VERSION"));
    write_obj(out, &header, &layers).context("Failed to write OBJ")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parabuild_core::{generate, BalconySpec, BuildingParams};
    use parabuild_geometry::SceneGraphKernel;

    fn generation() -> Generation<Geometry> {
        let params = BuildingParams {
            number_floors: 5,
            add_columns: vec!["10-10-0".into()],
            balconies: vec![
                BalconySpec::new("0-0-4", "0-30-4"),
                BalconySpec::new("0-0-4", "30-30-8"),
            ],
            ..Default::default()
        };
        generate(&params, &SceneGraphKernel).unwrap()
    }

    #[test]
    fn counts_solids_per_group() {
        let counts = group_counts(&generation().scene);
        assert_eq!(
            counts,
            [
                ("nodes", 96),
                ("building", 40),
                ("added_columns", 1),
                ("added_floors", 0),
                ("added_balconies", 1),
            ]
        );
    }

    #[test]
    fn json_carries_scene_and_warnings() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &generation()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["warnings"][0]["balcony"], 2);
        assert_eq!(value["scene"]["building"]["shape"]["type"], "linear_pattern");
    }

    #[test]
    fn obj_has_one_object_per_non_empty_group() {
        let mut buffer = Vec::new();
        write_scene_obj(&mut buffer, &generation().scene, &TessellationOptions::default()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let objects: Vec<&str> = text.lines().filter(|l| l.starts_with("o ")).collect();
        assert_eq!(objects, vec!["o nodes", "o building", "o added_columns", "o added_balconies"]);
        assert!(text.starts_with("# Generated by parabuild"));
    }
}

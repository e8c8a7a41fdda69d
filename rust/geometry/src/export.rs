// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ export

use std::io::Write;

use crate::error::{Error, Result};
use crate::mesh::Mesh;

/// Named mesh written as one OBJ object
#[derive(Debug, Clone, Copy)]
pub struct ObjLayer<'a> {
    pub name: &'a str,
    pub mesh: &'a Mesh,
}

/// Write meshes as OBJ objects.
///
/// Source geometry is Z-up; OBJ is Y-up, so vertices are written as
/// (x, z, -y) and triangle winding is reversed to compensate for the flip.
pub fn write_obj<W: Write>(out: &mut W, header: &str, layers: &[ObjLayer<'_>]) -> Result<()> {
    if layers.iter().all(|layer| layer.mesh.is_empty()) {
        return Err(Error::EmptyScene("no layer has any vertices".to_string()));
    }

    for line in header.lines() {
        writeln!(out, "# {}", line)?;
    }
    writeln!(out, "# Coordinate system: Y-up (OBJ convention)")?;
    writeln!(out)?;

    let mut vertex_offset: u32 = 0;

    for layer in layers {
        let mesh = layer.mesh;
        if mesh.is_empty() {
            continue;
        }

        writeln!(out, "o {}", layer.name)?;

        for p in mesh.positions.chunks_exact(3) {
            writeln!(out, "v {:.6} {:.6} {:.6}", p[0], p[2], -p[1])?;
        }
        for n in mesh.normals.chunks_exact(3) {
            writeln!(out, "vn {:.6} {:.6} {:.6}", n[0], n[2], -n[1])?;
        }
        for tri in mesh.indices.chunks_exact(3) {
            let i0 = tri[0] + vertex_offset + 1;
            let i1 = tri[1] + vertex_offset + 1;
            let i2 = tri[2] + vertex_offset + 1;
            writeln!(out, "f {}//{} {}//{} {}//{}", i0, i0, i2, i2, i1, i1)?;
        }

        vertex_offset += mesh.vertex_count() as u32;
        writeln!(out)?;
    }

    Ok(())
}

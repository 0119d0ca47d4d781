//! STL serialization of triangle meshes, binary and ASCII.

use disc_kernel::{TriangleMesh, Vec3};

use crate::error::ExportError;

const HEADER_LEN: usize = 80;
const TRIANGLE_RECORD_LEN: usize = 50;

fn check_mesh(mesh: &TriangleMesh) -> Result<(), ExportError> {
    if mesh.is_empty() {
        return Err(ExportError::EmptyMesh);
    }
    let vertex_count = mesh.vertex_count();
    if let Some(&index) = mesh.faces.iter().flatten().find(|&&i| i as usize >= vertex_count) {
        return Err(ExportError::IndexOutOfRange { index, vertex_count });
    }
    Ok(())
}

/// Unit face normal, or zero for degenerate faces.
fn facet_normal(mesh: &TriangleMesh, face: &[u32; 3]) -> Vec3 {
    mesh.face_normal(face).unwrap_or(Vec3::ZERO)
}

/// Serialize as binary STL.
///
/// Layout:
/// - 80-byte header (name, zero padded)
/// - u32 LE triangle count
/// - per triangle: normal (3 × f32 LE), 3 vertices (9 × f32 LE), u16 attribute = 50 bytes
pub fn write_binary_stl(mesh: &TriangleMesh, name: &str) -> Result<Vec<u8>, ExportError> {
    check_mesh(mesh)?;
    let tri_count = u32::try_from(mesh.triangle_count()).map_err(|_| ExportError::IndexOutOfRange {
        index: u32::MAX,
        vertex_count: mesh.vertex_count(),
    })?;

    let mut buf = Vec::with_capacity(HEADER_LEN + 4 + mesh.triangle_count() * TRIANGLE_RECORD_LEN);
    let header = format!("binary STL: {name}");
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(HEADER_LEN)]);
    buf.resize(HEADER_LEN, 0u8);

    buf.extend_from_slice(&tri_count.to_le_bytes());

    for face in &mesh.faces {
        let n = facet_normal(mesh, face);
        for c in [n.x, n.y, n.z] {
            buf.extend_from_slice(&(c as f32).to_le_bytes());
        }
        for &idx in face {
            let v = mesh.vertices[idx as usize];
            for c in v.to_array() {
                buf.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// Serialize as ASCII STL.
pub fn write_ascii_stl(mesh: &TriangleMesh, name: &str) -> Result<String, ExportError> {
    check_mesh(mesh)?;

    let mut out = String::with_capacity(mesh.triangle_count() * 256);
    out.push_str(&format!("solid {name}\n"));
    for face in &mesh.faces {
        let n = facet_normal(mesh, face);
        out.push_str(&format!("  facet normal {} {} {}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for &idx in face {
            let v = mesh.vertices[idx as usize];
            out.push_str(&format!("      vertex {} {} {}\n", v.x, v.y, v.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    out.push_str(&format!("endsolid {name}\n"));
    Ok(out)
}

//! Tests for STL export of revolved disc meshes.

use disc_export::{export_mesh, write_ascii_stl, write_binary_stl, ExportError, ExportSettings};
use disc_kernel::{Point2d, Point3d, TriangleMesh};

fn make_triangle_mesh() -> TriangleMesh {
    TriangleMesh {
        vertices: vec![
            Point3d::new(0.0, 0.0, 0.0),
            Point3d::new(1.0, 0.0, 0.0),
            Point3d::new(0.0, 1.0, 0.0),
        ],
        faces: vec![[0, 1, 2]],
    }
}

fn make_disc_mesh() -> TriangleMesh {
    // rough driver outline, already in the negative-x profile convention
    let curve = [
        Point2d::new(0.0, 0.0),
        Point2d::new(-90.0, -3.0),
        Point2d::new(-105.0, -5.0),
        Point2d::new(-96.7, -8.0),
        Point2d::new(-80.0, -12.0),
        Point2d::new(-80.0, -5.0),
        Point2d::new(0.0, -2.0),
        Point2d::new(0.0, 0.0),
    ];
    export_mesh(&curve, &ExportSettings::default()).unwrap()
}

fn read_f32(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

#[test]
fn binary_stl_header_is_80_bytes() {
    let stl = write_binary_stl(&make_triangle_mesh(), "test").unwrap();
    assert!(stl.len() >= 80, "Binary STL must be at least 80 bytes");
    let header = String::from_utf8_lossy(&stl[..80]);
    assert!(header.contains("test"), "Header should contain solid name");
}

#[test]
fn binary_stl_size_matches_triangle_count() {
    let mesh = make_disc_mesh();
    let stl = write_binary_stl(&mesh, "disc").unwrap();
    let count = u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]) as usize;
    assert_eq!(count, mesh.triangle_count());
    assert_eq!(stl.len(), 84 + 50 * count);
}

#[test]
fn binary_stl_writes_unit_normal() {
    let stl = write_binary_stl(&make_triangle_mesh(), "tri").unwrap();
    assert_eq!(read_f32(&stl, 84), 0.0);
    assert_eq!(read_f32(&stl, 88), 0.0);
    assert_eq!(read_f32(&stl, 92), 1.0);
    // second vertex x
    assert_eq!(read_f32(&stl, 96 + 12), 1.0);
}

#[test]
fn long_names_truncate_header() {
    let name = "x".repeat(200);
    let stl = write_binary_stl(&make_triangle_mesh(), &name).unwrap();
    assert_eq!(stl.len(), 84 + 50);
}

#[test]
fn ascii_stl_structure() {
    let mesh = make_disc_mesh();
    let stl = write_ascii_stl(&mesh, "disc_design").unwrap();
    assert!(stl.starts_with("solid disc_design\n"));
    assert!(stl.ends_with("endsolid disc_design\n"));
    assert_eq!(stl.matches("facet normal").count(), mesh.triangle_count());
    assert_eq!(stl.matches("vertex ").count(), 3 * mesh.triangle_count());
}

#[test]
fn empty_mesh_rejected() {
    let empty = TriangleMesh::new();
    assert!(matches!(write_binary_stl(&empty, "x"), Err(ExportError::EmptyMesh)));
    assert!(matches!(write_ascii_stl(&empty, "x"), Err(ExportError::EmptyMesh)));
}

#[test]
fn out_of_range_index_rejected() {
    let mut mesh = make_triangle_mesh();
    mesh.faces.push([0, 1, 7]);
    assert!(matches!(
        write_binary_stl(&mesh, "bad"),
        Err(ExportError::IndexOutOfRange { index: 7, vertex_count: 3 })
    ));
}

#[test]
fn export_mesh_spans_full_diameter() {
    let mesh = make_disc_mesh();
    let (lo, hi) = mesh.bounding_box().unwrap();
    assert!((hi.x - 105.0).abs() < 1e-9);
    assert!((lo.x + 105.0).abs() < 1e-9);
    assert!((lo.z + 12.0).abs() < 1e-9);
    assert!(hi.z.abs() < 1e-9);
}

#[test]
fn export_mesh_has_no_degenerate_faces() {
    let mesh = make_disc_mesh();
    assert!(mesh.faces.iter().all(|f| mesh.face_area(f) > 0.0));
}

//! End-to-end tests for the image-to-mesh pipeline

use image::{Rgba, RgbaImage};
use logoforge_shape::{build_extruded_logo_geometry, DEFAULT_TARGET_HEIGHT};

const OPAQUE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn solid_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, OPAQUE)
}

/// A filled square with a transparent square punched out of its middle
fn ring_image(size: u32, hole: u32) -> RgbaImage {
    let mut img = solid_image(size, size);
    let start = (size - hole) / 2;
    for y in start..start + hole {
        for x in start..start + hole {
            img.put_pixel(x, y, CLEAR);
        }
    }
    img
}

#[test]
fn solid_logo_produces_mesh_with_normals() {
    let mesh = build_extruded_logo_geometry(&solid_image(40, 40), DEFAULT_TARGET_HEIGHT)
        .expect("solid logo should extrude");

    assert!(mesh.vertex_count() > 0);
    assert!(mesh.face_count() > 0);
    let normals = mesh.normals.as_ref().expect("pipeline computes normals");
    assert_eq!(normals.len(), mesh.vertex_count());
}

#[test]
fn logo_with_hole_produces_more_geometry_than_solid() {
    let solid = build_extruded_logo_geometry(&solid_image(40, 40), DEFAULT_TARGET_HEIGHT).unwrap();
    let ring = build_extruded_logo_geometry(&ring_image(40, 16), DEFAULT_TARGET_HEIGHT).unwrap();

    assert!(ring.face_count() > solid.face_count());
}

#[test]
fn mesh_is_centered_on_its_bounding_box() {
    let mesh = build_extruded_logo_geometry(&solid_image(64, 32), DEFAULT_TARGET_HEIGHT).unwrap();
    let (min, max) = mesh.bounds().unwrap();
    assert!((min.x + max.x).abs() < 1e-4);
    assert!((min.y + max.y).abs() < 1e-4);
    assert!((min.z + max.z).abs() < 1e-4);
}

#[test]
fn tiny_source_image_is_rejected() {
    assert!(build_extruded_logo_geometry(&solid_image(4, 4), DEFAULT_TARGET_HEIGHT).is_none());
}

#[test]
fn fully_transparent_image_is_rejected() {
    let img = RgbaImage::from_pixel(40, 40, CLEAR);
    assert!(build_extruded_logo_geometry(&img, DEFAULT_TARGET_HEIGHT).is_none());
}

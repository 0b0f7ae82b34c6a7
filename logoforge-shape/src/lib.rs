//! Shape classification and beveled extrusion for logoforge
//!
//! This crate turns traced pixel-space loops into renderable 3D geometry:
//! - Outer-contour vs. hole classification with winding canonicalization
//! - Normalization into a centered, aspect-clamped model space
//! - Beveled extrusion with earcut-triangulated caps
//!
//! [`build_extruded_logo_geometry`] runs the full image-to-mesh pipeline and
//! returns `None` whenever the source yields no usable geometry, letting the
//! caller fall back to the flat logo image.

pub mod classify;
pub mod extrude;

pub use classify::*;
pub use extrude::*;

use image::RgbaImage;
use logoforge_core::{RasterMask, TriangleMesh};
use tracing::debug;

/// Build the extruded logo mesh from a logo image's alpha channel.
///
/// Runs mask sampling, contour tracing, normalization, nesting
/// classification, and beveled extrusion. Any stage producing nothing makes
/// the whole pipeline return `None`.
pub fn build_extruded_logo_geometry(
    source: &RgbaImage,
    target_height: f32,
) -> Option<TriangleMesh> {
    let mask = RasterMask::from_image(source)?;

    let loops = logoforge_trace::trace_loops(&mask);
    if loops.is_empty() {
        debug!("no contours traced from logo mask");
        return None;
    }

    let normalized: Vec<_> = loops
        .iter()
        .map(|l| normalize_loop(l, mask.width(), mask.height(), target_height))
        .collect();

    let shapes = classify_shapes(normalized);
    if shapes.is_empty() {
        debug!("no significant shapes after classification");
        return None;
    }

    let options = ExtrudeOptions::for_target_height(target_height);
    let mesh = extrude_shapes(&shapes, &options)?;
    debug!(
        shapes = shapes.len(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "built extruded logo geometry"
    );
    Some(mesh)
}

//! Normalization and beveled extrusion of classified shapes
//!
//! Loops come in with pixel-space coordinates (raster origin top-left).
//! [`normalize_loop`] rescales them into a centered, y-up model space with a
//! clamped aspect ratio; [`extrude_shapes`] sweeps the shape set to a fixed
//! depth with rounded bevel rings, earcut-triangulated caps (holes
//! supported), and smooth side normals.

use std::f32::consts::FRAC_PI_2;

use logoforge_core::{Contour, Point2f, Point3f, TriangleMesh, Vector2f};
use tracing::debug;

use crate::classify::OuterShape;

/// Default model-space height of the extruded logo
pub const DEFAULT_TARGET_HEIGHT: f32 = 2.6;

const MIN_ASPECT: f32 = 0.32;
const MAX_ASPECT: f32 = 2.8;
const DEPTH_RATIO: f32 = 0.18;
const MIN_DEPTH: f32 = 0.22;
const MAX_DEPTH: f32 = 0.46;
const BEVEL_THICKNESS_RATIO: f32 = 0.16;
const BEVEL_SIZE_RATIO: f32 = 0.10;
const BEVEL_SEGMENTS: usize = 2;

/// Miter joins are capped to avoid spikes at near-degenerate corners
const MITER_LIMIT_COS: f32 = 0.2;

/// Resolved extrusion parameters
#[derive(Debug, Clone, Copy)]
pub struct ExtrudeOptions {
    pub depth: f32,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    pub bevel_segments: usize,
}

impl ExtrudeOptions {
    /// Derive depth and bevel parameters from the target model height
    pub fn for_target_height(target_height: f32) -> Self {
        let depth = (target_height * DEPTH_RATIO).clamp(MIN_DEPTH, MAX_DEPTH);
        Self {
            depth,
            bevel_thickness: depth * BEVEL_THICKNESS_RATIO,
            bevel_size: depth * BEVEL_SIZE_RATIO,
            bevel_segments: BEVEL_SEGMENTS,
        }
    }

    /// Ring levels from the back cap plane to the front cap plane as
    /// `(z, outward offset)` pairs. The bevel follows a quarter-circle
    /// profile: offset 0 at the cap planes, full bevel size at the body.
    fn levels(&self) -> Vec<(f32, f32)> {
        let segments = self.bevel_segments.max(1);
        let mut levels = Vec::with_capacity(2 * segments + 2);

        for s in 0..=segments {
            let t = s as f32 / segments as f32;
            levels.push((
                -self.bevel_thickness * (t * FRAC_PI_2).cos(),
                self.bevel_size * (t * FRAC_PI_2).sin(),
            ));
        }
        levels.push((self.depth, self.bevel_size));
        for s in 1..=segments {
            let t = 1.0 - s as f32 / segments as f32;
            levels.push((
                self.depth + self.bevel_thickness * (t * FRAC_PI_2).cos(),
                self.bevel_size * (t * FRAC_PI_2).sin(),
            ));
        }

        levels
    }
}

/// Rescale a pixel-space loop into centered model space.
///
/// The aspect ratio is clamped to [0.32, 2.8] so odd alpha masks cannot
/// produce extreme extrusions; the y axis flips from raster (top-left
/// origin) to model (bottom-left origin) convention.
pub fn normalize_loop(
    contour: &Contour,
    mask_width: usize,
    mask_height: usize,
    target_height: f32,
) -> Contour {
    let aspect = (mask_width as f32 / mask_height as f32).clamp(MIN_ASPECT, MAX_ASPECT);
    let target_width = target_height * aspect;

    Contour::new(
        contour
            .points
            .iter()
            .map(|p| {
                Point2f::new(
                    (p.x / mask_width as f32 - 0.5) * target_width,
                    (0.5 - p.y / mask_height as f32) * target_height,
                )
            })
            .collect(),
    )
}

/// Per-vertex miter offset directions for a ring.
///
/// For a counter-clockwise outline these point away from the material; for a
/// clockwise hole they point into the hole opening, so a positive offset
/// always grows the material.
fn miter_normals(ring: &Contour) -> Vec<Vector2f> {
    let pts = &ring.points;
    let n = pts.len();
    let mut edge_normals = Vec::with_capacity(n);
    for i in 0..n {
        let e = pts[(i + 1) % n] - pts[i];
        let len = e.magnitude();
        if len > 1e-12 {
            edge_normals.push(Vector2f::new(e.y / len, -e.x / len));
        } else {
            edge_normals.push(Vector2f::zeros());
        }
    }

    let mut normals = Vec::with_capacity(n);
    for i in 0..n {
        let prev = edge_normals[(i + n - 1) % n];
        let current = edge_normals[i];
        let sum = prev + current;
        let len = sum.magnitude();
        if len < 1e-6 {
            normals.push(current);
            continue;
        }
        let direction = sum / len;
        // Miter length keeps the offset distance constant along both edges.
        let scale = 1.0 / direction.dot(&current).max(MITER_LIMIT_COS);
        normals.push(direction * scale);
    }
    normals
}

/// Extrude classified shapes into a centered solid with computed normals.
///
/// Returns `None` when no valid geometry can be produced; the caller falls
/// back to its static image.
pub fn extrude_shapes(shapes: &[OuterShape], options: &ExtrudeOptions) -> Option<TriangleMesh> {
    let mut mesh = TriangleMesh::new();

    for shape in shapes {
        append_shape(&mut mesh, shape, options);
    }

    if mesh.is_empty() {
        debug!("extrusion produced no geometry");
        return None;
    }

    mesh.center();
    mesh.compute_vertex_normals();
    Some(mesh)
}

fn append_shape(mesh: &mut TriangleMesh, shape: &OuterShape, options: &ExtrudeOptions) {
    let rings: Vec<&Contour> = std::iter::once(&shape.outline)
        .chain(shape.holes.iter())
        .collect();
    let levels = options.levels();

    // Side walls and bevel rings share vertices between levels so vertex
    // normals shade the bevel smoothly.
    for ring in &rings {
        let count = ring.len();
        if count < 3 {
            continue;
        }
        let normals = miter_normals(ring);

        let mut level_bases = Vec::with_capacity(levels.len());
        for &(z, offset) in &levels {
            let base = mesh.vertex_count();
            for (point, normal) in ring.points.iter().zip(&normals) {
                mesh.add_vertex(Point3f::new(
                    point.x + normal.x * offset,
                    point.y + normal.y * offset,
                    z,
                ));
            }
            level_bases.push(base);
        }

        for w in 0..levels.len() - 1 {
            let lower = level_bases[w];
            let upper = level_bases[w + 1];
            for i in 0..count {
                let j = (i + 1) % count;
                mesh.add_face([lower + i, lower + j, upper + j]);
                mesh.add_face([lower + i, upper + j, upper + i]);
            }
        }
    }

    // Caps keep their own vertices so they stay flat-shaded.
    let front_z = options.depth + options.bevel_thickness;
    let back_z = -options.bevel_thickness;
    append_cap(mesh, shape, front_z, true);
    append_cap(mesh, shape, back_z, false);
}

fn append_cap(mesh: &mut TriangleMesh, shape: &OuterShape, z: f32, front: bool) {
    let mut coords: Vec<f32> = Vec::new();
    let mut hole_indices: Vec<usize> = Vec::new();

    for point in &shape.outline.points {
        coords.push(point.x);
        coords.push(point.y);
    }
    for hole in &shape.holes {
        hole_indices.push(coords.len() / 2);
        for point in &hole.points {
            coords.push(point.x);
            coords.push(point.y);
        }
    }

    let triangles = match earcutr::earcut(&coords, &hole_indices, 2) {
        Ok(triangles) => triangles,
        Err(err) => {
            debug!(?err, "cap triangulation failed, shape left open");
            return;
        }
    };

    let base = mesh.vertex_count();
    for chunk in coords.chunks_exact(2) {
        mesh.add_vertex(Point3f::new(chunk[0], chunk[1], z));
    }

    for tri in triangles.chunks_exact(3) {
        let (a, b, c) = (base + tri[0], base + tri[1], base + tri[2]);
        let va = mesh.vertices[a];
        let vb = mesh.vertices[b];
        let vc = mesh.vertices[c];
        let winding = (vb.x - va.x) * (vc.y - va.y) - (vb.y - va.y) * (vc.x - va.x);

        // Front cap faces +z, back cap -z.
        if (winding >= 0.0) == front {
            mesh.add_face([a, b, c]);
        } else {
            mesh.add_face([a, c, b]);
        }
    }
}

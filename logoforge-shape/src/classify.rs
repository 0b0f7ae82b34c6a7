//! Nesting and winding analysis: outer contours vs. holes
//!
//! Classification is a pure function over a snapshot of traced loops.
//! Nesting depth is the count of larger significant loops containing a
//! loop's first point: even depth makes an outer contour, odd depth a hole
//! assigned to its immediate parent. Hole ownership resolves in two phases:
//! the smallest containing loop found during depth computation, then a
//! contains-scan over the outer shapes built so far.

use logoforge_core::Contour;
use tracing::debug;

/// Loops below this absolute area (normalized model space) are dropped outright
const MIN_NORMALIZED_AREA: f32 = 4e-4;
/// Loops below this fraction of the largest loop's area are noise
const SIGNIFICANCE_RATIO: f32 = 0.006;

/// A loop annotated with its derived areas, the classifier's working unit
#[derive(Debug, Clone)]
struct LoopMeta {
    index: usize,
    contour: Contour,
    area: f32,
    abs_area: f32,
}

/// An even-depth contour owning the odd-depth holes nested directly in it.
///
/// The outline is wound counter-clockwise, its holes clockwise.
#[derive(Debug, Clone)]
pub struct OuterShape {
    pub outline: Contour,
    pub holes: Vec<Contour>,
    pub abs_area: f32,
}

/// Split loops into outer shapes and their holes.
///
/// Holes with no resolvable owner are dropped; this is decorative geometry,
/// not a guaranteed planar partition.
pub fn classify_shapes(loops: Vec<Contour>) -> Vec<OuterShape> {
    let mut metas: Vec<LoopMeta> = loops
        .into_iter()
        .enumerate()
        .map(|(index, contour)| {
            let area = contour.signed_area();
            LoopMeta {
                index,
                contour,
                area,
                abs_area: area.abs(),
            }
        })
        .filter(|meta| meta.abs_area > MIN_NORMALIZED_AREA)
        .collect();

    metas.sort_by(|a, b| b.abs_area.total_cmp(&a.abs_area));

    let Some(largest) = metas.first().map(|meta| meta.abs_area) else {
        return Vec::new();
    };
    let significant: Vec<LoopMeta> = metas
        .into_iter()
        .filter(|meta| meta.abs_area >= largest * SIGNIFICANCE_RATIO)
        .collect();

    // Outer shapes keyed by the originating loop index; parents always have
    // strictly larger area, so an owner is built before any of its holes.
    let mut outers: Vec<(usize, OuterShape)> = Vec::new();

    for meta in &significant {
        let Some(reference) = meta.contour.first() else {
            continue;
        };

        let mut depth = 0;
        let mut parent_index = None;
        let mut parent_area = f32::INFINITY;
        for candidate in &significant {
            if candidate.index == meta.index || candidate.abs_area <= meta.abs_area {
                continue;
            }
            if candidate.contour.contains(reference) {
                depth += 1;
                if candidate.abs_area < parent_area {
                    parent_area = candidate.abs_area;
                    parent_index = Some(candidate.index);
                }
            }
        }

        let mut oriented = meta.contour.clone();

        if depth % 2 == 0 {
            // Outer contour, canonical counter-clockwise winding.
            if meta.area < 0.0 {
                oriented.reverse();
            }
            outers.push((
                meta.index,
                OuterShape {
                    outline: oriented,
                    holes: Vec::new(),
                    abs_area: meta.abs_area,
                },
            ));
            continue;
        }

        // Hole, wound opposite to its owner.
        if meta.area > 0.0 {
            oriented.reverse();
        }

        let mut owner = parent_index;
        if owner.is_none() {
            for (outer_index, outer) in &outers {
                if outer.abs_area < parent_area && outer.outline.contains(reference) {
                    parent_area = outer.abs_area;
                    owner = Some(*outer_index);
                }
            }
        }

        let Some(owner_index) = owner else {
            debug!(loop_index = meta.index, "hole with no resolvable owner dropped");
            continue;
        };
        let Some((_, owner_shape)) = outers.iter_mut().find(|(index, _)| *index == owner_index)
        else {
            debug!(loop_index = meta.index, "hole owner is not an outer shape, dropped");
            continue;
        };
        owner_shape.holes.push(oriented);
    }

    outers.into_iter().map(|(_, shape)| shape).collect()
}

//! Boundary-edge contour tracing over a raster mask
//!
//! Every occupied mask cell contributes one directed boundary edge per side
//! whose neighbor is unoccupied, oriented clockwise around filled regions.
//! Edges live on the (width+1) x (height+1) lattice of cell corners and are
//! keyed by flat node index, so the walk needs no hashing.

use logoforge_core::{Contour, Point2f, RasterMask};
use tracing::debug;

use crate::simplify::{remove_collinear, simplify_closed, SIMPLIFY_TOLERANCE};

/// Loops shorter than this after simplification are degenerate
const MIN_LOOP_POINTS: usize = 3;
/// Loops with pixel-space area at or below this are noise
const MIN_PIXEL_AREA: f32 = 4.0;

/// Directed boundary-edge adjacency on the corner lattice
struct EdgeGraph {
    nodes_per_row: usize,
    /// Out-edges per node, consumed as loops are walked
    out_edges: Vec<Vec<u32>>,
    /// Nodes that ever received an out-edge, in emission order
    active: Vec<u32>,
}

impl EdgeGraph {
    fn new(mask: &RasterMask) -> Self {
        let nodes_per_row = mask.width() + 1;
        let node_count = nodes_per_row * (mask.height() + 1);
        let mut graph = Self {
            nodes_per_row,
            out_edges: vec![Vec::new(); node_count],
            active: Vec::new(),
        };

        for y in 0..mask.height() {
            for x in 0..mask.width() {
                if !mask.is_filled(x as isize, y as isize) {
                    continue;
                }

                let (xi, yi) = (x as isize, y as isize);
                // Clockwise around the filled cell, one edge per exposed side.
                if !mask.is_filled(xi, yi - 1) {
                    graph.push_edge((x, y), (x + 1, y));
                }
                if !mask.is_filled(xi + 1, yi) {
                    graph.push_edge((x + 1, y), (x + 1, y + 1));
                }
                if !mask.is_filled(xi, yi + 1) {
                    graph.push_edge((x + 1, y + 1), (x, y + 1));
                }
                if !mask.is_filled(xi - 1, yi) {
                    graph.push_edge((x, y + 1), (x, y));
                }
            }
        }

        graph
    }

    fn node_index(&self, (x, y): (usize, usize)) -> usize {
        y * self.nodes_per_row + x
    }

    fn node_point(&self, index: usize) -> Point2f {
        Point2f::new(
            (index % self.nodes_per_row) as f32,
            (index / self.nodes_per_row) as f32,
        )
    }

    fn push_edge(&mut self, start: (usize, usize), end: (usize, usize)) {
        let start = self.node_index(start);
        let end = self.node_index(end) as u32;
        if self.out_edges[start].is_empty() {
            self.active.push(start as u32);
        }
        self.out_edges[start].push(end);
    }

    /// Consume one out-edge of `node`, if any remain
    fn take_next(&mut self, node: usize) -> Option<usize> {
        self.out_edges[node].pop().map(|n| n as usize)
    }
}

/// Walk every boundary edge of the mask into closed pixel-space loops.
///
/// Each walk starts at a node with unconsumed out-edges and follows edges
/// (removing each once consumed) until it returns to its start or runs out.
/// A hard iteration ceiling of `width * height * 8` guards against malformed
/// adjacency; hitting it abandons the walk and the partial loop is filtered
/// out by the area check below.
pub fn trace_loops(mask: &RasterMask) -> Vec<Contour> {
    let mut graph = EdgeGraph::new(mask);
    let guard_limit = mask.width() * mask.height() * 8;

    let mut loops = Vec::new();
    let mut scan = 0;
    while scan < graph.active.len() {
        let start = graph.active[scan] as usize;
        if graph.out_edges[start].is_empty() {
            scan += 1;
            continue;
        }

        let mut walk = vec![graph.node_point(start)];
        let mut current = start;
        let mut guard = 0;
        while guard < guard_limit {
            guard += 1;
            let Some(next) = graph.take_next(current) else {
                break;
            };
            walk.push(graph.node_point(next));
            current = next;
            if current == start {
                break;
            }
        }
        if guard >= guard_limit {
            debug!(guard_limit, "contour walk hit iteration ceiling");
        }

        let cleaned = remove_collinear(&walk);
        let simplified = simplify_closed(&cleaned, SIMPLIFY_TOLERANCE);
        let contour = Contour::new(simplified);
        if contour.len() >= MIN_LOOP_POINTS && contour.abs_area() > MIN_PIXEL_AREA {
            loops.push(contour);
        }
    }

    debug!(loop_count = loops.len(), "traced mask boundary");
    loops
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Build a mask from '#' (filled) rows
    fn mask_from_rows(rows: &[&str]) -> RasterMask {
        let height = rows.len();
        let width = rows[0].len();
        let mut pixels = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width);
            pixels.extend(row.bytes().map(|b| u8::from(b == b'#')));
        }
        RasterMask::from_pixels(width, height, pixels).unwrap()
    }

    fn solid_mask(size: usize) -> RasterMask {
        RasterMask::from_pixels(size, size, vec![1; size * size]).unwrap()
    }

    #[test]
    fn solid_square_yields_one_loop_with_exact_area() {
        let mask = solid_mask(40);
        let loops = trace_loops(&mask);
        assert_eq!(loops.len(), 1);
        assert_relative_eq!(loops[0].abs_area(), 1600.0);
        assert_eq!(loops[0].len(), 4);
    }

    #[test]
    fn ring_yields_outer_and_inner_loops_with_opposite_winding() {
        let mask = mask_from_rows(&[
            "##########",
            "##########",
            "##########",
            "###    ###",
            "###    ###",
            "###    ###",
            "###    ###",
            "##########",
            "##########",
            "##########",
        ]);
        let loops = trace_loops(&mask);
        assert_eq!(loops.len(), 2);

        let outer = loops.iter().max_by(|a, b| a.abs_area().total_cmp(&b.abs_area())).unwrap();
        let inner = loops.iter().min_by(|a, b| a.abs_area().total_cmp(&b.abs_area())).unwrap();
        assert_relative_eq!(outer.abs_area(), 100.0);
        assert_relative_eq!(inner.abs_area(), 16.0);
        assert!(outer.signed_area() * inner.signed_area() < 0.0);
    }

    #[test]
    fn two_separate_regions_yield_two_loops() {
        let mask = mask_from_rows(&[
            "####  ####",
            "####  ####",
            "####  ####",
            "####  ####",
        ]);
        let loops = trace_loops(&mask);
        assert_eq!(loops.len(), 2);
        for l in &loops {
            assert_relative_eq!(l.abs_area(), 16.0);
        }
    }

    #[test]
    fn tiny_specks_are_discarded() {
        // Area 4 is at the cutoff (> 4 required), area 1 is well below.
        let mask = mask_from_rows(&[
            "##      ",
            "##      ",
            "      # ",
            "        ",
        ]);
        assert!(trace_loops(&mask).is_empty());
    }

    #[test]
    fn empty_mask_yields_no_loops() {
        let mask = RasterMask::from_pixels(8, 8, vec![0; 64]).unwrap();
        assert!(trace_loops(&mask).is_empty());
    }

    #[test]
    fn loop_points_stay_on_the_corner_lattice() {
        let mask = solid_mask(5);
        let loops = trace_loops(&mask);
        for point in &loops[0].points {
            assert_eq!(point.x.fract(), 0.0);
            assert_eq!(point.y.fract(), 0.0);
            assert!(point.x <= 5.0 && point.y <= 5.0);
        }
    }
}

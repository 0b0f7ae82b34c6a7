//! Loop simplification: collinear removal and tolerance-based reduction

use logoforge_core::Point2f;

/// Fixed tolerance for closed-loop simplification, in pixel-space units
pub const SIMPLIFY_TOLERANCE: f32 = 2.6;

/// Cross products below this count as collinear
const COLLINEAR_EPSILON: f32 = 1e-8;

/// Drop points whose adjacent edges are parallel, along with consecutive
/// duplicates and a trailing point that repeats the first.
///
/// When cleaning would leave fewer than 3 points, the deduplicated sequence
/// is returned instead so degenerate loops stay recognizable to the caller.
pub fn remove_collinear(points: &[Point2f]) -> Vec<Point2f> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut deduped: Vec<Point2f> = Vec::with_capacity(points.len());
    for &point in points {
        if deduped.last() != Some(&point) {
            deduped.push(point);
        }
    }

    if deduped.len() > 1 && deduped.first() == deduped.last() {
        deduped.pop();
    }

    if deduped.len() < 3 {
        return deduped;
    }

    let mut cleaned: Vec<Point2f> = Vec::with_capacity(deduped.len());
    for i in 0..deduped.len() {
        let prev = deduped[(i + deduped.len() - 1) % deduped.len()];
        let current = deduped[i];
        let next = deduped[(i + 1) % deduped.len()];

        let d1 = current - prev;
        let d2 = next - current;
        let collinear = (d1.x * d2.y - d1.y * d2.x).abs() < COLLINEAR_EPSILON;

        if !collinear {
            cleaned.push(current);
        }
    }

    if cleaned.len() >= 3 {
        cleaned
    } else {
        deduped
    }
}

/// Perpendicular distance from a point to the segment `start..end`
fn distance_to_segment(point: Point2f, start: Point2f, end: Point2f) -> f32 {
    let d = end - start;
    if d.x == 0.0 && d.y == 0.0 {
        return (point - start).magnitude();
    }

    let t = (point - start).dot(&d) / d.dot(&d);
    let projection = start + d * t;
    (point - projection).magnitude()
}

/// Ramer-Douglas-Peucker reduction of an open polyline: recursively split at
/// the worst-displaced point until every point is within `epsilon` of its
/// chord.
fn simplify_rdp_open(points: &[Point2f], epsilon: f32) -> Vec<Point2f> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_distance = 0.0;
    let mut max_index = None;
    for (i, &point) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let distance = distance_to_segment(point, first, last);
        if distance > max_distance {
            max_distance = distance;
            max_index = Some(i);
        }
    }

    match max_index {
        Some(split) if max_distance > epsilon => {
            let mut left = simplify_rdp_open(&points[..=split], epsilon);
            let right = simplify_rdp_open(&points[split..], epsilon);
            left.pop();
            left.extend(right);
            left
        }
        _ => vec![first, last],
    }
}

/// Simplify a closed loop, treating it as an open polyline with an implicit
/// closing edge.
///
/// Loops of 4 or fewer points pass through untouched, and a simplification
/// that would collapse the loop to 4 or fewer points is discarded in favor
/// of the input (small but real features must survive).
pub fn simplify_closed(points: &[Point2f], epsilon: f32) -> Vec<Point2f> {
    if points.len() <= 4 {
        return points.to_vec();
    }

    let mut closed = points.to_vec();
    closed.push(points[0]);

    let mut simplified = simplify_rdp_open(&closed, epsilon);
    if simplified.len() <= 4 {
        return points.to_vec();
    }

    simplified.pop();
    remove_collinear(&simplified)
}

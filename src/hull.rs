//! 2-D convex-hull candidate pruning.
//!
//! Used with Hamming feedback on two-position codes: the remaining
//! candidates are viewed as integer points in the plane, their convex hull
//! is computed, and anything outside the hull is dropped. Because the hull
//! is built from the filtered candidates themselves, this pass is redundant
//! with the exhaustive filter and kept only as the cheap extra pruning step
//! the two-position variant performs. It does not generalize to longer
//! codes, so [`retain_in_hull`] leaves those untouched.

use crate::code::Code;

pub type Point = (i64, i64);

fn cross(o: Point, a: Point, b: Point) -> i64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

/// Convex hull via Andrew's monotone chain, returned in counter-clockwise
/// order without repeated endpoints. Collinear boundary points are dropped.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() <= 2 {
        return sorted;
    }

    let mut lower: Vec<Point> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Whether `p` lies inside or on the boundary of a counter-clockwise convex
/// hull. Degenerate hulls (a point or a segment) are handled explicitly.
pub fn contains(hull: &[Point], p: Point) -> bool {
    match hull.len() {
        0 => false,
        1 => hull[0] == p,
        2 => {
            cross(hull[0], hull[1], p) == 0
                && p.0 >= hull[0].0.min(hull[1].0)
                && p.0 <= hull[0].0.max(hull[1].0)
                && p.1 >= hull[0].1.min(hull[1].1)
                && p.1 <= hull[0].1.max(hull[1].1)
        }
        n => (0..n).all(|i| cross(hull[i], hull[(i + 1) % n], p) >= 0),
    }
}

fn as_point(code: &Code) -> Point {
    let symbols = code.symbols();
    (i64::from(symbols[0]), i64::from(symbols[1]))
}

/// Drop candidates outside the convex hull of the candidate set itself.
/// A no-op unless every code has exactly two positions.
pub fn retain_in_hull(candidates: Vec<Code>) -> Vec<Code> {
    if candidates.iter().any(|code| code.len() != 2) {
        return candidates;
    }
    let points: Vec<Point> = candidates.iter().map(as_point).collect();
    let hull = convex_hull(&points);
    candidates
        .into_iter()
        .filter(|code| contains(&hull, as_point(code)))
        .collect()
}

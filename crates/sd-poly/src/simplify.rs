use std::collections::HashSet;

use sd_core::Pixel;

/// Split and merge thresholds for polyline simplification, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproxConfig {
    /// Minimum peak height for the split phase to place a vertex.
    pub split_threshold: f32,
    /// Maximum chord distance below which the merge phase removes a vertex.
    pub merge_threshold: f32,
}

impl Default for ApproxConfig {
    fn default() -> Self {
        Self {
            split_threshold: 15.0,
            merge_threshold: 15.0,
        }
    }
}

/// Perpendicular distance from `p` to the line through `a` and `b`.
///
/// Uses the triangle-area identity; coincident anchors fall back to the
/// plain point distance.
pub fn perpendicular_distance(p: Pixel, a: Pixel, b: Pixel) -> f32 {
    let base = a.distance(b);
    if base == 0.0 {
        return p.distance(a);
    }
    let twice_area = ((b.x - a.x) as i64 * (p.y - a.y) as i64
        - (b.y - a.y) as i64 * (p.x - a.x) as i64)
        .unsigned_abs() as f32;
    twice_area / base
}

/// Recursive-split phase of polyline approximation, run on an explicit
/// work stack.
///
/// Returns the subset of `points` kept as vertices, in input order. The
/// first and last point are always kept. Each segment places a vertex at
/// its point of maximum perpendicular distance from the anchor chord,
/// provided that maximum reaches `threshold`; points at zero distance are
/// never selected, so collinear runs collapse to their endpoints no matter
/// how small the threshold. Sub-segments partition by coordinate order
/// around the accepted vertex.
pub fn approx_polyline(points: &[Pixel], threshold: f32) -> Vec<Pixel> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let first = points[0];
    let last = points[points.len() - 1];

    let mut accepted: HashSet<Pixel> = HashSet::new();
    accepted.insert(first);
    accepted.insert(last);

    let mut stack: Vec<(Vec<Pixel>, Pixel, Pixel)> = vec![(points.to_vec(), first, last)];
    while let Some((segment, start, end)) = stack.pop() {
        if segment.is_empty() || start == end {
            continue;
        }

        let mut best: Option<(Pixel, f32)> = None;
        for &p in &segment {
            if p == start || p == end {
                continue;
            }
            let height = perpendicular_distance(p, start, end);
            if height > 0.0 && best.is_none_or(|(_, top)| height > top) {
                best = Some((p, height));
            }
        }
        let Some((vertex, height)) = best else {
            continue;
        };
        if height < threshold {
            continue;
        }
        accepted.insert(vertex);

        let mut left = Vec::new();
        let mut right = Vec::new();
        for &p in &segment {
            if p < vertex {
                left.push(p);
            } else if p > vertex {
                right.push(p);
            }
        }
        stack.push((left, start, vertex));
        stack.push((right, vertex, end));
    }

    points.iter().copied().filter(|p| accepted.contains(p)).collect()
}

/// One merge pass over `vertices`.
///
/// Walks the list as consecutive triples `(p1, p2, p3)` and drops `p2`
/// whenever it sits closer than `threshold` to the chord `p1..p3`; after a
/// drop, `p1` stays the leading point of the next triple. A final
/// wrap-around check folds the last survivor in against its predecessor
/// and the first vertex. The first vertex itself is never dropped.
pub fn merge_pass(vertices: &[Pixel], threshold: f32) -> Vec<Pixel> {
    let n = vertices.len();
    if n < 3 {
        return vertices.to_vec();
    }

    let mut dropped = vec![false; n];
    // Index stack, top holds the lowest index.
    let mut stack: Vec<usize> = (0..n).rev().collect();
    while stack.len() >= 3 {
        let top = stack.len() - 1;
        let (i1, i2, i3) = (stack[top], stack[top - 1], stack[top - 2]);
        stack.truncate(top - 2);
        if perpendicular_distance(vertices[i2], vertices[i1], vertices[i3]) < threshold {
            dropped[i2] = true;
            stack.push(i3);
            stack.push(i1);
        } else {
            stack.push(i3);
            stack.push(i2);
        }
    }

    // Two survivors remain; close the loop against the first vertex.
    let (lead, trail) = (stack[1], stack[0]);
    if lead != 0
        && perpendicular_distance(vertices[trail], vertices[lead], vertices[0]) < threshold
    {
        dropped[trail] = true;
    }

    vertices
        .iter()
        .enumerate()
        .filter(|(i, _)| !dropped[*i])
        .map(|(_, &p)| p)
        .collect()
}

/// Repeats [`merge_pass`] until a pass removes nothing.
pub fn merge_vertices(vertices: &[Pixel], threshold: f32) -> Vec<Pixel> {
    let mut current = vertices.to_vec();
    loop {
        let next = merge_pass(&current, threshold);
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

/// Full reduction used on hull rings: split, then merge to a fixed point.
pub fn simplify_polyline(points: &[Pixel], cfg: &ApproxConfig) -> Vec<Pixel> {
    let split = approx_polyline(points, cfg.split_threshold);
    merge_vertices(&split, cfg.merge_threshold)
}

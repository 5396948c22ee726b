use sd_core::Pixel;

/// Sign of the turn taken at `p2` when walking `p1 -> p2 -> p3`.
///
/// In image coordinates (y grows downward) a negative value is a clockwise
/// turn, a positive value is counter-clockwise, zero is collinear.
#[inline]
pub fn orientation(p1: Pixel, p2: Pixel, p3: Pixel) -> i64 {
    (p2.y - p1.y) as i64 * (p3.x - p2.x) as i64 - (p3.y - p2.y) as i64 * (p2.x - p1.x) as i64
}

/// Monotone-chain convex hull.
///
/// Duplicates are ignored and input order does not matter. The result walks
/// the hull as a closed clockwise loop (in image coordinates) starting at
/// the lexicographically smallest point. The hull is strictly convex:
/// collinear boundary points are dropped. Fewer than three distinct points
/// come back sorted and deduplicated, unchanged otherwise.
pub fn convex_hull(points: &[Pixel]) -> Vec<Pixel> {
    let mut sorted = points.to_vec();
    sorted.sort();
    sorted.dedup();
    if sorted.len() <= 2 {
        return sorted;
    }

    let mut upper: Vec<Pixel> = Vec::new();
    for &p in &sorted {
        while upper.len() >= 2
            && orientation(upper[upper.len() - 2], upper[upper.len() - 1], p) >= 0
        {
            upper.pop();
        }
        upper.push(p);
    }

    let mut lower: Vec<Pixel> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2
            && orientation(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0
        {
            lower.pop();
        }
        lower.push(p);
    }

    // Join the chains, dropping the shared extreme points.
    upper.pop();
    lower.reverse();
    if lower.len() > 1 {
        lower.pop();
    }
    upper.extend(lower);
    upper
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(x: i32, y: i32) -> Pixel {
        Pixel::new(x, y)
    }

    /// Every input point must lie inside or on the closed hull loop.
    fn contains_all(hull: &[Pixel], points: &[Pixel]) -> bool {
        points.iter().all(|&p| {
            (0..hull.len()).all(|i| {
                let a = hull[i];
                let b = hull[(i + 1) % hull.len()];
                orientation(a, b, p) <= 0
            })
        })
    }

    #[test]
    fn filled_square_reduces_to_corners() {
        let mut block = Vec::new();
        for y in 5..25 {
            for x in 5..25 {
                block.push(px(x, y));
            }
        }
        let hull = convex_hull(&block);
        assert_eq!(hull, vec![px(5, 5), px(24, 5), px(24, 24), px(5, 24)]);
        assert!(contains_all(&hull, &block));
    }

    #[test]
    fn convex_position_points_are_their_own_hull() {
        let hexagon = [px(2, 0), px(6, 0), px(8, 3), px(6, 6), px(2, 6), px(0, 3)];
        let hull = convex_hull(&hexagon);
        assert_eq!(
            hull,
            vec![px(0, 3), px(2, 0), px(6, 0), px(8, 3), px(6, 6), px(2, 6)]
        );
    }

    #[test]
    fn interior_points_are_dropped() {
        let pts = [px(0, 0), px(10, 0), px(5, 8), px(5, 3)];
        let hull = convex_hull(&pts);
        assert_eq!(hull, vec![px(0, 0), px(10, 0), px(5, 8)]);
        assert!(contains_all(&hull, &pts));
    }

    #[test]
    fn collinear_input_collapses_to_segment() {
        let pts = [px(0, 0), px(2, 1), px(4, 2), px(6, 3)];
        assert_eq!(convex_hull(&pts), vec![px(0, 0), px(6, 3)]);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(convex_hull(&[]).is_empty());
        assert_eq!(convex_hull(&[px(3, 4)]), vec![px(3, 4)]);
        assert_eq!(
            convex_hull(&[px(7, 7), px(1, 2), px(7, 7)]),
            vec![px(1, 2), px(7, 7)]
        );
    }

    #[test]
    fn scattered_points_all_contained() {
        // Deterministic pseudo-random scatter.
        let mut state = 0x2545_f491u64;
        let mut pts = Vec::new();
        for _ in 0..200 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let x = ((state >> 33) % 97) as i32;
            let y = ((state >> 17) % 83) as i32;
            pts.push(px(x, y));
        }
        let hull = convex_hull(&pts);
        assert!(hull.len() >= 3);
        assert!(contains_all(&hull, &pts));
        // Strict convexity: no collinear triple survives on the loop.
        for i in 0..hull.len() {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            let c = hull[(i + 2) % hull.len()];
            assert!(orientation(a, b, c) < 0, "loop must turn clockwise at {b:?}");
        }
    }
}

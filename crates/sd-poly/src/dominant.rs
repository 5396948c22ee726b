use sd_core::Pixel;

/// Distance band and angle ceiling for dominant-corner selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DominantConfig {
    /// Lower edge of the admissible pair distance, in pixels.
    pub d_min: f32,
    /// Upper edge of the admissible pair distance, in pixels.
    pub d_max: f32,
    /// Widest opening angle still counted as a corner, in degrees.
    pub alpha_max_deg: f32,
}

impl Default for DominantConfig {
    fn default() -> Self {
        Self {
            d_min: 0.0,
            d_max: 1000.0,
            alpha_max_deg: 180.0,
        }
    }
}

/// Keeps the locally sharpest corners of `points`.
///
/// For every point the opening angle there is measured against all pairs of
/// other points whose distances both land inside `[d_min, d_max]`; the widest
/// such angle not exceeding `alpha_max_deg` is recorded. A point is then
/// suppressed when some in-band neighbor holds a strictly larger angle.
/// Suppression is sequential, so a corner zeroed early no longer vetoes the
/// ones after it. Survivors come back in input order; points that never
/// record an angle (fewer than three points, everything out of band) yield
/// an empty result.
pub fn select_dominant(points: &[Pixel], cfg: &DominantConfig) -> Vec<Pixel> {
    let n = points.len();
    let mut dist = vec![0.0f32; n * n];
    for i in 0..n {
        for j in 0..n {
            dist[i * n + j] = points[i].distance(points[j]);
        }
    }
    let in_band = |d: f32| d >= cfg.d_min && d <= cfg.d_max;

    let mut angles = vec![0.0f32; n];
    for i in 0..n {
        let mut widest = 0.0f32;
        for j in 0..n {
            if j == i {
                continue;
            }
            let d1 = dist[i * n + j];
            if d1 == 0.0 || !in_band(d1) {
                continue;
            }
            for k in (j + 1)..n {
                if k == i {
                    continue;
                }
                let d2 = dist[i * n + k];
                if d2 == 0.0 || !in_band(d2) {
                    continue;
                }
                let opposite = dist[j * n + k];
                let cos = ((d1 * d1 + d2 * d2 - opposite * opposite) / (2.0 * d1 * d2))
                    .clamp(-1.0, 1.0);
                let alpha = cos.acos().to_degrees();
                if alpha <= cfg.alpha_max_deg && alpha > widest {
                    widest = alpha;
                }
            }
        }
        angles[i] = widest;
    }

    for i in 0..n {
        if angles[i] == 0.0 {
            continue;
        }
        for j in 0..n {
            if j == i {
                continue;
            }
            if in_band(dist[i * n + j]) && angles[j] > angles[i] {
                angles[i] = 0.0;
                break;
            }
        }
    }

    points
        .iter()
        .zip(&angles)
        .filter(|&(_, &a)| a > 0.0)
        .map(|(&p, _)| p)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(x: i32, y: i32) -> Pixel {
        Pixel::new(x, y)
    }

    const SQUARE: [Pixel; 4] = [
        Pixel { x: 0, y: 0 },
        Pixel { x: 10, y: 0 },
        Pixel { x: 10, y: 10 },
        Pixel { x: 0, y: 10 },
    ];

    #[test]
    fn square_corners_all_survive_with_default_band() {
        let kept = select_dominant(&SQUARE, &DominantConfig::default());
        assert_eq!(kept, SQUARE.to_vec());
    }

    #[test]
    fn tight_angle_ceiling_rejects_right_angles() {
        // Band admits only adjacent corners, so the recorded angle at each
        // corner is the interior 90 degrees.
        let cfg = DominantConfig {
            d_min: 8.0,
            d_max: 12.0,
            alpha_max_deg: 80.0,
        };
        assert!(select_dominant(&SQUARE, &cfg).is_empty());

        let relaxed = DominantConfig {
            alpha_max_deg: 91.0,
            ..cfg
        };
        assert_eq!(select_dominant(&SQUARE, &relaxed), SQUARE.to_vec());
    }

    #[test]
    fn suppression_keeps_the_widest_corner() {
        // Angles: 71.6 at the origin, 9.0 at the far base, 99.5 at the apex.
        // The apex suppresses both others, then survives because their
        // angles are already zeroed when its own turn comes.
        let tri = [px(0, 0), px(20, 0), px(1, 3)];
        let kept = select_dominant(&tri, &DominantConfig::default());
        assert_eq!(kept, vec![px(1, 3)]);
    }

    #[test]
    fn too_few_points_yield_nothing() {
        let cfg = DominantConfig::default();
        assert!(select_dominant(&[], &cfg).is_empty());
        assert!(select_dominant(&[px(1, 1)], &cfg).is_empty());
        assert!(select_dominant(&[px(1, 1), px(9, 9)], &cfg).is_empty());
    }

    #[test]
    fn out_of_band_pairs_record_no_angle() {
        let cfg = DominantConfig {
            d_min: 100.0,
            d_max: 200.0,
            alpha_max_deg: 180.0,
        };
        assert!(select_dominant(&SQUARE, &cfg).is_empty());
    }
}

use std::collections::HashSet;

use sd_core::{Direction, ImageView, Pixel};

use crate::contour::{Contour, ContourId, ContourKind};

/// Tracing knobs.
///
/// `min_boundary_len` is the noise cutoff: traced loops with boundary length
/// at or below it are discarded as speckle rather than reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    pub min_boundary_len: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            min_boundary_len: 2,
        }
    }
}

#[inline]
pub fn is_foreground(img: &ImageView<'_, u8>, p: Pixel) -> bool {
    if !p.in_bounds(img.width(), img.height()) {
        return false;
    }
    img.get(p.x as usize, p.y as usize).is_some_and(|&v| v != 0)
}

/// Foreground with at least one background or out-of-image 8-neighbor.
///
/// Neighbors hanging off the image count as background, so foreground pixels
/// on the outermost rows and columns always classify as border.
pub fn is_border_pixel(img: &ImageView<'_, u8>, p: Pixel) -> bool {
    if !is_foreground(img, p) {
        return false;
    }

    let mut foreground_neighbors = 0;
    for dir in Direction::ALL {
        if is_foreground(img, dir.neighbor(p)) {
            foreground_neighbors += 1;
        }
    }
    foreground_neighbors < 8
}

/// Follows the 8-connected border starting at `seed` (Moore neighborhood
/// walk with clockwise probing).
///
/// The walk ends when it probes back into a pixel it has already traced
/// (normally the seed, once the loop closes), when a full clockwise round
/// finds no acceptable neighbor, or when it probes into `claimed`.
/// `claimed` holds boundary pixels of previously accepted contours, so one
/// blob is never reported twice. Returns an empty contour when the seed is
/// claimed, when it is not a border pixel, or when the walk stays at or
/// below the noise cutoff.
pub fn trace_border(
    img: &ImageView<'_, u8>,
    seed: Pixel,
    id: ContourId,
    claimed: &HashSet<Pixel>,
    cfg: &TraceConfig,
) -> Contour {
    let mut contour = Contour::new(id, seed, ContourKind::Outer);
    if claimed.contains(&seed) || !is_border_pixel(img, seed) {
        return contour;
    }

    let mut seen = HashSet::new();
    contour.push_boundary(seed);
    seen.insert(seed);

    let mut curr = seed;
    let mut dir = Direction::NorthWest;
    let mut attempts = 0;

    // A full clockwise round with no acceptable neighbor is a dead end.
    while attempts < 8 {
        dir = dir.clockwise();
        attempts += 1;

        let next = dir.neighbor(curr);
        if claimed.contains(&next) {
            break;
        }
        if !is_foreground(img, next) {
            continue;
        }
        if seen.contains(&next) {
            // Probing traced territory means the loop has closed.
            break;
        }
        if !is_border_pixel(img, next) {
            continue;
        }

        contour.push_boundary(next);
        seen.insert(next);
        curr = next;
        dir = dir.opposite();
        attempts = 0;
    }

    if contour.len() <= cfg.min_boundary_len {
        contour.reset();
    }
    contour
}

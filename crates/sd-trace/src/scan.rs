use std::collections::HashSet;

use sd_core::{ImageView, Pixel};

use crate::contour::Contour;
use crate::tracer::{TraceConfig, is_border_pixel, is_foreground, trace_border};

/// Counters surfaced by a full-image scan.
///
/// Callers pass a sink when they want visibility into how seeds were spent;
/// `None` keeps the scan silent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanDiagnostics {
    /// Unclaimed foreground pixels that were considered as seeds.
    pub seeds_probed: usize,
    /// Seeds rejected because they sit in a region interior.
    pub non_border_seeds: usize,
    /// Traces discarded at or below the noise cutoff.
    pub noise_rejected: usize,
    pub contours_accepted: usize,
}

/// Scans the binary image row-major and traces a contour at every unclaimed
/// foreground border pixel.
///
/// The claimed set accumulates the boundary pixels of accepted contours and
/// is shared with the tracer, which both refuses claimed seeds and halts
/// walks that probe into claimed territory. Contour ids are assigned in
/// discovery order.
pub fn scan_contours(
    img: &ImageView<'_, u8>,
    cfg: &TraceConfig,
    mut diagnostics: Option<&mut ScanDiagnostics>,
) -> Vec<Contour> {
    let mut contours = Vec::new();
    let mut claimed: HashSet<Pixel> = HashSet::new();

    for y in 0..img.height() {
        for x in 0..img.width() {
            let seed = Pixel::new(x as i32, y as i32);
            if claimed.contains(&seed) || !is_foreground(img, seed) {
                continue;
            }
            if let Some(d) = diagnostics.as_deref_mut() {
                d.seeds_probed += 1;
            }
            if !is_border_pixel(img, seed) {
                if let Some(d) = diagnostics.as_deref_mut() {
                    d.non_border_seeds += 1;
                }
                continue;
            }

            let contour = trace_border(img, seed, contours.len(), &claimed, cfg);
            if contour.is_empty() {
                if let Some(d) = diagnostics.as_deref_mut() {
                    d.noise_rejected += 1;
                }
                continue;
            }

            claimed.extend(contour.boundary.iter().copied());
            if let Some(d) = diagnostics.as_deref_mut() {
                d.contours_accepted += 1;
            }
            contours.push(contour);
        }
    }

    tracing::debug!(
        contours = contours.len(),
        claimed_pixels = claimed.len(),
        "contour scan finished"
    );

    contours
}

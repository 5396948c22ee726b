//! Border-following contour extraction from binary rasters.
//!
//! Given a 0/255 image, the scanner walks row-major and starts a
//! Moore-neighbor border trace at every unclaimed foreground border pixel:
//! - A walk accepts only border pixels, so region interiors are never
//!   entered.
//! - A walk stops on closing back into its own traced pixels, on a dead end
//!   (a full clockwise round with no acceptable neighbor), or on probing
//!   into a pixel claimed by an earlier contour.
//! - Loops at or below the noise cutoff are dropped, not reported.
//!
//! Accepted boundaries claim their pixels in a hash set shared across the
//! scan, so the same blob never produces two contours.

mod contour;
mod scan;
mod tracer;

pub use contour::{Contour, ContourId, ContourKind};
pub use scan::{ScanDiagnostics, scan_contours};
pub use tracer::{TraceConfig, is_border_pixel, is_foreground, trace_border};

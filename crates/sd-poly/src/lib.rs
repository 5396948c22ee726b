//! Point-set reduction for contour geometry.
//!
//! Three independent reducers over pixel sets:
//! - monotone-chain convex hull, strictly convex with collinear points
//!   dropped ([`convex_hull`])
//! - split/merge polyline simplification: peak splitting above a threshold,
//!   then near-collinear merging to a fixed point ([`simplify_polyline`])
//! - dominant-corner selection by pairwise distances and opening angles
//!   ([`select_dominant`])
//!
//! All reducers take borrowed slices and return owned vectors in input
//! (respectively hull loop) order.

mod dominant;
mod hull;
mod simplify;

pub use dominant::{DominantConfig, select_dominant};
pub use hull::{convex_hull, orientation};
pub use simplify::{
    ApproxConfig, approx_polyline, merge_pass, merge_vertices, perpendicular_distance,
    simplify_polyline,
};

//! Umbrella crate for the shape detection workspace.
//!
//! Re-exports the foundational crates (image containers, filters, binary
//! morphology, contour tracing, polyline reduction) and layers the staged
//! detection pipeline plus vertex-count classification on top.
//!
//! The stages, each optional and always applied in this order:
//!
//! 1. **Erode** - 3x3 binary erosion to strip speckle.
//! 2. **Gaussian** - separable smoothing before gradients.
//! 3. **Sobel** - 3x3 gradient magnitude.
//! 4. **Threshold** - inclusive binarization.
//! 5. **Extract** - border tracing, then hull and split/merge reduction to
//!    polygon vertices.
//!
//! # Public API
//! - [`PipelineBuilder`] and [`Pipeline`] as the primary entry points
//! - [`extract_contours`] to run extraction on an already binarized view
//! - [`classify_contours`] to check contours against expected vertex counts
//!
//! The individual filters and reducers stay available through the re-exports
//! for callers composing their own chains.

pub mod classify;
pub mod pipeline;

pub use sd_core::*;
pub use sd_filter::*;
pub use sd_morph::*;
pub use sd_poly::*;
pub use sd_trace::*;

pub use classify::{ClassifyError, ClassifyReport, classify_contours, shape_name};
pub use pipeline::{ExtractConfig, Pipeline, PipelineBuilder, PipelineOutput, extract_contours};

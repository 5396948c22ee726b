//! Grayscale preprocessing filters feeding the shape-detection pipeline.
//!
//! - Separable Gaussian smoothing with clamped borders
//! - 3x3 Sobel gradient magnitude
//! - Fixed-cutoff binarization
//!
//! Every filter borrows its input as an `ImageView<u8>` and allocates a fresh
//! output image per call; nothing is cached across invocations.

pub mod gaussian;
pub mod sobel;
pub mod threshold;

pub use gaussian::{GaussianConfig, GaussianKernel1D, gaussian_blur_u8};
pub use sobel::sobel3x3_magnitude_u8;
pub use threshold::{DEFAULT_THRESHOLD, threshold_binary_u8};

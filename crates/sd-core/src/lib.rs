//! Foundational primitives for binary-image shape detection.
//!
//! ## Coordinate Model
//! Pixels are signed integer (x, y) pairs, y growing down. `valid` means both
//! coordinates are non-negative; `in_bounds` additionally requires x < width
//! and y < height. Total order over pixels is lexicographic (x, then y).
//!
//! ## Image Views and Stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`.
//! This allows borrowed views over padded buffers.
//!
//! ## Directions
//! The 8-connected compass is indexed clockwise from north; stepping is
//! array-index arithmetic mod 8 throughout, never signed remainder.

mod dir;
mod error;
mod image;
mod line;
mod pixel;

pub use dir::Direction;
pub use error::Error;
pub use image::{Image, ImageView, to_f32};
pub use line::line_pixels;
pub use pixel::Pixel;

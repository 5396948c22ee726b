//! Minimal binary morphology helpers.
//!
//! Pixels are treated as binary with threshold `> 0`.
//! Outputs are `0` or `255` in `u8`.

use sd_core::{Image, ImageView};

/// 3x3 erosion: a pixel survives only when its full 3x3 neighborhood is
/// foreground. Windows hanging off the image edge count as background, so
/// the one-pixel frame is always cleared.
pub fn erode3x3_binary_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    let width = src.width();
    let height = src.height();
    let mut out = Image::new_fill(width, height, 0u8);
    if width < 3 || height < 3 {
        return out;
    }

    for y in 1..height - 1 {
        let rows = [src.row(y - 1), src.row(y), src.row(y + 1)];
        let dst = out.row_mut(y);
        for x in 1..width - 1 {
            let all_set = rows
                .iter()
                .all(|row| row[x - 1] != 0 && row[x] != 0 && row[x + 1] != 0);
            if all_set {
                dst[x] = 255;
            }
        }
    }

    out
}

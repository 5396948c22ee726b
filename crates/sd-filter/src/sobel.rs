use sd_core::{Image, ImageView};

/// 3x3 Sobel gradient magnitude.
///
/// Output is `sqrt(gx^2 + gy^2)` rounded and clamped to 255. Border pixels,
/// where the 3x3 window does not fit, are 0.
pub fn sobel3x3_magnitude_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    let width = src.width();
    let height = src.height();
    let mut out = Image::new_fill(width, height, 0u8);
    if width < 3 || height < 3 {
        return out;
    }

    for y in 1..height - 1 {
        let above = src.row(y - 1);
        let mid = src.row(y);
        let below = src.row(y + 1);
        let dst = out.row_mut(y);
        for x in 1..width - 1 {
            let (l, c, r) = (x - 1, x, x + 1);
            let gx = (above[r] as i32 - above[l] as i32)
                + 2 * (mid[r] as i32 - mid[l] as i32)
                + (below[r] as i32 - below[l] as i32);
            let gy = (below[l] as i32 - above[l] as i32)
                + 2 * (below[c] as i32 - above[c] as i32)
                + (below[r] as i32 - above[r] as i32);
            let mag = ((gx * gx + gy * gy) as f32).sqrt().round();
            dst[x] = mag.min(255.0) as u8;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::sobel3x3_magnitude_u8;
    use sd_core::Image;

    #[test]
    fn flat_image_has_zero_gradient() {
        let img = Image::new_fill(6, 6, 200u8);
        let out = sobel3x3_magnitude_u8(&img.as_view());
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn vertical_step_edge() {
        let mut img = Image::new_fill(6, 5, 0u8);
        for y in 0..5 {
            for x in 3..6 {
                *img.get_mut(x, y).expect("in bounds") = 255;
            }
        }

        let out = sobel3x3_magnitude_u8(&img.as_view());
        // Columns adjacent to the step saturate; far columns stay flat.
        assert_eq!(out.get(2, 2), Some(&255));
        assert_eq!(out.get(3, 2), Some(&255));
        assert_eq!(out.get(1, 2), Some(&0));
        assert_eq!(out.get(4, 2), Some(&0));
        // Window never fits on the frame.
        assert!(out.row(0).iter().all(|&v| v == 0));
        assert!(out.row(4).iter().all(|&v| v == 0));
        assert_eq!(out.get(0, 2), Some(&0));
        assert_eq!(out.get(5, 2), Some(&0));
    }

    #[test]
    fn tiny_image_is_all_zero() {
        let img = Image::new_fill(2, 5, 255u8);
        let out = sobel3x3_magnitude_u8(&img.as_view());
        assert!(out.data().iter().all(|&v| v == 0));
    }
}

use sd_core::{Image, ImageView};

/// Default binarization cutoff for camera-ish grayscale input.
pub const DEFAULT_THRESHOLD: u8 = 60;

/// Binarize: values at or above `thresh` become 255, everything else 0.
pub fn threshold_binary_u8(src: &ImageView<'_, u8>, thresh: u8) -> Image<u8> {
    let mut out = Image::new_fill(src.width(), src.height(), 0u8);
    for y in 0..src.height() {
        for (d, &v) in out.row_mut(y).iter_mut().zip(src.row(y)) {
            *d = if v >= thresh { 255 } else { 0 };
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_THRESHOLD, threshold_binary_u8};
    use sd_core::Image;

    #[test]
    fn cutoff_is_inclusive() {
        let img = Image::from_vec(4, 1, vec![59u8, 60, 61, 0]).expect("valid image");
        let out = threshold_binary_u8(&img.as_view(), DEFAULT_THRESHOLD);
        assert_eq!(out.data(), &[0, 255, 255, 0]);
    }

    #[test]
    fn zero_threshold_lights_everything() {
        let img = Image::from_vec(3, 1, vec![0u8, 1, 254]).expect("valid image");
        let out = threshold_binary_u8(&img.as_view(), 0);
        assert_eq!(out.data(), &[255, 255, 255]);
    }
}

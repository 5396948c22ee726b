use crate::Error;

/// Owned single-channel raster, row-major and contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }
}

/// Borrowed single-channel raster. `stride` is in elements and may exceed
/// `width` for views over padded buffers.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::InvalidStride);
        }

        let min_len = stride.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y * self.stride + x;
        self.data.get(idx)
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width
    }

    pub fn as_contiguous_slice(&self) -> Option<&'a [T]> {
        if !self.is_contiguous() {
            return None;
        }
        let len = self.width * self.height;
        self.data.get(0..len)
    }
}

pub fn to_f32(img: &ImageView<'_, u8>) -> Image<f32> {
    let mut out = Vec::with_capacity(img.width() * img.height());
    for y in 0..img.height() {
        for &px in img.row(y) {
            out.push(px as f32);
        }
    }

    Image {
        width: img.width(),
        height: img.height(),
        data: out,
    }
}

#[cfg(test)]
mod tests {
    use super::{Image, ImageView, to_f32};
    use crate::Error;

    #[test]
    fn from_vec_checks_len() {
        assert!(Image::from_vec(3, 2, vec![0u8; 6]).is_ok());
        assert_eq!(
            Image::from_vec(3, 2, vec![0u8; 5]),
            Err(Error::SizeMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn view_indexing_with_stride() {
        let data = vec![1u8, 2, 3, 99, 4, 5, 6, 88];
        let view = ImageView::from_slice(3, 2, 4, &data).expect("valid view");

        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.get(0, 1), Some(&4));
        assert_eq!(view.get(3, 1), None);
        assert!(!view.is_contiguous());
        assert!(view.as_contiguous_slice().is_none());
    }

    #[test]
    fn stride_below_width_rejected() {
        let data = vec![0u8; 8];
        assert!(matches!(
            ImageView::from_slice(4, 2, 3, &data),
            Err(Error::InvalidStride)
        ));
    }

    #[test]
    fn row_mut_writes_through() {
        let mut img = Image::new_fill(3, 2, 0u8);
        img.row_mut(1)[2] = 7;
        assert_eq!(img.get(2, 1), Some(&7));
        assert_eq!(img.get(2, 0), Some(&0));
        *img.get_mut(0, 0).expect("in bounds") = 5;
        assert_eq!(img.data(), &[5, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn convert_to_f32() {
        let img = Image::from_vec(2, 2, vec![1u8, 2, 3, 4]).expect("valid image");
        let out = to_f32(&img.as_view());
        assert_eq!(out.data(), &[1.0, 2.0, 3.0, 4.0]);
    }
}

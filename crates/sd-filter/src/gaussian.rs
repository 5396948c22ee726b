use sd_core::{Image, ImageView, to_f32};

/// Symmetric 1D Gaussian tap set.
///
/// Conventions:
/// - `radius = ksize / 2`, so an even `ksize` rounds up to the next odd
///   effective length `2 * radius + 1`.
/// - `weights` is normalized such that `sum(weights) ~= 1`.
#[derive(Debug, Clone)]
pub struct GaussianKernel1D {
    pub sigma: f32,
    pub radius: usize,
    pub weights: Vec<f32>,
}

impl GaussianKernel1D {
    pub fn new(ksize: usize, sigma: f32) -> Self {
        assert!(
            sigma.is_finite() && sigma > 0.0,
            "sigma must be > 0 and finite"
        );
        assert!(ksize >= 1, "kernel size must be >= 1");

        let radius = ksize / 2;
        let len = 2 * radius + 1;

        let sigma2 = sigma * sigma;
        let mut weights = vec![0.0f32; len];
        for (i, w) in weights.iter_mut().enumerate() {
            let x = i as isize - radius as isize;
            let xf = x as f32;
            *w = (-(xf * xf) / (2.0 * sigma2)).exp();
        }

        let sum: f32 = weights.iter().sum();
        for w in &mut weights {
            *w /= sum;
        }

        Self {
            sigma,
            radius,
            weights,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaussianConfig {
    pub ksize: usize,
    pub sigma: f32,
}

impl Default for GaussianConfig {
    fn default() -> Self {
        Self {
            ksize: 5,
            sigma: 2.0,
        }
    }
}

/// Separable Gaussian blur over a grayscale image; borders clamp.
pub fn gaussian_blur_u8(src: &ImageView<'_, u8>, cfg: &GaussianConfig) -> Image<u8> {
    let width = src.width();
    let height = src.height();
    if width == 0 || height == 0 {
        return Image::new_fill(width, height, 0);
    }

    let kernel = GaussianKernel1D::new(cfg.ksize, cfg.sigma);
    let input = to_f32(src);

    let mut horiz = Image::new_fill(width, height, 0.0f32);
    for y in 0..height {
        convolve_clamp(input.row(y), &kernel.weights, kernel.radius, horiz.row_mut(y));
    }

    let mut column = vec![0.0f32; height];
    let mut smoothed = vec![0.0f32; height];
    let mut out = Image::new_fill(width, height, 0u8);
    for x in 0..width {
        for (y, c) in column.iter_mut().enumerate() {
            *c = horiz.row(y)[x];
        }
        convolve_clamp(&column, &kernel.weights, kernel.radius, &mut smoothed);
        for (y, &s) in smoothed.iter().enumerate() {
            out.row_mut(y)[x] = s.round().clamp(0.0, 255.0) as u8;
        }
    }

    out
}

fn convolve_clamp(signal: &[f32], kernel: &[f32], radius: usize, out: &mut [f32]) {
    let n = signal.len();
    for (i, out_i) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &kv) in kernel.iter().enumerate() {
            let idx = clamp_index(i as isize + radius as isize - k as isize, n);
            acc += signal[idx] * kv;
        }
        *out_i = acc;
    }
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    if i < 0 { 0 } else { (i as usize).min(len - 1) }
}

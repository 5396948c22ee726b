use sd_core::{Image, ImageView};
use sd_filter::{GaussianConfig, gaussian_blur_u8, sobel3x3_magnitude_u8, threshold_binary_u8};
use sd_morph::erode3x3_binary_u8;
use sd_poly::{ApproxConfig, convex_hull, simplify_polyline};
use sd_trace::{Contour, TraceConfig, scan_contours};

/// Settings for the contour extraction stage: how boundaries are traced and
/// how the traced rings are reduced to vertices.
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    pub trace: TraceConfig,
    pub approx: ApproxConfig,
}

/// Traces all contours in a binary image and reduces each boundary to its
/// polygon vertices (convex hull, then split/merge simplification). The
/// vertices land in each contour's `approx` field.
pub fn extract_contours(img: &ImageView<'_, u8>, cfg: &ExtractConfig) -> Vec<Contour> {
    let mut contours = scan_contours(img, &cfg.trace, None);
    for contour in &mut contours {
        let hull = convex_hull(&contour.boundary);
        contour.approx = simplify_polyline(&hull, &cfg.approx);
    }
    tracing::info!("{} contours extracted", contours.len());
    contours
}

/// Builder for the staged detection pipeline.
///
/// Each method enables one optional stage. Stages always execute in the
/// fixed order erode, gaussian, sobel, threshold, extract, no matter in
/// which order the methods were called.
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    erode: bool,
    gaussian: Option<GaussianConfig>,
    sobel: bool,
    threshold: Option<u8>,
    extract: Option<ExtractConfig>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable a single 3x3 binary erosion.
    pub fn erode(mut self) -> Self {
        self.erode = true;
        self
    }

    /// Enable Gaussian smoothing.
    pub fn gaussian(mut self, cfg: GaussianConfig) -> Self {
        self.gaussian = Some(cfg);
        self
    }

    /// Enable the 3x3 Sobel gradient magnitude.
    pub fn sobel(mut self) -> Self {
        self.sobel = true;
        self
    }

    /// Enable binarization at `thresh` (inclusive).
    pub fn threshold(mut self, thresh: u8) -> Self {
        self.threshold = Some(thresh);
        self
    }

    /// Enable contour extraction on the final image.
    pub fn extract(mut self, cfg: ExtractConfig) -> Self {
        self.extract = Some(cfg);
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline { stages: self }
    }
}

/// Output of a pipeline run: the image after all configured filter stages,
/// plus the extracted contours (empty unless the extract stage is enabled).
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub image: Image<u8>,
    pub contours: Vec<Contour>,
}

/// A configured stage chain, reusable across images.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: PipelineBuilder,
}

impl Pipeline {
    pub fn run(&self, img: &ImageView<'_, u8>) -> PipelineOutput {
        let mut current = copy_view(img);
        if self.stages.erode {
            current = erode3x3_binary_u8(&current.as_view());
        }
        if let Some(gauss) = &self.stages.gaussian {
            current = gaussian_blur_u8(&current.as_view(), gauss);
        }
        if self.stages.sobel {
            current = sobel3x3_magnitude_u8(&current.as_view());
        }
        if let Some(thresh) = self.stages.threshold {
            current = threshold_binary_u8(&current.as_view(), thresh);
        }

        let contours = match &self.stages.extract {
            Some(cfg) => extract_contours(&current.as_view(), cfg),
            None => Vec::new(),
        };

        PipelineOutput {
            image: current,
            contours,
        }
    }
}

/// Owned copy of a view, collapsing any stride padding.
fn copy_view(img: &ImageView<'_, u8>) -> Image<u8> {
    let mut out = Image::new_fill(img.width(), img.height(), 0u8);
    for y in 0..img.height() {
        out.row_mut(y).copy_from_slice(img.row(y));
    }
    out
}

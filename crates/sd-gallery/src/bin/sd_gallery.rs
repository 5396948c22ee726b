use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::{GrayImage, Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use shape_detect::{
    ApproxConfig, Contour, ContourKind, ExtractConfig, GaussianConfig, Image, PipelineBuilder,
    PipelineOutput, ScanDiagnostics, TraceConfig, classify_contours, line_pixels, scan_contours,
    shape_name, threshold_binary_u8,
};

#[derive(Parser, Debug)]
#[command(name = "sd_gallery")]
#[command(about = "Run shape detection algorithms on image fixtures")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Binarize the input and trace raw contour boundaries.
    #[command(name = "trace")]
    Trace(TraceArgs),
    /// Full pipeline: optional filters, extraction, vertex reduction.
    #[command(name = "detect")]
    Detect(DetectArgs),
    /// Run the detector over a file or directory and check the vertex
    /// counts against an expected set of shapes.
    #[command(name = "classify")]
    Classify(ClassifyArgs),
    /// Render a synthetic shape card to use as a fixture.
    #[command(name = "synth")]
    Synth(SynthArgs),
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct TraceArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value_t = 60)]
    threshold: u8,
    /// Contours at or below this boundary length are dropped as noise.
    #[arg(long, default_value_t = 2)]
    min_boundary_len: usize,
}

#[derive(Args, Debug, Clone)]
struct StageArgs {
    /// Run a 3x3 binary erosion before anything else.
    #[arg(long)]
    erode: bool,
    /// Smooth with a Gaussian before the gradient.
    #[arg(long)]
    gaussian: bool,
    #[arg(long, default_value_t = 5)]
    ksize: usize,
    #[arg(long, default_value_t = 2.0)]
    sigma: f32,
    /// Take the 3x3 Sobel gradient magnitude.
    #[arg(long)]
    sobel: bool,
    #[arg(long, default_value_t = 60)]
    threshold: u8,
    #[arg(long, default_value_t = 2)]
    min_boundary_len: usize,
    #[arg(long, default_value_t = 15.0)]
    split: f32,
    #[arg(long, default_value_t = 15.0)]
    merge: f32,
}

#[derive(Args, Debug, Clone)]
struct DetectArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[command(flatten)]
    stages: StageArgs,
}

#[derive(Args, Debug, Clone)]
struct ClassifyArgs {
    /// Image file, or a directory whose images are classified one by one.
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, default_value = "out")]
    out: PathBuf,
    #[command(flatten)]
    stages: StageArgs,
    /// Expected vertex count; repeat the flag once per expected shape.
    #[arg(long, required = true)]
    expect: Vec<usize>,
}

#[derive(Args, Debug, Clone)]
struct SynthArgs {
    #[arg(long, default_value = "out")]
    out: PathBuf,
    #[arg(long, default_value_t = 320)]
    width: usize,
    #[arg(long, default_value_t = 200)]
    height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContourDto {
    id: usize,
    kind: String,
    start: [i32; 2],
    boundary_len: usize,
    vertex_count: usize,
    shape: String,
    vertices: Vec<[i32; 2]>,
    boundary: Vec<[i32; 2]>,
}

#[derive(Debug, Clone, Serialize)]
struct MetaTrace {
    threshold: u8,
    min_boundary_len: usize,
    seeds_probed: usize,
    non_border_seeds: usize,
    noise_rejected: usize,
    contours_accepted: usize,
}

#[derive(Debug, Clone, Serialize)]
struct MetaDetect {
    stages: Vec<&'static str>,
    threshold: u8,
    min_boundary_len: usize,
    split: f32,
    merge: f32,
    contour_count: usize,
}

#[derive(Debug, Clone, Serialize)]
struct ClassifyResult {
    expected: Vec<usize>,
    matched: usize,
    total: usize,
    images: Vec<ImageVerdict>,
}

#[derive(Debug, Clone, Serialize)]
struct ImageVerdict {
    input: String,
    matched: bool,
    vertex_counts: Vec<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Trace(args) => run_trace(args),
        Command::Detect(args) => run_detect(args),
        Command::Classify(args) => run_classify(args),
        Command::Synth(args) => run_synth(args),
    }
}

fn run_trace(args: TraceArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "trace")?;
    let img = load_input_u8(&args.common.input)?;
    tracing::info!("loaded {}: {}x{}", args.common.input.display(), img.width(), img.height());

    let binary = threshold_binary_u8(&img.as_view(), args.threshold);
    let cfg = TraceConfig {
        min_boundary_len: args.min_boundary_len,
    };
    let mut diag = ScanDiagnostics::default();
    let contours = scan_contours(&binary.as_view(), &cfg, Some(&mut diag));
    tracing::info!("{} contours traced", contours.len());

    write_json(
        case_dir.join("contours.json"),
        &contours.iter().map(contour_dto).collect::<Vec<_>>(),
    )?;
    write_json(
        case_dir.join("meta.json"),
        &MetaTrace {
            threshold: args.threshold,
            min_boundary_len: args.min_boundary_len,
            seeds_probed: diag.seeds_probed,
            non_border_seeds: diag.non_border_seeds,
            noise_rejected: diag.noise_rejected,
            contours_accepted: diag.contours_accepted,
        },
    )?;

    let overlay = render_overlay(&img, &contours);
    overlay
        .save(case_dir.join("overlay.png"))
        .context("writing trace overlay.png")?;

    Ok(())
}

fn run_detect(args: DetectArgs) -> Result<()> {
    let case_dir = prepare_case(&args.common, "detect")?;
    let (out, stages) = detect_contours(&args.common.input, &args.stages)?;
    tracing::info!("{} contours detected", out.contours.len());

    save_u8_image(case_dir.join("processed.png"), &out.image)?;
    write_json(
        case_dir.join("contours.json"),
        &out.contours.iter().map(contour_dto).collect::<Vec<_>>(),
    )?;
    write_json(
        case_dir.join("meta.json"),
        &MetaDetect {
            stages,
            threshold: args.stages.threshold,
            min_boundary_len: args.stages.min_boundary_len,
            split: args.stages.split,
            merge: args.stages.merge,
            contour_count: out.contours.len(),
        },
    )?;

    let input = load_input_u8(&args.common.input)?;
    let overlay = render_overlay(&input, &out.contours);
    overlay
        .save(case_dir.join("overlay.png"))
        .context("writing detect overlay.png")?;

    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    let inputs = collect_inputs(&args.input)?;
    let case_dir = args.out.join("classify");
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    let mut images = Vec::new();
    let mut matched = 0usize;
    for path in &inputs {
        let (out, _) = detect_contours(path, &args.stages)?;
        for contour in &out.contours {
            tracing::info!(
                "contour {}: {} ({} vertices)",
                contour.id,
                shape_name(contour.vertex_count()),
                contour.vertex_count()
            );
        }

        let verdict = classify_contours(&out.contours, &args.expect);
        match &verdict {
            Ok(report) => {
                matched += 1;
                tracing::info!("{}: match, {} extra contours", path.display(), report.extras.len());
            }
            Err(err) => tracing::warn!("{}: mismatch, {}", path.display(), err),
        }
        images.push(ImageVerdict {
            input: path.display().to_string(),
            matched: verdict.is_ok(),
            vertex_counts: out.contours.iter().map(Contour::vertex_count).collect(),
        });
    }
    tracing::info!("{}/{} images matched", matched, inputs.len());

    write_json(
        case_dir.join("result.json"),
        &ClassifyResult {
            expected: args.expect.clone(),
            matched,
            total: inputs.len(),
            images,
        },
    )?;

    if matched != inputs.len() {
        bail!("{}/{} images matched the expected shapes", matched, inputs.len());
    }
    Ok(())
}

fn run_synth(args: SynthArgs) -> Result<()> {
    if args.width < 320 || args.height < 200 {
        bail!(
            "synth card needs at least 320x200, got {}x{}.",
            args.width,
            args.height
        );
    }

    let img = render_synth_card(args.width, args.height);
    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;
    let path = args.out.join("synth.png");
    save_u8_image(path.clone(), &img)?;
    tracing::info!("synthetic card written to {}", path.display());

    Ok(())
}

/// Runs the configured pipeline stages on the input image.
fn detect_contours(input: &Path, args: &StageArgs) -> Result<(PipelineOutput, Vec<&'static str>)> {
    let img = load_input_u8(input)?;
    tracing::info!("loaded {}: {}x{}", input.display(), img.width(), img.height());

    let mut stages = Vec::new();
    let mut builder = PipelineBuilder::new();
    if args.erode {
        builder = builder.erode();
        stages.push("erode");
    }
    if args.gaussian {
        builder = builder.gaussian(GaussianConfig {
            ksize: args.ksize,
            sigma: args.sigma,
        });
        stages.push("gaussian");
    }
    if args.sobel {
        builder = builder.sobel();
        stages.push("sobel");
    }
    builder = builder.threshold(args.threshold);
    stages.push("threshold");
    builder = builder.extract(ExtractConfig {
        trace: TraceConfig {
            min_boundary_len: args.min_boundary_len,
        },
        approx: ApproxConfig {
            split_threshold: args.split,
            merge_threshold: args.merge,
        },
    });
    stages.push("extract");

    let pipeline = builder.build();
    Ok((pipeline.run(&img.as_view()), stages))
}

/// A single image file, or every image directly inside a directory.
fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("input path does not exist: {}", path.display());
    }

    let mut inputs = Vec::new();
    let entries =
        fs::read_dir(path).with_context(|| format!("reading directory {}", path.display()))?;
    for entry in entries {
        let p = entry
            .with_context(|| format!("reading directory {}", path.display()))?
            .path();
        let is_image = p
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "png" | "bmp" | "jpg" | "jpeg"));
        if p.is_file() && is_image {
            inputs.push(p);
        }
    }
    inputs.sort();
    if inputs.is_empty() {
        bail!("no image files found under {}", path.display());
    }
    Ok(inputs)
}

fn prepare_case(common: &CommonArgs, case_name: &str) -> Result<PathBuf> {
    ensure_file_exists(&common.input, "input")?;

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    fs::copy(&common.input, case_dir.join("input.png")).with_context(|| {
        format!(
            "copying input {} -> {}",
            common.input.display(),
            case_dir.join("input.png").display()
        )
    })?;

    Ok(case_dir)
}

fn load_input_u8(path: &Path) -> Result<Image<u8>> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();
    let data = luma.into_raw();

    Image::from_vec(w as usize, h as usize, data)
        .with_context(|| format!("constructing image from {}", path.display()))
}

fn save_u8_image(path: PathBuf, img: &Image<u8>) -> Result<()> {
    let gray = GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .context("constructing GrayImage from raw bytes")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn contour_dto(contour: &Contour) -> ContourDto {
    ContourDto {
        id: contour.id,
        kind: kind_name(contour.kind).to_string(),
        start: [contour.start.x, contour.start.y],
        boundary_len: contour.len(),
        vertex_count: contour.vertex_count(),
        shape: shape_name(contour.vertex_count()).to_string(),
        vertices: contour.approx.iter().map(|p| [p.x, p.y]).collect(),
        boundary: contour.boundary.iter().map(|p| [p.x, p.y]).collect(),
    }
}

fn kind_name(kind: ContourKind) -> &'static str {
    match kind {
        ContourKind::Outer => "outer",
        ContourKind::Hole => "hole",
    }
}

/// Boundary pixels in green, the reduced polygon in red with dots at
/// its vertices.
fn render_overlay(input: &Image<u8>, contours: &[Contour]) -> RgbImage {
    let gray = GrayImage::from_raw(
        input.width() as u32,
        input.height() as u32,
        input.data().to_vec(),
    )
    .expect("dimensions and data length must match");
    let mut rgb = image::DynamicImage::ImageLuma8(gray).to_rgb8();

    for contour in contours {
        for p in &contour.boundary {
            put_px(&mut rgb, p.x, p.y, Rgb([64, 200, 64]));
        }
        if contour.approx.len() >= 2 {
            for (i, &v) in contour.approx.iter().enumerate() {
                let next = contour.approx[(i + 1) % contour.approx.len()];
                for p in line_pixels(v, next) {
                    put_px(&mut rgb, p.x, p.y, Rgb([255, 64, 64]));
                }
            }
        }
        for v in &contour.approx {
            draw_dot(&mut rgb, v.x, v.y, Rgb([255, 64, 64]));
        }
    }

    rgb
}

fn put_px(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (ux, uy) = (x as u32, y as u32);
    if ux >= img.width() || uy >= img.height() {
        return;
    }
    img.put_pixel(ux, uy, color);
}

fn draw_dot(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            put_px(img, x + dx, y + dy, color);
        }
    }
}

/// Square, circle, 45-degree right triangle and a lone speck that the
/// tracer's noise cutoff should reject.
fn render_synth_card(width: usize, height: usize) -> Image<u8> {
    let mut img = Image::new_fill(width, height, 0u8);

    for y in 30..110 {
        img.row_mut(y)[30..110].fill(220);
    }

    let (cx, cy, r) = (260i32, 70i32, 35i32);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r * r {
                img.row_mut(y as usize)[x as usize] = 220;
            }
        }
    }

    for y in 120..=190usize {
        let right = 140 + (y - 120);
        img.row_mut(y)[140..=right].fill(220);
    }

    img.row_mut(10)[5] = 220;

    img
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}

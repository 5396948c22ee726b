use shape_detect::{
    ClassifyError, ExtractConfig, Image, Pixel, PipelineBuilder, classify_contours,
};

/// A 50x50 square next to a right triangle whose hypotenuse runs at exactly
/// 45 degrees, so its staircase pixels are collinear with the corners.
fn scene() -> Image<u8> {
    let mut img = Image::new_fill(200, 120, 0u8);
    for y in 20..70 {
        img.row_mut(y)[20..70].fill(255);
    }
    for y in 20..=90usize {
        let right = 120 + (y - 20);
        img.row_mut(y)[120..=right].fill(255);
    }
    img
}

fn detect(img: &Image<u8>) -> Vec<shape_detect::Contour> {
    let pipeline = PipelineBuilder::new()
        .threshold(60)
        .extract(ExtractConfig::default())
        .build();
    pipeline.run(&img.as_view()).contours
}

#[test]
fn scene_yields_square_then_triangle() -> anyhow::Result<()> {
    let contours = detect(&scene());
    assert_eq!(contours.len(), 2);

    assert_eq!(
        contours[0].approx,
        vec![
            Pixel::new(20, 20),
            Pixel::new(69, 20),
            Pixel::new(69, 69),
            Pixel::new(20, 69),
        ]
    );
    assert_eq!(
        contours[1].approx,
        vec![
            Pixel::new(120, 20),
            Pixel::new(190, 90),
            Pixel::new(120, 90),
        ]
    );

    let report = classify_contours(&contours, &[4, 3])?;
    assert_eq!(report.matched, vec![(0, 4), (1, 3)]);
    assert!(report.extras.is_empty());
    Ok(())
}

#[test]
fn unmatched_expectation_fails() {
    let contours = detect(&scene());
    let err = classify_contours(&contours, &[3, 3]).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::MissingShape {
            vertices: 3,
            missing: 1
        }
    );
}

#[test]
fn surplus_contours_stay_out_of_the_error_path() {
    let contours = detect(&scene());
    let report = classify_contours(&contours, &[3]).unwrap();
    assert_eq!(report.matched, vec![(1, 3)]);
    assert_eq!(report.extras, vec![0]);
}

#[test]
fn one_pixel_strip_classifies_as_degenerate() {
    let mut img = Image::new_fill(50, 50, 0u8);
    img.row_mut(30)[10..40].fill(255);

    let contours = detect(&img);
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].vertex_count(), 2);

    let err = classify_contours(&contours, &[]).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::DegenerateContour {
            id: 0,
            vertices: 2
        }
    );
}

use crate::Pixel;

/// Rasterizes the segment `a..=b` with a DDA walk.
///
/// Steps along the longer axis so vertical and horizontal segments are
/// handled uniformly; both endpoints are included. `a == b` yields a single
/// pixel.
pub fn line_pixels(a: Pixel, b: Pixel) -> Vec<Pixel> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        return vec![a];
    }

    let x_inc = dx as f32 / steps as f32;
    let y_inc = dy as f32 / steps as f32;

    let mut out = Vec::with_capacity(steps as usize + 1);
    let mut x = a.x as f32;
    let mut y = a.y as f32;
    for _ in 0..=steps {
        out.push(Pixel::new(x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }
    out
}

use core::ops::{Add, Sub};

/// Integer pixel coordinate.
///
/// Ordering is lexicographic: `x` first, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Both coordinates non-negative.
    pub fn valid(self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    /// Valid and strictly inside a `width` x `height` raster.
    pub fn in_bounds(self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }

    pub fn distance(self, other: Self) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Pixel {
    type Output = Pixel;

    fn add(self, rhs: Pixel) -> Self::Output {
        Pixel {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Pixel {
    type Output = Pixel;

    fn sub(self, rhs: Pixel) -> Self::Output {
        Pixel {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

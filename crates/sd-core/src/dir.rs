use crate::Pixel;

/// Neighbor offsets in clockwise order starting from north, y growing down.
const DX: [i32; 8] = [0, 1, 1, 1, 0, -1, -1, -1];
const DY: [i32; 8] = [-1, -1, 0, 1, 1, 1, 0, -1];

/// 8-connected compass direction.
///
/// All stepping operations are index arithmetic mod 8, so wraparound never
/// goes through signed remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All directions in clockwise scan order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    #[inline]
    pub fn from_index(idx: u8) -> Self {
        Self::ALL[(idx & 7) as usize]
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    #[inline]
    pub fn counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 7)
    }

    #[inline]
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    #[inline]
    pub fn offset(self) -> (i32, i32) {
        let i = self.index() as usize;
        (DX[i], DY[i])
    }

    /// The neighbor of `p` one step in this direction.
    #[inline]
    pub fn neighbor(self, p: Pixel) -> Pixel {
        let (dx, dy) = self.offset();
        Pixel::new(p.x + dx, p.y + dy)
    }
}

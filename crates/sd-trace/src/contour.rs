use sd_core::Pixel;

pub type ContourId = usize;

/// Whether a boundary encloses a filled region or a hole inside one. The tag
/// is carried for callers; tracing itself only produces outer boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContourKind {
    Outer,
    Hole,
}

/// One traced boundary.
///
/// `boundary` is in trace order: the first element is the seed and
/// consecutive entries are 8-adjacent. `approx` holds the simplified vertex
/// list once a simplifier has run; the tracer leaves it empty.
///
/// A contour with an empty `boundary` means "nothing found here" and must be
/// discarded by the caller, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub id: ContourId,
    pub kind: ContourKind,
    pub start: Pixel,
    pub boundary: Vec<Pixel>,
    pub approx: Vec<Pixel>,
}

impl Contour {
    pub fn new(id: ContourId, start: Pixel, kind: ContourKind) -> Self {
        Self {
            id,
            kind,
            start,
            boundary: Vec::new(),
            approx: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    pub fn len(&self) -> usize {
        self.boundary.len()
    }

    pub fn push_boundary(&mut self, p: Pixel) {
        self.boundary.push(p);
    }

    /// Linear membership test over the raw boundary.
    pub fn contains(&self, p: Pixel) -> bool {
        self.boundary.contains(&p)
    }

    /// Drops all recorded pixels, returning the contour to the empty state.
    pub fn reset(&mut self) {
        self.boundary.clear();
        self.approx.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.approx.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{Contour, ContourKind};
    use sd_core::Pixel;

    #[test]
    fn empty_until_first_boundary_pixel() {
        let mut c = Contour::new(0, Pixel::new(3, 4), ContourKind::Outer);
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);

        c.push_boundary(Pixel::new(3, 4));
        assert!(!c.is_empty());
        assert!(c.contains(Pixel::new(3, 4)));
        assert!(!c.contains(Pixel::new(4, 4)));
    }

    #[test]
    fn reset_clears_boundary_and_approx() {
        let mut c = Contour::new(7, Pixel::new(0, 0), ContourKind::Outer);
        c.push_boundary(Pixel::new(0, 0));
        c.push_boundary(Pixel::new(1, 0));
        c.approx.push(Pixel::new(0, 0));

        c.reset();
        assert!(c.is_empty());
        assert_eq!(c.vertex_count(), 0);
        assert_eq!(c.id, 7);
        assert_eq!(c.start, Pixel::new(0, 0));
    }
}

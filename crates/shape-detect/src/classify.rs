use core::fmt;
use std::collections::BTreeMap;

use sd_trace::{Contour, ContourId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A contour reduced to two or fewer vertices, which is noise or a
    /// degenerate blob rather than a closed shape.
    DegenerateContour { id: ContourId, vertices: usize },
    /// An expected vertex count had no matching contour left.
    MissingShape { vertices: usize, missing: usize },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateContour { id, vertices } => {
                write!(f, "contour {id} is degenerate: {vertices} vertices")
            }
            Self::MissingShape { vertices, missing } => {
                write!(f, "{missing} expected shape(s) with {vertices} vertices not found")
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Outcome of a successful classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyReport {
    /// Contours that consumed an expected vertex count, with that count.
    pub matched: Vec<(ContourId, usize)>,
    /// Contours left over once every expectation was satisfied.
    pub extras: Vec<ContourId>,
}

/// Common name for a polygon with `vertices` corners.
pub fn shape_name(vertices: usize) -> &'static str {
    match vertices {
        3 => "triangle",
        4 => "quadrilateral",
        5 => "pentagon",
        6 => "hexagon",
        _ => "polygon",
    }
}

/// Matches contours against a multiset of expected vertex counts.
///
/// Each contour with a matching expected count removes one occurrence of
/// it; contours beyond the expectations are reported as extras, not
/// errors. Classification fails if any expected count stays unmatched, or
/// if any contour carries two or fewer vertices.
pub fn classify_contours(
    contours: &[Contour],
    expected: &[usize],
) -> Result<ClassifyReport, ClassifyError> {
    let mut wanted: BTreeMap<usize, usize> = BTreeMap::new();
    for &v in expected {
        *wanted.entry(v).or_insert(0) += 1;
    }

    let mut report = ClassifyReport::default();
    for contour in contours {
        let vertices = contour.vertex_count();
        if vertices <= 2 {
            return Err(ClassifyError::DegenerateContour {
                id: contour.id,
                vertices,
            });
        }
        match wanted.get_mut(&vertices) {
            Some(n) if *n > 0 => {
                *n -= 1;
                report.matched.push((contour.id, vertices));
            }
            _ => report.extras.push(contour.id),
        }
    }

    if let Some((&vertices, &missing)) = wanted.iter().find(|&(_, &n)| n > 0) {
        return Err(ClassifyError::MissingShape { vertices, missing });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_core::Pixel;
    use sd_trace::ContourKind;

    fn contour_with_vertices(id: ContourId, n: usize) -> Contour {
        let mut c = Contour::new(id, Pixel::new(0, 0), ContourKind::Outer);
        c.boundary = (0..n as i32).map(|i| Pixel::new(i, 0)).collect();
        c.approx = (0..n as i32).map(|i| Pixel::new(i, i)).collect();
        c
    }

    #[test]
    fn exact_multiset_matches() {
        let contours = [contour_with_vertices(0, 3), contour_with_vertices(1, 4)];
        let report = classify_contours(&contours, &[4, 3]).unwrap();
        assert_eq!(report.matched, vec![(0, 3), (1, 4)]);
        assert!(report.extras.is_empty());
    }

    #[test]
    fn extra_contours_are_tolerated() {
        let contours = [contour_with_vertices(0, 4), contour_with_vertices(1, 6)];
        let report = classify_contours(&contours, &[4]).unwrap();
        assert_eq!(report.matched, vec![(0, 4)]);
        assert_eq!(report.extras, vec![1]);
    }

    #[test]
    fn duplicate_expectations_need_duplicate_contours() {
        let contours = [contour_with_vertices(0, 4)];
        let err = classify_contours(&contours, &[4, 4]).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::MissingShape {
                vertices: 4,
                missing: 1
            }
        );
    }

    #[test]
    fn degenerate_contour_fails_even_without_expectations() {
        let contours = [contour_with_vertices(7, 2)];
        let err = classify_contours(&contours, &[]).unwrap_err();
        assert_eq!(
            err,
            ClassifyError::DegenerateContour {
                id: 7,
                vertices: 2
            }
        );
    }

    #[test]
    fn polygon_names() {
        assert_eq!(shape_name(3), "triangle");
        assert_eq!(shape_name(4), "quadrilateral");
        assert_eq!(shape_name(6), "hexagon");
        assert_eq!(shape_name(11), "polygon");
    }
}

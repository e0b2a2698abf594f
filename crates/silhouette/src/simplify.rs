//! Curvature-aware vertex decimation.
//!
//! The raw contour annotates every step with its 3x3 neighbor density.
//! On a locally straight boundary that density is 6; 5 and 7 indicate
//! mild convex/concave bends and extreme values mark sharp corners.
//! Decimation keeps sharp corners unconditionally, keeps mild bends
//! only where the curvature direction is changing, and drops straight
//! runs entirely, while enforcing a minimum spacing of `gap` raw steps
//! between retained vertices.

use crate::{
    error::Result,
    traits::ContourDecimator,
    types::{GridPoint, RawContour, SimplifiedContour},
};

/// Decimate a cyclic raw contour with the given minimum vertex spacing.
///
/// The scan runs a second lap over the cyclic sequence (logical indices
/// `N..2N-gap`, addressing `raw[i % N]`) so retention decisions are not
/// biased by the arbitrary cyclic start. The last `gap` indices of the
/// lap are deliberately not candidates; together with the spacing
/// counter this guarantees no two retained vertices are within `gap`
/// raw steps of each other, including across the cyclic seam.
pub fn decimate(contour: &RawContour, gap: usize) -> SimplifiedContour {
    let n = contour.vertices.len();
    let mut points = Vec::new();
    if n == 0 {
        return SimplifiedContour { points };
    }

    let mut distance = gap + 1;
    let mut prev_density = 6u8;
    let end = (2 * n).saturating_sub(gap);
    for i in n..end {
        let v = contour.vertices[i % n];
        let next_density = contour.vertices[(i + 1) % n].density;
        distance += 1;
        let retain = match v.density {
            6 => false,
            5 => {
                (prev_density == 6 && next_density == 7)
                    || (prev_density == 7 && next_density == 6)
            }
            7 => {
                (prev_density == 6 || prev_density == 7)
                    && (next_density == 6 || next_density == 7)
            }
            _ => true,
        };
        if retain && distance > gap {
            points.push(GridPoint { x: v.x, y: v.y });
            distance = 0;
        }
        prev_density = v.density;
    }
    SimplifiedContour { points }
}

/// [`ContourDecimator`] stage with a configurable minimum spacing.
#[derive(Debug, Clone)]
pub struct VertexDecimator {
    pub gap: usize,
}

impl Default for VertexDecimator {
    fn default() -> Self {
        Self { gap: 6 }
    }
}

impl ContourDecimator for VertexDecimator {
    fn decimate(&self, contour: &RawContour) -> Result<SimplifiedContour> {
        Ok(decimate(contour, self.gap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::BitRaster;
    use crate::trace::trace;
    use std::collections::HashMap;

    fn filled_square() -> BitRaster {
        BitRaster::from_fn(20, 20, |x, y| (5..15).contains(&x) && (5..15).contains(&y))
    }

    fn filled_disc() -> BitRaster {
        BitRaster::from_fn(40, 40, |x, y| {
            let (dx, dy) = (x as i32 - 20, y as i32 - 20);
            dx * dx + dy * dy <= 12 * 12
        })
    }

    /// Cyclic raw-contour spacing between consecutive retained vertices.
    fn retained_spacings(contour: &RawContour, simplified: &SimplifiedContour) -> Vec<usize> {
        let index_of: HashMap<(i32, i32), usize> = contour
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| ((v.x, v.y), i))
            .collect();
        let indices: Vec<usize> = simplified
            .points
            .iter()
            .map(|p| index_of[&(p.x, p.y)])
            .collect();
        let n = contour.len();
        indices
            .iter()
            .zip(indices.iter().cycle().skip(1))
            .map(|(&a, &b)| (b + n - a) % n)
            .collect()
    }

    #[test]
    fn square_corners_are_the_only_retained_vertices() {
        let contour = trace(&filled_square()).unwrap();
        // with no spacing constraint the whole lap is candidate and the
        // four corners (density 4) are retained, nothing else
        let simplified = decimate(&contour, 0);
        assert_eq!(simplified.len(), 4);
        let expected = [
            GridPoint { x: 14, y: 5 },
            GridPoint { x: 14, y: 14 },
            GridPoint { x: 5, y: 14 },
            GridPoint { x: 5, y: 5 },
        ];
        assert_eq!(simplified.points, expected);
    }

    #[test]
    fn spacing_never_drops_below_gap() {
        let contour = trace(&filled_disc()).unwrap();
        for gap in [3usize, 6, 9] {
            let simplified = decimate(&contour, gap);
            assert!(simplified.len() >= 3, "gap {gap} left too few vertices");
            for spacing in retained_spacings(&contour, &simplified) {
                assert!(spacing > gap, "spacing {spacing} violates gap {gap}");
            }
        }
    }

    #[test]
    fn straight_edges_are_never_retained() {
        let contour = trace(&filled_square()).unwrap();
        let simplified = decimate(&contour, 6);
        for p in &simplified.points {
            let v = contour
                .vertices
                .iter()
                .find(|v| v.x == p.x && v.y == p.y)
                .unwrap();
            assert_ne!(v.density, 6);
        }
    }

    #[test]
    fn empty_and_tiny_contours_decimate_to_nothing() {
        assert!(decimate(&RawContour::default(), 6).is_empty());

        let mut mask = BitRaster::new(5, 5);
        mask.set(2, 2, true);
        let single = trace(&mask).unwrap();
        assert!(decimate(&single, 6).is_empty());
    }
}

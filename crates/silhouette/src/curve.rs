//! Cubic control-point synthesis for a simplified contour.
//!
//! For each vertex the chord through its cyclic neighbors fixes a
//! tangent direction; the control points are scaled offsets of the
//! neighbors about the foot of the perpendicular dropped from the
//! vertex onto that chord. A side correction keeps the two offsets on
//! opposite horizontal sides of the vertex, which is what makes the
//! assembled path smooth instead of cusped.

use crate::{
    error::{Result, SilhouetteError},
    traits::CurveSynthesizer,
    types::{BezierPath, BezierSegment, SimplifiedContour},
};

/// Compute the incoming and outgoing control points for vertex `v`
/// with cyclic neighbors `prev` and `next`.
pub(crate) fn control_points(
    v: [f32; 2],
    prev: [f32; 2],
    next: [f32; 2],
    ratio: f32,
) -> ([f32; 2], [f32; 2]) {
    let [x, y] = v;
    let chord_dx = next[0] - prev[0];
    let chord_dy = next[1] - prev[1];

    // foot of the perpendicular from v onto the chord through prev/next;
    // vertical and horizontal chords bypass the slope arithmetic
    let (ix, iy) = if chord_dx == 0.0 {
        (prev[0], y)
    } else if chord_dy == 0.0 {
        (x, prev[1])
    } else {
        let k = chord_dy / chord_dx;
        let b = prev[1] - k * prev[0];
        let k2 = -1.0 / k;
        let b2 = y - k2 * x;
        let ix = (b2 - b) / (k - k2);
        (ix, k * ix + b)
    };

    let mut cp_in = [(prev[0] - ix) * ratio, (prev[1] - iy) * ratio];
    let mut cp_out = [(next[0] - ix) * ratio, (next[1] - iy) * ratio];

    // both offsets on the same horizontal side of the vertex would fold
    // the curve into a cusp; flip the one with the smaller reach
    if cp_in[0] > 0.0 && cp_out[0] > 0.0 {
        if cp_in[0] < cp_out[0] {
            cp_in = [-cp_in[0], -cp_in[1]];
        } else {
            cp_out = [-cp_out[0], -cp_out[1]];
        }
    } else if cp_in[0] < 0.0 && cp_out[0] < 0.0 {
        if cp_in[0] > cp_out[0] {
            cp_in = [-cp_in[0], -cp_in[1]];
        } else {
            cp_out = [-cp_out[0], -cp_out[1]];
        }
    }

    (
        [x + cp_in[0], y + cp_in[1]],
        [x + cp_out[0], y + cp_out[1]],
    )
}

struct Anchor {
    pos: [f32; 2],
    cp_in: [f32; 2],
    cp_out: [f32; 2],
}

/// Fit a closed cubic path through the simplified contour. Each segment
/// ending at vertex `i` takes its first control point from vertex
/// `i-1`'s outgoing offset and its second from vertex `i`'s incoming
/// offset; the segment list is rotated so it closes back onto vertex 0.
pub fn fit(contour: &SimplifiedContour, ratio: f32) -> Result<BezierPath> {
    let pts = &contour.points;
    let n = pts.len();
    if n < 3 {
        return Err(SilhouetteError::DegenerateContour { len: n });
    }

    let as_f32 = |p: &crate::types::GridPoint| [p.x as f32, p.y as f32];
    let mut anchors = Vec::with_capacity(n);
    for i in 0..n {
        let v = as_f32(&pts[i]);
        let prev = as_f32(&pts[(i + n - 1) % n]);
        let next = as_f32(&pts[(i + 1) % n]);
        let (cp_in, cp_out) = control_points(v, prev, next, ratio);
        anchors.push(Anchor {
            pos: v,
            cp_in,
            cp_out,
        });
    }

    let mut segments = Vec::with_capacity(n);
    for i in 1..=n {
        let cur = &anchors[i % n];
        let prev = &anchors[i - 1];
        segments.push(BezierSegment {
            cp1: prev.cp_out,
            cp2: cur.cp_in,
            end: cur.pos,
        });
    }

    Ok(BezierPath {
        start: anchors[0].pos,
        segments,
    })
}

/// [`CurveSynthesizer`] stage with a configurable control-point ratio.
#[derive(Debug, Clone)]
pub struct CurveFitter {
    pub ratio: f32,
}

impl Default for CurveFitter {
    fn default() -> Self {
        Self { ratio: 0.36 }
    }
}

impl CurveSynthesizer for CurveFitter {
    fn synthesize(&self, contour: &SimplifiedContour) -> Result<BezierPath> {
        fit(contour, self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridPoint;

    fn contour_of(points: &[(i32, i32)]) -> SimplifiedContour {
        SimplifiedContour {
            points: points.iter().map(|&(x, y)| GridPoint { x, y }).collect(),
        }
    }

    #[test]
    fn collinear_horizontal_run_keeps_control_points_on_the_line() {
        let (cp_in, cp_out) = control_points([5.0, 5.0], [0.0, 5.0], [10.0, 5.0], 0.36);
        assert_eq!(cp_in[1], 5.0);
        assert_eq!(cp_out[1], 5.0);
        // offsets land on opposite sides of the vertex
        assert!(cp_in[0] < 5.0 && cp_out[0] > 5.0);
    }

    #[test]
    fn collinear_vertical_run_keeps_control_points_on_the_line() {
        let (cp_in, cp_out) = control_points([2.0, 7.0], [2.0, 3.0], [2.0, 12.0], 0.36);
        assert_eq!(cp_in[0], 2.0);
        assert_eq!(cp_out[0], 2.0);
        assert!(cp_in[1] < 7.0 && cp_out[1] > 7.0);
    }

    #[test]
    fn same_side_offsets_are_flipped() {
        // chord through (5,1) and (10,2) passes left of the vertex, so
        // both raw offsets point right; the shorter one must flip
        let ratio = 0.36;
        let (cp_in, cp_out) = control_points([0.0, 0.0], [5.0, 1.0], [10.0, 2.0], ratio);
        assert!((cp_in[0] - (-5.0 * ratio)).abs() < 1e-5);
        assert!((cp_in[1] - (-1.0 * ratio)).abs() < 1e-5);
        assert!((cp_out[0] - 10.0 * ratio).abs() < 1e-5);
        assert!((cp_out[1] - 2.0 * ratio).abs() < 1e-5);
    }

    #[test]
    fn fit_rejects_degenerate_contours() {
        let err = fit(&contour_of(&[(0, 0), (4, 0)]), 0.36).unwrap_err();
        assert!(matches!(
            err,
            SilhouetteError::DegenerateContour { len: 2 }
        ));
    }

    #[test]
    fn fit_closes_the_path_back_onto_the_start() {
        let contour = contour_of(&[(14, 5), (14, 14), (5, 14), (5, 5)]);
        let path = fit(&contour, 0.36).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.start, [14.0, 5.0]);
        assert_eq!(path.segments.last().unwrap().end, path.start);
        // segments visit the remaining vertices in order
        assert_eq!(path.segments[0].end, [14.0, 14.0]);
        assert_eq!(path.segments[1].end, [5.0, 14.0]);
        assert_eq!(path.segments[2].end, [5.0, 5.0]);
    }

    #[test]
    fn segments_pair_outgoing_and_incoming_offsets() {
        let contour = contour_of(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let path = fit(&contour, 0.36).unwrap();
        let (_, cp_out_v0) = control_points([0.0, 0.0], [0.0, 10.0], [10.0, 0.0], 0.36);
        let (cp_in_v1, _) = control_points([10.0, 0.0], [0.0, 0.0], [10.0, 10.0], 0.36);
        assert_eq!(path.segments[0].cp1, cp_out_v0);
        assert_eq!(path.segments[0].cp2, cp_in_v1);
    }
}

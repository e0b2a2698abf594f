use geo_types::{Coord, LineString};
use serde::{Deserialize, Serialize};

/// Integer lattice point on the mask grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One step of a raw traced contour: a lattice point plus the number of
/// set cells in the 3x3 neighborhood around it (center included, 0-9).
/// The density acts as a discrete curvature signal: 6 on a locally
/// straight boundary, 5/7 on mild bends, lower/higher at sharp corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourVertex {
    pub x: i32,
    pub y: i32,
    pub density: u8,
}

/// Ordered, cyclic sequence of boundary steps produced by the tracer.
/// The last vertex connects back to the first.
#[derive(Debug, Clone, Default)]
pub struct RawContour {
    pub vertices: Vec<ContourVertex>,
}

impl RawContour {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Convert to a closed geo `LineString` (the first vertex is repeated
    /// at the end) for geometric measurements.
    pub fn to_line_string(&self) -> LineString<f32> {
        let mut coords: Vec<Coord<f32>> = self
            .vertices
            .iter()
            .map(|v| Coord {
                x: v.x as f32,
                y: v.y as f32,
            })
            .collect();
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        LineString::new(coords)
    }

    /// Length of the closed contour polyline.
    pub fn perimeter(&self) -> f32 {
        use geo::EuclideanLength;
        self.to_line_string().euclidean_length()
    }
}

/// Decimated contour: a cyclic subset of the raw contour's positions,
/// order and adjacency preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimplifiedContour {
    pub points: Vec<GridPoint>,
}

impl SimplifiedContour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One cubic segment of the closed output path. `cp1` shapes the curve
/// leaving the previous end point, `cp2` shapes the approach to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub cp1: [f32; 2],
    pub cp2: [f32; 2],
    pub end: [f32; 2],
}

/// Closed piecewise-cubic path. The segment list is cyclic: the final
/// segment ends back at `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierPath {
    pub start: [f32; 2],
    pub segments: Vec<BezierSegment>,
}

impl BezierPath {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Pipeline output: the fitted path plus the dimensions of the mask it
/// was traced on. Path coordinates live in this mask's coordinate frame
/// (which includes any margin the pipeline added).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracedOutline {
    pub path: BezierPath,
    pub mask_width: u32,
    pub mask_height: u32,
}

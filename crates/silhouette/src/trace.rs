//! Moore-neighbor boundary tracing.
//!
//! The tracer walks the outer contour of the foreground region
//! reachable from the deterministic start cell. Multiply-connected or
//! self-intersecting masks are out of contract: tracing still follows
//! the local neighbor rule, but only the outer boundary reachable from
//! the start cell is reported.

use crate::{
    error::{Result, SilhouetteError},
    raster::{BitRaster, NEAR_KERNEL},
    traits::ContourTracer,
    types::{ContourVertex, GridPoint, RawContour},
};

/// The eight compass directions, in clockwise order starting at north.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Clockwise scan order; a direction's position in this table is its
    /// clockwise index.
    pub const CLOCKWISE: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Direction {
        Self::CLOCKWISE[index % 8]
    }

    pub fn reverse(self) -> Direction {
        Self::from_index(self.index() + 4)
    }
}

/// Deterministic start-point search: walk outward-expanding
/// anti-diagonals from the origin until a set cell is found. Returns
/// `None` when the mask is empty.
pub fn find_start(mask: &BitRaster) -> Option<GridPoint> {
    if mask.width() == 0 || mask.height() == 0 {
        return None;
    }
    let last_diagonal = (mask.width() + mask.height() - 2) as i32;
    let (mut x, mut y) = (0, 0);
    loop {
        if mask.get(x, y) {
            return Some(GridPoint { x, y });
        }
        if x == 0 {
            x = y + 1;
            y = 0;
            // past the last anti-diagonal every cell is out of range
            if x > last_diagonal {
                return None;
            }
        } else {
            x -= 1;
            y += 1;
        }
    }
}

/// Find the direction of the next boundary step from `(x, y)`.
/// `came_from` points back at the cell we arrived from; the scan starts
/// one step clockwise of it and takes the first set neighbor. `None`
/// means the cell has no set neighbor at all (isolated pixel).
fn next_direction(mask: &BitRaster, x: i32, y: i32, came_from: Direction) -> Option<Direction> {
    let from = came_from.index();
    for step in 1..=8 {
        let dir = Direction::from_index(from + step);
        let (dx, dy) = dir.delta();
        if mask.get(x + dx, y + dy) {
            return Some(dir);
        }
    }
    None
}

/// Trace the outer contour of the mask, annotating every step with its
/// 3x3 neighbor density. The walk ends when it returns to the start
/// cell, which is therefore the last vertex of the cyclic sequence.
pub fn trace(mask: &BitRaster) -> Result<RawContour> {
    let start = find_start(mask).ok_or(SilhouetteError::EmptyMask)?;

    // The search reached the start cell diagonally from the top-right,
    // so the first clockwise scan begins at north-east.
    let mut came_from = Direction::North;
    let Some(mut dir) = next_direction(mask, start.x, start.y, came_from) else {
        // isolated single-pixel region: a contour of length one
        let density = mask.sum_around(start.x, start.y, &NEAR_KERNEL) as u8;
        return Ok(RawContour {
            vertices: vec![ContourVertex {
                x: start.x,
                y: start.y,
                density,
            }],
        });
    };

    let (mut x, mut y) = (start.x, start.y);
    let mut vertices = Vec::new();
    loop {
        came_from = dir.reverse();
        let (dx, dy) = dir.delta();
        x += dx;
        y += dy;
        // the cell we came from is set, so the scan can only miss on an
        // isolated pixel, which the guard above already handled
        dir = next_direction(mask, x, y, came_from).unwrap_or(came_from);
        let density = mask.sum_around(x, y, &NEAR_KERNEL) as u8;
        vertices.push(ContourVertex { x, y, density });
        if x == start.x && y == start.y {
            break;
        }
    }
    Ok(RawContour { vertices })
}

/// [`ContourTracer`] stage wrapping [`trace`].
#[derive(Debug, Clone, Default)]
pub struct MooreTracer;

impl ContourTracer for MooreTracer {
    fn trace(&self, mask: &BitRaster) -> Result<RawContour> {
        trace(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_square() -> BitRaster {
        // 10x10 foreground square centered in a 20x20 grid
        BitRaster::from_fn(20, 20, |x, y| (5..15).contains(&x) && (5..15).contains(&y))
    }

    fn filled_disc(size: usize, cx: i32, cy: i32, radius: i32) -> BitRaster {
        BitRaster::from_fn(size, size, |x, y| {
            let (dx, dy) = (x as i32 - cx, y as i32 - cy);
            dx * dx + dy * dy <= radius * radius
        })
    }

    #[test]
    fn clockwise_table_matches_deltas_and_reversal() {
        assert_eq!(Direction::North.delta(), (0, -1));
        assert_eq!(Direction::from_index(0), Direction::North);
        assert_eq!(Direction::from_index(9), Direction::NorthEast);
        for &dir in Direction::CLOCKWISE.iter() {
            let (dx, dy) = dir.delta();
            assert_eq!(dir.reverse().delta(), (-dx, -dy));
            assert_eq!(dir.reverse().reverse(), dir);
        }
    }

    #[test]
    fn start_search_walks_anti_diagonals() {
        let mask = filled_square();
        // the first diagonal touching the square hits its top-left corner
        assert_eq!(find_start(&mask), Some(GridPoint { x: 5, y: 5 }));

        let mut single = BitRaster::new(8, 8);
        single.set(6, 2, true);
        assert_eq!(find_start(&single), Some(GridPoint { x: 6, y: 2 }));
    }

    #[test]
    fn start_search_terminates_on_empty_mask() {
        assert_eq!(find_start(&BitRaster::new(16, 16)), None);
        assert_eq!(find_start(&BitRaster::new(0, 0)), None);
    }

    #[test]
    fn empty_mask_fails_fast() {
        let err = trace(&BitRaster::new(10, 10)).unwrap_err();
        assert!(matches!(err, SilhouetteError::EmptyMask));
    }

    #[test]
    fn square_contour_visits_every_boundary_cell_once() {
        let contour = trace(&filled_square()).unwrap();
        assert_eq!(contour.len(), 36);
        // closed: the walk ends back at the start cell
        let last = contour.vertices.last().unwrap();
        assert_eq!((last.x, last.y), (5, 5));
        // corner densities are 4, straight edges 6
        let corner_count = contour
            .vertices
            .iter()
            .filter(|v| v.density == 4)
            .count();
        assert_eq!(corner_count, 4);
        assert!(contour.vertices.iter().all(|v| v.density == 4 || v.density == 6));
    }

    #[test]
    fn single_pixel_mask_yields_length_one_contour() {
        let mut mask = BitRaster::new(5, 5);
        mask.set(2, 2, true);
        let contour = trace(&mask).unwrap();
        assert_eq!(contour.len(), 1);
        let v = contour.vertices[0];
        assert_eq!((v.x, v.y, v.density), (2, 2, 1));
    }

    #[test]
    fn disc_contour_closes_and_matches_circumference() {
        let radius = 12;
        let contour = trace(&filled_disc(40, 20, 20, radius)).unwrap();
        let last = contour.vertices.last().unwrap();
        let start = find_start(&filled_disc(40, 20, 20, radius)).unwrap();
        assert_eq!((last.x, last.y), (start.x, start.y));

        let circumference = 2.0 * std::f32::consts::PI * radius as f32;
        let length = contour.perimeter();
        assert!(
            (length - circumference).abs() < 0.12 * circumference,
            "contour length {length} too far from circumference {circumference}"
        );
    }

    #[test]
    fn contour_positions_are_distinct_on_simple_masks() {
        let contour = trace(&filled_disc(40, 20, 20, 12)).unwrap();
        let mut seen = std::collections::HashSet::new();
        for v in &contour.vertices {
            assert!(seen.insert((v.x, v.y)), "vertex revisited: {v:?}");
        }
    }
}

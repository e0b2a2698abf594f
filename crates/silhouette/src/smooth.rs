//! Morphological smoothing of a binary mask.
//!
//! Both passes are deliberate cellular-automaton variants: each scan
//! mutates the grid in place, so cells later in the scan see updates
//! already made by earlier cells. Running a forward row-major scan and
//! then a backward one makes the filter near-symmetric despite the
//! in-place mutation. Reordering the scans changes the result.

use crate::{
    error::Result,
    raster::{BitRaster, NEAR_KERNEL, WIDE_KERNEL},
    traits::MaskSmoother,
};

fn apply_cell(mask: &mut BitRaster, x: i32, y: i32, kernel: &[(i32, i32)], clear_at: u32, set_at: u32) {
    let sum = mask.sum_around(x, y, kernel);
    if mask.get(x, y) {
        if sum <= clear_at {
            mask.set(x, y, false);
        }
    } else if sum >= set_at {
        mask.set(x, y, true);
    }
}

fn smooth_pass(mask: &mut BitRaster, kernel: &[(i32, i32)], clear_at: u32, set_at: u32) {
    let (width, height) = (mask.width() as i32, mask.height() as i32);
    for y in 0..height {
        for x in 0..width {
            apply_cell(mask, x, y, kernel, clear_at, set_at);
        }
    }
    for y in (0..height).rev() {
        for x in (0..width).rev() {
            apply_cell(mask, x, y, kernel, clear_at, set_at);
        }
    }
}

/// Despeckling pass over the 3x3 neighborhood (center-inclusive sums):
/// set cells with sum <= 3 are cleared, unset cells with sum >= 5 are
/// set. Removes isolated specks and fills pinholes.
pub fn smooth_near(mask: &mut BitRaster) {
    smooth_pass(mask, &NEAR_KERNEL, 3, 5);
}

/// Corner-rounding pass over the radius-3 diamond (25 cells,
/// center-inclusive): set cells with sum <= 6 are cleared, unset cells
/// with sum >= 13 are set. Erases convex bumps and concave notches a
/// few pixels across while leaving large features alone.
pub fn smooth_wide(mask: &mut BitRaster) {
    smooth_pass(mask, &WIDE_KERNEL, 6, 13);
}

/// [`MaskSmoother`] stage wrapping [`smooth_near`].
#[derive(Debug, Clone, Default)]
pub struct NearSmoother;

impl MaskSmoother for NearSmoother {
    fn smooth(&self, mask: &mut BitRaster) -> Result<()> {
        smooth_near(mask);
        Ok(())
    }
}

/// [`MaskSmoother`] stage wrapping [`smooth_wide`].
#[derive(Debug, Clone, Default)]
pub struct WideSmoother;

impl MaskSmoother for WideSmoother {
    fn smooth(&self, mask: &mut BitRaster) -> Result<()> {
        smooth_wide(mask);
        Ok(())
    }
}

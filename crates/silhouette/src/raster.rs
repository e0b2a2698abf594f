use image::{GrayImage, Luma, Rgba, RgbaImage};

use crate::{
    error::{Result, SilhouetteError},
    traits::{Disc, DiscRasterizer},
};

/// Coverage values strictly above this threshold count as foreground.
pub const COVERAGE_THRESHOLD: u8 = 127;

/// Offsets of the 3x3 neighborhood, center included (9 cells).
pub static NEAR_KERNEL: [(i32, i32); 9] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (0, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

/// Diamond of radius 3, center included (25 cells), used by the wide
/// smoothing pass.
pub static WIDE_KERNEL: [(i32, i32); 25] = [
    (0, -3),
    (-1, -2), (0, -2), (1, -2),
    (-2, -1), (-1, -1), (0, -1), (1, -1), (2, -1),
    (-3, 0), (-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0), (3, 0),
    (-2, 1), (-1, 1), (0, 1), (1, 1), (2, 1),
    (-1, 2), (0, 2), (1, 2),
    (0, 3),
];

/// Dense 2-D boolean grid representing a binary silhouette mask.
///
/// Coordinates are signed: any out-of-range lookup reads as `false`, so
/// neighborhood sums near the edges need no special casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitRaster {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl BitRaster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build from a row-major one-byte-per-pixel coverage buffer,
    /// thresholded at [`COVERAGE_THRESHOLD`].
    pub fn from_coverage(coverage: &[u8], width: usize, height: usize) -> Result<Self> {
        if coverage.len() != width * height {
            return Err(SilhouetteError::DimensionMismatch {
                expected: width * height,
                actual: coverage.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells: coverage.iter().map(|&v| v > COVERAGE_THRESHOLD).collect(),
        })
    }

    /// Threshold a grayscale image's luma channel.
    pub fn from_gray_image(image: &GrayImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        Self {
            width,
            height,
            cells: image.pixels().map(|p| p.0[0] > COVERAGE_THRESHOLD).collect(),
        }
    }

    /// Threshold an RGBA image's alpha channel, the classic way a
    /// silhouette is lifted off a layered source image.
    pub fn from_rgba_alpha(image: &RgbaImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        Self {
            width,
            height,
            cells: image.pixels().map(|p| p.0[3] > COVERAGE_THRESHOLD).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked read: out-of-range coordinates are `false`.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Bounds-checked write: out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, value: bool) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = value;
    }

    pub fn any_set(&self) -> bool {
        self.cells.iter().any(|&c| c)
    }

    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Number of set cells among `kernel` offsets applied to `(x, y)`.
    pub fn sum_around(&self, x: i32, y: i32, kernel: &[(i32, i32)]) -> u32 {
        let mut sum = 0;
        for &(dx, dy) in kernel {
            if self.get(x + dx, y + dy) {
                sum += 1;
            }
        }
        sum
    }

    fn rebuilt(&self, new_width: usize, new_height: usize, offset_x: i32, offset_y: i32) -> Self {
        let mut out = Self::new(new_width, new_height);
        for y in 0..new_height {
            for x in 0..new_width {
                let value = self.get(x as i32 - offset_x, y as i32 - offset_y);
                out.cells[y * new_width + x] = value;
            }
        }
        out
    }

    pub fn extend_left(&mut self, delta: usize) {
        *self = self.rebuilt(self.width + delta, self.height, delta as i32, 0);
    }

    pub fn extend_right(&mut self, delta: usize) {
        *self = self.rebuilt(self.width + delta, self.height, 0, 0);
    }

    pub fn extend_top(&mut self, delta: usize) {
        *self = self.rebuilt(self.width, self.height + delta, 0, delta as i32);
    }

    pub fn extend_bottom(&mut self, delta: usize) {
        *self = self.rebuilt(self.width, self.height + delta, 0, 0);
    }

    /// Pad all four edges with `delta` rows/columns of background.
    /// Existing cells shift by `(delta, delta)`.
    pub fn extend(&mut self, delta: usize) {
        self.extend_left(delta);
        self.extend_right(delta);
        self.extend_top(delta);
        self.extend_bottom(delta);
    }

    /// Inverse of [`extend`](Self::extend): strip `delta` rows/columns
    /// from every edge. Shrinks to an empty raster if `delta` is too
    /// large.
    pub fn crop_border(&mut self, delta: usize) {
        let new_width = self.width.saturating_sub(2 * delta);
        let new_height = self.height.saturating_sub(2 * delta);
        *self = self.rebuilt(new_width, new_height, -(delta as i32), -(delta as i32));
    }

    /// Render to an RGBA buffer: constant RGB, alpha 255 for set cells
    /// and 0 elsewhere.
    pub fn to_coverage_image(&self, r: u8, g: u8, b: u8) -> RgbaImage {
        let mut image = RgbaImage::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                let alpha = if self.cells[y * self.width + x] { 255 } else { 0 };
                image.put_pixel(x as u32, y as u32, Rgba([r, g, b, alpha]));
            }
        }
        image
    }

    /// Disc dilation: every set cell becomes a filled disc of the given
    /// radius. The rasterizer collaborator renders the discs to a
    /// coverage buffer which is re-binarized at the usual threshold.
    pub fn dilate(&mut self, radius: i32, rasterizer: &dyn DiscRasterizer) -> Result<()> {
        let mut discs = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x] {
                    discs.push(Disc {
                        x: x as i32,
                        y: y as i32,
                        radius,
                    });
                }
            }
        }
        let coverage = rasterizer.rasterize(self.width, self.height, &discs)?;
        *self = Self::from_coverage(&coverage, self.width, self.height)?;
        Ok(())
    }
}

/// Parallel variant of [`BitRaster`] carrying 8-bit coverage values,
/// for stages where soft coverage matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaRaster {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl AlphaRaster {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn from_coverage(coverage: &[u8], width: usize, height: usize) -> Result<Self> {
        if coverage.len() != width * height {
            return Err(SilhouetteError::DimensionMismatch {
                expected: width * height,
                actual: coverage.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells: coverage.to_vec(),
        })
    }

    /// Lift the alpha channel off an RGBA image.
    pub fn from_rgba_alpha(image: &RgbaImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        Self {
            width,
            height,
            cells: image.pixels().map(|p| p.0[3]).collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked read: out-of-range coordinates are 0.
    pub fn get(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return 0;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, value: u8) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = value;
    }

    fn rebuilt(&self, new_width: usize, new_height: usize, offset_x: i32, offset_y: i32) -> Self {
        let mut out = Self::new(new_width, new_height);
        for y in 0..new_height {
            for x in 0..new_width {
                out.cells[y * new_width + x] = self.get(x as i32 - offset_x, y as i32 - offset_y);
            }
        }
        out
    }

    pub fn extend_left(&mut self, delta: usize) {
        *self = self.rebuilt(self.width + delta, self.height, delta as i32, 0);
    }

    pub fn extend_right(&mut self, delta: usize) {
        *self = self.rebuilt(self.width + delta, self.height, 0, 0);
    }

    pub fn extend_top(&mut self, delta: usize) {
        *self = self.rebuilt(self.width, self.height + delta, 0, delta as i32);
    }

    pub fn extend_bottom(&mut self, delta: usize) {
        *self = self.rebuilt(self.width, self.height + delta, 0, 0);
    }

    pub fn extend(&mut self, delta: usize) {
        self.extend_left(delta);
        self.extend_right(delta);
        self.extend_top(delta);
        self.extend_bottom(delta);
    }

    pub fn crop_border(&mut self, delta: usize) {
        let new_width = self.width.saturating_sub(2 * delta);
        let new_height = self.height.saturating_sub(2 * delta);
        *self = self.rebuilt(new_width, new_height, -(delta as i32), -(delta as i32));
    }

    /// Render to an RGBA buffer: constant RGB, coverage value as alpha.
    pub fn to_coverage_image(&self, r: u8, g: u8, b: u8) -> RgbaImage {
        let mut image = RgbaImage::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                let alpha = self.cells[y * self.width + x];
                image.put_pixel(x as u32, y as u32, Rgba([r, g, b, alpha]));
            }
        }
        image
    }

    /// Threshold into a [`BitRaster`].
    pub fn binarize(&self) -> BitRaster {
        BitRaster {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(|&v| v > COVERAGE_THRESHOLD).collect(),
        }
    }

    /// Disc dilation over soft coverage: every foreground cell becomes
    /// a filled disc; the rasterized coverage replaces the grid.
    pub fn dilate(&mut self, radius: i32, rasterizer: &dyn DiscRasterizer) -> Result<()> {
        let mut discs = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x] > COVERAGE_THRESHOLD {
                    discs.push(Disc {
                        x: x as i32,
                        y: y as i32,
                        radius,
                    });
                }
            }
        }
        let coverage = rasterizer.rasterize(self.width, self.height, &discs)?;
        *self = Self::from_coverage(&coverage, self.width, self.height)?;
        Ok(())
    }
}

/// Default disc rasterizer backed by imageproc's filled-circle drawing.
#[derive(Debug, Clone, Default)]
pub struct ImageprocDiscRasterizer;

impl DiscRasterizer for ImageprocDiscRasterizer {
    fn rasterize(&self, width: usize, height: usize, discs: &[Disc]) -> Result<Vec<u8>> {
        let mut canvas = GrayImage::new(width as u32, height as u32);
        for disc in discs {
            imageproc::drawing::draw_filled_circle_mut(
                &mut canvas,
                (disc.x, disc.y),
                disc.radius,
                Luma([255u8]),
            );
        }
        Ok(canvas.into_raw())
    }
}

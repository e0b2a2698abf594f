use crate::{
    error::Result,
    raster::BitRaster,
    types::{BezierPath, RawContour, SimplifiedContour},
};

/// A filled disc to be rasterized by a [`DiscRasterizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disc {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

/// Collaborator interface for 2-D disc rasterization, used by the
/// dilation operations. Implementations return a row-major coverage
/// buffer of `width * height` bytes with every disc's filled area at
/// 255 and everything else at 0.
pub trait DiscRasterizer: Send + Sync {
    fn rasterize(&self, width: usize, height: usize, discs: &[Disc]) -> Result<Vec<u8>>;
}

/// Trait for in-place morphological smoothing passes over a mask.
pub trait MaskSmoother: Send + Sync {
    fn smooth(&self, mask: &mut BitRaster) -> Result<()>;
}

/// Trait for boundary tracing algorithms.
pub trait ContourTracer: Send + Sync {
    /// Trace the outer contour of the mask's foreground region.
    fn trace(&self, mask: &BitRaster) -> Result<RawContour>;
}

/// Trait for contour vertex decimation algorithms.
pub trait ContourDecimator: Send + Sync {
    fn decimate(&self, contour: &RawContour) -> Result<SimplifiedContour>;
}

/// Trait for turning a simplified contour into a closed curve.
pub trait CurveSynthesizer: Send + Sync {
    fn synthesize(&self, contour: &SimplifiedContour) -> Result<BezierPath>;
}

//! # silhouette
//!
//! Convert a binary raster mask (a silhouette, e.g. lifted off an
//! image's alpha channel) into a smooth, closed, piecewise-cubic curve
//! outlining the mask's boundary.
//!
//! The pipeline runs, in order:
//!
//! - **Morphological smoothing** — in-place neighbor-count thresholding
//!   passes that despeckle the raster and round jagged edges.
//! - **Boundary tracing** — a deterministic Moore-neighbor contour
//!   follower producing an ordered, closed lattice contour annotated
//!   with a local neighbor-density value.
//! - **Vertex decimation** — curvature-aware reduction of the raw
//!   contour using the density value as a discrete curvature signal.
//! - **Curve fitting** — synthesis of two cubic control points per
//!   retained vertex, producing a closed Bezier path.
//!
//! Every stage is pluggable through a trait, and stages compose through
//! a builder-driven [`Pipeline`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use silhouette::Pipeline;
//!
//! let pipeline = Pipeline::builder().build();
//! let image = image::open("mask.png")?.to_luma8();
//! let outline = pipeline.process(&image)?;
//! outline.save_svg("outline.svg", "#1a1a1a")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Limitations
//!
//! The tracer assumes a single dominant connected foreground region:
//! holes and secondary components are not traced, and only the outer
//! boundary reachable from the scan origin is reported.

pub mod curve;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod raster;
pub mod simplify;
pub mod smooth;
pub mod trace;
pub mod traits;
pub mod types;

pub use curve::CurveFitter;
pub use error::{Result, SilhouetteError};
pub use pipeline::{builder::PipelineBuilder, Pipeline};
pub use raster::{AlphaRaster, BitRaster, ImageprocDiscRasterizer, COVERAGE_THRESHOLD};
pub use simplify::VertexDecimator;
pub use smooth::{NearSmoother, WideSmoother};
pub use trace::MooreTracer;
pub use traits::{
    ContourDecimator, ContourTracer, CurveSynthesizer, Disc, DiscRasterizer, MaskSmoother,
};
pub use types::{
    BezierPath, BezierSegment, ContourVertex, GridPoint, RawContour, SimplifiedContour,
    TracedOutline,
};

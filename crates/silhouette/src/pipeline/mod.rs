pub mod builder;

use image::GrayImage;
use tracing::debug;

use crate::{
    error::{Result, SilhouetteError},
    raster::BitRaster,
    traits::{ContourDecimator, ContourTracer, CurveSynthesizer, MaskSmoother},
    types::TracedOutline,
};

/// The mask-to-curve pipeline: thresholding, margin padding, smoothing,
/// boundary tracing, decimation and curve fitting, each stage pluggable
/// through its trait.
pub struct Pipeline {
    smoothers: Vec<Box<dyn MaskSmoother>>,
    tracer: Box<dyn ContourTracer>,
    decimator: Box<dyn ContourDecimator>,
    synthesizer: Box<dyn CurveSynthesizer>,
    margin: usize,
}

impl Pipeline {
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    pub fn new(
        smoothers: Vec<Box<dyn MaskSmoother>>,
        tracer: Box<dyn ContourTracer>,
        decimator: Box<dyn ContourDecimator>,
        synthesizer: Box<dyn CurveSynthesizer>,
        margin: usize,
    ) -> Self {
        Self {
            smoothers,
            tracer,
            decimator,
            synthesizer,
            margin,
        }
    }

    /// Threshold a coverage image and run the full pipeline.
    ///
    /// Output coordinates are in the padded mask's frame: padding by
    /// `margin` shifts the mask content by `(margin, margin)`, and the
    /// reported mask dimensions include the padding.
    pub fn process(&self, image: &GrayImage) -> Result<TracedOutline> {
        self.process_mask(BitRaster::from_gray_image(image))
    }

    /// Run the pipeline on an already-binarized mask.
    pub fn process_mask(&self, mut mask: BitRaster) -> Result<TracedOutline> {
        if !mask.any_set() {
            return Err(SilhouetteError::EmptyMask);
        }
        if self.margin > 0 {
            mask.extend(self.margin);
        }

        for smoother in &self.smoothers {
            smoother.smooth(&mut mask)?;
        }
        debug!(
            width = mask.width(),
            height = mask.height(),
            foreground = mask.count_set(),
            "smoothed mask"
        );
        // smoothing can erase a mask made only of specks
        if !mask.any_set() {
            return Err(SilhouetteError::EmptyMask);
        }

        let raw = self.tracer.trace(&mask)?;
        debug!(steps = raw.len(), "traced outer contour");

        let simplified = self.decimator.decimate(&raw)?;
        debug!(vertices = simplified.len(), "decimated contour");

        let path = self.synthesizer.synthesize(&simplified)?;
        Ok(TracedOutline {
            path,
            mask_width: mask.width() as u32,
            mask_height: mask.height() as u32,
        })
    }

    pub fn info(&self) -> String {
        format!(
            "Pipeline: {} smoothers, margin {}, tracer + decimator + synthesizer",
            self.smoothers.len(),
            self.margin
        )
    }
}

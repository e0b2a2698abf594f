use crate::{
    curve::CurveFitter,
    pipeline::Pipeline,
    simplify::VertexDecimator,
    smooth::{NearSmoother, WideSmoother},
    trace::MooreTracer,
    traits::{ContourDecimator, ContourTracer, CurveSynthesizer, MaskSmoother},
};

/// Builder for assembling pipelines with a fluent API. Unspecified
/// stages fall back to the defaults: near + wide smoothing, the Moore
/// tracer, decimation with gap 6, curve fitting with ratio 0.36 and a
/// margin of 4 cells.
pub struct PipelineBuilder {
    smoothers: Vec<Box<dyn MaskSmoother>>,
    skip_smoothing: bool,
    tracer: Option<Box<dyn ContourTracer>>,
    decimator: Option<Box<dyn ContourDecimator>>,
    synthesizer: Option<Box<dyn CurveSynthesizer>>,
    margin: usize,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            smoothers: Vec::new(),
            skip_smoothing: false,
            tracer: None,
            decimator: None,
            synthesizer: None,
            margin: 4,
        }
    }

    /// Add a smoothing pass. Adding any pass replaces the default
    /// near + wide stack.
    pub fn add_smoother<S>(mut self, smoother: S) -> Self
    where
        S: MaskSmoother + 'static,
    {
        self.smoothers.push(Box::new(smoother));
        self
    }

    /// Run no smoothing at all. Tracing a raw noisy mask produces a
    /// noisy contour; this is mostly useful for synthetic inputs.
    pub fn skip_smoothing(mut self) -> Self {
        self.skip_smoothing = true;
        self
    }

    pub fn set_tracer<T>(mut self, tracer: T) -> Self
    where
        T: ContourTracer + 'static,
    {
        self.tracer = Some(Box::new(tracer));
        self
    }

    pub fn set_decimator<D>(mut self, decimator: D) -> Self
    where
        D: ContourDecimator + 'static,
    {
        self.decimator = Some(Box::new(decimator));
        self
    }

    pub fn set_synthesizer<C>(mut self, synthesizer: C) -> Self
    where
        C: CurveSynthesizer + 'static,
    {
        self.synthesizer = Some(Box::new(synthesizer));
        self
    }

    /// Minimum raw-contour spacing between retained vertices.
    pub fn with_gap(self, gap: usize) -> Self {
        self.set_decimator(VertexDecimator { gap })
    }

    /// Control-point pull ratio for curve fitting.
    pub fn with_ratio(self, ratio: f32) -> Self {
        self.set_synthesizer(CurveFitter { ratio })
    }

    /// Background padding added around the mask before smoothing, so
    /// the traced boundary never touches the image edge.
    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn build(self) -> Pipeline {
        let smoothers: Vec<Box<dyn MaskSmoother>> = if self.skip_smoothing {
            Vec::new()
        } else if self.smoothers.is_empty() {
            vec![Box::new(NearSmoother), Box::new(WideSmoother)]
        } else {
            self.smoothers
        };

        Pipeline::new(
            smoothers,
            self.tracer.unwrap_or_else(|| Box::new(MooreTracer)),
            self.decimator
                .unwrap_or_else(|| Box::new(VertexDecimator::default())),
            self.synthesizer
                .unwrap_or_else(|| Box::new(CurveFitter::default())),
            self.margin,
        )
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

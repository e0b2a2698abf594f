use thiserror::Error;

#[derive(Error, Debug)]
pub enum SilhouetteError {
    #[error("mask has no set cells")]
    EmptyMask,

    #[error("contour of {len} vertices is too small to fit a closed curve")]
    DegenerateContour { len: usize },

    #[error("coverage buffer of {actual} bytes does not match expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("disc rasterizer failed: {0}")]
    Rasterizer(String),

    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SilhouetteError>;

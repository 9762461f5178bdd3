use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("movements: Failed to load image {:?} ({})", .path, .source)]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("movements: Image {:?} has no pixels", .0)]
    EmptyImage(PathBuf),
    #[error("movements: No movement is registered")]
    NoMovementRegistered,
    #[error("movements: Invalid bounds (min = {}, max = {})", min, max)]
    InvalidBounds { min: f64, max: f64 },
    #[error("movements: Invalid publish rate {}", .0)]
    InvalidPublishRate(f64),
    #[error("movements: Connection error : {}", message)]
    Connection { message: String },
    #[error("movements: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}

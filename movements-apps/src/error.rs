use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("movements-apps: No image_path is specified.")]
    NoImagePath,
    #[error("movements-apps: Failed to parse {:?} as toml ({}).", .0, .1)]
    TomlParseFailure(PathBuf, #[source] toml::de::Error),
    #[error("movements-apps: No File {:?} is found ({}).", .0, .1)]
    NoFile(PathBuf, #[source] std::io::Error),
    #[error("movements-apps: Invalid bounds (min = {}, max = {}).", .0, .1)]
    InvalidBounds(f64, f64),
    #[error("movements-apps: Invalid publish rate {}.", .0)]
    InvalidPublishRate(f64),
    #[error("movements-apps: steps_per_movement must be positive.")]
    InvalidStepCount,
    #[error("movements-apps: movements: {:?}", .0)]
    Movements(#[from] movements::Error),
}

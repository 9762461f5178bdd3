use std::path::{Path, PathBuf};

use image::GrayImage;

use crate::{Error, Movement};

/// Luma values below this count as part of the drawn curve.
const DARK_THRESHOLD: u8 = 128;

/// A movement extracted from the curve drawn in an image.
///
/// Each pixel column contributes one target: the first dark pixel found
/// scanning the column top-down, mapped so that the top row is `1.0` and the
/// bottom row approaches `0.0`. Columns without a dark pixel define no
/// target.
#[derive(Debug, Clone)]
pub struct MovementFromImage {
    path: PathBuf,
    targets: Vec<Option<f64>>,
}

impl MovementFromImage {
    /// Decodes the image at `path` and extracts one target per pixel column.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let image = image::open(&path)
            .map_err(|source| Error::ImageLoad {
                path: path.clone(),
                source,
            })?
            .into_luma8();
        Self::from_luma8(path, &image)
    }

    fn from_luma8(path: PathBuf, image: &GrayImage) -> Result<Self, Error> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage(path));
        }
        let targets = (0..width)
            .map(|col| {
                (0..height)
                    .find(|&row| image.get_pixel(col, row)[0] < DARK_THRESHOLD)
                    .map(|row| 1.0 - f64::from(row) / f64::from(height))
            })
            .collect();
        Ok(Self { path, targets })
    }

    /// The image file this movement was extracted from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Movement for MovementFromImage {
    fn target_at(&self, fraction: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&fraction) {
            return None;
        }
        let index = ((fraction * self.targets.len() as f64) as usize).min(self.targets.len() - 1);
        self.targets[index]
    }

    fn len(&self) -> usize {
        self.targets.len()
    }
}

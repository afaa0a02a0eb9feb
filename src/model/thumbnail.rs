use std::path::PathBuf;

use ndarray::Array3;
use serde::{Deserialize, Serialize};

use super::{CoreError, Result};

/// Properties of the acquisition a thumbnail was rendered from.
///
/// `rgb` is false for grayscale, 16-bit or multi-channel sources, which are
/// treated as fluorescence-style acquisitions during type estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailMeta {
    pub rgb: bool,
    pub source: Option<PathBuf>,
}

impl Default for ThumbnailMeta {
    fn default() -> Self {
        Self {
            rgb: true,
            source: None,
        }
    }
}

/// A thumbnail as a `(height, width, 3)` grid of 8-bit RGB samples.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub data: Array3<u8>,
    pub metadata: ThumbnailMeta,
}

impl Thumbnail {
    pub fn new(data: Array3<u8>, metadata: ThumbnailMeta) -> Result<Self> {
        validate_shape(data.shape())?;
        Ok(Self { data, metadata })
    }

    /// Builds a thumbnail from interleaved RGB bytes with default metadata.
    pub fn from_raw(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        if samples.len() != width * height * 3 {
            return Err(CoreError::BufferSizeMismatch {
                width,
                height,
                actual: samples.len(),
            });
        }
        let data = Array3::from_shape_vec((height, width, 3), samples)
            .expect("buffer length checked against shape");
        Self::new(data, ThumbnailMeta::default())
    }

    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn num_pixels(&self) -> usize {
        self.width() * self.height()
    }

    /// Interleaved RGB samples in row-major order.
    pub fn samples(&self) -> &[u8] {
        self.data
            .as_slice()
            .expect("thumbnail data is stored in standard layout")
    }

    pub fn validate(&self) -> Result<()> {
        validate_shape(self.data.shape())
    }
}

fn validate_shape(shape: &[usize]) -> Result<()> {
    if shape[0] == 0 {
        return Err(CoreError::ZeroSizedAxis { axis: "height" });
    }
    if shape[1] == 0 {
        return Err(CoreError::ZeroSizedAxis { axis: "width" });
    }
    if shape[2] != 3 {
        return Err(CoreError::BadChannelCount { samples: shape[2] });
    }
    Ok(())
}

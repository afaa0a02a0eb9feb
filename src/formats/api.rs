use std::path::Path;

use crate::model::Thumbnail;

use super::raster::read_common_raster;
use super::tiff::read_tiff;
use super::util::extension;
use super::{IoError, Result};

pub fn read_thumbnail(path: impl AsRef<Path>) -> Result<Thumbnail> {
    let path = path.as_ref();
    let extension = extension(path)?;
    match extension.as_str() {
        "png" | "jpg" | "jpeg" => read_common_raster(path),
        "tif" | "tiff" => read_tiff(path),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

pub fn supported_formats() -> &'static [&'static str] {
    &["png", "jpg", "jpeg", "tif", "tiff"]
}

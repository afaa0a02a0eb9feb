use std::path::Path;

use crate::model::{Thumbnail, ThumbnailMeta};
use image::DynamicImage;
use ndarray::Array3;

use super::Result;

pub(crate) fn read_common_raster(path: &Path) -> Result<Thumbnail> {
    let image = image::open(path)?;
    // Only a plain 8-bit RGB(A) source counts as an RGB acquisition; grayscale
    // and 16-bit sources decode to an RGB rendering of a non-RGB image.
    let rgb = matches!(
        image,
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_)
    );
    let buffer = image.into_rgb8();
    let (width, height) = buffer.dimensions();
    let data = Array3::from_shape_vec((height as usize, width as usize, 3), buffer.into_raw())
        .expect("decoded buffer matches its dimensions");
    Ok(Thumbnail::new(
        data,
        ThumbnailMeta {
            rgb,
            source: Some(path.to_path_buf()),
        },
    )?)
}

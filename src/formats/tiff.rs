use std::fs::File;
use std::path::Path;

use crate::model::{Thumbnail, ThumbnailMeta};
use ndarray::Array3;
use tiff::decoder::{Decoder, DecodingResult};

use super::util::{channel_count, drop_alpha, replicate_gray, scale_to_u8};
use super::{IoError, Result};

pub(crate) fn read_tiff(path: &Path) -> Result<Thumbnail> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(file)?;
    let (width, height) = decoder.dimensions()?;
    let (width, height) = (width as usize, height as usize);
    let pixels = width * height;

    // Only the first page is rendered; additional pages mark the source as a
    // multi-channel (non-RGB) acquisition.
    let first_page = decoder.read_image()?;
    let multi_page = decoder.more_images();

    let (samples, rgb8) = match first_page {
        DecodingResult::U8(buffer) => match channel_count(buffer.len(), pixels)? {
            1 => (replicate_gray(&buffer), false),
            3 => (buffer, true),
            _ => (drop_alpha(&buffer), true),
        },
        DecodingResult::U16(buffer) => {
            let scaled = buffer
                .iter()
                .map(|value| (value >> 8) as u8)
                .collect::<Vec<_>>();
            match channel_count(scaled.len(), pixels)? {
                1 => (replicate_gray(&scaled), false),
                3 => (scaled, false),
                _ => (drop_alpha(&scaled), false),
            }
        }
        DecodingResult::F32(buffer) => {
            let scaled = scale_to_u8(&buffer);
            match channel_count(scaled.len(), pixels)? {
                1 => (replicate_gray(&scaled), false),
                3 => (scaled, false),
                _ => (drop_alpha(&scaled), false),
            }
        }
        other => {
            return Err(IoError::UnsupportedLayout(format!(
                "unsupported TIFF sample type: {other:?}"
            )));
        }
    };

    let data = Array3::from_shape_vec((height, width, 3), samples)
        .expect("sample count checked against dimensions");
    Ok(Thumbnail::new(
        data,
        ThumbnailMeta {
            rgb: rgb8 && !multi_page,
            source: Some(path.to_path_buf()),
        },
    )?)
}

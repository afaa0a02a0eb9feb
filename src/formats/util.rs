use std::path::Path;

use super::{IoError, Result};

pub(crate) fn extension(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase())
        .ok_or_else(|| IoError::UnsupportedFormat(path.to_string_lossy().to_string()))?;
    Ok(ext)
}

pub(crate) fn channel_count(sample_count: usize, pixels: usize) -> Result<usize> {
    for channels in [1_usize, 3, 4] {
        if sample_count == pixels * channels {
            return Ok(channels);
        }
    }
    Err(IoError::UnsupportedLayout(format!(
        "{sample_count} samples do not divide into {pixels} pixels"
    )))
}

pub(crate) fn replicate_gray(values: &[u8]) -> Vec<u8> {
    let mut samples = Vec::with_capacity(values.len() * 3);
    for value in values {
        samples.extend_from_slice(&[*value, *value, *value]);
    }
    samples
}

pub(crate) fn drop_alpha(values: &[u8]) -> Vec<u8> {
    values
        .chunks_exact(4)
        .flat_map(|pixel| pixel[..3].iter().copied())
        .collect()
}

pub(crate) fn scale_to_u8(values: &[f32]) -> Vec<u8> {
    let (min, max) = min_max(values);
    let use_unit_range = min >= 0.0 && max <= 1.0;
    values
        .iter()
        .map(|value| {
            let normalized = if use_unit_range {
                *value
            } else if (max - min).abs() < f32::EPSILON {
                0.0
            } else {
                (*value - min) / (max - min)
            };
            (normalized.clamp(0.0, 1.0) * 255.0).round() as u8
        })
        .collect()
}

fn min_max(values: &[f32]) -> (f32, f32) {
    let mut iter = values.iter().copied();
    let first = iter.next().unwrap_or(0.0);
    let mut min = first;
    let mut max = first;
    for value in iter {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    (min, max)
}

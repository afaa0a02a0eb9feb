use crate::model::{ImageType, Thumbnail};
use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};

use super::angles::{StainAngleSummary, summarize_stain_angles};
use super::stats::{ClassThresholds, PixelClassCounts, classify_pixels, threshold_params};
use super::{
    MeasurementTable, OpOutput, OpSchema, Operation, Result, thresholds_from_params,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageTypeEstimate {
    pub image_type: ImageType,
    pub counts: Option<PixelClassCounts>,
    pub angles: Option<StainAngleSummary>,
}

impl ImageTypeEstimate {
    fn unscanned(image_type: ImageType) -> Self {
        Self {
            image_type,
            counts: None,
            angles: None,
        }
    }

    fn scanned(image_type: ImageType, counts: PixelClassCounts) -> Self {
        Self {
            image_type,
            counts: Some(counts),
            angles: None,
        }
    }
}

/// Makes a semi-educated guess at the image type behind a thumbnail.
///
/// Non-RGB sources are fluorescence by definition. For RGB sources a dark
/// pixel majority reads as fluorescence; otherwise the mid-range mean color is
/// compared against the reference stain vectors in optical-density space. The
/// dark-vs-light test always runs before any averaging.
pub fn estimate_image_type(thumbnail: &Thumbnail, thresholds: ClassThresholds) -> ImageTypeEstimate {
    if !thumbnail.metadata.rgb {
        return ImageTypeEstimate::unscanned(ImageType::Fluorescence);
    }

    let counts = classify_pixels(thumbnail, thresholds);
    if counts.dark == 0 && counts.light == 0 {
        return ImageTypeEstimate::scanned(ImageType::Unset, counts);
    }
    // More dark than light pixels: assume fluorescence.
    if counts.dark >= counts.light {
        return ImageTypeEstimate::scanned(ImageType::Fluorescence, counts);
    }

    let Some(angles) = summarize_stain_angles(&counts) else {
        // Entirely light pixels leave nothing to average.
        return ImageTypeEstimate::scanned(ImageType::Unset, counts);
    };
    debug!("angle to hematoxylin: {:.3}", angles.hematoxylin);
    debug!("angle to eosin: {:.3}", angles.eosin);
    debug!("angle to DAB: {:.3}", angles.dab);

    // Eosin is expected to predominate in H&E staining; when it does not,
    // assume H-DAB.
    let image_type = if angles.dab < angles.eosin || angles.hematoxylin < angles.eosin {
        ImageType::BrightfieldHDab
    } else {
        ImageType::BrightfieldHE
    };
    info!("estimated image type: {image_type}");
    ImageTypeEstimate {
        image_type,
        counts: Some(counts),
        angles: Some(angles),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EstimateTypeOp;

impl Operation for EstimateTypeOp {
    fn name(&self) -> &'static str {
        "type.estimate"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Estimate the image type from thumbnail pixel statistics and stain angles."
                .to_string(),
            params: threshold_params(),
        }
    }

    fn execute(&self, thumbnail: &Thumbnail, params: &Value) -> Result<OpOutput> {
        let thresholds = thresholds_from_params(params)?;
        let estimate = estimate_image_type(thumbnail, thresholds);
        let mut measurements = MeasurementTable::default();
        let values = &mut measurements.values;
        values.insert(
            "image_type".to_string(),
            json!(estimate.image_type.to_string()),
        );
        values.insert("rgb".to_string(), json!(thumbnail.metadata.rgb));
        if let Some(counts) = &estimate.counts {
            values.insert("n_dark".to_string(), json!(counts.dark));
            values.insert("n_light".to_string(), json!(counts.light));
            values.insert("n_mid".to_string(), json!(counts.mid));
        }
        if let Some(angles) = &estimate.angles {
            values.insert("angle_hematoxylin".to_string(), json!(angles.hematoxylin));
            values.insert("angle_eosin".to_string(), json!(angles.eosin));
            values.insert("angle_dab".to_string(), json!(angles.dab));
        }
        Ok(OpOutput {
            classification: Some(estimate.image_type),
            measurements,
        })
    }
}

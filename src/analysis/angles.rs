use crate::model::Thumbnail;
use crate::stains::{StainProfile, StainVector};
use serde::Serialize;
use serde_json::{Value, json};

use super::stats::{PixelClassCounts, classify_pixels, threshold_params};
use super::{
    AnalysisError, MeasurementTable, OpOutput, OpSchema, Operation, Result, thresholds_from_params,
};

/// Angular distances from a thumbnail's mean optical-density vector to the
/// built-in reference stains, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StainAngleSummary {
    pub mean_od: [f64; 3],
    pub hematoxylin: f64,
    pub eosin: f64,
    pub dab: f64,
}

/// Mean stain vector of the mid-range pixels and its angles to hematoxylin,
/// eosin and DAB. None when there are no mid-range pixels to average, or when
/// their mean carries no optical density at all.
pub(crate) fn summarize_stain_angles(counts: &PixelClassCounts) -> Option<StainAngleSummary> {
    let mean = counts.mean_mid_rgb()?;
    let he = StainProfile::hematoxylin_eosin();
    let od = he.od_from_mean([mean[0] as f64, mean[1] as f64, mean[2] as f64]);
    let mean_stain = StainVector::new("Mean stain", od[0], od[1], od[2]).ok()?;
    let hdab = StainProfile::hematoxylin_dab();
    Some(StainAngleSummary {
        mean_od: od,
        hematoxylin: mean_stain.angle_to(he.stain_one()),
        eosin: mean_stain.angle_to(he.stain_two()),
        dab: mean_stain.angle_to(hdab.stain_two()),
    })
}

#[derive(Debug, Clone, Copy)]
pub struct StainAnglesOp;

impl Operation for StainAnglesOp {
    fn name(&self) -> &'static str {
        "stains.angles"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description:
                "Angles between the mid-range mean stain vector and the reference stains."
                    .to_string(),
            params: threshold_params(),
        }
    }

    fn execute(&self, thumbnail: &Thumbnail, params: &Value) -> Result<OpOutput> {
        let thresholds = thresholds_from_params(params)?;
        let counts = classify_pixels(thumbnail, thresholds);
        let summary = summarize_stain_angles(&counts).ok_or_else(|| {
            AnalysisError::DegenerateThumbnail(
                "no mid-range stain signal to average".to_string(),
            )
        })?;
        let mut measurements = MeasurementTable::default();
        let values = &mut measurements.values;
        values.insert("od_red".to_string(), json!(summary.mean_od[0]));
        values.insert("od_green".to_string(), json!(summary.mean_od[1]));
        values.insert("od_blue".to_string(), json!(summary.mean_od[2]));
        values.insert("angle_hematoxylin".to_string(), json!(summary.hematoxylin));
        values.insert("angle_eosin".to_string(), json!(summary.eosin));
        values.insert("angle_dab".to_string(), json!(summary.dab));
        Ok(OpOutput::measurements_only(measurements))
    }
}

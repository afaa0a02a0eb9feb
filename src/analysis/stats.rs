use crate::model::Thumbnail;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Value, json};

use super::{
    MeasurementTable, OpOutput, OpSchema, Operation, ParamSpec, Result, thresholds_from_params,
};

/// Channel thresholds splitting pixels into dark, light and mid-range classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassThresholds {
    pub dark: u8,
    pub light: u8,
}

impl Default for ClassThresholds {
    fn default() -> Self {
        Self {
            dark: 25,
            light: 220,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PixelClassCounts {
    pub dark: u64,
    pub light: u64,
    pub mid: u64,
    pub red_sum: u64,
    pub green_sum: u64,
    pub blue_sum: u64,
}

impl PixelClassCounts {
    fn accumulate(mut self, pixel: &[u8], thresholds: ClassThresholds) -> Self {
        let (red, green, blue) = (pixel[0], pixel[1], pixel[2]);
        if red < thresholds.dark && green < thresholds.dark && blue < thresholds.dark {
            self.dark += 1;
        } else if red > thresholds.light && green > thresholds.light && blue > thresholds.light {
            self.light += 1;
        } else {
            self.mid += 1;
            self.red_sum += u64::from(red);
            self.green_sum += u64::from(green);
            self.blue_sum += u64::from(blue);
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            dark: self.dark + other.dark,
            light: self.light + other.light,
            mid: self.mid + other.mid,
            red_sum: self.red_sum + other.red_sum,
            green_sum: self.green_sum + other.green_sum,
            blue_sum: self.blue_sum + other.blue_sum,
        }
    }

    /// Truncating integer mean of the mid-range pixels, channel by channel.
    pub fn mean_mid_rgb(&self) -> Option<[u64; 3]> {
        if self.mid == 0 {
            return None;
        }
        Some([
            self.red_sum / self.mid,
            self.green_sum / self.mid,
            self.blue_sum / self.mid,
        ])
    }
}

pub fn classify_pixels(thumbnail: &Thumbnail, thresholds: ClassThresholds) -> PixelClassCounts {
    thumbnail
        .samples()
        .par_chunks_exact(3)
        .fold(PixelClassCounts::default, |counts, pixel| {
            counts.accumulate(pixel, thresholds)
        })
        .reduce(PixelClassCounts::default, PixelClassCounts::merge)
}

#[derive(Debug, Clone, Copy)]
pub struct PixelStatsOp;

impl Operation for PixelStatsOp {
    fn name(&self) -> &'static str {
        "pixels.stats"
    }

    fn schema(&self) -> OpSchema {
        OpSchema {
            name: self.name().to_string(),
            description: "Count dark, light and mid-range pixels and average the mid-range color."
                .to_string(),
            params: threshold_params(),
        }
    }

    fn execute(&self, thumbnail: &Thumbnail, params: &Value) -> Result<OpOutput> {
        let thresholds = thresholds_from_params(params)?;
        let counts = classify_pixels(thumbnail, thresholds);
        let mut measurements = MeasurementTable::default();
        let values = &mut measurements.values;
        values.insert("width".to_string(), json!(thumbnail.width()));
        values.insert("height".to_string(), json!(thumbnail.height()));
        values.insert("n_dark".to_string(), json!(counts.dark));
        values.insert("n_light".to_string(), json!(counts.light));
        values.insert("n_mid".to_string(), json!(counts.mid));
        match counts.mean_mid_rgb() {
            Some([red, green, blue]) => {
                values.insert("mean_red".to_string(), json!(red));
                values.insert("mean_green".to_string(), json!(green));
                values.insert("mean_blue".to_string(), json!(blue));
            }
            None => {
                values.insert("mean_red".to_string(), Value::Null);
                values.insert("mean_green".to_string(), Value::Null);
                values.insert("mean_blue".to_string(), Value::Null);
            }
        }
        Ok(OpOutput::measurements_only(measurements))
    }
}

pub(crate) fn threshold_params() -> Vec<ParamSpec> {
    vec![
        ParamSpec {
            name: "dark".to_string(),
            description: "Channel value below which a pixel counts as dark. Defaults to 25."
                .to_string(),
            required: false,
            kind: "integer".to_string(),
        },
        ParamSpec {
            name: "light".to_string(),
            description: "Channel value above which a pixel counts as light. Defaults to 220."
                .to_string(),
            required: false,
            kind: "integer".to_string(),
        },
    ]
}

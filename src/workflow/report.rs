use std::collections::BTreeMap;

use crate::analysis::MeasurementTable;
use crate::model::{ImageType, ThumbnailMeta};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepReport {
    pub op: String,
    pub duration_ms: u128,
    pub classification: Option<ImageType>,
    pub measurements: MeasurementTable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeReport {
    pub recipe_name: Option<String>,
    pub width: usize,
    pub height: usize,
    pub thumbnail: ThumbnailMeta,
    pub steps: Vec<StepReport>,
    pub final_measurements: BTreeMap<String, Value>,
    pub image_type: Option<ImageType>,
}

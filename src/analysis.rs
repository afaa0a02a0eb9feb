mod angles;
mod error;
mod estimate;
mod params;
mod registry;
mod schema;
mod stats;

#[cfg(test)]
mod tests;

pub use angles::{StainAngleSummary, StainAnglesOp};
pub use error::{AnalysisError, Result};
pub use estimate::{EstimateTypeOp, ImageTypeEstimate, estimate_image_type};
pub use registry::{
    default_registry, execute_analysis, execute_analysis_with_registry, list_analyses,
};
pub use schema::{MeasurementTable, OpOutput, OpSchema, Operation, ParamSpec};
pub use stats::{ClassThresholds, PixelClassCounts, PixelStatsOp, classify_pixels};

pub(crate) use params::thresholds_from_params;

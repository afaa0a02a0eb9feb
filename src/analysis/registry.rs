use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::model::Thumbnail;
use serde_json::Value;

use super::{
    AnalysisError, EstimateTypeOp, OpOutput, OpSchema, Operation, PixelStatsOp, Result,
    StainAnglesOp,
};

type Registry = HashMap<&'static str, Arc<dyn Operation>>;

fn register<O: Operation + 'static>(map: &mut Registry, operation: O) {
    map.insert(operation.name(), Arc::new(operation));
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map: Registry = HashMap::new();
        register(&mut map, PixelStatsOp);
        register(&mut map, StainAnglesOp);
        register(&mut map, EstimateTypeOp);
        map
    })
}

pub fn default_registry() -> HashMap<&'static str, Arc<dyn Operation>> {
    registry()
        .iter()
        .map(|(name, op)| (*name, Arc::clone(op)))
        .collect()
}

pub fn list_analyses() -> Vec<OpSchema> {
    let mut schemas = registry()
        .values()
        .map(|op| op.schema())
        .collect::<Vec<_>>();
    schemas.sort_by(|left, right| left.name.cmp(&right.name));
    schemas
}

pub fn execute_analysis(name: &str, thumbnail: &Thumbnail, params: &Value) -> Result<OpOutput> {
    let op = registry()
        .get(name)
        .ok_or_else(|| AnalysisError::UnknownAnalysis(name.to_string()))?;
    op.execute(thumbnail, params)
}

pub fn execute_analysis_with_registry(
    registry: &HashMap<&'static str, Arc<dyn Operation>>,
    name: &str,
    thumbnail: &Thumbnail,
    params: &Value,
) -> Result<OpOutput> {
    let op = registry
        .get(name)
        .ok_or_else(|| AnalysisError::UnknownAnalysis(name.to_string()))?;
    op.execute(thumbnail, params)
}

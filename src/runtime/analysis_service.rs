use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::{
    OpOutput, OpSchema, Operation, default_registry, execute_analysis_with_registry,
};
use crate::model::Thumbnail;
use serde_json::Value;

use super::Result;

#[derive(Clone)]
pub struct AnalysisService {
    registry: HashMap<&'static str, Arc<dyn Operation>>,
}

impl std::fmt::Debug for AnalysisService {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AnalysisService")
            .field("registered_analyses", &self.registry.len())
            .finish()
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self {
            registry: default_registry(),
        }
    }
}

impl AnalysisService {
    pub fn list(&self) -> Vec<OpSchema> {
        let mut schemas = self
            .registry
            .values()
            .map(|operation| operation.schema())
            .collect::<Vec<_>>();
        schemas.sort_by(|left, right| left.name.cmp(&right.name));
        schemas
    }

    pub fn execute(&self, op: &str, thumbnail: &Thumbnail, params: &Value) -> Result<OpOutput> {
        Ok(execute_analysis_with_registry(
            &self.registry,
            op,
            thumbnail,
            params,
        )?)
    }

    pub fn registry(&self) -> &HashMap<&'static str, Arc<dyn Operation>> {
        &self.registry
    }
}

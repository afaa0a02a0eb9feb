use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RecipeError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRecipe {
    pub name: Option<String>,
    #[serde(default)]
    pub analyses: Vec<AnalysisInvocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisInvocation {
    pub op: String,
    #[serde(default)]
    pub params: Value,
}

impl AnalysisRecipe {
    pub fn validate(&self) -> Result<()> {
        if self.analyses.is_empty() {
            return Err(RecipeError::Parse(
                "recipe must include at least one analysis".to_string(),
            ));
        }
        for (index, step) in self.analyses.iter().enumerate() {
            if step.op.trim().is_empty() {
                return Err(RecipeError::Parse(format!(
                    "analysis at index {index} has an empty name"
                )));
            }
            if !step.params.is_object() && !step.params.is_null() {
                return Err(RecipeError::Parse(format!(
                    "analysis `{}` parameters must be a JSON object",
                    step.op
                )));
            }
        }
        Ok(())
    }
}

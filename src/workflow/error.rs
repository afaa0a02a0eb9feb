use crate::analysis::AnalysisError;
use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecipeError>;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("recipe parse failure: {0}")]
    Parse(String),

    #[error("recipe I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("recipe serialization failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("recipe YAML serialization failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("analysis execution failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("thumbnail validation failed: {0}")]
    Core(#[from] CoreError),
}

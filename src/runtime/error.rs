use crate::analysis::AnalysisError;
use crate::formats::IoError;
use crate::model::CoreError;
use crate::workflow::RecipeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("thumbnail service error: {0}")]
    Thumbnail(#[from] CoreError),

    #[error("I/O service error: {0}")]
    Io(#[from] IoError),

    #[error("analysis service error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("recipe service error: {0}")]
    Recipe(#[from] RecipeError),
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unknown analysis: {0}")]
    UnknownAnalysis(String),

    #[error("invalid analysis parameters: {0}")]
    InvalidParams(String),

    #[error("degenerate thumbnail: {0}")]
    DegenerateThumbnail(String),
}

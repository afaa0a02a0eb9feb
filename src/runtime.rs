mod analysis_service;
mod context;
mod error;
mod io_service;
mod recipe_service;
mod thumbnail_service;

pub use analysis_service::AnalysisService;
pub use context::AppContext;
pub use error::{AppError, Result};
pub use io_service::IoService;
pub use recipe_service::RecipeService;
pub use thumbnail_service::ThumbnailService;

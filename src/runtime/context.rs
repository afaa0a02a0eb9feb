use super::{AnalysisService, IoService, RecipeService, ThumbnailService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    analysis_service: AnalysisService,
    io_service: IoService,
    recipe_service: RecipeService,
    thumbnail_service: ThumbnailService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analysis_service(&self) -> &AnalysisService {
        &self.analysis_service
    }

    pub fn io_service(&self) -> &IoService {
        &self.io_service
    }

    pub fn recipe_service(&self) -> &RecipeService {
        &self.recipe_service
    }

    pub fn thumbnail_service(&self) -> &ThumbnailService {
        &self.thumbnail_service
    }
}

use std::path::Path;

use crate::model::Thumbnail;
use crate::workflow::{AnalysisRecipe, RecipeReport, load_recipe, run_recipe, save_report};

use super::{AnalysisService, Result};

#[derive(Debug, Clone, Default)]
pub struct RecipeService {
    analyses: AnalysisService,
}

impl RecipeService {
    pub fn load_recipe(&self, path: impl AsRef<Path>) -> Result<AnalysisRecipe> {
        Ok(load_recipe(path)?)
    }

    pub fn run(&self, recipe: &AnalysisRecipe, thumbnail: &Thumbnail) -> Result<RecipeReport> {
        Ok(run_recipe(recipe, thumbnail, self.analyses.registry())?)
    }

    pub fn save_report(&self, path: impl AsRef<Path>, report: &RecipeReport) -> Result<()> {
        save_report(path, report)?;
        Ok(())
    }
}

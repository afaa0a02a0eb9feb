use std::fs;
use std::path::Path;

use super::{AnalysisRecipe, RecipeReport, Result};

pub fn load_recipe(path: impl AsRef<Path>) -> Result<AnalysisRecipe> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let recipe = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<AnalysisRecipe>(&raw)?
    } else {
        serde_json::from_str::<AnalysisRecipe>(&raw)?
    };
    recipe.validate()?;
    Ok(recipe)
}

pub fn save_report(path: impl AsRef<Path>, report: &RecipeReport) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let serialized = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::to_string(report)?
    } else {
        serde_json::to_string_pretty(report)?
    };
    fs::write(path, serialized)?;
    Ok(())
}

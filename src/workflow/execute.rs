use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::{Operation, execute_analysis_with_registry};
use crate::model::Thumbnail;

use super::{AnalysisRecipe, RecipeReport, Result, StepReport};

/// Runs every analysis in the recipe against the same thumbnail, in order.
/// The last analysis that yields a classification decides the report's
/// `image_type`; later measurements overwrite earlier ones on key collisions.
pub fn run_recipe(
    recipe: &AnalysisRecipe,
    thumbnail: &Thumbnail,
    registry: &HashMap<&'static str, Arc<dyn Operation>>,
) -> Result<RecipeReport> {
    recipe.validate()?;
    thumbnail.validate()?;

    let mut steps = Vec::with_capacity(recipe.analyses.len());
    let mut final_measurements = BTreeMap::new();
    let mut image_type = None;

    for invocation in &recipe.analyses {
        let started = Instant::now();
        let output = execute_analysis_with_registry(
            registry,
            &invocation.op,
            thumbnail,
            &invocation.params,
        )?;
        let duration_ms = started.elapsed().as_millis();
        for (key, value) in &output.measurements.values {
            final_measurements.insert(key.clone(), value.clone());
        }
        if output.classification.is_some() {
            image_type = output.classification;
        }
        steps.push(StepReport {
            op: invocation.op.clone(),
            duration_ms,
            classification: output.classification,
            measurements: output.measurements,
        });
    }

    Ok(RecipeReport {
        recipe_name: recipe.name.clone(),
        width: thumbnail.width(),
        height: thumbnail.height(),
        thumbnail: thumbnail.metadata.clone(),
        steps,
        final_measurements,
        image_type,
    })
}

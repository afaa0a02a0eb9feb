use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::{Operation, default_registry};
use crate::model::{ImageType, Thumbnail};
use serde_json::json;
use tempfile::tempdir;

use super::{AnalysisInvocation, AnalysisRecipe, load_recipe, run_recipe, save_report};

fn test_thumbnail() -> Thumbnail {
    // Pink mid-range pixels with a light background: classifies as H&E.
    let mut pixels = vec![[217_u8, 26, 198]; 12];
    pixels.extend_from_slice(&[[255, 255, 255]; 4]);
    let samples = pixels.iter().flatten().copied().collect::<Vec<_>>();
    Thumbnail::from_raw(pixels.len(), 1, samples).expect("thumbnail")
}

fn test_registry() -> HashMap<&'static str, Arc<dyn Operation>> {
    default_registry()
}

#[test]
fn recipe_executes_in_order_and_classifies() {
    let recipe = AnalysisRecipe {
        name: Some("classify".to_string()),
        analyses: vec![
            AnalysisInvocation {
                op: "pixels.stats".to_string(),
                params: json!({}),
            },
            AnalysisInvocation {
                op: "type.estimate".to_string(),
                params: json!({}),
            },
        ],
    };
    let thumbnail = test_thumbnail();
    let report = run_recipe(&recipe, &thumbnail, &test_registry()).expect("recipe");
    assert_eq!(report.steps.len(), 2);
    assert_eq!(report.steps[0].op, "pixels.stats");
    assert!(report.steps[0].classification.is_none());
    assert_eq!(report.image_type, Some(ImageType::BrightfieldHE));
    assert_eq!(report.width, 16);
    assert!(report.final_measurements.contains_key("n_mid"));
    assert!(report.final_measurements.contains_key("image_type"));
}

#[test]
fn empty_recipe_is_rejected() {
    let recipe = AnalysisRecipe {
        name: None,
        analyses: vec![],
    };
    let thumbnail = test_thumbnail();
    assert!(run_recipe(&recipe, &thumbnail, &test_registry()).is_err());
}

#[test]
fn unknown_analysis_fails_the_recipe() {
    let recipe = AnalysisRecipe {
        name: None,
        analyses: vec![AnalysisInvocation {
            op: "no.such.analysis".to_string(),
            params: json!({}),
        }],
    };
    let thumbnail = test_thumbnail();
    assert!(run_recipe(&recipe, &thumbnail, &test_registry()).is_err());
}

#[test]
fn recipes_load_from_json_and_yaml() {
    let dir = tempdir().expect("tempdir");
    let json_path = dir.path().join("recipe.json");
    std::fs::write(
        &json_path,
        r#"{"name": "classify", "analyses": [{"op": "type.estimate"}]}"#,
    )
    .expect("write json");
    let yaml_path = dir.path().join("recipe.yaml");
    std::fs::write(
        &yaml_path,
        "name: classify\nanalyses:\n  - op: pixels.stats\n  - op: type.estimate\n    params:\n      light: 200\n",
    )
    .expect("write yaml");

    let from_json = load_recipe(&json_path).expect("load json");
    assert_eq!(from_json.analyses.len(), 1);
    assert!(from_json.analyses[0].params.is_null());

    let from_yaml = load_recipe(&yaml_path).expect("load yaml");
    assert_eq!(from_yaml.analyses.len(), 2);
    assert_eq!(from_yaml.analyses[1].params, json!({"light": 200}));
}

#[test]
fn report_roundtrips_through_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("report.json");
    let recipe = AnalysisRecipe {
        name: Some("classify".to_string()),
        analyses: vec![AnalysisInvocation {
            op: "type.estimate".to_string(),
            params: json!({}),
        }],
    };
    let thumbnail = test_thumbnail();
    let report = run_recipe(&recipe, &thumbnail, &test_registry()).expect("recipe");
    save_report(&path, &report).expect("save report");

    let raw = std::fs::read_to_string(&path).expect("read report");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse report");
    assert_eq!(value["recipe_name"], json!("classify"));
    assert_eq!(value["image_type"], json!("BrightfieldHE"));
}

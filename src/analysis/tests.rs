use serde_json::json;

use crate::model::{ImageType, Thumbnail};

use super::{
    ClassThresholds, estimate_image_type, execute_analysis, list_analyses,
};

fn thumbnail_from_pixels(pixels: &[[u8; 3]]) -> Thumbnail {
    let samples = pixels.iter().flatten().copied().collect::<Vec<_>>();
    Thumbnail::from_raw(pixels.len(), 1, samples).expect("thumbnail")
}

fn uniform_thumbnail(count: usize, pixel: [u8; 3]) -> Thumbnail {
    thumbnail_from_pixels(&vec![pixel; count])
}

/// A mostly pink thumbnail whose mid-range mean sits on the eosin vector,
/// with a handful of light background pixels.
fn eosin_like_thumbnail() -> Thumbnail {
    let mut pixels = vec![[217, 26, 198]; 40];
    pixels.extend_from_slice(&[[255, 255, 255]; 4]);
    thumbnail_from_pixels(&pixels)
}

/// A mostly brown thumbnail whose mid-range mean sits on the DAB vector.
fn dab_like_thumbnail() -> Thumbnail {
    let mut pixels = vec![[137, 69, 43]; 40];
    pixels.extend_from_slice(&[[255, 255, 255]; 4]);
    thumbnail_from_pixels(&pixels)
}

#[test]
fn contains_required_analyses() {
    let names = list_analyses()
        .into_iter()
        .map(|schema| schema.name)
        .collect::<Vec<_>>();
    assert!(names.contains(&"pixels.stats".to_string()));
    assert!(names.contains(&"stains.angles".to_string()));
    assert!(names.contains(&"type.estimate".to_string()));
}

#[test]
fn non_rgb_source_is_always_fluorescence() {
    let mut thumbnail = uniform_thumbnail(16, [250, 250, 250]);
    thumbnail.metadata.rgb = false;
    let estimate = estimate_image_type(&thumbnail, ClassThresholds::default());
    assert_eq!(estimate.image_type, ImageType::Fluorescence);
    // The short-circuit skips the pixel scan entirely.
    assert!(estimate.counts.is_none());
    assert!(estimate.angles.is_none());
}

#[test]
fn all_mid_tone_thumbnail_is_unset() {
    let thumbnail = uniform_thumbnail(25, [128, 100, 140]);
    let estimate = estimate_image_type(&thumbnail, ClassThresholds::default());
    assert_eq!(estimate.image_type, ImageType::Unset);
    let counts = estimate.counts.expect("scanned");
    assert_eq!(counts.dark, 0);
    assert_eq!(counts.light, 0);
    assert_eq!(counts.mid, 25);
}

#[test]
fn dark_majority_is_fluorescence() {
    let mut pixels = vec![[0, 0, 0]; 10];
    pixels.extend_from_slice(&[[255, 255, 255]; 4]);
    pixels.extend_from_slice(&[[128, 128, 128]; 6]);
    let thumbnail = thumbnail_from_pixels(&pixels);
    let estimate = estimate_image_type(&thumbnail, ClassThresholds::default());
    assert_eq!(estimate.image_type, ImageType::Fluorescence);
    assert!(estimate.angles.is_none());
}

#[test]
fn dark_light_tie_is_fluorescence() {
    let pixels = [[0, 0, 0], [255, 255, 255], [128, 128, 128]];
    let thumbnail = thumbnail_from_pixels(&pixels);
    let estimate = estimate_image_type(&thumbnail, ClassThresholds::default());
    assert_eq!(estimate.image_type, ImageType::Fluorescence);
}

#[test]
fn eosin_like_mean_reads_as_h_and_e() {
    let estimate = estimate_image_type(&eosin_like_thumbnail(), ClassThresholds::default());
    assert_eq!(estimate.image_type, ImageType::BrightfieldHE);
    let angles = estimate.angles.expect("angles");
    assert!(angles.eosin < 1.0);
    assert!(angles.eosin < angles.hematoxylin);
    assert!(angles.eosin < angles.dab);
}

#[test]
fn dab_like_mean_reads_as_h_dab() {
    let estimate = estimate_image_type(&dab_like_thumbnail(), ClassThresholds::default());
    assert_eq!(estimate.image_type, ImageType::BrightfieldHDab);
    let angles = estimate.angles.expect("angles");
    assert!(angles.dab < angles.eosin);
}

#[test]
fn hematoxylin_dominant_mean_reads_as_h_dab() {
    // Blue-purple mid-range mean aligned with the hematoxylin vector.
    let mut pixels = vec![[57, 51, 131]; 40];
    pixels.extend_from_slice(&[[255, 255, 255]; 4]);
    let thumbnail = thumbnail_from_pixels(&pixels);
    let estimate = estimate_image_type(&thumbnail, ClassThresholds::default());
    assert_eq!(estimate.image_type, ImageType::BrightfieldHDab);
    let angles = estimate.angles.expect("angles");
    assert!(angles.hematoxylin < angles.eosin);
}

#[test]
fn all_light_thumbnail_is_unset() {
    let thumbnail = uniform_thumbnail(9, [255, 255, 255]);
    let estimate = estimate_image_type(&thumbnail, ClassThresholds::default());
    assert_eq!(estimate.image_type, ImageType::Unset);
    let counts = estimate.counts.expect("scanned");
    assert_eq!(counts.mid, 0);
    assert!(counts.light > 0);
}

#[test]
fn estimation_is_deterministic() {
    let thumbnail = eosin_like_thumbnail();
    let first = estimate_image_type(&thumbnail, ClassThresholds::default());
    let second = estimate_image_type(&thumbnail, ClassThresholds::default());
    assert_eq!(first, second);
}

#[test]
fn estimate_analysis_reports_classification_and_angles() {
    let output =
        execute_analysis("type.estimate", &eosin_like_thumbnail(), &json!({})).expect("estimate");
    assert_eq!(output.classification, Some(ImageType::BrightfieldHE));
    let values = &output.measurements.values;
    assert_eq!(
        values.get("image_type").and_then(|value| value.as_str()),
        Some("Brightfield (H&E)")
    );
    assert_eq!(
        values.get("n_light").and_then(|value| value.as_u64()),
        Some(4)
    );
    assert!(values.contains_key("angle_eosin"));
}

#[test]
fn stats_analysis_counts_classes_and_truncates_mean() {
    let pixels = [
        [0, 0, 0],
        [255, 255, 255],
        [255, 255, 255],
        [10, 20, 30],
        [11, 21, 31],
    ];
    let thumbnail = thumbnail_from_pixels(&pixels);
    let output = execute_analysis("pixels.stats", &thumbnail, &json!({})).expect("stats");
    let values = &output.measurements.values;
    assert_eq!(values.get("n_dark").and_then(|v| v.as_u64()), Some(1));
    assert_eq!(values.get("n_light").and_then(|v| v.as_u64()), Some(2));
    assert_eq!(values.get("n_mid").and_then(|v| v.as_u64()), Some(2));
    // (10 + 11) / 2 truncates to 10.
    assert_eq!(values.get("mean_red").and_then(|v| v.as_u64()), Some(10));
    assert_eq!(values.get("mean_green").and_then(|v| v.as_u64()), Some(20));
    assert_eq!(values.get("mean_blue").and_then(|v| v.as_u64()), Some(30));
}

#[test]
fn stats_analysis_honors_custom_thresholds() {
    let thumbnail = uniform_thumbnail(8, [30, 30, 30]);
    let default_output = execute_analysis("pixels.stats", &thumbnail, &json!({})).expect("stats");
    assert_eq!(
        default_output
            .measurements
            .values
            .get("n_mid")
            .and_then(|v| v.as_u64()),
        Some(8)
    );
    let output = execute_analysis("pixels.stats", &thumbnail, &json!({"dark": 40})).expect("stats");
    let values = &output.measurements.values;
    assert_eq!(values.get("n_dark").and_then(|v| v.as_u64()), Some(8));
    assert!(values.get("mean_red").expect("key").is_null());
}

#[test]
fn invalid_threshold_params_are_rejected() {
    let thumbnail = uniform_thumbnail(4, [128, 128, 128]);
    let error = execute_analysis(
        "pixels.stats",
        &thumbnail,
        &json!({"dark": 220, "light": 25}),
    )
    .expect_err("inverted thresholds");
    assert!(error.to_string().contains("light"));

    let error = execute_analysis("pixels.stats", &thumbnail, &json!({"dark": 300}))
        .expect_err("out of range");
    assert!(error.to_string().contains("dark"));
}

#[test]
fn angles_analysis_reports_reference_angles() {
    let output =
        execute_analysis("stains.angles", &dab_like_thumbnail(), &json!({})).expect("angles");
    let values = &output.measurements.values;
    let dab = values
        .get("angle_dab")
        .and_then(|value| value.as_f64())
        .expect("dab angle");
    let eosin = values
        .get("angle_eosin")
        .and_then(|value| value.as_f64())
        .expect("eosin angle");
    assert!(dab < eosin);
    assert!(values.contains_key("od_red"));
}

#[test]
fn angles_analysis_rejects_degenerate_thumbnail() {
    let thumbnail = uniform_thumbnail(4, [255, 255, 255]);
    let error =
        execute_analysis("stains.angles", &thumbnail, &json!({})).expect_err("no mid pixels");
    assert!(error.to_string().contains("degenerate"));
}

#[test]
fn unknown_analysis_is_an_error() {
    let thumbnail = uniform_thumbnail(4, [128, 128, 128]);
    let error = execute_analysis("does.not.exist", &thumbnail, &json!({})).expect_err("unknown");
    assert!(error.to_string().contains("unknown analysis"));
}

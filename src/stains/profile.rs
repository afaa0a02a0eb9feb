use serde::Serialize;

use super::StainVector;
use super::od::optical_density;

// Ruifrok & Johnston reference stain vectors.
const HEMATOXYLIN: (f64, f64, f64) = (0.65, 0.70, 0.29);
const EOSIN: (f64, f64, f64) = (0.07, 0.99, 0.11);
const DAB: (f64, f64, f64) = (0.27, 0.57, 0.78);

const DEFAULT_MAX: f64 = 255.0;

/// A pair of reference stain vectors plus the per-channel transmitted-light
/// maxima used when converting pixel means into optical density.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StainProfile {
    name: String,
    stain_one: StainVector,
    stain_two: StainVector,
    max_red: f64,
    max_green: f64,
    max_blue: f64,
}

impl StainProfile {
    pub fn hematoxylin_eosin() -> Self {
        Self {
            name: "H&E default".to_string(),
            stain_one: reference_stain("Hematoxylin", HEMATOXYLIN),
            stain_two: reference_stain("Eosin", EOSIN),
            max_red: DEFAULT_MAX,
            max_green: DEFAULT_MAX,
            max_blue: DEFAULT_MAX,
        }
    }

    pub fn hematoxylin_dab() -> Self {
        Self {
            name: "H-DAB default".to_string(),
            stain_one: reference_stain("Hematoxylin", HEMATOXYLIN),
            stain_two: reference_stain("DAB", DAB),
            max_red: DEFAULT_MAX,
            max_green: DEFAULT_MAX,
            max_blue: DEFAULT_MAX,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stain_one(&self) -> &StainVector {
        &self.stain_one
    }

    pub fn stain_two(&self) -> &StainVector {
        &self.stain_two
    }

    pub fn max_red(&self) -> f64 {
        self.max_red
    }

    pub fn max_green(&self) -> f64 {
        self.max_green
    }

    pub fn max_blue(&self) -> f64 {
        self.max_blue
    }

    /// Converts a mean RGB triplet into an optical-density triplet using this
    /// profile's channel maxima.
    pub fn od_from_mean(&self, mean: [f64; 3]) -> [f64; 3] {
        [
            optical_density(mean[0], self.max_red),
            optical_density(mean[1], self.max_green),
            optical_density(mean[2], self.max_blue),
        ]
    }
}

pub fn builtin_profiles() -> Vec<StainProfile> {
    vec![
        StainProfile::hematoxylin_eosin(),
        StainProfile::hematoxylin_dab(),
    ]
}

fn reference_stain(name: &str, (red, green, blue): (f64, f64, f64)) -> StainVector {
    StainVector::new(name, red, green, blue).expect("reference stain vectors are normalizable")
}

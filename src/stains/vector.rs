use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StainError>;

#[derive(Debug, Error)]
pub enum StainError {
    #[error("stain vector `{name}` has zero length")]
    ZeroLength { name: String },

    #[error("stain vector `{name}` has a non-finite component")]
    NonFinite { name: String },
}

/// A unit vector in optical-density space describing a stain's color signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StainVector {
    name: String,
    red: f64,
    green: f64,
    blue: f64,
}

impl StainVector {
    /// Creates a stain vector, normalizing the components to unit length.
    pub fn new(name: &str, red: f64, green: f64, blue: f64) -> Result<Self> {
        if !(red.is_finite() && green.is_finite() && blue.is_finite()) {
            return Err(StainError::NonFinite {
                name: name.to_string(),
            });
        }
        let length = (red * red + green * green + blue * blue).sqrt();
        if length <= 0.0 {
            return Err(StainError::ZeroLength {
                name: name.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            red: red / length,
            green: green / length,
            blue: blue / length,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn red(&self) -> f64 {
        self.red
    }

    pub fn green(&self) -> f64 {
        self.green
    }

    pub fn blue(&self) -> f64 {
        self.blue
    }

    pub fn components(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Angular distance to another stain vector, in degrees.
    pub fn angle_to(&self, other: &StainVector) -> f64 {
        let dot = self.red * other.red + self.green * other.green + self.blue * other.blue;
        dot.clamp(-1.0, 1.0).acos().to_degrees()
    }
}

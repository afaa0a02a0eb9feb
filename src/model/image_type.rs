use serde::{Deserialize, Serialize};

/// Classification of a microscopy acquisition, as estimated from a thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ImageType {
    #[default]
    Unset,
    BrightfieldHE,
    BrightfieldHDab,
    Fluorescence,
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unset => "Unset",
            Self::BrightfieldHE => "Brightfield (H&E)",
            Self::BrightfieldHDab => "Brightfield (H-DAB)",
            Self::Fluorescence => "Fluorescence",
        };
        formatter.write_str(name)
    }
}

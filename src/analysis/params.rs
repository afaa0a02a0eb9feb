use serde_json::Value;

use super::stats::ClassThresholds;
use super::{AnalysisError, Result};

fn get_optional_threshold(params: &Value, key: &str, default: u8) -> Result<u8> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_u64()
            .and_then(|raw| u8::try_from(raw).ok())
            .ok_or_else(|| {
                AnalysisError::InvalidParams(format!(
                    "parameter `{key}` must be an integer between 0 and 255"
                ))
            }),
    }
}

pub(crate) fn thresholds_from_params(params: &Value) -> Result<ClassThresholds> {
    let defaults = ClassThresholds::default();
    let dark = get_optional_threshold(params, "dark", defaults.dark)?;
    let light = get_optional_threshold(params, "light", defaults.light)?;
    if light <= dark {
        return Err(AnalysisError::InvalidParams(
            "`light` must be greater than `dark`".to_string(),
        ));
    }
    Ok(ClassThresholds { dark, light })
}

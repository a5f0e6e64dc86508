pub mod double_slit;
pub mod field;
pub mod geodesic;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use ontologica_field::config::FieldConfig;

/// Reads and parses a YAML field configuration.
pub fn load_config(path: &Path) -> Result<FieldConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

//! Border presets: a `//` comment header followed by the pretty-printed
//! `BorderConfig` JSON. Anything before the first `{` is ignored on load.
use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::params::BorderConfig;
use crate::error::{Error, Result};

pub const PRESET_EXTENSION: &str = "wbpreset";

pub fn preset_to_string(config: &BorderConfig) -> Result<String> {
    let mut preset_content = String::new();
    preset_content.push_str("// ==========================================\n");
    preset_content.push_str("// whiteborder Configuration Preset\n");
    preset_content.push_str("// ==========================================\n");
    preset_content.push_str(&format!("// Version: {}\n", env!("CARGO_PKG_VERSION")));
    preset_content.push_str(&format!(
        "// Generated: {}\n",
        chrono::Utc::now().to_rfc3339()
    ));
    preset_content.push_str("// Note: input files are not included in presets\n");
    preset_content.push_str("// ==========================================\n\n");

    let json = serde_json::to_string_pretty(config)?;
    preset_content.push_str(&json);
    preset_content.push('\n');
    Ok(preset_content)
}

pub fn preset_from_str(content: &str) -> Result<BorderConfig> {
    let json_start = content
        .find('{')
        .ok_or_else(|| Error::InvalidPreset("no JSON content found".to_string()))?;
    let config: BorderConfig = serde_json::from_str(&content[json_start..])?;
    config.validate()?;
    Ok(config)
}

pub fn save_preset(path: &Path, config: &BorderConfig) -> Result<()> {
    fs::write(path, preset_to_string(config)?)?;
    info!("Preset saved to: {:?}", path);
    Ok(())
}

pub fn load_preset(path: &Path) -> Result<BorderConfig> {
    let content = fs::read_to_string(path)?;
    let config = preset_from_str(&content)?;
    info!("Preset loaded from: {:?}", path);
    Ok(config)
}

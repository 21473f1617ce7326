use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use cprop_emitter::ComputedPropertiesOptions;

use crate::args::CliArgs;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "cprop.json";

/// Custom deserializer for boolean options that accepts both bool and string values.
/// This handles configs that contain `"loose": "true"` instead of `"loose": true`.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => {
            let normalized = s.trim().to_lowercase();
            match normalized.as_str() {
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(Error::custom(format!(
                    "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
                ))),
            }
        }
    }
}

/// Contents of `cprop.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpropConfig {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub loose: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub emit_helpers: Option<bool>,
}

/// Options after merging the config file with command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub transform: ComputedPropertiesOptions,
    pub emit_helpers: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            transform: ComputedPropertiesOptions::default(),
            emit_helpers: true,
        }
    }
}

pub fn parse_config(source: &str) -> Result<CpropConfig> {
    let config = serde_json::from_str(source)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<CpropConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// `cprop.json` in `dir`, if there is one.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Merge config values with flags. A flag that is set always wins.
pub fn resolve_options(config: Option<&CpropConfig>, args: &CliArgs) -> ResolvedOptions {
    let defaults = ResolvedOptions::default();
    let loose = args.loose || config.and_then(|c| c.loose).unwrap_or(defaults.transform.loose);
    let emit_helpers = !args.no_helpers
        && config
            .and_then(|c| c.emit_helpers)
            .unwrap_or(defaults.emit_helpers);

    ResolvedOptions {
        transform: ComputedPropertiesOptions { loose },
        emit_helpers,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::defaults::generate_default_config;
use super::paths::discover_config_path;
use super::settings::RagSettings;
use super::validation::validate_config;
use crate::core::errors::RagError;

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
}

impl ConfigService {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Uses `PAGEWISE_CONFIG_PATH` or a `pagewise.{yml,yaml,toml}` in the
    /// working directory.
    pub fn discover() -> Self {
        Self::new(discover_config_path())
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Defaults merged with the config file, validated but untyped.
    pub fn load_config(&self) -> Result<Value, RagError> {
        let defaults = generate_default_config();
        let file_config = match &self.path {
            Some(path) => load_config_file(path)?,
            None => Value::Object(Map::new()),
        };
        let merged = deep_merge(&defaults, &file_config);
        validate_config(&merged)?;
        Ok(merged)
    }

    pub fn load_settings(&self) -> Result<RagSettings, RagError> {
        let merged = self.load_config()?;
        serde_json::from_value(merged).map_err(RagError::config)
    }
}

fn load_config_file(path: &Path) -> Result<Value, RagError> {
    if !path.exists() {
        tracing::debug!("Config file {} not found, using defaults", path.display());
        return Ok(Value::Object(Map::new()));
    }

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let value: Value = if is_toml {
        toml::from_str(&contents).map_err(|err| {
            RagError::Config(format!("{}: {}", path.display(), err))
        })?
    } else {
        serde_yaml::from_str(&contents).map_err(|err| {
            RagError::Config(format!("{}: {}", path.display(), err))
        })?
    };

    match value {
        Value::Object(_) => Ok(value),
        Value::Null => Ok(Value::Object(Map::new())),
        _ => Err(RagError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
    }
}

fn deep_merge(base: &Value, override_value: &Value) -> Value {
    match (base, override_value) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            let mut merged: Map<String, Value> = base_map.clone();
            for (key, value) in override_map {
                let merged_value = match merged.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), merged_value);
            }
            Value::Object(merged)
        }
        _ => override_value.clone(),
    }
}

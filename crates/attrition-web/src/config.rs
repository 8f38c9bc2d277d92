use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Runtime configuration for the form server.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: String::from("127.0.0.1"),
            port: 8080,
            model_path: PathBuf::from("models/attrition_logistic.json"),
        }
    }
}

impl AppConfig {
    /// Overlay the defaults with fields from a JSON config file. Missing or
    /// invalid fields keep their default, with a warning.
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let partial: serde_json::Value = serde_json::from_str(&config_json)
            .with_context(|| format!("Config file is not valid JSON: {:?}", path))?;
        let mut config = AppConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            };
        }

        load_or_default!(host);
        load_or_default!(port);
        load_or_default!(model_path);

        Ok(config)
    }
}

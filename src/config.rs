use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

use crate::languages;
use crate::translate::google;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    12800
}

fn default_static_dir() -> String {
    "static".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_source_lang")]
    pub default_source: String,
    #[serde(default = "default_target_lang")]
    pub default_target: String,
}

fn default_endpoint() -> String {
    google::DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_source_lang() -> String {
    languages::DEFAULT_SOURCE.to_string()
}

fn default_target_lang() -> String {
    languages::DEFAULT_TARGET.to_string()
}

impl Config {
    /// Load configuration from a YAML or JSON file, chosen by extension.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            default_source: default_source_lang(),
            default_target: default_target_lang(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.system_config.port, 12800);
        assert_eq!(config.translator_config.default_source, "auto");
        assert_eq!(config.translator_config.default_target, "en");
        assert!(config.translator_config.endpoint.starts_with("https://"));
    }

    #[test]
    fn partial_yaml_fills_in_defaults() {
        let yaml = r#"
system_config:
  port: 9000
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.translator_config.timeout_secs, 10);
    }

    #[test]
    fn json_config_parses() {
        let json = r#"{
            "translator_config": {
                "endpoint": "http://localhost:9999",
                "default_target": "pt"
            }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.translator_config.endpoint, "http://localhost:9999");
        assert_eq!(config.translator_config.default_target, "pt");
        assert_eq!(config.translator_config.default_source, "auto");
    }
}

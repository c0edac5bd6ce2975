//! Configuration loading and types for neurolens
//!
//! Configuration is loaded in layers:
//! 1. Built-in defaults
//! 2. Config file (~/.config/neurolens/config.toml)
//! 3. Environment variables (NEUROLENS_*)
//! 4. CLI arguments (highest priority)

use crate::error::NeurolensError;
use crate::rewrite::{Tone, DEFAULT_FRIENDLY_MARKER};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default configuration file content
pub const DEFAULT_CONFIG: &str = r#"# NeuroLens Configuration
#
# Location: ~/.config/neurolens/config.toml
# All settings can be overridden via CLI flags

[rewrite]
# Tone used when none is given on the command line
# Options: formal, friendly, assertive, simplified, empathetic, concise
default_tone = "formal"

# Marker the friendly tone adds after the first sentence
friendly_marker = "😊"

# Fix the empathetic opener sequence for reproducible output
# seed = 42

# Custom word replacements, applied case-insensitively before any tone
# [rewrite.replacements]
# "gotta" = "have to"

[output]
# Output format: "text" or "json"
format = "text"
"#;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub rewrite: RewriteConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Tone rewriting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RewriteConfig {
    /// Tone applied when the caller does not pick one
    #[serde(default = "default_tone")]
    pub default_tone: Tone,

    /// Marker the friendly tone appends to the first sentence
    #[serde(default = "default_friendly_marker")]
    pub friendly_marker: String,

    /// Seed for the empathetic opener (random per run when unset)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Custom word replacements (case-insensitive)
    /// Example: { "gotta" = "have to" }
    #[serde(default)]
    pub replacements: BTreeMap<String, String>,
}

fn default_tone() -> Tone {
    Tone::Formal
}

fn default_friendly_marker() -> String {
    DEFAULT_FRIENDLY_MARKER.to_string()
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            default_tone: default_tone(),
            friendly_marker: default_friendly_marker(),
            seed: None,
            replacements: BTreeMap::new(),
        }
    }
}

/// Result output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tone header followed by the rewritten text
    #[default]
    Text,
    /// serde_json rendering of the results
    Json,
}

impl FromStr for OutputFormat {
    type Err = NeurolensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(NeurolensError::UnknownFormat(s.to_string())),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "neurolens")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "neurolens")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensure the config directory exists
    pub fn ensure_directories() -> std::io::Result<()> {
        if let Some(config_dir) = Self::config_dir() {
            std::fs::create_dir_all(&config_dir)?;
            tracing::debug!("Ensured config directory exists: {:?}", config_dir);
        }
        Ok(())
    }
}

/// Load configuration from file, with defaults for missing values
pub fn load_config(path: Option<&Path>) -> Result<Config, NeurolensError> {
    // Start with defaults
    let mut config = Config::default();

    // Determine config file path
    let config_path = path.map(PathBuf::from).or_else(Config::default_path);

    // Load from file if it exists
    if let Some(ref path) = config_path {
        if path.exists() {
            tracing::debug!("Loading config from {:?}", path);
            let contents = std::fs::read_to_string(path)
                .map_err(|e| NeurolensError::Config(format!("Failed to read config: {}", e)))?;

            config = toml::from_str(&contents)
                .map_err(|e| NeurolensError::Config(format!("Invalid config: {}", e)))?;
        } else {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
        }
    }

    // Override from environment variables
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

/// Apply NEUROLENS_* overrides using `lookup` to read variables
fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), NeurolensError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(tone) = lookup("NEUROLENS_TONE") {
        config.rewrite.default_tone = tone.parse()?;
    }
    if let Some(format) = lookup("NEUROLENS_FORMAT") {
        config.output.format = format.parse()?;
    }
    if let Some(seed) = lookup("NEUROLENS_SEED") {
        let seed = seed
            .trim()
            .parse()
            .map_err(|e| NeurolensError::Config(format!("Invalid NEUROLENS_SEED: {}", e)))?;
        config.rewrite.seed = Some(seed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rewrite.default_tone, Tone::Formal);
        assert_eq!(config.rewrite.friendly_marker, "😊");
        assert_eq!(config.rewrite.seed, None);
        assert!(config.rewrite.replacements.is_empty());
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_default_config_file_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.rewrite.default_tone, Tone::Formal);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
            [rewrite]
            default_tone = "concise"
            seed = 9

            [rewrite.replacements]
            "gotta" = "have to"

            [output]
            format = "json"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rewrite.default_tone, Tone::Concise);
        assert_eq!(config.rewrite.friendly_marker, "😊"); // default
        assert_eq!(config.rewrite.seed, Some(9));
        assert_eq!(
            config.rewrite.replacements.get("gotta").map(String::as_str),
            Some("have to")
        );
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.rewrite.default_tone, Tone::Formal);
    }

    #[test]
    fn test_parse_rejects_unknown_tone() {
        let result: Result<Config, _> = toml::from_str("[rewrite]\ndefault_tone = \"rude\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("NEUROLENS_TONE", "Friendly"),
            ("NEUROLENS_FORMAT", "JSON"),
            ("NEUROLENS_SEED", "17"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        apply_env_overrides(&mut config, |key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.rewrite.default_tone, Tone::Friendly);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.rewrite.seed, Some(17));
    }

    #[test]
    fn test_env_override_bad_tone() {
        let mut config = Config::default();
        let err = apply_env_overrides(&mut config, |key| {
            (key == "NEUROLENS_TONE").then(|| "grumpy".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, NeurolensError::UnknownTone(_)));
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.rewrite.friendly_marker = ":)".to_string();
        config
            .rewrite
            .replacements
            .insert("gotta".to_string(), "have to".to_string());
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.rewrite.friendly_marker, ":)");
        assert_eq!(loaded.rewrite.replacements.len(), 1);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[rewrite\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}

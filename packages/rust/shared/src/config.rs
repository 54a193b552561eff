//! Application configuration for Strategist.
//!
//! User config lives at `~/.strategist/strategist.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrategistError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "strategist.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".strategist";

// ---------------------------------------------------------------------------
// Config structs (matching strategist.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the knowledge documents live.
    #[serde(default)]
    pub knowledge: KnowledgeConfig,

    /// Consult selection limits.
    #[serde(default)]
    pub consult: ConsultConfig,
}

/// `[knowledge]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Directory holding `frameworks.json`, `experience.json`, `profile.json`,
    /// `career.json` and `contact.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data".into()
}

/// `[consult]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultConfig {
    /// Frameworks kept after domain aggregation.
    #[serde(default = "default_max_frameworks")]
    pub max_frameworks: usize,

    /// Experiences kept after domain aggregation.
    #[serde(default = "default_max_experiences")]
    pub max_experiences: usize,

    /// Shortest brief accepted by the consult tool, in characters.
    #[serde(default = "default_min_brief_chars")]
    pub min_brief_chars: usize,
}

impl Default for ConsultConfig {
    fn default() -> Self {
        Self {
            max_frameworks: default_max_frameworks(),
            max_experiences: default_max_experiences(),
            min_brief_chars: default_min_brief_chars(),
        }
    }
}

fn default_max_frameworks() -> usize {
    4
}
fn default_max_experiences() -> usize {
    3
}
fn default_min_brief_chars() -> usize {
    10
}

// ---------------------------------------------------------------------------
// Consult limits (runtime, derived from config)
// ---------------------------------------------------------------------------

/// Runtime selection caps handed to the retrieval engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsultLimits {
    /// Maximum frameworks in a consult response.
    pub max_frameworks: usize,
    /// Maximum experiences in a consult response.
    pub max_experiences: usize,
    /// Minimum brief length enforced at the tool boundary.
    pub min_brief_chars: usize,
}

impl Default for ConsultLimits {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for ConsultLimits {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_frameworks: config.consult.max_frameworks,
            max_experiences: config.consult.max_experiences,
            min_brief_chars: config.consult.min_brief_chars,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.strategist/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| StrategistError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.strategist/strategist.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| StrategistError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        StrategistError::config(format!("failed to parse {}: {e}", path.display()))
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Reject limits that would make every consult response empty.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.consult.max_frameworks == 0 && config.consult.max_experiences == 0 {
        return Err(StrategistError::config(
            "consult.max_frameworks and consult.max_experiences cannot both be 0",
        ));
    }
    if config.knowledge.data_dir.trim().is_empty() {
        return Err(StrategistError::config("knowledge.data_dir is empty"));
    }
    Ok(())
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| StrategistError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| StrategistError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| StrategistError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

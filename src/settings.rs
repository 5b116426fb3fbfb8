//! Backend settings
//!
//! Precedence, lowest to highest: built-in defaults, the global config file
//! (`<config dir>/aiiac/config.toml`), the project file (`aiiac.toml` or an explicit
//! path), `AIIAC_*` environment variables. CLI flags are applied by the binary on top.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{AiiacError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "codellama";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const CONFIG_FILE_NAME: &str = "aiiac.toml";
const MAX_TEMPERATURE: f32 = 2.0;

#[derive(Debug, Deserialize)]
struct SettingsFile {
    version: Option<u32>,
    llm: Option<LlmSection>,
}

#[derive(Debug, Default, Deserialize)]
struct LlmSection {
    base_url: Option<String>,
    model: Option<String>,
    temperature: Option<f32>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Base address of the text-generation service
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load settings from every layer and validate the result.
    ///
    /// An explicit `config_path` must exist; the implicit `aiiac.toml` in the
    /// working directory is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(global) = Self::global_config_path()
            && global.exists()
        {
            debug!("Loading global settings from {}", global.display());
            settings.merge_file(&global)?;
        }

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(AiiacError::config_error(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings.merge_file(path)?;
            }
            None => {
                let project = PathBuf::from(CONFIG_FILE_NAME);
                if project.exists() {
                    debug!("Loading project settings from {}", project.display());
                    settings.merge_file(&project)?;
                }
            }
        }

        settings.merge_env(|key| std::env::var(key).ok());
        settings.validate()?;

        Ok(settings)
    }

    /// `<config dir>/aiiac/config.toml`, if the platform has a config dir
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aiiac").join("config.toml"))
    }

    /// Override fields with the values present in a TOML settings file.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path)?;
        let parsed: SettingsFile = toml::from_str(&contents).map_err(|e| {
            AiiacError::config_error(format!("Failed to parse {}: {e}", path.display()))
        })?;

        if let Some(version) = parsed.version
            && version != 1
        {
            return Err(AiiacError::config_error(format!(
                "Unsupported {} version {version} (expected 1)",
                path.display()
            )));
        }

        let llm = parsed.llm.unwrap_or_default();
        if let Some(base_url) = llm.base_url {
            self.base_url = base_url;
        }
        if let Some(model) = llm.model {
            self.model = model;
        }
        if let Some(temperature) = llm.temperature {
            self.temperature = temperature;
        }
        if let Some(timeout_secs) = llm.timeout_secs {
            self.timeout_secs = timeout_secs;
        }

        Ok(())
    }

    /// Apply `AIIAC_*` overrides. `lookup` abstracts the environment so callers
    /// can feed a fixed map.
    pub fn merge_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("AIIAC_BASE_URL") {
            debug!("Loading AIIAC_BASE_URL from environment: {url}");
            self.base_url = url;
        }

        if let Some(model) = lookup("AIIAC_MODEL") {
            debug!("Loading AIIAC_MODEL from environment: {model}");
            self.model = model;
        }

        if let Some(raw) = lookup("AIIAC_TEMPERATURE") {
            match raw.parse::<f32>() {
                Ok(temperature) => self.temperature = temperature,
                Err(_) => warn!("Invalid AIIAC_TEMPERATURE value: {raw}"),
            }
        }

        if let Some(raw) = lookup("AIIAC_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(timeout) => self.timeout_secs = timeout,
                Err(_) => warn!("Invalid AIIAC_TIMEOUT_SECS value: {raw}"),
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(AiiacError::config_error("Backend base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AiiacError::config_error(format!(
                "Backend base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.model.trim().is_empty() {
            return Err(AiiacError::config_error("Model name cannot be empty"));
        }

        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(AiiacError::config_error(format!(
                "Temperature must be between 0 and {MAX_TEMPERATURE}, got {}",
                self.temperature
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AiiacError::config_error("Timeout must be greater than zero"));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

//! Application settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::SceneSettings;

/// Environment variable holding the model API key (never written to disk)
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Remote agent endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Messages endpoint
    pub api_url: String,
    /// Value of the `anthropic-version` header
    pub api_version: String,
    pub model: String,
    pub max_tokens: u32,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.anthropic.com/v1/messages".to_string(),
            api_version: "2023-06-01".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 500,
            timeout_secs: 30,
        }
    }
}

/// Fog and lighting of the office
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    pub fog_enabled: bool,
    pub fog_start: f64,
    pub fog_end: f64,
    pub ambient_intensity: f64,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            fog_enabled: false,
            fog_start: 60.0,
            fog_end: 250.0,
            ambient_intensity: 0.4,
        }
    }
}

impl EnvironmentSettings {
    /// Environment part of a loaded document
    pub fn from_scene(settings: &SceneSettings) -> Self {
        Self {
            fog_enabled: settings.fog_enabled,
            fog_start: settings.fog_start,
            fog_end: settings.fog_end,
            ambient_intensity: settings.ambient_intensity,
        }
    }

    /// Document settings without embed URLs
    pub fn to_scene(&self) -> SceneSettings {
        SceneSettings {
            fog_enabled: self.fog_enabled,
            fog_start: self.fog_start,
            fog_end: self.fog_end,
            ambient_intensity: self.ambient_intensity,
            al_figma_url: None,
            ad_figma_url: None,
        }
    }
}

/// All application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// Where scene data is stored; platform data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub agent: AgentSettings,
    /// Defaults used until a saved scene says otherwise
    #[serde(default)]
    pub environment: EnvironmentSettings,
}

impl AppSettings {
    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("com", "virtual-office", "virtual-office")
    }

    /// Settings file location
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from a specific file, or return default
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&json) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::error!("Failed to create {}: {e}", parent.display());
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::error!("Failed to write settings: {e}");
                }
            }
            Err(e) => tracing::error!("Failed to serialize settings: {e}"),
        }
    }

    /// Directory holding the persisted scene keys
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
    }

    /// API key from the environment, if set and non-empty
    pub fn api_key_from_env() -> Option<String> {
        std::env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty())
    }
}

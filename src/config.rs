//! # Configuration Module
//!
//! Runtime settings for the bot, loaded once at startup from a TOML file.
//! Every section carries production defaults so a partial (or empty) file
//! still yields a working configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Default location of the configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level bot configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub languages: LanguagesConfig,
    #[serde(default)]
    pub data_sources: DataSourcesConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

/// Language settings. The language is fixed for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguagesConfig {
    #[serde(default = "default_language")]
    pub default: String,
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            default: default_language(),
        }
    }
}

/// Remote catalogue endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourcesConfig {
    /// Endpoint returning the `{ "manufacturers": [...] }` document
    #[serde(default = "default_manufacturers_url")]
    pub manufacturers_url: String,
    /// Per-manufacturer model endpoint; `{model}` is replaced with the manufacturer id
    #[serde(default = "default_base_model_url")]
    pub base_model_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for DataSourcesConfig {
    fn default() -> Self {
        Self {
            manufacturers_url: default_manufacturers_url(),
            base_model_url: default_base_model_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Page sizes and grid shapes for the paginated screens.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Manufacturers shown per page
    #[serde(default = "default_manufacturers_per_page")]
    pub manufacturers_per_page: usize,
    /// Manufacturer buttons per row
    #[serde(default = "default_manufacturers_columns")]
    pub manufacturers_columns: usize,
    /// Models shown per page (one per row)
    #[serde(default = "default_models_per_page")]
    pub models_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            manufacturers_per_page: default_manufacturers_per_page(),
            manufacturers_columns: default_manufacturers_columns(),
            models_per_page: default_models_per_page(),
        }
    }
}

/// External links shown on the main menu.
#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    #[serde(default = "default_support_link")]
    pub support: String,
    #[serde(default = "default_channel_link")]
    pub channel: String,
    #[serde(default = "default_request_settings_link")]
    pub request_settings: String,
    #[serde(default = "default_download_app_link")]
    pub download_app: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            support: default_support_link(),
            channel: default_channel_link(),
            request_settings: default_request_settings_link(),
            download_app: default_download_app_link(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// An unreadable or unparseable file is a startup error; callers are
    /// expected to abort rather than run half-configured.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }
}

fn default_language() -> String {
    "ru".to_string()
}

fn default_manufacturers_url() -> String {
    "https://raw.githubusercontent.com/ByteFlipper-58/database/main/manufacturers.json".to_string()
}

fn default_base_model_url() -> String {
    "https://raw.githubusercontent.com/ByteFlipper-58/database/main/sensitivity_settings/{model}.json"
        .to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_manufacturers_per_page() -> usize {
    5
}

fn default_manufacturers_columns() -> usize {
    2
}

fn default_models_per_page() -> usize {
    5
}

fn default_support_link() -> String {
    "https://t.me/ibremminer837".to_string()
}

fn default_channel_link() -> String {
    "https://t.me/byteflipper".to_string()
}

fn default_request_settings_link() -> String {
    "https://t.me/byteflipper_feedback_bot".to_string()
}

fn default_download_app_link() -> String {
    "https://play.google.com/store/apps/details?id=com.byteflipper.ffsensitivities".to_string()
}

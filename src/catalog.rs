//! # Remote Catalogue Client
//!
//! Manufacturer and model data live in static JSON documents served over
//! HTTP. Every call is a live fetch with a bounded timeout and a single
//! attempt; nothing is cached between requests. Shape validation stops at
//! presence checks on the expected array fields.

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::DataSourcesConfig;

/// Placeholder substituted with the manufacturer id in the model endpoint
const MODEL_URL_PLACEHOLDER: &str = "{model}";

/// A device manufacturer as listed by the catalogue endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Manufacturer {
    /// Human-readable name shown on buttons
    #[serde(rename = "name")]
    pub display_name: String,
    /// Identifier used in callback tokens and model URLs
    #[serde(rename = "model")]
    pub id: String,
    /// Only manufacturers flagged for the production app are listed
    #[serde(rename = "showInProductionApp", default)]
    pub visible: bool,
}

/// A sensitivity value; the catalogue mixes numbers and free-form strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SensitivityValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for SensitivityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral values print without a trailing fraction
            SensitivityValue::Number(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f, "{}", *value as i64)
            }
            SensitivityValue::Number(value) => write!(f, "{value}"),
            SensitivityValue::Text(value) => write!(f, "{value}"),
        }
    }
}

/// A single device model with its sensitivity settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceModel {
    pub name: String,
    #[serde(default)]
    pub dpi: Option<u32>,
    #[serde(default)]
    pub fire_button: Option<String>,
    #[serde(default)]
    pub sensitivities: BTreeMap<String, SensitivityValue>,
}

/// Failure modes of a catalogue fetch.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// Transport-level failure: connect error, timeout, non-2xx status
    Request(String),
    /// Response body was not valid JSON
    Json(String),
    /// JSON was well-formed but the expected array field is absent
    MissingField(&'static str),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Request(msg) => write!(f, "Request error: {msg}"),
            CatalogError::Json(msg) => write!(f, "JSON error: {msg}"),
            CatalogError::MissingField(field) => write!(f, "Missing expected field: {field}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Parse a manufacturers document, keeping only production-visible entries.
///
/// Individual malformed entries are skipped with a warning; a missing
/// `manufacturers` field fails the whole document.
pub fn parse_manufacturers(body: &str) -> Result<Vec<Manufacturer>, CatalogError> {
    let entries = parse_array_field(body, "manufacturers")?;

    let mut manufacturers = Vec::new();
    for entry in entries {
        match serde_json::from_value::<Manufacturer>(entry) {
            Ok(manufacturer) if manufacturer.visible => manufacturers.push(manufacturer),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Skipping malformed manufacturer entry"),
        }
    }
    Ok(manufacturers)
}

/// Parse a models document into the batch for one manufacturer.
pub fn parse_models(body: &str) -> Result<Vec<DeviceModel>, CatalogError> {
    let entries = parse_array_field(body, "models")?;

    let mut models = Vec::new();
    for entry in entries {
        match serde_json::from_value::<DeviceModel>(entry) {
            Ok(model) => models.push(model),
            Err(e) => warn!(error = %e, "Skipping malformed model entry"),
        }
    }
    Ok(models)
}

fn parse_array_field(
    body: &str,
    field: &'static str,
) -> Result<Vec<serde_json::Value>, CatalogError> {
    let document: serde_json::Value =
        serde_json::from_str(body).map_err(|e| CatalogError::Json(e.to_string()))?;

    document
        .get(field)
        .and_then(|value| value.as_array())
        .cloned()
        .ok_or(CatalogError::MissingField(field))
}

/// HTTP client for the two catalogue endpoints.
pub struct CatalogClient {
    http: reqwest::Client,
    manufacturers_url: String,
    model_url_template: String,
}

impl CatalogClient {
    /// Build a client with the endpoints and timeout from configuration.
    pub fn new(config: &DataSourcesConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            manufacturers_url: config.manufacturers_url.clone(),
            model_url_template: config.base_model_url.clone(),
        })
    }

    /// Fetch the manufacturer list, filtered to production-visible entries.
    pub async fn fetch_manufacturers(&self) -> Result<Vec<Manufacturer>, CatalogError> {
        let body = self.fetch_body(&self.manufacturers_url).await?;
        let manufacturers = parse_manufacturers(&body)?;
        info!(count = manufacturers.len(), "Fetched manufacturer list");
        Ok(manufacturers)
    }

    /// Fetch the model batch for one manufacturer.
    pub async fn fetch_models(&self, manufacturer_id: &str) -> Result<Vec<DeviceModel>, CatalogError> {
        let url = self
            .model_url_template
            .replace(MODEL_URL_PLACEHOLDER, manufacturer_id);
        let body = self.fetch_body(&url).await?;
        let models = parse_models(&body)?;
        info!(
            manufacturer = %manufacturer_id,
            count = models.len(),
            "Fetched model batch"
        );
        Ok(models)
    }

    async fn fetch_body(&self, url: &str) -> Result<String, CatalogError> {
        info!(url = %url, "Fetching catalogue document");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))
    }
}

//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix service and the briefing sources.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub briefing: BriefingConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub homeserver: String,
    pub username: String,
    /// Inline secret, mainly for local development.
    #[serde(default)]
    pub password: Option<String>,
    /// Environment variable holding the secret (preferred).
    #[serde(default)]
    pub password_env: Option<String>,
}

impl MatrixConfig {
    /// Resolve the login secret at startup. An inline `password` wins,
    /// otherwise the variable named by `password_env` (or the default
    /// `AEROBRIEF_MATRIX_PASSWORD`) is read from the process environment.
    pub fn resolve_password(&self) -> Result<String> {
        if let Some(p) = &self.password {
            if !p.is_empty() {
                return Ok(p.clone());
            }
        }
        let var = self
            .password_env
            .as_deref()
            .unwrap_or("AEROBRIEF_MATRIX_PASSWORD");
        std::env::var(var).with_context(|| {
            format!("Matrix password not configured: set services.matrix.password or export {var}")
        })
    }
}

/// Settings for the aviation briefing sources.
#[derive(Debug, Deserialize, Clone)]
pub struct BriefingConfig {
    /// When enabled, `/metar` issues a GET against the Aeroweb station page
    /// before replying, mirroring upstream availability in the reply.
    #[serde(default)]
    pub probe_metar: bool,
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout: u64,
    /// Center of the Windy radar link included in flight briefings.
    #[serde(default = "default_radar_lat")]
    pub radar_lat: f64,
    #[serde(default = "default_radar_lon")]
    pub radar_lon: f64,
}

impl Default for BriefingConfig {
    fn default() -> Self {
        Self {
            probe_metar: false,
            probe_timeout: default_probe_timeout(),
            radar_lat: default_radar_lat(),
            radar_lon: default_radar_lon(),
        }
    }
}

fn default_probe_timeout() -> u64 {
    10
}

fn default_radar_lat() -> f64 {
    48.7
}

fn default_radar_lon() -> f64 {
    2.3
}

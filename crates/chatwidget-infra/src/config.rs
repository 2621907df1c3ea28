//! Configuration and profile loaders.
//!
//! The widget config (`chatwidget.toml`) is optional: a missing or broken
//! file yields [`WidgetConfig::default()`] so the widget always starts. The
//! restaurant profile is required by the reply service and errors are
//! returned to the caller.

use std::path::Path;

use chatwidget_types::config::WidgetConfig;
use chatwidget_types::error::ConfigError;
use chatwidget_types::profile::RestaurantProfile;

/// Load the widget configuration from `path`.
///
/// - If the file does not exist, returns the defaults (backend disabled).
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the defaults.
pub async fn load_widget_config(path: &Path) -> WidgetConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return WidgetConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return WidgetConfig::default();
        }
    };

    match toml::from_str::<WidgetConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            WidgetConfig::default()
        }
    }
}

/// Load the restaurant profile YAML from `path`.
///
/// An empty document yields an empty profile.
pub async fn load_profile(path: &Path) -> Result<RestaurantProfile, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    if content.trim().is_empty() {
        return Ok(RestaurantProfile::default());
    }

    serde_yaml_ng::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

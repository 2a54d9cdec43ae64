//! Client settings and their persistence
//!
//! Saves and loads [`ClientSettings`] to/from a JSON file in the user's
//! configuration directory.
//!
//! # Error Handling
//!
//! Loading is lenient like the rest of the client:
//! - a missing, unreadable or unparsable file falls back to defaults
//! - failures are logged, never fatal
//!
//! Saving reports errors to the caller so the front end can surface them.
//!
//! # Environment
//!
//! `XFBOARD_SERVER_URL` overrides the stored server address (a `.env` file is
//! honoured by the binary through `dotenvy`).

use crate::core::{CoreError, CoreResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Environment variable overriding [`ClientSettings::server_url`]
pub const SERVER_URL_ENV: &str = "XFBOARD_SERVER_URL";

/// Geometry of the board surface in pointer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Left edge of the a-file
    pub origin_x: f32,
    /// Top edge of rank 8
    pub origin_y: f32,
    /// Edge length of one square
    pub square_size: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            square_size: 64.0,
        }
    }
}

/// User-facing client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the move authority
    pub server_url: String,
    /// Per-request timeout applied by the HTTP transport, in milliseconds
    pub request_timeout_ms: u64,
    /// Board geometry used for hit-testing
    pub layout: LayoutSettings,
    /// Directory prefix of the piece images (`<root>/wq.png`)
    pub asset_root: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_ms: 10_000,
            layout: LayoutSettings::default(),
            asset_root: "assets/pieces".to_string(),
        }
    }
}

impl ClientSettings {
    /// Resolve the settings file path
    ///
    /// Returns `settings.json` in the user's configuration directory, or the
    /// current directory when no config dir can be determined.
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "XFBoard") {
            proj_dirs.config_dir().join(SETTINGS_FILENAME)
        } else {
            PathBuf::from(SETTINGS_FILENAME)
        }
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<ClientSettings>(&contents) {
                Ok(settings) => {
                    info!("[SETTINGS] Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!(
                        "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Write settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    error!("[SETTINGS] Failed to create settings directory at {:?}: {}", parent, e);
                    e
                })?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("[SETTINGS] Saved settings to {:?}", path);
        Ok(())
    }

    /// Apply `XFBOARD_SERVER_URL` if it is set and non-empty
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            if !url.trim().is_empty() {
                info!("[SETTINGS] Server URL overridden by {}", SERVER_URL_ENV);
                self.server_url = url.trim().to_string();
            }
        }
    }

    /// Parsed and validated server URL
    pub fn base_url(&self) -> CoreResult<Url> {
        let url = Url::parse(&self.server_url).map_err(|e| CoreError::InvalidServerUrl {
            url: self.server_url.clone(),
            message: e.to_string(),
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::InvalidServerUrl {
                url: self.server_url.clone(),
                message: "expected an http(s) base URL".to_string(),
            });
        }
        Ok(url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_localhost() {
        let settings = ClientSettings::default();
        let url = settings.base_url().unwrap();
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_non_http_urls() {
        let settings = ClientSettings {
            server_url: "mailto:someone@example.com".to_string(),
            ..ClientSettings::default()
        };
        assert!(matches!(
            settings.base_url(),
            Err(CoreError::InvalidServerUrl { .. })
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{"server_url": "http://example.com:9000"}"#).unwrap();
        assert_eq!(settings.server_url, "http://example.com:9000");
        assert_eq!(settings.layout, LayoutSettings::default());
        assert_eq!(settings.asset_root, "assets/pieces");
    }
}

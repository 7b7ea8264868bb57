//! On-disk configuration.
//!
//! A small JSON file at `~/.config/folio/config.json` (platform
//! equivalent via `dirs`). Every field has a default, so a missing file
//! or a partial file both work. A file that fails to parse is logged
//! and ignored rather than aborting startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::types::Page;
use crate::error::{AppError, Result};

fn default_start_page() -> String {
    "home".to_string()
}

fn default_smooth_scroll() -> bool {
    true
}

fn default_toast_ticks() -> u16 {
    180
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Page id shown on launch. Unrecognized ids fall back to home.
    #[serde(default = "default_start_page")]
    pub start_page: String,

    /// Animate scroll-to-top on navigation (and the hero shimmer).
    #[serde(default = "default_smooth_scroll")]
    pub smooth_scroll: bool,

    /// How many 16ms ticks a toast stays on screen.
    #[serde(default = "default_toast_ticks")]
    pub toast_ticks: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_page: default_start_page(),
            smooth_scroll: default_smooth_scroll(),
            toast_ticks: default_toast_ticks(),
        }
    }
}

impl Config {
    /// Resolved launch page; never fails, unknown ids coerce to home.
    pub fn start_page(&self) -> Page {
        Page::from_id_or_home(&self.start_page)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.json"))
    }

    /// Load from the default location. Missing file yields defaults; a
    /// malformed file is logged and yields defaults too.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::debug!("no config directory available, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.start_page, "home");
        assert!(config.smooth_scroll);
        assert_eq!(config.toast_ticks, 180);
    }

    #[test]
    fn test_start_page_coerces_unknown_id() {
        let config = Config {
            start_page: "blog".to_string(),
            ..Config::default()
        };
        assert_eq!(config.start_page(), Page::Home);
    }

    #[test]
    fn test_start_page_resolves_known_id() {
        let config = Config {
            start_page: "work".to_string(),
            ..Config::default()
        };
        assert_eq!(config.start_page(), Page::Work);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.start_page, "home");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"start_page": "contact"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.start_page(), Page::Contact);
        assert!(config.smooth_scroll);
        assert_eq!(config.toast_ticks, 180);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            start_page: "process".to_string(),
            smooth_scroll: false,
            toast_ticks: 60,
        };
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.start_page, "process");
        assert!(!loaded.smooth_scroll);
        assert_eq!(loaded.toast_ticks, 60);
    }
}

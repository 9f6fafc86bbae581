// Ganesha D-Bus Probe - Configuration
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Optional logging settings read from a local JSON file.
//!
//! The probe targets are fixed in code; nothing here changes what is called.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Directory name under the user's configuration directory.
const CONFIG_DIR: &str = "ganesha-dbus-probe";
const SETTINGS_FILE: &str = "settings.json";

/// Probe settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String { "warn".to_string() }

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

/// Read-only settings loaded from disk.
#[derive(Debug)]
pub struct Settings {
    settings: AppSettings,
    path: PathBuf,
    problem: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Load settings from the user's configuration directory.
    pub fn new() -> Self {
        Self::load(&Self::default_path())
    }

    /// Default location of the settings file.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(SETTINGS_FILE)
    }

    /// Load settings from `path`, falling back to defaults.
    ///
    /// Runs before logging is set up, so problems are reported once the
    /// subscriber exists via [`Settings::report`].
    pub fn load(path: &Path) -> Self {
        let mut problem = None;
        let settings = if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(s) => s,
                    Err(e) => {
                        problem = Some(format!("Failed to parse settings {}: {}", path.display(), e));
                        AppSettings::default()
                    }
                },
                Err(e) => {
                    problem = Some(format!("Failed to read settings {}: {}", path.display(), e));
                    AppSettings::default()
                }
            }
        } else {
            AppSettings::default()
        };

        Self {
            settings,
            path: path.to_path_buf(),
            problem,
        }
    }

    /// Log any problem met while loading.
    pub fn report(&self) {
        if let Some(problem) = &self.problem {
            warn!("{}", problem);
        }
    }

    /// Path the settings were loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the fallback log filter.
    pub fn log_filter(&self) -> &str {
        &self.settings.log_filter
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tauri::AppHandle;
use tauri::Manager;

use crate::modules::navigation::{NavigatorConfig, DEFAULT_PAGE};
use crate::modules::sidebar::NARROW_VIEWPORT_MAX;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub default_page: String,
    pub narrow_breakpoint: u32,
    pub demo_pages: bool,
    pub log_level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_page: DEFAULT_PAGE.to_string(),
            narrow_breakpoint: NARROW_VIEWPORT_MAX,
            demo_pages: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn get_path(app: &AppHandle) -> Option<PathBuf> {
        app.path()
            .app_data_dir()
            .ok()
            .map(|dir| dir.join("settings.json"))
    }

    /// Reads the settings file. Missing file or data dir gives defaults; the
    /// error is returned so it can be logged once logging is up.
    pub fn load(app: &AppHandle) -> Result<Self, String> {
        match Self::get_path(app) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&content).map_err(|e| format!("Failed to parse settings: {}", e))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }

    pub fn navigator_config(&self) -> NavigatorConfig {
        NavigatorConfig {
            default_page: self.default_page.clone(),
            narrow_breakpoint: self.narrow_breakpoint,
        }
    }
}

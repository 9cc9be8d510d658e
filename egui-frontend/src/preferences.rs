//! # Preference Store
//!
//! User-selected display preferences, persisted as two JSON files under the
//! platform config directory (`theme-config.json` and
//! `accessibility-config.json`). Files are loaded once at startup and
//! rewritten whenever a setting changes; a missing or corrupt file falls
//! back to defaults with a warning, never an error surfaced to the user.

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const THEME_FILE: &str = "theme-config.json";
const ACCESSIBILITY_FILE: &str = "accessibility-config.json";
const APP_CONFIG_DIR: &str = "sistema-financeiro";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the system preference reported by the windowing backend
    Auto,
}

impl ThemeMode {
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Claro",
            ThemeMode::Dark => "Escuro",
            ThemeMode::Auto => "Automático",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    Normal,
    High,
    Low,
}

impl ContrastMode {
    pub fn label(&self) -> &'static str {
        match self {
            ContrastMode::Normal => "Normal",
            ContrastMode::High => "Alto",
            ContrastMode::Low => "Baixo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Pequena",
            FontSize::Medium => "Média",
            FontSize::Large => "Grande",
        }
    }

    /// Multiplier applied to every text style
    pub fn scale(&self) -> f32 {
        match self {
            FontSize::Small => 0.85,
            FontSize::Medium => 1.0,
            FontSize::Large => 1.2,
        }
    }
}

/// Theme selection persisted to `theme-config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub contrast: ContrastMode,
    pub font_size: FontSize,
    pub reduced_motion: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Light,
            contrast: ContrastMode::Normal,
            font_size: FontSize::Medium,
            reduced_motion: false,
        }
    }
}

impl ThemeConfig {
    /// Flip between light and dark; toggling from Auto lands on Dark first
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Light | ThemeMode::Auto => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }

    /// Cycle normal -> high -> low -> normal
    pub fn cycle_contrast(&mut self) {
        self.contrast = match self.contrast {
            ContrastMode::Normal => ContrastMode::High,
            ContrastMode::High => ContrastMode::Low,
            ContrastMode::Low => ContrastMode::Normal,
        };
    }
}

/// Accessibility flags persisted to `accessibility-config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityConfig {
    pub high_contrast: bool,
    pub reduced_motion: bool,
    pub font_size: FontSize,
    pub color_blind_friendly: bool,
    pub screen_reader: bool,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            high_contrast: false,
            reduced_motion: false,
            font_size: FontSize::Medium,
            color_blind_friendly: false,
            screen_reader: false,
        }
    }
}

/// Reads and writes the preference files
pub struct PreferenceStore {
    base_dir: PathBuf,
}

impl PreferenceStore {
    /// Store rooted at the platform config directory
    pub fn new() -> Self {
        let base_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_CONFIG_DIR);
        Self { base_dir }
    }

    /// Store rooted at an explicit directory (tests)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Load both configs, substituting defaults for anything unreadable
    pub fn load(&self) -> (ThemeConfig, AccessibilityConfig) {
        let theme = self.load_file(THEME_FILE).unwrap_or_else(|e| {
            warn!("Could not load theme config, using defaults: {}", e);
            ThemeConfig::default()
        });
        let accessibility = self.load_file(ACCESSIBILITY_FILE).unwrap_or_else(|e| {
            warn!("Could not load accessibility config, using defaults: {}", e);
            AccessibilityConfig::default()
        });
        (theme, accessibility)
    }

    /// Persist both configs; failures are reported to the caller
    pub fn save(
        &self,
        theme: &ThemeConfig,
        accessibility: &AccessibilityConfig,
    ) -> Result<()> {
        self.save_file(THEME_FILE, theme)?;
        self.save_file(ACCESSIBILITY_FILE, accessibility)?;
        Ok(())
    }

    fn load_file<T: for<'de> Deserialize<'de>>(&self, name: &str) -> Result<T> {
        let path = self.base_dir.join(name);
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
    }

    fn save_file<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.base_dir)
            .with_context(|| format!("creating {}", self.base_dir.display()))?;
        let path = self.base_dir.join(name);
        let contents = serde_json::to_string_pretty(value)?;
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::with_base_dir(dir.path().to_path_buf());

        let theme = ThemeConfig {
            mode: ThemeMode::Dark,
            contrast: ContrastMode::High,
            font_size: FontSize::Large,
            reduced_motion: true,
        };
        let accessibility = AccessibilityConfig {
            high_contrast: true,
            reduced_motion: true,
            font_size: FontSize::Large,
            color_blind_friendly: true,
            screen_reader: false,
        };

        store.save(&theme, &accessibility).unwrap();
        let (loaded_theme, loaded_accessibility) = store.load();
        assert_eq!(loaded_theme, theme);
        assert_eq!(loaded_accessibility, accessibility);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::with_base_dir(dir.path().join("nonexistent"));

        let (theme, accessibility) = store.load();
        assert_eq!(theme, ThemeConfig::default());
        assert_eq!(accessibility, AccessibilityConfig::default());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(dir.path().join(THEME_FILE), "{not json").unwrap();

        let store = PreferenceStore::with_base_dir(dir.path().to_path_buf());
        let (theme, _) = store.load();
        assert_eq!(theme, ThemeConfig::default());
    }

    #[test]
    fn test_toggle_mode() {
        let mut config = ThemeConfig::default();
        assert_eq!(config.mode, ThemeMode::Light);
        config.toggle_mode();
        assert_eq!(config.mode, ThemeMode::Dark);
        config.toggle_mode();
        assert_eq!(config.mode, ThemeMode::Light);

        config.mode = ThemeMode::Auto;
        config.toggle_mode();
        assert_eq!(config.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_cycle_contrast() {
        let mut config = ThemeConfig::default();
        config.cycle_contrast();
        assert_eq!(config.contrast, ContrastMode::High);
        config.cycle_contrast();
        assert_eq!(config.contrast, ContrastMode::Low);
        config.cycle_contrast();
        assert_eq!(config.contrast, ContrastMode::Normal);
    }

    #[test]
    fn test_config_json_shape_is_stable() {
        let json = serde_json::to_string(&ThemeConfig::default()).unwrap();
        assert!(json.contains("\"mode\":\"light\""));
        assert!(json.contains("\"font_size\":\"medium\""));
    }
}

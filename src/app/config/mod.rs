// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[quiz]` - Timer lengths and the question source
//! - `[audio]` - Background music
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `QUIZ_RUSH_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! Out-of-range values are clamped when they are read, not rejected, so a
//! hand-edited file never prevents the quiz from starting.
//!
//! # Examples
//!
//! ```no_run
//! use quiz_rush::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.quiz.question_secs = Some(15);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::quiz::{CountdownSecs, QuestionSecs};
use crate::error::{Error, Result};
use crate::infrastructure::QuestionSource;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Quiz timing and question source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizConfig {
    /// Pre-start countdown length in seconds.
    #[serde(
        default = "default_countdown_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub countdown_secs: Option<u32>,

    /// Time allowed per question in seconds.
    #[serde(
        default = "default_question_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub question_secs: Option<u32>,

    /// File path or `http(s)` URL of a question list. Unset means built-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            countdown_secs: default_countdown_secs(),
            question_secs: default_question_secs(),
            source: None,
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn countdown(&self) -> CountdownSecs {
        self.countdown_secs
            .map_or_else(CountdownSecs::default, CountdownSecs::new)
    }

    #[must_use]
    pub fn question_time(&self) -> QuestionSecs {
        self.question_secs
            .map_or_else(QuestionSecs::default, QuestionSecs::new)
    }

    #[must_use]
    pub fn question_source(&self) -> QuestionSource {
        self.source
            .as_deref()
            .map_or_else(QuestionSource::default, QuestionSource::parse)
    }
}

/// Background music settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioConfig {
    /// Start the music as soon as the window opens.
    #[serde(
        default = "default_music_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub music_enabled: Option<bool>,

    /// Music volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_enabled: default_music_enabled(),
            volume: default_volume(),
        }
    }
}

impl AudioConfig {
    /// Configured volume, clamped to the supported range.
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(MIN_VOLUME, MAX_VOLUME)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub quiz: QuizConfig,

    #[serde(default)]
    pub audio: AudioConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_countdown_secs() -> Option<u32> {
    Some(DEFAULT_COUNTDOWN_SECS)
}

fn default_question_secs() -> Option<u32> {
    Some(DEFAULT_QUESTION_SECS)
}

fn default_music_enabled() -> Option<bool> {
    Some(DEFAULT_MUSIC_ENABLED)
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable one yields the defaults and a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "config ignored");
            (
                Config::default(),
                Some(format!("Settings could not be read: {err}")),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            quiz: QuizConfig {
                countdown_secs: Some(3),
                question_secs: Some(20),
                source: Some("questions/geo.json".to_string()),
            },
            audio: AudioConfig {
                music_enabled: Some(true),
                volume: Some(0.25),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.quiz.countdown().value(), 5);
        assert_eq!(config.quiz.question_time().value(), 10);
        assert_eq!(config.quiz.question_source(), QuestionSource::Embedded);
        assert_eq!(config.audio.music_enabled, Some(false));
        assert_abs_diff_eq!(config.audio.volume(), 0.6);
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[quiz]\nquestion_secs = 30\n").expect("write");

        let config = load_from_path(&config_path).expect("load");
        assert_eq!(config.quiz.question_time().value(), 30);
        assert_eq!(config.quiz.countdown().value(), 5);
        assert_eq!(config.general, GeneralConfig::default());
        assert_eq!(config.audio, AudioConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped_on_read() {
        let config = Config {
            quiz: QuizConfig {
                countdown_secs: Some(0),
                question_secs: Some(10_000),
                source: None,
            },
            audio: AudioConfig {
                music_enabled: None,
                volume: Some(4.0),
            },
            ..Config::default()
        };
        assert_eq!(config.quiz.countdown().value(), MIN_COUNTDOWN_SECS);
        assert_eq!(config.quiz.question_time().value(), MAX_QUESTION_SECS);
        assert_abs_diff_eq!(config.audio.volume(), MAX_VOLUME);
    }

    #[test]
    fn source_url_is_recognised() {
        let quiz = QuizConfig {
            source: Some("https://example.com/questions.json".to_string()),
            ..QuizConfig::default()
        };
        assert!(matches!(quiz.question_source(), QuestionSource::Url(_)));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n").is_err());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let mut config = Config::default();
        config.audio.music_enabled = Some(true);

        save_with_override(&config, Some(base.clone())).expect("save");
        assert!(base.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base));
        assert!(warning.is_none());
        assert_eq!(loaded.audio.music_enabled, Some(true));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[quiz\ncountdown_secs = ")
            .expect("write corrupted file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }
}

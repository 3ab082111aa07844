// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** passed to [`get_app_config_dir_with_override`] (tests)
//! 2. **CLI argument** `--config-dir`, set once via [`init_cli_overrides`]
//! 3. **Environment variable** `QUIZ_RUSH_CONFIG_DIR`
//! 4. **Platform default** from the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "QuizRush";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "QUIZ_RUSH_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument. Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the directory holding `settings.toml`.
///
/// Platform defaults:
/// - Linux: `~/.config/QuizRush/`
/// - macOS: `~/Library/Application Support/QuizRush/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\QuizRush\`
///
/// Returns `None` if no directory can be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Same as [`get_app_config_dir`], but `override_path` wins when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Serializes tests that touch the process environment.
#[cfg(test)]
static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn lock_env() -> std::sync::MutexGuard<'static, ()> {
    ENV_MUTEX
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let _lock = lock_env();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/from-env");
        let path = get_app_config_dir_with_override(Some(PathBuf::from("/tmp/explicit")));
        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(path, Some(PathBuf::from("/tmp/explicit")));
    }

    #[test]
    fn env_var_is_used_when_set() {
        let _lock = lock_env();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/quiz-config");
        let path = get_app_config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(path, Some(PathBuf::from("/tmp/quiz-config")));
    }

    #[test]
    fn empty_env_var_falls_back_to_platform_dir() {
        let _lock = lock_env();
        std::env::set_var(ENV_CONFIG_DIR, "");
        let path = get_app_config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);
        if let Some(path) = path {
            assert!(path.ends_with(APP_NAME));
        }
    }
}

//! Configuration loading.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Program run as timewarrior.
    pub timew_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timew_path: PathBuf::from("timew"),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Later sources win: defaults, `<config_dir>/clock/config.toml`, the
    /// given file, then `CLOCK_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("CLOCK_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for clock.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("clock"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    #[test]
    fn test_default_runs_timew_from_path() {
        assert_eq!(Config::default().timew_path, PathBuf::from("timew"));
    }

    #[test]
    fn test_dirs_config_path_ends_with_clock() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "clock");
    }

    #[test]
    fn test_load_from_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clock.toml");
        fs::write(&path, "timew_path = \"/opt/timew/bin/timew\"\n").unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.timew_path, PathBuf::from("/opt/timew/bin/timew"));
    }

    #[test]
    fn test_missing_explicit_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(Some(&temp.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clock.toml");
        fs::write(&path, "timew_path = [\n").unwrap();

        assert!(Config::load_from(Some(&path)).is_err());
    }
}

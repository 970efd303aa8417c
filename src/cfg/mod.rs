//! Start-up configuration.
//!
//! The configuration is only ever read. A missing file means defaults.

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[cfg_attr(target_family = "wasm", path = "storage_web.rs")]
#[cfg_attr(not(target_family = "wasm"), path = "storage_native.rs")]
mod storage;

pub const MAX_STAR_COUNT: usize = 50_000;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default `tracing` filter. `RUST_LOG` takes precedence.
    pub log_filter: String,
    pub dark_mode: bool,
    pub show_fps: bool,
    pub show_help: bool,
    /// Number of background stars. Clamped to [`MAX_STAR_COUNT`].
    pub star_count: usize,
    /// Whether pausing also stops the star's animation.
    pub pause_freezes_star: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: String::from("info"),
            dark_mode: true,
            show_fps: true,
            show_help: true,
            star_count: 8000,
            pause_freezes_star: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no reasonable config directory was found")]
    NoConfigDirectory,
    #[cfg(not(target_family = "wasm"))]
    #[error("failed to read {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[cfg(target_family = "wasm")]
    #[error("failed to read local storage: {0}")]
    Storage(#[from] gloo_storage::errors::StorageError),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Parses a TOML document. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        Ok(config.sanitized())
    }

    #[must_use]
    fn sanitized(mut self) -> Self {
        if self.star_count > MAX_STAR_COUNT {
            warn!(
                "star_count of {} is too large, using {MAX_STAR_COUNT}",
                self.star_count
            );
            self.star_count = MAX_STAR_COUNT;
        }
        self
    }

    /// Reads the configuration from the platform's storage.
    ///
    /// Returns `Ok(None)` if there is nothing stored.
    pub fn try_load() -> Result<Option<Self>, ConfigError> {
        match storage::read()? {
            Some(source) => Self::from_toml_str(&source).map(Some),
            None => Ok(None),
        }
    }

    /// Unwraps the result of [`Config::try_load`], logging why defaults are used.
    pub fn or_default(loaded: Result<Option<Self>, ConfigError>) -> Self {
        match loaded {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!("no config found, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!("failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_filter, "info");
        assert!(config.dark_mode);
        assert!(config.show_fps);
        assert!(config.show_help);
        assert_eq!(config.star_count, 8000);
        assert!(!config.pause_freezes_star);
    }

    #[test]
    fn test_partial() {
        let config = Config::from_toml_str(
            r#"
            dark_mode = false
            log_filter = "solar_system_sim=debug"
            pause_freezes_star = true
            "#,
        )
        .unwrap();
        assert!(!config.dark_mode);
        assert_eq!(config.log_filter, "solar_system_sim=debug");
        assert!(config.pause_freezes_star);
        assert!(config.show_help);
        assert_eq!(config.star_count, 8000);
    }

    #[test]
    fn test_star_count_clamped() {
        let config = Config::from_toml_str("star_count = 1000000").unwrap();
        assert_eq!(config.star_count, MAX_STAR_COUNT);

        let config = Config::from_toml_str("star_count = 0").unwrap();
        assert_eq!(config.star_count, 0);
    }

    #[test]
    fn test_star_count_clamp_is_logged() {
        use std::{
            io,
            sync::{Arc, Mutex},
        };

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = tracing::subscriber::with_default(subscriber, || {
            Config::from_toml_str("star_count = 60000").unwrap()
        });
        assert_eq!(config.star_count, MAX_STAR_COUNT);

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("star_count of 60000"), "{output}");
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            Config::from_toml_str("dark_mode = \"yes\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("unknown_key = 1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(Config::from_toml_str("star_count = -5").is_err());
    }

    #[test]
    fn test_or_default() {
        let custom = Config {
            show_fps: false,
            ..Default::default()
        };
        assert_eq!(Config::or_default(Ok(Some(custom.clone()))), custom);
        assert_eq!(Config::or_default(Ok(None)), Config::default());
        assert_eq!(
            Config::or_default(Err(ConfigError::NoConfigDirectory)),
            Config::default()
        );
    }
}

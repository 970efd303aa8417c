use directories::ProjectDirs;
use std::{
    env,
    ffi::OsString,
    fs, io,
    path::PathBuf,
    sync::LazyLock,
};

use super::ConfigError;

/// Environment variable pointing at an alternative config file.
pub(super) const CONFIG_PATH_ENV: &str = "SOLAR_SYSTEM_SIM_CONFIG";

static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("io.github", "solar-system-sim", "solar_system_sim"));
static CONFIG_PATH: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().join("config.toml"))
});

fn config_path(env_override: Option<OsString>) -> Result<PathBuf, ConfigError> {
    match env_override {
        Some(path) => Ok(PathBuf::from(path)),
        None => CONFIG_PATH.clone().ok_or(ConfigError::NoConfigDirectory),
    }
}

/// Reads the file at `path`. A missing file is `Ok(None)`.
fn read_from(path: PathBuf) -> Result<Option<String>, ConfigError> {
    tracing::debug!("reading config from {}", path.display());

    match fs::read_to_string(&path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read { path, source }),
    }
}

pub(super) fn read() -> Result<Option<String>, ConfigError> {
    read_from(config_path(env::var_os(CONFIG_PATH_ENV))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::Config;

    #[test]
    fn test_env_override_wins() {
        let path = config_path(Some(OsString::from("/somewhere/custom.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/somewhere/custom.toml"));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(read_from(path), Ok(None)));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_from(dir.path().to_path_buf());
        assert!(
            matches!(&result, Err(ConfigError::Read { path, .. }) if path == dir.path()),
            "{result:?}"
        );
    }

    #[test]
    fn test_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "dark_mode = false\nstar_count = 10\n").unwrap();

        let source = read_from(config_path(Some(path.into_os_string())).unwrap())
            .unwrap()
            .unwrap();
        let config = Config::from_toml_str(&source).unwrap();
        assert!(!config.dark_mode);
        assert_eq!(config.star_count, 10);
    }
}

use anyhow::{bail, Context};
use bookshelf_core::{FilterField, MIN_BOOK_AGE_YEARS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "bookshelf.toml";
pub const DEFAULT_STORE_FILE: &str = "books.json";
pub const STORE_ENV_VAR: &str = "BOOKSHELF_STORE";

/// Contents of `bookshelf.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub store_path: Option<PathBuf>,
    pub default_filter: Option<String>,
    pub min_book_age_years: Option<i32>,
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub default_filter: FilterField,
    pub min_book_age_years: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            default_filter: FilterField::default(),
            min_book_age_years: MIN_BOOK_AGE_YEARS,
        }
    }
}

impl AppConfig {
    /// Load settings. Store path precedence: CLI flag, then environment, then config file.
    pub fn load(config_path: Option<&Path>, store_flag: Option<PathBuf>) -> anyhow::Result<Self> {
        let (file_config, config_dir) = read_file_config(config_path)?;
        let env_store = std::env::var_os(STORE_ENV_VAR).map(PathBuf::from);

        let config = Self::resolve(file_config, config_dir.as_deref(), env_store, store_flag)?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    fn resolve(
        file_config: FileConfig,
        config_dir: Option<&Path>,
        env_store: Option<PathBuf>,
        store_flag: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        let mut config = AppConfig::default();

        if let Some(path) = file_config.store_path {
            // Relative paths in a config file are relative to that file
            config.store_path = match config_dir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path,
            };
        }

        if let Some(filter) = file_config.default_filter {
            config.default_filter = filter
                .parse::<FilterField>()
                .with_context(|| format!("Invalid default_filter in config: '{}'", filter))?;
        }

        if let Some(years) = file_config.min_book_age_years {
            if years < 0 {
                bail!("min_book_age_years must not be negative, got {}", years);
            }
            config.min_book_age_years = years;
        }

        if let Some(path) = store_flag.or(env_store) {
            config.store_path = path;
        }

        Ok(config)
    }
}

/// Parse the TOML config format
pub fn parse_config(contents: &str) -> anyhow::Result<FileConfig> {
    toml::from_str(contents).context("Invalid config file")
}

fn read_file_config(explicit: Option<&Path>) -> anyhow::Result<(FileConfig, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok((FileConfig::default(), None));
            }
            default
        }
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let file_config =
        parse_config(&contents).with_context(|| format!("In config file {}", path.display()))?;

    let config_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf);

    Ok((file_config, config_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(FileConfig::default(), None, None, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.min_book_age_years, 3);
    }

    #[test]
    fn test_parse_config() {
        let file = parse_config(
            r#"
            store_path = "data/books.json"
            default_filter = "authors"
            min_book_age_years = 5
            "#,
        )
        .unwrap();

        let config = AppConfig::resolve(file, Some(Path::new("/etc/bookshelf")), None, None).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/etc/bookshelf/data/books.json"));
        assert_eq!(config.default_filter, FilterField::Authors);
        assert_eq!(config.min_book_age_years, 5);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(parse_config("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_bad_filter_rejected() {
        let file = parse_config("default_filter = \"isbn\"").unwrap();
        assert!(AppConfig::resolve(file, None, None, None).is_err());
    }

    #[test]
    fn test_negative_age_rejected() {
        let file = parse_config("min_book_age_years = -1").unwrap();
        assert!(AppConfig::resolve(file, None, None, None).is_err());
    }

    #[test]
    fn test_store_precedence() {
        let file = || parse_config("store_path = \"from-file.json\"").unwrap();

        let from_env = AppConfig::resolve(file(), None, Some(PathBuf::from("env.json")), None).unwrap();
        assert_eq!(from_env.store_path, PathBuf::from("env.json"));

        let from_flag = AppConfig::resolve(
            file(),
            None,
            Some(PathBuf::from("env.json")),
            Some(PathBuf::from("flag.json")),
        )
        .unwrap();
        assert_eq!(from_flag.store_path, PathBuf::from("flag.json"));

        let from_file = AppConfig::resolve(file(), None, None, None).unwrap();
        assert_eq!(from_file.store_path, PathBuf::from("from-file.json"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bookshelf.toml");
        fs::write(&path, "store_path = \"books.json\"\ndefault_filter = \"rating\"\n").unwrap();

        let config = AppConfig::load(Some(&path), Some(PathBuf::from("flag.json"))).unwrap();
        assert_eq!(config.default_filter, FilterField::Rating);
        assert_eq!(config.store_path, PathBuf::from("flag.json"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("nope.toml")), None).is_err());
    }
}

//! Configuration loading for docker-bench-html

mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".docker-bench-html.json";

/// Result of looking up the config for a run
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from
    pub source: Option<PathBuf>,
    /// Error from a config found by the directory search; defaults are used instead
    pub skipped: Option<anyhow::Error>,
}

/// Find and load the config file. Searches `work_dir` then its parents unless
/// `custom_path` is given. An explicit file must exist and parse; a file found
/// by the search that fails to load is reported in `skipped`.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        let config = read_config(&path)?;
        return Ok(LoadedConfig {
            config,
            source: Some(path),
            skipped: None,
        });
    }

    let Some(path) = find_config_in_parents(work_dir) else {
        return Ok(LoadedConfig::default());
    };
    Ok(match read_config(&path) {
        Ok(config) => LoadedConfig {
            config,
            source: Some(path),
            skipped: None,
        },
        Err(e) => LoadedConfig {
            skipped: Some(e),
            ..LoadedConfig::default()
        },
    })
}

fn read_config(config_path: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))
}

/// Search for .docker-bench-html.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Directory the config search starts from for a given input file
pub fn search_dir(input: &Path) -> &Path {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_config_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        // A config further up the real filesystem would be picked up; only
        // assert on what this temp tree controls.
        let found = find_config_in_parents(&nested);
        assert!(found.map_or(true, |p| !p.starts_with(dir.path())));
    }

    #[test]
    fn test_config_found_in_parent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"title": "Fleet audit"}"#).unwrap();
        let nested = dir.path().join("reports").join("2024");
        fs::create_dir_all(&nested).unwrap();

        let loaded = load_config(&nested, None).unwrap();
        assert_eq!(loaded.config.title(), "Fleet audit");
        assert_eq!(loaded.source, Some(dir.path().join(CONFIG_FILENAME)));
        assert!(loaded.skipped.is_none());
    }

    #[test]
    fn test_custom_path_relative_to_work_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("custom.json"), r#"{"showHint": false}"#).unwrap();

        let loaded = load_config(dir.path(), Some(Path::new("custom.json"))).unwrap();
        assert!(!loaded.config.show_hint);
    }

    #[test]
    fn test_missing_custom_path_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("missing.json"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_explicit_config_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("custom.json"), "{ not json").unwrap();
        let err = load_config(dir.path(), Some(Path::new("custom.json"))).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON in config"));
    }

    #[test]
    fn test_invalid_config_in_parent_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        let nested = dir.path().join("reports");
        fs::create_dir_all(&nested).unwrap();

        let loaded = load_config(&nested, None).unwrap();
        assert_eq!(loaded.config, Config::default());
        assert!(loaded.source.is_none());
        let err = loaded.skipped.expect("broken config is reported");
        assert!(err.to_string().contains("Invalid JSON in config"));
    }

    #[test]
    fn test_search_dir_for_bare_file_name() {
        assert_eq!(search_dir(Path::new("report.txt")), Path::new("."));
        assert_eq!(search_dir(Path::new("out/report.txt")), Path::new("out"));
    }
}

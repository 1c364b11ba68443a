use crate::error::{BumpyError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Parsed `bumpy.toml` configuration.
///
/// Lists the files whose version literals are kept in sync, in the order
/// they should be processed and displayed.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub files_to_bump: Vec<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path. The path is always passed
    /// in by the caller; the engine never probes the working directory
    /// itself.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BumpyError::ConfigNotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|source| BumpyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bumpy.toml");
        std::fs::write(
            &config_path,
            r#"files_to_bump = ["pyproject.toml", "src/version.py"]"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(
            config.files_to_bump,
            vec![PathBuf::from("pyproject.toml"), PathBuf::from("src/version.py")]
        );
    }

    #[test]
    fn test_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bumpy.toml");
        std::fs::write(&config_path, r#"files_to_bump = ["b.txt", "a.txt", "c.txt"]"#).unwrap();

        let config = Config::load(&config_path).unwrap();
        let names: Vec<_> = config
            .files_to_bump
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["b.txt", "a.txt", "c.txt"]);
    }

    #[test]
    fn test_missing_config_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(&temp_dir.path().join("bumpy.toml")).unwrap_err();
        assert!(matches!(err, BumpyError::ConfigNotFound(_)));
    }

    #[test]
    fn test_malformed_config_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bumpy.toml");
        std::fs::write(&config_path, "files_to_bump = not valid toml").unwrap();

        let err = Config::load(&config_path).unwrap_err();
        assert!(matches!(err, BumpyError::ConfigParse { .. }));
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bumpy.toml");
        std::fs::write(&config_path, r#"other_key = ["a.txt"]"#).unwrap();

        let err = Config::load(&config_path).unwrap_err();
        assert!(matches!(err, BumpyError::ConfigParse { .. }));
    }
}

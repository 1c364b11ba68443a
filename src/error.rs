use std::path::PathBuf;
use thiserror::Error;

/// Fatal error conditions. Anything here aborts the run before any file is
/// written; per-file problems are reported as [`Warning`]s instead.
#[derive(Debug, Error)]
pub enum BumpyError {
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "no version numbers found; check that the configured paths are correct \
         and each file contains a quoted MAJOR.MINOR.PATCH literal"
    )]
    NoVersionsFound,

    #[error("invalid version format: {0:?} (expected three sets of digits separated by periods)")]
    BadFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BumpyError>;

/// Per-file recoverable condition. Collected during a run, printed as a
/// warning, and never fatal on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A configured path does not exist or is not a regular file.
    FileNotFound(PathBuf),
    /// The file exists but contains no quoted version literal.
    NoVersionLiteral(PathBuf),
    /// The computed replacement failed re-validation against the version
    /// pattern and the file was excluded from the write set.
    InvalidResult(PathBuf),
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::FileNotFound(path) => {
                write!(f, "file {} not found, double-check path", path.display())
            }
            Warning::NoVersionLiteral(path) => {
                write!(f, "no version number found in {}", path.display())
            }
            Warning::InvalidResult(path) => {
                write!(f, "computed version for {} is not a valid version number", path.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_display() {
        let err = BumpyError::ConfigNotFound(PathBuf::from("bumpy.toml"));
        assert!(err.to_string().contains("bumpy.toml"));
    }

    #[test]
    fn test_bad_format_display() {
        let err = BumpyError::BadFormat("1.2".to_string());
        assert!(err.to_string().contains("1.2"));
        assert!(err.to_string().contains("three sets of digits"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BumpyError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_warning_display() {
        let warn = Warning::FileNotFound(PathBuf::from("missing.txt"));
        assert!(warn.to_string().contains("missing.txt"));

        let warn = Warning::NoVersionLiteral(PathBuf::from("empty.txt"));
        assert!(warn.to_string().contains("no version number"));
    }
}

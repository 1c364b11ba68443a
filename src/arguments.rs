use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, about = "Bump or change version numbers.", bin_name = "bumpy")]
pub struct Arguments {
    /// Bump the major version by N (by 1 when no value is given). Resets minor and patch to 0.
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "1", default_value_t = 0)]
    pub major: u64,
    /// Bump the minor version by N (by 1 when no value is given). Resets patch to 0.
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "1", default_value_t = 0)]
    pub minor: u64,
    /// Bump the patch version by N (by 1 when no value is given).
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "1", default_value_t = 0)]
    pub patch: u64,
    /// Enter a new version number interactively.
    #[arg(long)]
    pub version: bool,
    /// Path to the configuration file listing the files to bump.
    #[arg(long, short, default_value = "bumpy.toml")]
    pub config: PathBuf,
    #[arg(long, short)]
    pub verbose: bool,
}

impl Arguments {
    /// Display-only mode: no bump deltas and no interactive entry requested.
    pub fn is_display_only(&self) -> bool {
        !self.version && self.major == 0 && self.minor == 0 && self.patch == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = Arguments::parse_from(["bumpy"]);
        assert_eq!(args.major, 0);
        assert_eq!(args.minor, 0);
        assert_eq!(args.patch, 0);
        assert!(!args.version);
        assert_eq!(args.config, PathBuf::from("bumpy.toml"));
        assert!(!args.verbose);
        assert!(args.is_display_only());
    }

    #[test]
    fn test_bare_flag_defaults_to_one() {
        let args = Arguments::parse_from(["bumpy", "--patch"]);
        assert_eq!(args.patch, 1);
        assert_eq!(args.major, 0);
        assert_eq!(args.minor, 0);

        let args = Arguments::parse_from(["bumpy", "--minor"]);
        assert_eq!(args.minor, 1);

        let args = Arguments::parse_from(["bumpy", "--major"]);
        assert_eq!(args.major, 1);
    }

    #[test]
    fn test_flag_with_explicit_delta() {
        let args = Arguments::parse_from(["bumpy", "--patch", "3"]);
        assert_eq!(args.patch, 3);

        let args = Arguments::parse_from(["bumpy", "--major", "2"]);
        assert_eq!(args.major, 2);
    }

    #[test]
    fn test_version_flag_enables_interactive_mode() {
        let args = Arguments::parse_from(["bumpy", "--version"]);
        assert!(args.version);
        assert!(!args.is_display_only());
    }

    #[test]
    fn test_bump_flags_are_not_display_only() {
        let args = Arguments::parse_from(["bumpy", "--minor"]);
        assert!(!args.is_display_only());
    }

    #[test]
    fn test_parse_config_path() {
        let args = Arguments::parse_from(["bumpy", "--config", "/some/path/bumpy.toml"]);
        assert_eq!(args.config, PathBuf::from("/some/path/bumpy.toml"));

        let args = Arguments::parse_from(["bumpy", "-c", "other.toml"]);
        assert_eq!(args.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn test_parse_verbose() {
        let args = Arguments::parse_from(["bumpy", "-v"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_combined_flags() {
        let args = Arguments::parse_from(["bumpy", "--major", "--verbose", "-c", "conf.toml"]);
        assert_eq!(args.major, 1);
        assert!(args.verbose);
        assert_eq!(args.config, PathBuf::from("conf.toml"));
    }
}

//! Failures reported by `hue-wheel`, each with its own exit code.
//!
//! | code | cause                                              |
//! |------|----------------------------------------------------|
//! | 2    | unparsable arguments (clap, before `run`)          |
//! | 10   | a color argument is not `#rrggbb`                  |
//! | 11   | an `-o` file could not be written                  |
//! | 12   | `--config` or a size flag was rejected             |
//! | 13   | a document could not be rendered or printed        |
//!
//! A pointer that misses the band is not a failure.

use hue_wheel_core::WheelError;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    BadColor(WheelError),

    #[error("cannot write {}: {reason}", path.display())]
    Unwritable { path: PathBuf, reason: String },

    #[error("rejected config: {0}")]
    Config(String),

    #[error("cannot produce output: {0}")]
    Output(String),
}

impl CliError {
    pub fn unwritable(path: &Path, reason: impl Display) -> Self {
        CliError::Unwritable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Routes a failed write to `path`: I/O trouble names the file, anything
    /// else keeps its usual mapping.
    pub fn writing(path: &Path, e: WheelError) -> Self {
        match e {
            WheelError::Io(reason) => Self::unwritable(path, reason),
            other => other.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::BadColor(_) => 10,
            CliError::Unwritable { .. } => 11,
            CliError::Config(_) => 12,
            CliError::Output(_) => 13,
        }
    }
}

impl From<WheelError> for CliError {
    fn from(e: WheelError) -> Self {
        match e {
            WheelError::InvalidFormat(_) => CliError::BadColor(e),
            WheelError::InvalidConfig(msg) => CliError::Config(msg),
            other => CliError::Output(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_hex_keeps_the_offending_text() {
        let err = CliError::from(WheelError::InvalidFormat("\"#12345g\"".into()));
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("#12345g"), "{err}");
    }

    #[test]
    fn unwritable_names_the_path() {
        let err = CliError::unwritable(Path::new("/ro/wheel.svg"), "read-only file system");
        assert_eq!(err.exit_code(), 11);
        assert_eq!(err.to_string(), "cannot write /ro/wheel.svg: read-only file system");
    }

    #[test]
    fn failed_snapshot_write_is_unwritable() {
        let path = Path::new("out/wheel.png");
        let err = CliError::writing(path, WheelError::Io("No such file or directory".into()));
        assert!(
            matches!(err, CliError::Unwritable { ref path, .. } if path.ends_with("wheel.png"))
        );
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn oversized_snapshot_is_output_failure() {
        let err = CliError::writing(Path::new("wheel.png"), WheelError::InvalidDimensions);
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn rejected_config_is_12() {
        let err = CliError::from(WheelError::InvalidConfig("segments must be at least 1".into()));
        assert_eq!(err.exit_code(), 12);
        assert_eq!(err.to_string(), "rejected config: segments must be at least 1");
    }

    #[test]
    fn render_failure_is_13() {
        let err = CliError::from(WheelError::Render("unclosed tag".into()));
        assert_eq!(err.exit_code(), 13);
        assert!(err.to_string().contains("unclosed tag"));
    }
}

//! Error types for fleetfix-edit.
//!
//! Every variant maps to the `error` fix outcome; none of them abort a batch.

use camino::Utf8PathBuf;
use fleetfix_domain::ConfigShapeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    /// The config exists but could not be read.
    #[error("read {path}: {message}")]
    Read { path: Utf8PathBuf, message: String },

    /// The config is not valid JSON. It is never rewritten automatically.
    #[error("invalid JSON in {path}: {source}")]
    InvalidJson {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },

    /// The config parsed but cannot carry an `extends` field.
    #[error("{path}: {source}")]
    Shape {
        path: Utf8PathBuf,
        source: ConfigShapeError,
    },

    #[error("serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("write {path}: {message}")]
    Write { path: Utf8PathBuf, message: String },
}

/// Result type alias using EditError.
pub type EditResult<T> = Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_json_display_names_the_file() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid");
        let err = EditError::InvalidJson {
            path: Utf8PathBuf::from("repo/.claude/project.json"),
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("invalid JSON in repo/.claude/project.json"));
    }

    #[test]
    fn shape_error_display() {
        let err = EditError::Shape {
            path: Utf8PathBuf::from("p.json"),
            source: ConfigShapeError::NotAnObject,
        };
        assert_eq!(err.to_string(), "p.json: config root is not a JSON object");
    }
}

//! Error types
//!
//! Only configuration and setup can fail. Everything that happens inside a
//! tick is either applied or softly rejected (see
//! [`FeedbackSignal`](crate::player::FeedbackSignal)), never an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating a [`PlayerConfig`](crate::config::PlayerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid JSON for the config schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the controller cannot work with.
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Fatal configuration errors raised when a player controller is initialized.
///
/// The entity stays non-functional; the rest of the process carries on.
#[derive(Debug, Error)]
pub enum SetupError {
    /// No character body was supplied.
    #[error("player controller requires a character body")]
    MissingBody,

    /// No camera rig was supplied.
    #[error("player controller requires a camera rig")]
    MissingCamera,

    /// The supplied configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

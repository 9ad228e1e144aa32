use std::path::PathBuf;

use thiserror::Error;

use crate::input::HotkeyParseError;

/// A reload attempt that was rejected. The store keeps its previous values.
#[derive(Error, Debug)]
pub enum ReloadError {
    #[error("invalid hotkey {value:?}: {source}")]
    InvalidHotkey {
        value: String,
        #[source]
        source: HotkeyParseError,
    },

    #[error("invalid toggle value {value:?} (expected On or Off)")]
    InvalidToggleValue { value: String },

    #[error("malformed config file: {0}")]
    Malformed(#[from] toml::de::Error),

    #[error("failed to read {}: {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persistence failures at startup or shutdown.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: confy::ConfyError,
    },

    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Error types
//!
//! Only startup is fallible: configuration and asset loading. The simulation
//! itself is total.

use std::path::PathBuf;

use thiserror::Error;

/// Texture could not be turned into a handle
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset path is empty")]
    EmptyPath,

    #[error("unable to load image {path}: {reason}")]
    Unloadable { path: PathBuf, reason: String },
}

/// Settings file could not be read or is out of range
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Anything that stops the game from starting
#[derive(Error, Debug)]
pub enum LanderError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

//! Error types
//!
//! The simulation itself is total; these only come from configuration and
//! the platform shell.

/// Errors raised outside the simulation core.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// A configuration value is out of range
    #[error("Invalid configuration : {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("Failed to parse configuration : {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The page is missing an element the web shell needs
    #[error("Missing page element #{0}")]
    MissingElement(String),

    /// GPU adapter, device or surface could not be acquired
    #[error("Graphics initialization failed : {0}")]
    Graphics(String),
}

// crates/veritas-cli/src/error.rs
//
// Error type for the CLI layer.

use thiserror::Error;

use veritas_core::VeritasError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("Could not render configuration: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    #[error(transparent)]
    Engine(#[from] VeritasError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The engine returned a result flagged as an error (e.g. text too short).
    #[error("Text was not scored: {0}")]
    Rejected(String),
}

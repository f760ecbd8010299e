//! Startup errors for the server binary.

use crate::config::ConfigError;

/// Anything that stops the server from coming up.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Leptos build options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosterError {
    #[error("I/O failure on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No usable entries in '{}'", .0.display())]
    EmptyResource(PathBuf),

    #[error("Image generation failed: {0}")]
    Generation(String),

    #[error("Facebook photo upload failed: {0}")]
    Publish(String),

    #[error("Missing configuration: {0} is not set")]
    MissingConfig(&'static str),

    #[error("Invalid configuration value for {key}: '{value}'")]
    InvalidConfig { key: &'static str, value: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl PosterError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PosterError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PosterError>;

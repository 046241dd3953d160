use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a [`crate::CarouselConfig`] from disk.
///
/// Navigation itself never fails; this is the only error surface of the library.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse carousel config: {0}")]
    Parse(#[from] toml::de::Error),
}

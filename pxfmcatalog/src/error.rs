//! Error types for the station catalog

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or validating a catalog
///
/// Browsing itself is infallible; only catalog construction (parsing and
/// validating the embedded station table) can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// YAML parsing failed
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The station table contains no stations
    #[error("Catalog contains no stations")]
    EmptyCatalog,

    /// Two stations share the same identifier
    #[error("Duplicate station id: {0}")]
    DuplicateStation(String),

    /// A favorites entry points at a station id that does not exist
    #[error("Favorite references unknown station: {0}")]
    UnknownFavorite(String),

    /// Configuration error (from pxfmconfig/anyhow)
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let other = Error::other("stations file unreadable");
        assert_eq!(other.to_string(), "stations file unreadable");

        let config: Error = anyhow::anyhow!("missing browse section").into();
        assert_eq!(config.to_string(), "Configuration error: missing browse section");
    }
}

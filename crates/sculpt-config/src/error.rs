//! Failures of the `config.ron` round trip and of JSON sample export.

/// Everything that can go wrong between the sampler and the file system.
///
/// I/O failures keep the underlying [`std::io::Error`] as their source; the
/// variant says which direction the data was flowing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("cannot read config.ron: {0}")]
    ReadError(#[source] std::io::Error),

    /// Creating the config directory or writing `config.ron` or an export
    /// file failed.
    #[error("cannot write output: {0}")]
    WriteError(#[source] std::io::Error),

    /// `config.ron` is not valid RON for [`crate::Config`]. The error carries
    /// the line and column.
    #[error("invalid config.ron: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// A [`crate::Config`] value could not be rendered as RON.
    #[error("cannot encode config as RON: {0}")]
    SerializeError(#[source] ron::Error),

    /// Sampled data could not be encoded as JSON.
    #[error("cannot encode samples as JSON: {0}")]
    ExportError(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_errors_keep_their_source() {
        let err = ConfigError::WriteError(std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "cannot write output: disk full");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_error_mentions_config_file() {
        let spanned = ron::from_str::<crate::Config>("(shape: 3)").unwrap_err();
        let err = ConfigError::ParseError(spanned);
        assert!(err.to_string().starts_with("invalid config.ron"), "{err}");
    }
}

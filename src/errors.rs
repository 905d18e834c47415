use std::path::PathBuf;

/// `RenderError` is returned when a `DeviceConfig` can not be rendered into configuration text. A
/// render either produces the complete document or one of these, never partial output.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    /// A subnet prefix length outside of 0 through 32 was handed to the mask codec.
    #[error("invalid ipv4 prefix length {0}, must be between 0 and 32")]
    InvalidPrefix(i32),

    /// A credential that the encoding table has no entry for was requested with a non plaintext
    /// encryption type.
    #[error("no type {encryption_type} encoding available for credential '{plaintext}'")]
    UnsupportedCredential {
        /// The plaintext credential that could not be encoded.
        plaintext: String,
        /// The requested (numeric) encryption type.
        encryption_type: u8,
    },
}

/// `ConfigError` covers everything that can go wrong while loading a `DeviceConfig` from yaml, a
/// file, or one of the embedded templates.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The yaml data could not be deserialized into a `DeviceConfig`.
    #[error("failed deserializing device config, error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The config file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// No embedded template exists with the requested name.
    #[error("unknown template name '{0}'")]
    UnknownTemplate(String),

    /// The config deserialized fine but holds values the device would reject.
    #[error("invalid device config: {details}")]
    Invalid {
        /// A string holding details about what was invalid.
        details: String,
    },
}

/// `ExportError` is returned when rendered configuration text can not be persisted.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing the output file (or creating its directory) failed.
    #[error("failed writing config to '{}', error: {source}", .path.display())]
    Io {
        /// The path that was being written.
        path: PathBuf,
        /// The underlying io error.
        source: std::io::Error,
    },
}

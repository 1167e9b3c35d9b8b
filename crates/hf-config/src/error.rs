use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source failed to parse, or a value has the wrong type.
    #[error("failed to load homefix configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is outside what homefix accepts.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no schema registered as '{0}'")]
    NotFound(String),

    /// One entry per violated keyword, in validator order.
    #[error("{} schema violation(s): {}", errors.len(), errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    /// The generated schema was rejected by the validator compiler.
    #[error("schema does not compile: {0}")]
    Compile(String),
}

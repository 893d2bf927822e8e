//! Schema registry error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema registered under the requested name.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// Compiling a generated schema into a validator failed.
    #[error("Schema compilation failed: {0}")]
    Compilation(String),
}

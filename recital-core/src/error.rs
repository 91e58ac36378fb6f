//! Error types for format operations

use thiserror::Error;

/// Errors that can occur when selecting or running an output format.
///
/// Rendering a lesson never fails; these only come from the format layer
/// around it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error while producing the output text
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not accept the requested operation or option
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

//! Error types shared across the model layer.

/// Type alias for `Result` carrying an [`error_stack::Report`].
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Failures while converting wire bytes into typed structures.
///
/// A missing required field (for example `success` or `order_id`) surfaces
/// here as a [`ParsingError::StructParseFailure`]; callers must treat it as a
/// protocol violation rather than an empty value.
#[derive(Debug, thiserror::Error)]
pub enum ParsingError {
    /// Failed to parse the given type from a response payload
    #[error("Failed to parse {0} from the payload")]
    StructParseFailure(&'static str),
    /// Failed to parse an email address
    #[error("Failed to parse email address")]
    EmailParsingError,
}

/// Validation failures for values constructed by the caller.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The value does not follow the expected format
    #[error("{message}")]
    InvalidValue {
        /// Reason for the value being invalid
        message: String,
    },
}

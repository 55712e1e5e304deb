//! Error types shared by the listing store, gateways and CLI.

use thiserror::Error;

/// Errors surfaced while validating criteria or talking to listing
/// collaborators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WayfarerError {
    /// A filter field failed local validation.
    #[error("invalid {field}: {message}")]
    Validation {
        /// Name of the offending field (e.g. `stars`).
        field: &'static str,
        /// Human-readable explanation rendered next to the field.
        message: String,
    },

    /// Networking failed while calling a collaborator.
    #[error("network error talking to the listing service: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The collaborator answered with a non-success status.
    #[error("listing service returned status {status}: {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body (truncated) describing the failure.
        message: String,
    },

    /// A response or local file could not be decoded.
    #[error("failed to decode listing data: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl WayfarerError {
    /// Builds a validation error for `field`.
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

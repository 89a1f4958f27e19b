//! Errors raised while encoding or decoding wire messages.
//!
//! Both sides of the boundary treat decode failures as droppable: the message
//! is discarded as if it had never arrived. The error variants exist so
//! diagnostics hooks and logs can say *why* a message was dropped.

use thiserror::Error;

/// Errors arising from wire serialization and parsing.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The input was not valid JSON or did not match the message schema.
    #[error("malformed message: {message}")]
    Malformed {
        /// Description of the parse failure.
        message: String,
    },

    /// The input parsed as JSON but is not shaped like a known message.
    #[error("message does not match the expected shape")]
    UnrecognisedShape,

    /// A message could not be serialised to its wire form.
    #[error("failed to serialise message: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ProtocolError {
    /// Creates a [`ProtocolError::Malformed`] with the given description.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Wraps a JSON decode error as [`ProtocolError::Malformed`].
    #[must_use]
    pub fn from_json_error(error: &serde_json::Error) -> Self {
        Self::Malformed {
            message: error.to_string(),
        }
    }
}

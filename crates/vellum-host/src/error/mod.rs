//! Bridge error types.

use vellum_protocol::ProtocolError;

/// Errors the bridge cannot swallow behind the fault barrier.
///
/// Almost every bridge failure is absorbed by design; what remains is the
/// boot path, where a configuration that cannot be serialised means no
/// editor can exist at all.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The boot configuration could not be serialised for injection.
    #[error("boot configuration could not be serialised: {0}")]
    Boot(#[from] ProtocolError),
}

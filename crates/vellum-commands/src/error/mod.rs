//! Domain errors raised while assembling the command registry.
//!
//! These occur at boot, not per dispatch: a malformed extension descriptor is
//! an unrecovered fatal condition for the runtime instance, matching the
//! contract that per-dispatch failures stay silent while construction-time
//! failures surface loudly.

use thiserror::Error;

/// Errors arising from registry construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// An extension descriptor declared a blank id.
    #[error("extension command has an empty id")]
    EmptyExtensionId,

    /// An extension descriptor declared an unusable value template.
    #[error("extension '{id}' has an invalid value template: {message}")]
    InvalidTemplate {
        /// Extension id as declared.
        id: String,
        /// Description of the template problem.
        message: String,
    },
}

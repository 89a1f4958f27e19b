//! Shared configuration for the Vellum editor bridge.
//!
//! Collects the defaults and logging configuration used by both sides of the
//! embedded-context boundary. The values here are deliberately small and
//! stable: the runtime reads them once at boot and never again, so changing a
//! default requires a full reload of the embedded document.

pub mod defaults;
mod logging;

pub use self::logging::{LogFormat, LogFormatParseError};

//! Command model and registry for the Vellum editor bridge.
//!
//! The embedded document's native command facility is opaque to this crate:
//! everything that touches it goes through the [`DocumentApi`] trait seam, so
//! the command layer can be exercised against an in-memory double without a
//! real document anywhere in sight.
//!
//! A [`Command`] is a named, queryable, executable unit of document mutation.
//! Rather than an inheritance hierarchy, the behaviour space is a closed
//! variant set ([`CommandBehaviour`]) unified behind the four-operation
//! contract: query state, query value, query enabled, execute. The
//! [`CommandRegistry`] assembles the active set from the built-in catalog, a
//! host allow-list, and data-described extension commands, with last-write-
//! wins registration so extensions can override built-ins under the same id.
//!
//! # Example
//!
//! ```
//! use vellum_commands::CommandRegistry;
//!
//! let registry = CommandRegistry::build(&["bold".into()], &[]).expect("build");
//! assert!(registry.get("bold").is_some());
//! assert!(registry.get("italic").is_none());
//! // Pseudo-commands survive every allow-list.
//! assert!(registry.get("setAttribute").is_some());
//! ```

pub mod catalog;
pub mod command;
pub mod document;
pub mod error;
pub mod registry;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use self::command::{Command, CommandBehaviour};
pub use self::document::DocumentApi;
pub use self::error::RegistryError;
pub use self::registry::CommandRegistry;

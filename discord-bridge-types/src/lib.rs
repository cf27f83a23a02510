//! Core type definitions for discord-bridge.
//!
//! This crate defines the backend-agnostic primitives every other crate in
//! the workspace builds on:
//! - [`Snowflake`] identifiers, canonically carried as decimal strings
//! - [`TypeTag`] runtime type descriptors used by the conversion tables and
//!   the wrapper resolver
//!
//! Everything that knows about Discord concepts (channels, permissions,
//! bridges) lives in `discord-bridge-api`, not here.

mod ids;
mod type_tag;

pub use ids::Snowflake;
pub use type_tag::TypeTag;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed snowflake id '{value}': {source}")]
    MalformedId {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

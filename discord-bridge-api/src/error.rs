//! Error types for the bridging layer.

use crate::enums::EnumDomain;
use thiserror::Error;

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors raised by conversion, discovery and wrapper resolution.
///
/// All of these are programmer or configuration errors and are surfaced
/// synchronously at the call site. Backend I/O failures are carried through
/// unchanged in [`BridgeError::Backend`].
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A native value's concrete type is not the one associated with the domain.
    #[error("type mismatch converting {domain}: expected native {expected}, found {found}")]
    TypeMismatch {
        domain: EnumDomain,
        expected: String,
        found: String,
    },

    /// The backend has no native representation for this variant.
    #[error("value {domain}.{variant} unsupported by bridge '{bridge}'")]
    UnsupportedValue {
        bridge: String,
        domain: EnumDomain,
        variant: &'static str,
    },

    #[error("no registered bridge can load native object of type {object}")]
    NoCompatibleBridge { object: String },

    #[error("multiple bridges can load native object of type {object}: {}", bridges.join(", "))]
    AmbiguousBridge { object: String, bridges: Vec<String> },

    #[error("no applicable {capability} wrapper for native object of type {object}")]
    NoApplicableWrapper {
        capability: &'static str,
        object: String,
    },

    #[error("ambiguous {capability} wrapper resolution between {}", candidates.join(", "))]
    AmbiguousResolution {
        capability: &'static str,
        candidates: Vec<&'static str>,
    },

    #[error(transparent)]
    MalformedId(#[from] discord_bridge_types::Error),

    /// An object from one bridge was handed to another.
    #[error("value {value} belongs to bridge '{owner}' but appeared in bridge '{current}'")]
    ImplementationMismatch {
        value: String,
        owner: String,
        current: String,
    },

    /// Registration data breaks a limit Discord enforces.
    #[error("invalid command data: {0}")]
    InvalidCommand(String),

    #[error("global bridge registry already initialized")]
    AlreadyInitialized,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BridgeError {
    /// Wraps a backend library error.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

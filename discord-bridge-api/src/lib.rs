//! Backend-agnostic Discord API facade.
//!
//! Application code is written against the traits in [`api`]; each Discord
//! client library plugs in as a [`DiscordBridge`]. The crate provides the
//! machinery every bridge shares:
//!
//! - enumerated domains with per-backend partial support ([`enums`],
//!   [`conversion`])
//! - ordered bridge discovery ([`BridgeRegistry`])
//! - most-specific wrapper selection for overlapping native types
//!   ([`SpecificityResolver`])
//! - the identity and backend linkage every wrapper composes ([`EntityHandle`])

pub mod api;
mod bridge;
mod cache;
mod config;
pub mod conversion;
mod entity;
pub mod enums;
mod error;
mod native;
mod registry;
mod resolver;

pub use bridge::{ApiKind, BridgeExt, BridgeRef, DiscordBridge};
pub use cache::CommandCache;
pub use config::{BridgeConfig, CommandCacheConfig, DiscoveryMode, CONFIG_ENV, DEFAULT_CONFIG_FILE};
pub use conversion::{ConversionRegistry, EnumTable};
pub use entity::{BridgeApi, DiscordEntity, EntityHandle};
pub use enums::{BridgeEnum, BridgeEnumValue, EnumDomain, TypeValue, TypeValueVariant};
pub use error::{BridgeError, BridgeResult};
pub use native::{NativeHandle, NativeValue};
pub use registry::{global, init_global, BridgeRegistry};
pub use resolver::{SpecificityResolver, WrapperCandidate};

pub use discord_bridge_types::{Snowflake, TypeTag};

//! Identity and backend linkage shared by every wrapper.

use crate::bridge::BridgeRef;
use crate::error::{BridgeError, BridgeResult};
use crate::native::NativeHandle;
use discord_bridge_types::Snowflake;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Anything produced by a bridge.
pub trait BridgeApi: Send + Sync {
    /// The backend object this wrapper forwards to.
    ///
    /// Only meaningful to code written against the same backend.
    fn implementation(&self) -> &NativeHandle;

    /// The bridge that produced this wrapper.
    fn bridge(&self) -> &BridgeRef;
}

/// A bridge object with a Discord snowflake ID.
pub trait DiscordEntity: BridgeApi {
    /// The ID exactly as the backend reports it.
    fn id_as_string(&self) -> &str;

    fn id(&self) -> BridgeResult<Snowflake> {
        Ok(Snowflake::parse(self.id_as_string())?)
    }
}

/// The state every entity wrapper composes.
#[derive(Clone)]
pub struct EntityHandle {
    bridge: BridgeRef,
    native: NativeHandle,
    id: String,
}

impl EntityHandle {
    pub fn new(bridge: BridgeRef, native: NativeHandle, id: impl Into<String>) -> Self {
        Self {
            bridge,
            native,
            id: id.into(),
        }
    }

    pub fn id_as_string(&self) -> &str {
        &self.id
    }

    pub fn id(&self) -> BridgeResult<Snowflake> {
        Ok(Snowflake::parse(&self.id)?)
    }

    pub fn native(&self) -> &NativeHandle {
        &self.native
    }

    pub fn bridge(&self) -> &BridgeRef {
        &self.bridge
    }

    /// The native object as `T`, shared.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.native.downcast_arc::<T>()
    }

    /// Fails unless this entity was produced by `current`.
    pub fn ensure_bridge(&self, current: &BridgeRef) -> BridgeResult<()> {
        if std::ptr::addr_eq(Arc::as_ptr(&self.bridge), Arc::as_ptr(current)) {
            return Ok(());
        }
        Err(BridgeError::ImplementationMismatch {
            value: format!("{}({})", self.native.type_name(), self.id),
            owner: self.bridge.name().to_string(),
            current: current.name().to_string(),
        })
    }
}

impl fmt::Debug for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityHandle")
            .field("bridge", &self.bridge.name())
            .field("native", &self.native)
            .field("id", &self.id)
            .finish()
    }
}

/// Implements [`BridgeApi`] and [`DiscordEntity`] for a wrapper holding an
/// [`EntityHandle`] in the named field (`handle` by default).
#[macro_export]
macro_rules! impl_entity {
    ($ty:ty) => {
        $crate::impl_entity!($ty, handle);
    };
    ($ty:ty, $field:ident) => {
        impl $crate::BridgeApi for $ty {
            fn implementation(&self) -> &$crate::NativeHandle {
                self.$field.native()
            }

            fn bridge(&self) -> &$crate::BridgeRef {
                self.$field.bridge()
            }
        }

        impl $crate::DiscordEntity for $ty {
            fn id_as_string(&self) -> &str {
                self.$field.id_as_string()
            }
        }
    };
}

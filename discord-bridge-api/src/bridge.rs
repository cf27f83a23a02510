//! The contract every backend adapter implements.

use crate::api::{
    Attachment, Channel, DiscordApi, Role, Server, ServerChannel, ServerTextChannel, SlashCommand,
    TextChannel, User,
};
use crate::cache::CommandCache;
use crate::enums::{BridgeEnum, BridgeEnumValue, EnumDomain, TypeValue, TypeValueVariant};
use crate::error::{BridgeError, BridgeResult};
use crate::native::{NativeHandle, NativeValue};
use discord_bridge_types::TypeTag;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Shared reference to a bridge. Bridges live for the whole process.
pub type BridgeRef = Arc<dyn DiscordBridge>;

/// One backend's implementation of the bridging protocol.
///
/// Implementations are built once, never mutated and shared by every
/// wrapper they produce.
pub trait DiscordBridge: Send + Sync + 'static {
    /// Human-readable bridge name. Also the key used by `disabled_bridges`.
    fn name(&self) -> &str;

    /// Whether this bridge can wrap `native` as a [`DiscordApi`].
    fn can_load_api(&self, native: &NativeHandle) -> bool;

    /// Wraps `native`. Only called after [`can_load_api`](Self::can_load_api)
    /// accepted the same object.
    fn load_api(self: Arc<Self>, native: NativeHandle) -> BridgeResult<Arc<dyn DiscordApi>>;

    /// Variants of `domain` this backend can represent. Never contains `Unknown`.
    fn supported_values(&self, domain: EnumDomain) -> BTreeSet<BridgeEnumValue>;

    /// The native type backing a type-describing variant. Total.
    fn internal_type_representation(&self, variant: TypeValueVariant) -> TypeTag;

    /// Converts an abstract variant into the backend's native value.
    fn implementation_value(&self, value: BridgeEnumValue) -> BridgeResult<NativeValue>;

    /// Converts a native value of `domain` back to its abstract variant.
    fn convert_internal(
        &self,
        domain: EnumDomain,
        native: &NativeValue,
    ) -> BridgeResult<BridgeEnumValue>;

    /// The native type implementing an abstract API type, if unique.
    fn implementation_type(&self, _kind: ApiKind) -> Option<TypeTag> {
        None
    }

    /// The slash command cache, for backends that keep one.
    fn command_cache(&self) -> Option<&CommandCache> {
        None
    }
}

/// Typed helpers over any [`DiscordBridge`].
pub trait BridgeExt: DiscordBridge {
    fn supported<T: BridgeEnum>(&self) -> BTreeSet<T> {
        self.supported_values(T::DOMAIN)
            .into_iter()
            .filter_map(|v| T::try_from(v).ok())
            .collect()
    }

    fn is_supported<T: BridgeEnum>(&self, value: T) -> bool {
        let value: BridgeEnumValue = value.into();
        !value.is_unknown() && self.supported_values(T::DOMAIN).contains(&value)
    }

    /// Writes `value` as the native type `N`.
    fn to_native<N: Any, T: BridgeEnum>(&self, value: T) -> BridgeResult<N> {
        self.implementation_value(value.into())?
            .downcast::<N>()
            .map_err(|native| BridgeError::TypeMismatch {
                domain: T::DOMAIN,
                expected: std::any::type_name::<N>().to_string(),
                found: native.type_tag().name().to_string(),
            })
    }

    /// Reads a native value as a variant of `T`.
    fn from_native<T: BridgeEnum, N: Any + Send + Sync>(&self, native: N) -> BridgeResult<T> {
        let native = NativeValue::new(native);
        let value = self.convert_internal(T::DOMAIN, &native)?;
        T::try_from(value).map_err(|other| BridgeError::TypeMismatch {
            domain: T::DOMAIN,
            expected: T::DOMAIN.to_string(),
            found: other.domain().to_string(),
        })
    }

    fn type_representation<T>(&self, value: T) -> TypeTag
    where
        T: TypeValue + Into<TypeValueVariant>,
    {
        self.internal_type_representation(value.into())
    }
}

impl<B: DiscordBridge + ?Sized> BridgeExt for B {}

/// Abstract API types a backend may back with a native type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKind {
    DiscordApi,
    Server,
    Channel,
    TextChannel,
    ServerChannel,
    ServerTextChannel,
    User,
    Role,
    SlashCommand,
    Attachment,
}

impl ApiKind {
    pub const ALL: &'static [ApiKind] = &[
        Self::DiscordApi,
        Self::Server,
        Self::Channel,
        Self::TextChannel,
        Self::ServerChannel,
        Self::ServerTextChannel,
        Self::User,
        Self::Role,
        Self::SlashCommand,
        Self::Attachment,
    ];

    pub fn abstract_type(&self) -> TypeTag {
        match self {
            Self::DiscordApi => TypeTag::of::<dyn DiscordApi>(),
            Self::Server => TypeTag::of::<dyn Server>(),
            Self::Channel => TypeTag::of::<dyn Channel>(),
            Self::TextChannel => TypeTag::of::<dyn TextChannel>(),
            Self::ServerChannel => TypeTag::of::<dyn ServerChannel>(),
            Self::ServerTextChannel => TypeTag::of::<dyn ServerTextChannel>(),
            Self::User => TypeTag::of::<dyn User>(),
            Self::Role => TypeTag::of::<dyn Role>(),
            Self::SlashCommand => TypeTag::of::<dyn SlashCommand>(),
            Self::Attachment => TypeTag::of::<dyn Attachment>(),
        }
    }
}

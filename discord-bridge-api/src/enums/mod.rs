//! Abstract enumerated domains shared by every bridge.
//!
//! Each domain is a closed Rust enum with exactly one `Unknown` sentinel.
//! Variant identity is stable across backends; what varies is whether a
//! given backend can represent a variant (see
//! [`DiscordBridge::supported_values`](crate::DiscordBridge::supported_values)).

/// Declares a domain enum and wires it into [`BridgeEnum`] and
/// [`BridgeEnumValue`]. The enum must declare an `Unknown` variant.
macro_rules! bridge_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::enums::BridgeEnum for $name {
            const DOMAIN: $crate::enums::EnumDomain = $crate::enums::EnumDomain::$name;
            const UNKNOWN: Self = Self::Unknown;
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl From<$name> for $crate::enums::BridgeEnumValue {
            fn from(value: $name) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<$crate::enums::BridgeEnumValue> for $name {
            type Error = $crate::enums::BridgeEnumValue;

            fn try_from(value: $crate::enums::BridgeEnumValue) -> Result<Self, Self::Error> {
                match value {
                    $crate::enums::BridgeEnumValue::$name(v) => Ok(v),
                    other => Err(other),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::enums::BridgeEnum::name(self))
            }
        }
    };
}

mod channel;
mod interaction;
mod locale;
mod message;
mod permission;
mod slash;

pub use channel::ChannelType;
pub use interaction::{ContextType, InstallationType};
pub use locale::Locale;
pub use message::MessageFlag;
pub use permission::PermissionType;
pub use slash::SlashCommandOptionType;

use crate::native::NativeValue;
use discord_bridge_types::TypeTag;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A variant of one abstract enumerated domain.
pub trait BridgeEnum:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + Send
    + Sync
    + 'static
    + Into<BridgeEnumValue>
    + TryFrom<BridgeEnumValue, Error = BridgeEnumValue>
{
    /// The domain this enum belongs to.
    const DOMAIN: EnumDomain;

    /// The fallback variant for values a backend does not recognize.
    const UNKNOWN: Self;

    /// Every variant in declaration order, `UNKNOWN` included.
    const ALL: &'static [Self];

    /// The stable, backend-independent name of this variant.
    fn name(&self) -> &'static str;

    fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    /// Every variant except `UNKNOWN`.
    fn declared() -> impl Iterator<Item = Self> {
        Self::ALL.iter().copied().filter(|v| !v.is_unknown())
    }
}

/// A domain whose variants describe the type of a payload.
pub trait TypeValue: BridgeEnum {
    /// The abstract type that best represents this variant.
    fn type_representation(&self) -> TypeTag;
}

/// The closed set of abstract enumerated domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumDomain {
    ChannelType,
    PermissionType,
    MessageFlag,
    SlashCommandOptionType,
    InstallationType,
    ContextType,
    Locale,
}

impl EnumDomain {
    pub const ALL: &'static [EnumDomain] = &[
        Self::ChannelType,
        Self::PermissionType,
        Self::MessageFlag,
        Self::SlashCommandOptionType,
        Self::InstallationType,
        Self::ContextType,
        Self::Locale,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ChannelType => "ChannelType",
            Self::PermissionType => "PermissionType",
            Self::MessageFlag => "MessageFlag",
            Self::SlashCommandOptionType => "SlashCommandOptionType",
            Self::InstallationType => "InstallationType",
            Self::ContextType => "ContextType",
            Self::Locale => "Locale",
        }
    }

    /// Looks a domain up by name, ignoring case and `_`/`-` separators.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(&wanted))
    }

    /// Every variant of the domain, `Unknown` included.
    pub fn variants(&self) -> Vec<BridgeEnumValue> {
        fn collect<T: BridgeEnum>() -> Vec<BridgeEnumValue> {
            T::ALL.iter().map(|v| (*v).into()).collect()
        }
        match self {
            Self::ChannelType => collect::<ChannelType>(),
            Self::PermissionType => collect::<PermissionType>(),
            Self::MessageFlag => collect::<MessageFlag>(),
            Self::SlashCommandOptionType => collect::<SlashCommandOptionType>(),
            Self::InstallationType => collect::<InstallationType>(),
            Self::ContextType => collect::<ContextType>(),
            Self::Locale => collect::<Locale>(),
        }
    }

    /// Every variant of the domain except `Unknown`.
    pub fn declared_variants(&self) -> Vec<BridgeEnumValue> {
        self.variants()
            .into_iter()
            .filter(|v| !v.is_unknown())
            .collect()
    }

    pub fn unknown(&self) -> BridgeEnumValue {
        match self {
            Self::ChannelType => ChannelType::UNKNOWN.into(),
            Self::PermissionType => PermissionType::UNKNOWN.into(),
            Self::MessageFlag => MessageFlag::UNKNOWN.into(),
            Self::SlashCommandOptionType => SlashCommandOptionType::UNKNOWN.into(),
            Self::InstallationType => InstallationType::UNKNOWN.into(),
            Self::ContextType => ContextType::UNKNOWN.into(),
            Self::Locale => Locale::UNKNOWN.into(),
        }
    }

    /// The Rust type that represents this domain's variants abstractly.
    pub fn abstract_type(&self) -> TypeTag {
        match self {
            Self::ChannelType => TypeTag::of::<ChannelType>(),
            Self::PermissionType => TypeTag::of::<PermissionType>(),
            Self::MessageFlag => TypeTag::of::<MessageFlag>(),
            Self::SlashCommandOptionType => TypeTag::of::<SlashCommandOptionType>(),
            Self::InstallationType => TypeTag::of::<InstallationType>(),
            Self::ContextType => TypeTag::of::<ContextType>(),
            Self::Locale => TypeTag::of::<Locale>(),
        }
    }
}

impl fmt::Display for EnumDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One variant of any domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "domain", content = "value")]
pub enum BridgeEnumValue {
    ChannelType(ChannelType),
    PermissionType(PermissionType),
    MessageFlag(MessageFlag),
    SlashCommandOptionType(SlashCommandOptionType),
    InstallationType(InstallationType),
    ContextType(ContextType),
    Locale(Locale),
}

impl BridgeEnumValue {
    pub fn domain(&self) -> EnumDomain {
        match self {
            Self::ChannelType(_) => EnumDomain::ChannelType,
            Self::PermissionType(_) => EnumDomain::PermissionType,
            Self::MessageFlag(_) => EnumDomain::MessageFlag,
            Self::SlashCommandOptionType(_) => EnumDomain::SlashCommandOptionType,
            Self::InstallationType(_) => EnumDomain::InstallationType,
            Self::ContextType(_) => EnumDomain::ContextType,
            Self::Locale(_) => EnumDomain::Locale,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ChannelType(v) => v.name(),
            Self::PermissionType(v) => v.name(),
            Self::MessageFlag(v) => v.name(),
            Self::SlashCommandOptionType(v) => v.name(),
            Self::InstallationType(v) => v.name(),
            Self::ContextType(v) => v.name(),
            Self::Locale(v) => v.name(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        match self {
            Self::ChannelType(v) => v.is_unknown(),
            Self::PermissionType(v) => v.is_unknown(),
            Self::MessageFlag(v) => v.is_unknown(),
            Self::SlashCommandOptionType(v) => v.is_unknown(),
            Self::InstallationType(v) => v.is_unknown(),
            Self::ContextType(v) => v.is_unknown(),
            Self::Locale(v) => v.is_unknown(),
        }
    }

    /// Boxes the concrete abstract enum (not this union) as a native value.
    ///
    /// Used by bridges that represent abstract values as themselves.
    pub fn to_abstract_native(&self) -> NativeValue {
        match *self {
            Self::ChannelType(v) => NativeValue::new(v),
            Self::PermissionType(v) => NativeValue::new(v),
            Self::MessageFlag(v) => NativeValue::new(v),
            Self::SlashCommandOptionType(v) => NativeValue::new(v),
            Self::InstallationType(v) => NativeValue::new(v),
            Self::ContextType(v) => NativeValue::new(v),
            Self::Locale(v) => NativeValue::new(v),
        }
    }

    /// Inverse of [`to_abstract_native`](Self::to_abstract_native). Returns
    /// `None` unless `native` holds exactly the domain's abstract enum.
    pub fn from_abstract_native(domain: EnumDomain, native: &NativeValue) -> Option<Self> {
        match domain {
            EnumDomain::ChannelType => native.downcast_ref::<ChannelType>().map(|v| (*v).into()),
            EnumDomain::PermissionType => {
                native.downcast_ref::<PermissionType>().map(|v| (*v).into())
            }
            EnumDomain::MessageFlag => native.downcast_ref::<MessageFlag>().map(|v| (*v).into()),
            EnumDomain::SlashCommandOptionType => native
                .downcast_ref::<SlashCommandOptionType>()
                .map(|v| (*v).into()),
            EnumDomain::InstallationType => {
                native.downcast_ref::<InstallationType>().map(|v| (*v).into())
            }
            EnumDomain::ContextType => native.downcast_ref::<ContextType>().map(|v| (*v).into()),
            EnumDomain::Locale => native.downcast_ref::<Locale>().map(|v| (*v).into()),
        }
    }
}

impl fmt::Display for BridgeEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain(), self.name())
    }
}

/// A variant of a domain implementing [`TypeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeValueVariant {
    Channel(ChannelType),
    SlashCommandOption(SlashCommandOptionType),
}

impl TypeValueVariant {
    pub fn type_representation(&self) -> TypeTag {
        match self {
            Self::Channel(v) => v.type_representation(),
            Self::SlashCommandOption(v) => v.type_representation(),
        }
    }

    pub fn value(&self) -> BridgeEnumValue {
        match *self {
            Self::Channel(v) => v.into(),
            Self::SlashCommandOption(v) => v.into(),
        }
    }

    pub fn domain(&self) -> EnumDomain {
        self.value().domain()
    }
}

impl From<ChannelType> for TypeValueVariant {
    fn from(value: ChannelType) -> Self {
        Self::Channel(value)
    }
}

impl From<SlashCommandOptionType> for TypeValueVariant {
    fn from(value: SlashCommandOptionType) -> Self {
        Self::SlashCommandOption(value)
    }
}

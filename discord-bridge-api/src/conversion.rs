//! Per-backend conversion tables between abstract variants and native values.
//!
//! A backend describes each domain once with an [`EnumTable`], groups the
//! tables in a [`ConversionRegistry`] and forwards the conversion half of
//! [`DiscordBridge`](crate::DiscordBridge) to it.

use crate::enums::{BridgeEnum, BridgeEnumValue, EnumDomain, TypeValueVariant};
use crate::error::{BridgeError, BridgeResult};
use crate::native::NativeValue;
use discord_bridge_types::TypeTag;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::trace;

/// Bidirectional mapping between one abstract domain `A` and the backend's
/// native representation `N`.
///
/// Explicit pairs are both readable and writable. Aliases are read-only:
/// the native value reads as the abstract variant but writing that variant
/// uses its explicit pair. Native values matched by neither read as
/// `A::UNKNOWN`.
pub struct EnumTable<A: BridgeEnum, N> {
    pairs: Vec<(A, N)>,
    aliases: Vec<(N, A)>,
    types: HashMap<A, TypeTag>,
    fallback_type: Option<TypeTag>,
}

impl<A, N> EnumTable<A, N>
where
    A: BridgeEnum,
    N: Copy + PartialEq + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            pairs: Vec::new(),
            aliases: Vec::new(),
            types: HashMap::new(),
            fallback_type: None,
        }
    }

    /// Maps `abstract_value` to `native` in both directions.
    ///
    /// `UNKNOWN` is never writable, so mapping it only registers a read.
    pub fn map(mut self, abstract_value: A, native: N) -> Self {
        if abstract_value.is_unknown() {
            self.aliases.push((native, abstract_value));
        } else {
            self.pairs.push((abstract_value, native));
        }
        self
    }

    /// Reads `native` as `abstract_value` without making it writable.
    pub fn alias(mut self, native: N, abstract_value: A) -> Self {
        self.aliases.push((native, abstract_value));
        self
    }

    /// Records the native type backing a `TypeValue` variant.
    pub fn typed(mut self, abstract_value: A, tag: TypeTag) -> Self {
        self.types.insert(abstract_value, tag);
        self
    }

    /// The type reported for variants without a [`typed`](Self::typed) entry.
    pub fn fallback_type(mut self, tag: TypeTag) -> Self {
        self.fallback_type = Some(tag);
        self
    }

    /// Abstract variants this table can write, `UNKNOWN` excluded.
    pub fn supported(&self) -> BTreeSet<A> {
        self.pairs.iter().map(|(a, _)| *a).collect()
    }

    pub fn to_native(&self, value: A) -> Option<N> {
        self.pairs
            .iter()
            .find(|(a, _)| *a == value)
            .map(|(_, n)| *n)
    }

    pub fn from_native(&self, native: &N) -> A {
        self.pairs
            .iter()
            .find(|(_, n)| n == native)
            .map(|(a, _)| *a)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|(n, _)| n == native)
                    .map(|(_, a)| *a)
            })
            .unwrap_or(A::UNKNOWN)
    }

    pub fn type_of(&self, value: A) -> Option<TypeTag> {
        self.types.get(&value).copied().or(self.fallback_type)
    }
}

impl<A, N> Default for EnumTable<A, N>
where
    A: BridgeEnum,
    N: Copy + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A: BridgeEnum, N> fmt::Debug for EnumTable<A, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumTable")
            .field("domain", &A::DOMAIN)
            .field("native", &std::any::type_name::<N>())
            .field("pairs", &self.pairs.len())
            .field("aliases", &self.aliases.len())
            .finish()
    }
}

/// A domain table with its abstract and native types erased.
pub trait DomainTable: Send + Sync {
    fn domain(&self) -> EnumDomain;

    /// The exact native type accepted by [`convert_internal`](Self::convert_internal).
    fn native_type(&self) -> TypeTag;

    fn supported_values(&self) -> BTreeSet<BridgeEnumValue>;

    /// `None` when the value belongs to another domain or has no native pair.
    fn implementation_value(&self, value: BridgeEnumValue) -> Option<NativeValue>;

    /// `None` when `native` is not exactly [`native_type`](Self::native_type).
    fn convert_internal(&self, native: &NativeValue) -> Option<BridgeEnumValue>;

    fn type_representation(&self, value: BridgeEnumValue) -> Option<TypeTag>;
}

impl<A, N> DomainTable for EnumTable<A, N>
where
    A: BridgeEnum,
    N: Copy + PartialEq + Send + Sync + 'static,
{
    fn domain(&self) -> EnumDomain {
        A::DOMAIN
    }

    fn native_type(&self) -> TypeTag {
        TypeTag::of::<N>()
    }

    fn supported_values(&self) -> BTreeSet<BridgeEnumValue> {
        self.supported().into_iter().map(Into::into).collect()
    }

    fn implementation_value(&self, value: BridgeEnumValue) -> Option<NativeValue> {
        let value = A::try_from(value).ok()?;
        self.to_native(value).map(NativeValue::new)
    }

    fn convert_internal(&self, native: &NativeValue) -> Option<BridgeEnumValue> {
        native
            .downcast_ref::<N>()
            .map(|n| self.from_native(n).into())
    }

    fn type_representation(&self, value: BridgeEnumValue) -> Option<TypeTag> {
        let value = A::try_from(value).ok()?;
        self.type_of(value)
    }
}

/// One erased [`EnumTable`] per domain for a single backend.
///
/// Domains without a table support nothing, and every native value handed to
/// them is a type mismatch.
pub struct ConversionRegistry {
    bridge: String,
    tables: HashMap<EnumDomain, Box<dyn DomainTable>>,
}

impl ConversionRegistry {
    pub fn builder(bridge: impl Into<String>) -> ConversionRegistryBuilder {
        ConversionRegistryBuilder {
            bridge: bridge.into(),
            tables: HashMap::new(),
        }
    }

    /// Name of the bridge these tables belong to, used in error messages.
    pub fn bridge(&self) -> &str {
        &self.bridge
    }

    pub fn native_type(&self, domain: EnumDomain) -> Option<TypeTag> {
        self.tables.get(&domain).map(|t| t.native_type())
    }

    pub fn supported_values(&self, domain: EnumDomain) -> BTreeSet<BridgeEnumValue> {
        self.tables
            .get(&domain)
            .map(|t| t.supported_values())
            .unwrap_or_default()
    }

    pub fn is_supported(&self, value: BridgeEnumValue) -> bool {
        !value.is_unknown()
            && self
                .tables
                .get(&value.domain())
                .is_some_and(|t| t.supported_values().contains(&value))
    }

    pub fn implementation_value(&self, value: BridgeEnumValue) -> BridgeResult<NativeValue> {
        let native = if value.is_unknown() {
            None
        } else {
            self.tables
                .get(&value.domain())
                .and_then(|t| t.implementation_value(value))
        };
        native.ok_or_else(|| {
            trace!(bridge = %self.bridge, value = %value, "No native representation");
            BridgeError::UnsupportedValue {
                bridge: self.bridge.clone(),
                domain: value.domain(),
                variant: value.name(),
            }
        })
    }

    pub fn convert_internal(
        &self,
        domain: EnumDomain,
        native: &NativeValue,
    ) -> BridgeResult<BridgeEnumValue> {
        let mismatch = |expected: &str| {
            trace!(
                bridge = %self.bridge,
                domain = %domain,
                found = native.type_tag().name(),
                "Native value has the wrong type"
            );
            BridgeError::TypeMismatch {
                domain,
                expected: expected.to_string(),
                found: native.type_tag().name().to_string(),
            }
        };

        match self.tables.get(&domain) {
            Some(table) => table
                .convert_internal(native)
                .ok_or_else(|| mismatch(table.native_type().name())),
            None => Err(mismatch("<none>")),
        }
    }

    /// The native type for `variant`, falling back to the abstract
    /// representation when the backend declares none.
    pub fn internal_type_representation(&self, variant: TypeValueVariant) -> TypeTag {
        self.tables
            .get(&variant.domain())
            .and_then(|t| t.type_representation(variant.value()))
            .unwrap_or_else(|| variant.type_representation())
    }
}

impl fmt::Debug for ConversionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut domains: Vec<_> = self.tables.keys().copied().collect();
        domains.sort();
        f.debug_struct("ConversionRegistry")
            .field("bridge", &self.bridge)
            .field("domains", &domains)
            .finish()
    }
}

pub struct ConversionRegistryBuilder {
    bridge: String,
    tables: HashMap<EnumDomain, Box<dyn DomainTable>>,
}

impl ConversionRegistryBuilder {
    /// Adds the table for `A::DOMAIN`, replacing any earlier one.
    pub fn table<A, N>(mut self, table: EnumTable<A, N>) -> Self
    where
        A: BridgeEnum,
        N: Copy + PartialEq + Send + Sync + 'static,
    {
        self.tables.insert(A::DOMAIN, Box::new(table));
        self
    }

    pub fn build(self) -> ConversionRegistry {
        ConversionRegistry {
            bridge: self.bridge,
            tables: self.tables,
        }
    }
}

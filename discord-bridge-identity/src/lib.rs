//! The identity bridge.
//!
//! Represents every abstract value as itself and loads no backend. Useful as
//! a reference for the conversion protocol and in tests that only need a
//! bridge to exist.

use discord_bridge_api::api::DiscordApi;
use discord_bridge_api::{
    ApiKind, BridgeEnumValue, BridgeError, BridgeResult, DiscordBridge, EnumDomain, NativeHandle,
    NativeValue, TypeTag, TypeValueVariant,
};
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};
use tracing::trace;

pub const NAME: &str = "DiscordBridge Identity (nop) Implementation";

/// Bridge whose native values are the abstract enums themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityBridge;

impl IdentityBridge {
    pub fn new() -> Self {
        Self
    }

    /// The shared instance.
    pub fn shared() -> Arc<IdentityBridge> {
        static INSTANCE: OnceLock<Arc<IdentityBridge>> = OnceLock::new();
        Arc::clone(INSTANCE.get_or_init(|| Arc::new(IdentityBridge)))
    }
}

impl DiscordBridge for IdentityBridge {
    fn name(&self) -> &str {
        NAME
    }

    fn can_load_api(&self, _native: &NativeHandle) -> bool {
        false
    }

    fn load_api(self: Arc<Self>, native: NativeHandle) -> BridgeResult<Arc<dyn DiscordApi>> {
        Err(BridgeError::NoCompatibleBridge {
            object: native.type_name().to_string(),
        })
    }

    fn supported_values(&self, domain: EnumDomain) -> BTreeSet<BridgeEnumValue> {
        domain.declared_variants().into_iter().collect()
    }

    fn internal_type_representation(&self, variant: TypeValueVariant) -> TypeTag {
        variant.type_representation()
    }

    fn implementation_value(&self, value: BridgeEnumValue) -> BridgeResult<NativeValue> {
        Ok(value.to_abstract_native())
    }

    fn convert_internal(
        &self,
        domain: EnumDomain,
        native: &NativeValue,
    ) -> BridgeResult<BridgeEnumValue> {
        BridgeEnumValue::from_abstract_native(domain, native).ok_or_else(|| {
            trace!(domain = %domain, found = native.type_tag().name(), "Not an abstract value");
            BridgeError::TypeMismatch {
                domain,
                expected: domain.abstract_type().name().to_string(),
                found: native.type_tag().name().to_string(),
            }
        })
    }

    fn implementation_type(&self, kind: ApiKind) -> Option<TypeTag> {
        Some(kind.abstract_type())
    }
}

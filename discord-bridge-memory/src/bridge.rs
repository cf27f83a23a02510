use crate::api::MemoryApi;
use crate::convert::conversions;
use crate::native::{MemoryChannel, MemoryClient, MemoryCommand, MemoryGuild, MemoryRole, MemoryUser};
use crate::NAME;
use discord_bridge_api::api::DiscordApi;
use discord_bridge_api::{
    ApiKind, BridgeConfig, BridgeEnumValue, BridgeError, BridgeRef, BridgeResult, CommandCache,
    DiscordBridge, EnumDomain, NativeHandle, NativeValue, TypeTag, TypeValueVariant,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Bridge for [`MemoryClient`] sessions.
#[derive(Debug)]
pub struct MemoryBridge {
    cache: Option<CommandCache>,
}

impl MemoryBridge {
    pub fn new() -> Arc<Self> {
        Self::with_config(&BridgeConfig::default())
    }

    pub fn with_config(config: &BridgeConfig) -> Arc<Self> {
        debug!(command_cache = config.command_cache.enabled, "Creating memory bridge");
        Arc::new(Self {
            cache: config.command_cache.enabled.then(CommandCache::new),
        })
    }
}

impl DiscordBridge for MemoryBridge {
    fn name(&self) -> &str {
        NAME
    }

    fn can_load_api(&self, native: &NativeHandle) -> bool {
        native.is::<MemoryClient>()
    }

    fn load_api(self: Arc<Self>, native: NativeHandle) -> BridgeResult<Arc<dyn DiscordApi>> {
        let client = native
            .downcast_arc::<MemoryClient>()
            .ok_or_else(|| BridgeError::NoCompatibleBridge {
                object: native.type_name().to_string(),
            })?;
        let bridge: BridgeRef = self;
        Ok(Arc::new(MemoryApi::new(bridge, native, client)))
    }

    fn supported_values(&self, domain: EnumDomain) -> BTreeSet<BridgeEnumValue> {
        conversions().supported_values(domain)
    }

    fn internal_type_representation(&self, variant: TypeValueVariant) -> TypeTag {
        conversions().internal_type_representation(variant)
    }

    fn implementation_value(&self, value: BridgeEnumValue) -> BridgeResult<NativeValue> {
        conversions().implementation_value(value)
    }

    fn convert_internal(
        &self,
        domain: EnumDomain,
        native: &NativeValue,
    ) -> BridgeResult<BridgeEnumValue> {
        conversions().convert_internal(domain, native)
    }

    fn implementation_type(&self, kind: ApiKind) -> Option<TypeTag> {
        match kind {
            ApiKind::DiscordApi => Some(TypeTag::of::<MemoryClient>()),
            ApiKind::Server => Some(TypeTag::of::<MemoryGuild>()),
            ApiKind::Channel
            | ApiKind::TextChannel
            | ApiKind::ServerChannel
            | ApiKind::ServerTextChannel => Some(TypeTag::of::<MemoryChannel>()),
            ApiKind::User => Some(TypeTag::of::<MemoryUser>()),
            ApiKind::Role => Some(TypeTag::of::<MemoryRole>()),
            ApiKind::SlashCommand => Some(TypeTag::of::<MemoryCommand>()),
            ApiKind::Attachment => None,
        }
    }

    fn command_cache(&self) -> Option<&CommandCache> {
        self.cache.as_ref()
    }
}

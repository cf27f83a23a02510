//! Stub bridge and entities shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use discord_bridge_api::api::{DiscordApi, Mentionable, Server, SlashCommand, SlashCommandData, SlashCommandOptionData};
use discord_bridge_api::enums::{ContextType, InstallationType};
use discord_bridge_api::*;
use std::any::Any;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Accepts = Box<dyn Fn(&NativeHandle) -> bool + Send + Sync>;

/// A bridge that supports no enum values and counts how it is probed.
pub struct StubBridge {
    name: &'static str,
    accepts: Accepts,
    pub probes: AtomicUsize,
    pub loads: AtomicUsize,
}

impl StubBridge {
    pub fn new(
        name: &'static str,
        accepts: impl Fn(&NativeHandle) -> bool + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            name,
            accepts: Box::new(accepts),
            probes: AtomicUsize::new(0),
            loads: AtomicUsize::new(0),
        })
    }

    pub fn accepting<T: Any>(name: &'static str) -> Arc<Self> {
        Self::new(name, |native| native.is::<T>())
    }

    pub fn rejecting(name: &'static str) -> Arc<Self> {
        Self::new(name, |_| false)
    }

    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl DiscordBridge for StubBridge {
    fn name(&self) -> &str {
        self.name
    }

    fn can_load_api(&self, native: &NativeHandle) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        (self.accepts)(native)
    }

    fn load_api(self: Arc<Self>, native: NativeHandle) -> BridgeResult<Arc<dyn DiscordApi>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let bridge: BridgeRef = self;
        Ok(Arc::new(StubApi { bridge, native }))
    }

    fn supported_values(&self, _domain: EnumDomain) -> BTreeSet<BridgeEnumValue> {
        BTreeSet::new()
    }

    fn internal_type_representation(&self, variant: TypeValueVariant) -> TypeTag {
        variant.type_representation()
    }

    fn implementation_value(&self, value: BridgeEnumValue) -> BridgeResult<NativeValue> {
        Err(BridgeError::UnsupportedValue {
            bridge: self.name.to_string(),
            domain: value.domain(),
            variant: value.name(),
        })
    }

    fn convert_internal(
        &self,
        domain: EnumDomain,
        native: &NativeValue,
    ) -> BridgeResult<BridgeEnumValue> {
        Err(BridgeError::TypeMismatch {
            domain,
            expected: "<none>".into(),
            found: native.type_tag().name().into(),
        })
    }
}

pub struct StubApi {
    bridge: BridgeRef,
    native: NativeHandle,
}

impl BridgeApi for StubApi {
    fn implementation(&self) -> &NativeHandle {
        &self.native
    }

    fn bridge(&self) -> &BridgeRef {
        &self.bridge
    }
}

#[async_trait]
impl DiscordApi for StubApi {
    async fn global_slash_commands(&self) -> BridgeResult<Vec<Arc<dyn SlashCommand>>> {
        Ok(Vec::new())
    }

    async fn bulk_update_global_commands(
        &self,
        _commands: Vec<SlashCommandData>,
    ) -> BridgeResult<Vec<Arc<dyn SlashCommand>>> {
        Ok(Vec::new())
    }

    fn servers(&self) -> BridgeResult<Vec<Arc<dyn Server>>> {
        Ok(Vec::new())
    }
}

/// A slash command whose ID is whatever string the test supplies.
pub struct StubCommand {
    handle: EntityHandle,
    name: String,
    server: Option<Snowflake>,
}

impl StubCommand {
    pub fn new(
        bridge: &BridgeRef,
        id: &str,
        name: &str,
        server: Option<Snowflake>,
    ) -> Arc<dyn SlashCommand> {
        Arc::new(Self {
            handle: EntityHandle::new(Arc::clone(bridge), NativeHandle::new(id.to_string()), id),
            name: name.to_string(),
            server,
        })
    }
}

impl_entity!(StubCommand);

impl Mentionable for StubCommand {
    fn mention_tag(&self) -> String {
        format!("</{}:{}>", self.name, self.handle.id_as_string())
    }
}

impl SlashCommand for StubCommand {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn description(&self) -> String {
        format!("{} command", self.name)
    }

    fn server_id(&self) -> Option<Snowflake> {
        self.server
    }

    fn options(&self) -> Vec<SlashCommandOptionData> {
        Vec::new()
    }

    fn contexts(&self) -> BTreeSet<ContextType> {
        BTreeSet::new()
    }

    fn installation_types(&self) -> BTreeSet<InstallationType> {
        BTreeSet::new()
    }

    fn nsfw(&self) -> bool {
        false
    }
}

pub fn stub_bridge() -> BridgeRef {
    StubBridge::rejecting("stub")
}

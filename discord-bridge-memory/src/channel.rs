//! Channel wrappers.
//!
//! Every memory channel is the same native struct, so the wrapper type is
//! picked per object from its kind: text-capable, guild-owned, both, or
//! neither.

use crate::native::{MemoryChannel, MemoryMessageFlag};
use crate::server::ServerImpl;
use async_trait::async_trait;
use discord_bridge_api::api::{Channel, Server, ServerChannel, ServerTextChannel, TextChannel};
use discord_bridge_api::enums::{ChannelType, MessageFlag};
use discord_bridge_api::{
    impl_entity, BridgeError, BridgeExt, BridgeRef, BridgeResult, EntityHandle, NativeHandle,
    Snowflake, SpecificityResolver, TypeTag, WrapperCandidate,
};
use std::sync::{Arc, OnceLock};
use tracing::debug;

fn memory_channel(native: &NativeHandle) -> Option<&MemoryChannel> {
    native.downcast_ref::<MemoryChannel>()
}

fn is_text(native: &NativeHandle) -> bool {
    memory_channel(native).is_some_and(|c| c.kind.is_text())
}

fn is_guild(native: &NativeHandle) -> bool {
    memory_channel(native).is_some_and(|c| c.kind.is_guild())
}

/// Resolves any memory channel to its most specific wrapper.
pub fn channel_resolver() -> &'static SpecificityResolver<dyn Channel> {
    static RESOLVER: OnceLock<SpecificityResolver<dyn Channel>> = OnceLock::new();
    RESOLVER.get_or_init(|| {
        let any = TypeTag::of::<dyn Channel>();
        let text = TypeTag::of::<dyn TextChannel>();
        let guild = TypeTag::of::<dyn ServerChannel>();
        SpecificityResolver::builder("Channel")
            .candidate(WrapperCandidate::new(
                "MemoryChannel",
                any,
                |n| memory_channel(n).is_some(),
                |bridge, native| Ok(Arc::new(ChannelImpl::new(bridge, native)?) as Arc<dyn Channel>),
            ))
            .candidate(
                WrapperCandidate::new("MemoryTextChannel", text, is_text, |bridge, native| {
                    Ok(Arc::new(TextChannelImpl::new(bridge, native)?) as Arc<dyn Channel>)
                })
                .extends(any),
            )
            .candidate(
                WrapperCandidate::new("MemoryServerChannel", guild, is_guild, |bridge, native| {
                    Ok(Arc::new(ServerChannelImpl::new(bridge, native)?) as Arc<dyn Channel>)
                })
                .extends(any),
            )
            .candidate(
                WrapperCandidate::new(
                    "MemoryServerTextChannel",
                    TypeTag::of::<dyn ServerTextChannel>(),
                    |n| is_guild(n) && is_text(n),
                    |bridge, native| {
                        Ok(Arc::new(ServerTextChannelImpl::new(bridge, native)?) as Arc<dyn Channel>)
                    },
                )
                .extends(guild)
                .extends(text),
            )
            .build()
    })
}

/// Resolves guild channels to their most specific server channel wrapper.
pub fn server_channel_resolver() -> &'static SpecificityResolver<dyn ServerChannel> {
    static RESOLVER: OnceLock<SpecificityResolver<dyn ServerChannel>> = OnceLock::new();
    RESOLVER.get_or_init(|| {
        let guild = TypeTag::of::<dyn ServerChannel>();
        SpecificityResolver::builder("ServerChannel")
            .candidate(WrapperCandidate::new(
                "MemoryServerChannel",
                guild,
                is_guild,
                |bridge, native| {
                    Ok(Arc::new(ServerChannelImpl::new(bridge, native)?) as Arc<dyn ServerChannel>)
                },
            ))
            .candidate(
                WrapperCandidate::new(
                    "MemoryServerTextChannel",
                    TypeTag::of::<dyn ServerTextChannel>(),
                    |n| is_guild(n) && is_text(n),
                    |bridge, native| {
                        Ok(Arc::new(ServerTextChannelImpl::new(bridge, native)?)
                            as Arc<dyn ServerChannel>)
                    },
                )
                .extends(guild),
            )
            .build()
    })
}

// ================================================================
// Shared behaviour
// ================================================================

fn open(
    bridge: BridgeRef,
    native: NativeHandle,
) -> BridgeResult<(EntityHandle, Arc<MemoryChannel>)> {
    let channel = native
        .downcast_arc::<MemoryChannel>()
        .ok_or_else(|| BridgeError::NoApplicableWrapper {
            capability: "Channel",
            object: native.type_name().to_string(),
        })?;
    let handle = EntityHandle::new(bridge, native, channel.id.to_string());
    Ok((handle, channel))
}

fn channel_type(handle: &EntityHandle, channel: &MemoryChannel) -> ChannelType {
    handle
        .bridge()
        .from_native::<ChannelType, _>(channel.kind)
        .unwrap_or(ChannelType::Unknown)
}

fn send(
    handle: &EntityHandle,
    channel: &MemoryChannel,
    content: &str,
    flags: &[MessageFlag],
) -> BridgeResult<Snowflake> {
    let bits = flags.iter().try_fold(0u32, |bits, flag| {
        let native = handle.bridge().to_native::<MemoryMessageFlag, _>(*flag)?;
        Ok::<_, BridgeError>(bits | native.0)
    })?;
    let id = channel.send(content, bits).map_err(BridgeError::backend)?;
    debug!(channel = channel.id, message = id, "Sent message");
    Ok(Snowflake::new(id))
}

fn server(handle: &EntityHandle, channel: &MemoryChannel) -> BridgeResult<Arc<dyn Server>> {
    let guild = channel
        .guild()
        .ok_or_else(|| BridgeError::backend(crate::MemoryError::UnknownChannel(channel.id)))?;
    Ok(ServerImpl::wrap(handle.bridge(), guild))
}

fn name(channel: &MemoryChannel) -> String {
    channel.name.clone().unwrap_or_default()
}

fn delete(channel: &MemoryChannel) -> BridgeResult<()> {
    channel.delete().map_err(BridgeError::backend)
}

// ================================================================
// Wrappers
// ================================================================

/// A channel with neither text nor guild capabilities.
pub struct ChannelImpl {
    handle: EntityHandle,
    channel: Arc<MemoryChannel>,
}

impl ChannelImpl {
    fn new(bridge: BridgeRef, native: NativeHandle) -> BridgeResult<Self> {
        let (handle, channel) = open(bridge, native)?;
        Ok(Self { handle, channel })
    }
}

impl_entity!(ChannelImpl);

impl Channel for ChannelImpl {
    fn channel_type(&self) -> ChannelType {
        channel_type(&self.handle, &self.channel)
    }
}

/// A text channel outside any guild.
pub struct TextChannelImpl {
    handle: EntityHandle,
    channel: Arc<MemoryChannel>,
}

impl TextChannelImpl {
    fn new(bridge: BridgeRef, native: NativeHandle) -> BridgeResult<Self> {
        let (handle, channel) = open(bridge, native)?;
        Ok(Self { handle, channel })
    }
}

impl_entity!(TextChannelImpl);

impl Channel for TextChannelImpl {
    fn channel_type(&self) -> ChannelType {
        channel_type(&self.handle, &self.channel)
    }

    fn as_text_channel(&self) -> Option<&dyn TextChannel> {
        Some(self)
    }
}

#[async_trait]
impl TextChannel for TextChannelImpl {
    async fn send_message(&self, content: &str, flags: &[MessageFlag]) -> BridgeResult<Snowflake> {
        send(&self.handle, &self.channel, content, flags)
    }
}

/// A guild channel that does not take messages.
pub struct ServerChannelImpl {
    handle: EntityHandle,
    channel: Arc<MemoryChannel>,
}

impl ServerChannelImpl {
    fn new(bridge: BridgeRef, native: NativeHandle) -> BridgeResult<Self> {
        let (handle, channel) = open(bridge, native)?;
        Ok(Self { handle, channel })
    }
}

impl_entity!(ServerChannelImpl);

impl Channel for ServerChannelImpl {
    fn channel_type(&self) -> ChannelType {
        channel_type(&self.handle, &self.channel)
    }

    fn as_server_channel(&self) -> Option<&dyn ServerChannel> {
        Some(self)
    }
}

#[async_trait]
impl ServerChannel for ServerChannelImpl {
    fn server(&self) -> BridgeResult<Arc<dyn Server>> {
        server(&self.handle, &self.channel)
    }

    fn name(&self) -> String {
        name(&self.channel)
    }

    async fn delete(&self) -> BridgeResult<()> {
        delete(&self.channel)
    }
}

/// A guild channel that takes messages.
pub struct ServerTextChannelImpl {
    handle: EntityHandle,
    channel: Arc<MemoryChannel>,
}

impl ServerTextChannelImpl {
    fn new(bridge: BridgeRef, native: NativeHandle) -> BridgeResult<Self> {
        let (handle, channel) = open(bridge, native)?;
        Ok(Self { handle, channel })
    }
}

impl_entity!(ServerTextChannelImpl);

impl Channel for ServerTextChannelImpl {
    fn channel_type(&self) -> ChannelType {
        channel_type(&self.handle, &self.channel)
    }

    fn as_text_channel(&self) -> Option<&dyn TextChannel> {
        Some(self)
    }

    fn as_server_channel(&self) -> Option<&dyn ServerChannel> {
        Some(self)
    }

    fn as_server_text_channel(&self) -> Option<&dyn ServerTextChannel> {
        Some(self)
    }
}

#[async_trait]
impl TextChannel for ServerTextChannelImpl {
    async fn send_message(&self, content: &str, flags: &[MessageFlag]) -> BridgeResult<Snowflake> {
        send(&self.handle, &self.channel, content, flags)
    }
}

#[async_trait]
impl ServerChannel for ServerTextChannelImpl {
    fn server(&self) -> BridgeResult<Arc<dyn Server>> {
        server(&self.handle, &self.channel)
    }

    fn name(&self) -> String {
        name(&self.channel)
    }

    async fn delete(&self) -> BridgeResult<()> {
        delete(&self.channel)
    }
}

impl ServerTextChannel for ServerTextChannelImpl {
    fn topic(&self) -> Option<String> {
        self.channel.topic.clone()
    }
}

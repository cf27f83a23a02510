use super::Server;
use crate::entity::DiscordEntity;
use crate::enums::{ChannelType, MessageFlag};
use crate::error::BridgeResult;
use async_trait::async_trait;
use discord_bridge_types::Snowflake;
use std::sync::Arc;

/// Any channel. Wrappers are resolved to the most specific refinement the
/// native object supports; use the `as_*` methods to reach it.
pub trait Channel: DiscordEntity {
    fn channel_type(&self) -> ChannelType;

    fn as_text_channel(&self) -> Option<&dyn TextChannel> {
        None
    }

    fn as_server_channel(&self) -> Option<&dyn ServerChannel> {
        None
    }

    fn as_server_text_channel(&self) -> Option<&dyn ServerTextChannel> {
        None
    }
}

#[async_trait]
pub trait TextChannel: Channel {
    /// Sends a message and returns its ID.
    ///
    /// Fails with `UnsupportedValue` before any I/O when a flag has no
    /// native representation.
    async fn send_message(&self, content: &str, flags: &[MessageFlag]) -> BridgeResult<Snowflake>;
}

#[async_trait]
pub trait ServerChannel: Channel {
    fn server(&self) -> BridgeResult<Arc<dyn Server>>;

    fn name(&self) -> String;

    async fn delete(&self) -> BridgeResult<()>;
}

pub trait ServerTextChannel: ServerChannel + TextChannel {
    fn topic(&self) -> Option<String>;
}

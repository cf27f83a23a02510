//! In-memory Discord bridge.
//!
//! [`MemoryClient`] simulates a client library: a bot session with guilds,
//! channels, roles and registered commands, all held in process. The bridge
//! supports a realistic subset of each enumerated domain (no group DMs, no
//! media or shop channels, no attachment options), which makes it the
//! reference backend for partial support and wrapper resolution.
//!
//! ```ignore
//! let client = MemoryClient::login("helper");
//! let api = MemoryBridge::new().load_api(NativeHandle::from_arc(client))?;
//! ```

mod api;
mod bridge;
mod channel;
mod command;
mod convert;
mod interaction;
pub mod native;
mod server;
mod user;

pub use api::MemoryApi;
pub use bridge::MemoryBridge;
pub use channel::{
    channel_resolver, server_channel_resolver, ChannelImpl, ServerChannelImpl,
    ServerTextChannelImpl, TextChannelImpl,
};
pub use command::SlashCommandImpl;
pub use convert::conversions;
pub use interaction::{InteractionOptionImpl, SlashCommandInteractionImpl};
pub use native::{
    MemoryChannel, MemoryChannelKind, MemoryClient, MemoryError, MemoryGuild, MemoryInteraction,
    MemoryUser,
};
pub use server::{RoleImpl, ServerImpl};
pub use user::UserImpl;

use discord_bridge_api::api::{
    Channel, Server, SlashCommandAutocompleteInteraction, SlashCommandInteraction, User,
};
use discord_bridge_api::{BridgeRef, BridgeResult, NativeHandle};
use std::sync::Arc;

pub const NAME: &str = "DiscordBridge In-Memory Implementation";

/// Wraps a native channel in its most specific channel wrapper.
pub fn wrap_channel(
    bridge: &BridgeRef,
    channel: Arc<MemoryChannel>,
) -> BridgeResult<Arc<dyn Channel>> {
    channel::channel_resolver().resolve(bridge, NativeHandle::from_arc(channel))
}

/// Wraps a native user.
pub fn wrap_user(bridge: &BridgeRef, user: Arc<MemoryUser>) -> Arc<dyn User> {
    UserImpl::wrap(bridge, user)
}

/// Wraps a native guild.
pub fn wrap_server(bridge: &BridgeRef, guild: Arc<MemoryGuild>) -> Arc<dyn Server> {
    ServerImpl::wrap(bridge, guild)
}

/// Wraps a native interaction, invoked or autocomplete.
pub fn wrap_interaction(
    bridge: &BridgeRef,
    interaction: Arc<MemoryInteraction>,
) -> Arc<dyn SlashCommandInteraction> {
    SlashCommandInteractionImpl::wrap(bridge, interaction)
}

/// Wraps a native autocomplete interaction. Invoked interactions fail with
/// `NoApplicableWrapper`.
pub fn wrap_autocomplete(
    bridge: &BridgeRef,
    interaction: Arc<MemoryInteraction>,
) -> BridgeResult<Arc<dyn SlashCommandAutocompleteInteraction>> {
    SlashCommandInteractionImpl::wrap_autocomplete(bridge, interaction)
}

use super::{Server, SlashCommand, SlashCommandData};
use crate::entity::BridgeApi;
use crate::error::BridgeResult;
use async_trait::async_trait;
use discord_bridge_types::Snowflake;
use std::sync::Arc;

/// Entry point of a loaded bridge: one logged-in bot session.
#[async_trait]
pub trait DiscordApi: BridgeApi {
    async fn global_slash_commands(&self) -> BridgeResult<Vec<Arc<dyn SlashCommand>>>;

    /// Replaces every global command with `commands`.
    async fn bulk_update_global_commands(
        &self,
        commands: Vec<SlashCommandData>,
    ) -> BridgeResult<Vec<Arc<dyn SlashCommand>>>;

    /// Servers the session is a member of.
    fn servers(&self) -> BridgeResult<Vec<Arc<dyn Server>>>;

    fn server_by_id(&self, id: Snowflake) -> BridgeResult<Option<Arc<dyn Server>>> {
        Ok(self
            .servers()?
            .into_iter()
            .find(|s| s.id().is_ok_and(|sid| sid == id)))
    }
}

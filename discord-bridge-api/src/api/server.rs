use super::{Mentionable, ServerChannel, SlashCommand, SlashCommandData, User};
use crate::entity::DiscordEntity;
use crate::enums::PermissionType;
use crate::error::BridgeResult;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

#[async_trait]
pub trait Server: DiscordEntity {
    fn name(&self) -> String;

    fn channels(&self) -> BridgeResult<Vec<Arc<dyn ServerChannel>>>;

    fn roles(&self) -> BridgeResult<Vec<Arc<dyn Role>>>;

    fn members(&self) -> BridgeResult<Vec<Arc<dyn User>>>;

    async fn server_slash_commands(&self) -> BridgeResult<Vec<Arc<dyn SlashCommand>>>;

    /// Replaces every command registered on this server with `commands`.
    async fn bulk_update_server_commands(
        &self,
        commands: Vec<SlashCommandData>,
    ) -> BridgeResult<Vec<Arc<dyn SlashCommand>>>;
}

pub trait Role: Mentionable {
    fn name(&self) -> String;

    /// Granted permissions. Ones the backend cannot name are omitted.
    fn permissions(&self) -> BTreeSet<PermissionType>;
}

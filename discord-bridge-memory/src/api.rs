use crate::command::{remember, to_spec, wrap_all};
use crate::native::MemoryClient;
use crate::server::ServerImpl;
use async_trait::async_trait;
use discord_bridge_api::api::{DiscordApi, Server, SlashCommand, SlashCommandData};
use discord_bridge_api::{BridgeApi, BridgeError, BridgeRef, BridgeResult, NativeHandle};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// A loaded memory session.
pub struct MemoryApi {
    bridge: BridgeRef,
    native: NativeHandle,
    client: Arc<MemoryClient>,
}

impl MemoryApi {
    pub(crate) fn new(bridge: BridgeRef, native: NativeHandle, client: Arc<MemoryClient>) -> Self {
        Self {
            bridge,
            native,
            client,
        }
    }

    pub fn client(&self) -> &Arc<MemoryClient> {
        &self.client
    }
}

impl fmt::Debug for MemoryApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryApi")
            .field("bridge", &self.bridge.name())
            .field("bot", &self.client.bot().name)
            .finish()
    }
}

impl BridgeApi for MemoryApi {
    fn implementation(&self) -> &NativeHandle {
        &self.native
    }

    fn bridge(&self) -> &BridgeRef {
        &self.bridge
    }
}

#[async_trait]
impl DiscordApi for MemoryApi {
    async fn global_slash_commands(&self) -> BridgeResult<Vec<Arc<dyn SlashCommand>>> {
        let natives = self.client.global_commands().map_err(BridgeError::backend)?;
        let commands = wrap_all(&self.bridge, natives);
        remember(&self.bridge, None, &commands, true).await;
        Ok(commands)
    }

    async fn bulk_update_global_commands(
        &self,
        commands: Vec<SlashCommandData>,
    ) -> BridgeResult<Vec<Arc<dyn SlashCommand>>> {
        let specs = commands
            .iter()
            .map(|c| to_spec(self.bridge.as_ref(), c))
            .collect::<BridgeResult<Vec<_>>>()?;
        let natives = self
            .client
            .overwrite_global_commands(specs)
            .map_err(BridgeError::backend)?;
        info!(count = natives.len(), "Registered global commands");
        let commands = wrap_all(&self.bridge, natives);
        remember(&self.bridge, None, &commands, true).await;
        Ok(commands)
    }

    fn servers(&self) -> BridgeResult<Vec<Arc<dyn Server>>> {
        Ok(self
            .client
            .guilds()
            .map_err(BridgeError::backend)?
            .into_iter()
            .map(|g| ServerImpl::wrap(&self.bridge, g))
            .collect())
    }
}

//! Slash commands seen by a bridge, keyed by snowflake.

use crate::api::SlashCommand;
use discord_bridge_types::Snowflake;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Filled after successful list and bulk-update calls. Concurrent
/// population is last-write-wins per ID.
#[derive(Default)]
pub struct CommandCache {
    commands: RwLock<HashMap<Snowflake, Arc<dyn SlashCommand>>>,
}

impl CommandCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `commands`, returning how many were cached. Commands whose ID
    /// does not parse are skipped.
    pub async fn populate(&self, commands: &[Arc<dyn SlashCommand>]) -> usize {
        let mut cache = self.commands.write().await;
        let mut inserted = 0;
        for command in commands {
            match command.id() {
                Ok(id) => {
                    cache.insert(id, Arc::clone(command));
                    inserted += 1;
                }
                Err(e) => {
                    warn!(command = %command.name(), "Not caching command: {}", e);
                }
            }
        }
        inserted
    }

    pub async fn get(&self, id: Snowflake) -> Option<Arc<dyn SlashCommand>> {
        self.commands.read().await.get(&id).cloned()
    }

    /// Cached commands belonging to `server`, or global ones for `None`.
    pub async fn for_server(&self, server: Option<Snowflake>) -> Vec<Arc<dyn SlashCommand>> {
        self.commands
            .read()
            .await
            .values()
            .filter(|c| c.server_id() == server)
            .cloned()
            .collect()
    }

    pub async fn remove(&self, id: Snowflake) -> Option<Arc<dyn SlashCommand>> {
        self.commands.write().await.remove(&id)
    }

    pub async fn clear(&self) {
        self.commands.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.commands.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.commands.read().await.is_empty()
    }
}

impl std::fmt::Debug for CommandCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandCache").finish_non_exhaustive()
    }
}

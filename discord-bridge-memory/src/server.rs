use crate::channel::server_channel_resolver;
use crate::command::{remember, to_spec, wrap_all};
use crate::native::{MemoryGuild, MemoryPermission, MemoryRole};
use crate::user::UserImpl;
use async_trait::async_trait;
use discord_bridge_api::api::{
    Mentionable, Role, Server, ServerChannel, SlashCommand, SlashCommandData, User,
};
use discord_bridge_api::enums::PermissionType;
use discord_bridge_api::{
    impl_entity, BridgeError, BridgeExt, BridgeRef, BridgeResult, DiscordEntity, EntityHandle,
    NativeHandle,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

/// A guild the session belongs to.
pub struct ServerImpl {
    handle: EntityHandle,
    guild: Arc<MemoryGuild>,
}

impl ServerImpl {
    pub(crate) fn wrap(bridge: &BridgeRef, guild: Arc<MemoryGuild>) -> Arc<dyn Server> {
        let handle = EntityHandle::new(
            Arc::clone(bridge),
            NativeHandle::from_arc(Arc::clone(&guild)),
            guild.id.to_string(),
        );
        Arc::new(Self { handle, guild })
    }
}

impl_entity!(ServerImpl);

#[async_trait]
impl Server for ServerImpl {
    fn name(&self) -> String {
        self.guild.name.clone()
    }

    fn channels(&self) -> BridgeResult<Vec<Arc<dyn ServerChannel>>> {
        let resolver = server_channel_resolver();
        self.guild
            .channels()
            .into_iter()
            .map(|c| resolver.resolve(self.handle.bridge(), NativeHandle::from_arc(c)))
            .collect()
    }

    fn roles(&self) -> BridgeResult<Vec<Arc<dyn Role>>> {
        Ok(self
            .guild
            .roles()
            .into_iter()
            .map(|r| RoleImpl::wrap(self.handle.bridge(), r))
            .collect())
    }

    fn members(&self) -> BridgeResult<Vec<Arc<dyn User>>> {
        Ok(self
            .guild
            .members()
            .into_iter()
            .map(|u| UserImpl::wrap(self.handle.bridge(), u))
            .collect())
    }

    async fn server_slash_commands(&self) -> BridgeResult<Vec<Arc<dyn SlashCommand>>> {
        let bridge = self.handle.bridge();
        let natives = self.guild.commands().map_err(BridgeError::backend)?;
        let commands = wrap_all(bridge, natives);
        remember(bridge, Some(self.id()?), &commands, true).await;
        Ok(commands)
    }

    async fn bulk_update_server_commands(
        &self,
        commands: Vec<SlashCommandData>,
    ) -> BridgeResult<Vec<Arc<dyn SlashCommand>>> {
        let bridge = self.handle.bridge();
        let specs = commands
            .iter()
            .map(|c| to_spec(bridge.as_ref(), c))
            .collect::<BridgeResult<Vec<_>>>()?;
        let natives = self
            .guild
            .overwrite_commands(specs)
            .map_err(BridgeError::backend)?;
        info!(guild = self.guild.id, count = natives.len(), "Registered server commands");
        let commands = wrap_all(bridge, natives);
        remember(bridge, Some(self.id()?), &commands, true).await;
        Ok(commands)
    }
}

/// A guild role.
pub struct RoleImpl {
    handle: EntityHandle,
    role: Arc<MemoryRole>,
}

impl RoleImpl {
    pub(crate) fn wrap(bridge: &BridgeRef, role: Arc<MemoryRole>) -> Arc<dyn Role> {
        let handle = EntityHandle::new(
            Arc::clone(bridge),
            NativeHandle::from_arc(Arc::clone(&role)),
            role.id.to_string(),
        );
        Arc::new(Self { handle, role })
    }
}

impl_entity!(RoleImpl);

impl Mentionable for RoleImpl {
    fn mention_tag(&self) -> String {
        format!("<@&{}>", self.role.id)
    }
}

impl Role for RoleImpl {
    fn name(&self) -> String {
        self.role.name.clone()
    }

    fn permissions(&self) -> BTreeSet<PermissionType> {
        let bridge = self.handle.bridge();
        bridge
            .supported::<PermissionType>()
            .into_iter()
            .filter(|p| {
                bridge
                    .to_native::<MemoryPermission, _>(*p)
                    .is_ok_and(|native| native.is_set_in(self.role.permissions))
            })
            .collect()
    }
}

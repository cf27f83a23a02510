use crate::native::MemoryUser;
use discord_bridge_api::api::{Mentionable, User};
use discord_bridge_api::{impl_entity, BridgeRef, EntityHandle, NativeHandle};
use std::sync::Arc;

pub struct UserImpl {
    handle: EntityHandle,
    user: Arc<MemoryUser>,
}

impl UserImpl {
    pub(crate) fn wrap(bridge: &BridgeRef, user: Arc<MemoryUser>) -> Arc<dyn User> {
        let handle = EntityHandle::new(
            Arc::clone(bridge),
            NativeHandle::from_arc(Arc::clone(&user)),
            user.id.to_string(),
        );
        Arc::new(Self { handle, user })
    }
}

impl_entity!(UserImpl);

impl Mentionable for UserImpl {
    fn mention_tag(&self) -> String {
        format!("<@{}>", self.user.id)
    }
}

impl User for UserImpl {
    fn name(&self) -> String {
        self.user.name.clone()
    }

    fn is_bot(&self) -> bool {
        self.user.bot
    }
}

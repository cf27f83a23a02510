use super::{BridgeEnum, TypeValue};
use crate::api::{Channel, ServerChannel, ServerTextChannel, TextChannel};
use discord_bridge_types::TypeTag;

bridge_enum! {
    /// The kind of a Discord channel.
    pub enum ChannelType {
        Private => "PRIVATE",
        /// Group DMs; bots cannot join these.
        Group => "GROUP",
        ServerText => "SERVER_TEXT",
        ServerVoice => "SERVER_VOICE",
        ServerCategory => "SERVER_CATEGORY",
        ServerNews => "SERVER_NEWS",
        ServerStage => "SERVER_STAGE",
        ServerThreadNews => "SERVER_THREAD_NEWS",
        ServerThreadPublic => "SERVER_THREAD_PUBLIC",
        ServerThreadPrivate => "SERVER_THREAD_PRIVATE",
        ServerForum => "SERVER_FORUM",
        ServerMedia => "SERVER_MEDIA",
        ServerShop => "SERVER_SHOP",
        ServerDirectory => "SERVER_DIRECTORY",
        Unknown => "UNKNOWN",
    }
}

impl ChannelType {
    /// Whether channels of this type belong to a server.
    pub fn is_server(&self) -> bool {
        !matches!(self, Self::Private | Self::Group | Self::Unknown)
    }

    /// Whether messages can be sent to channels of this type.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Private
                | Self::Group
                | Self::ServerText
                | Self::ServerNews
                | Self::ServerThreadNews
                | Self::ServerThreadPublic
                | Self::ServerThreadPrivate
        )
    }
}

impl TypeValue for ChannelType {
    fn type_representation(&self) -> TypeTag {
        if self.is_unknown() {
            return TypeTag::of::<dyn Channel>();
        }
        match (self.is_server(), self.is_text()) {
            (true, true) => TypeTag::of::<dyn ServerTextChannel>(),
            (true, false) => TypeTag::of::<dyn ServerChannel>(),
            (false, true) => TypeTag::of::<dyn TextChannel>(),
            (false, false) => TypeTag::of::<dyn Channel>(),
        }
    }
}

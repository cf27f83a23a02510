//! Conversion tables between the abstract domains and the memory client's
//! kinds and flags.

use crate::native::{
    MemoryChannel, MemoryChannelKind, MemoryContext, MemoryIntegrationType, MemoryLocale,
    MemoryMessageFlag, MemoryOptionKind, MemoryPermission, MemoryRole, MemoryUser,
};
use crate::NAME;
use discord_bridge_api::enums::{
    ChannelType, ContextType, InstallationType, Locale, MessageFlag, PermissionType,
    SlashCommandOptionType,
};
use discord_bridge_api::{ConversionRegistry, EnumTable, TypeTag};
use std::sync::OnceLock;

/// The memory bridge's tables, built on first use.
pub fn conversions() -> &'static ConversionRegistry {
    static TABLES: OnceLock<ConversionRegistry> = OnceLock::new();
    TABLES.get_or_init(|| {
        ConversionRegistry::builder(NAME)
            .table(channel_types())
            .table(permissions())
            .table(message_flags())
            .table(option_types())
            .table(contexts())
            .table(installation_types())
            .table(locales())
            .build()
    })
}

fn channel_types() -> EnumTable<ChannelType, MemoryChannelKind> {
    EnumTable::new()
        .map(ChannelType::Private, MemoryChannelKind::Dm)
        .map(ChannelType::ServerText, MemoryChannelKind::Text)
        .map(ChannelType::ServerVoice, MemoryChannelKind::Voice)
        .map(ChannelType::ServerCategory, MemoryChannelKind::Category)
        .map(ChannelType::ServerNews, MemoryChannelKind::Announcement)
        .map(ChannelType::ServerStage, MemoryChannelKind::StageVoice)
        .map(ChannelType::ServerThreadNews, MemoryChannelKind::AnnouncementThread)
        .map(ChannelType::ServerThreadPublic, MemoryChannelKind::PublicThread)
        .map(ChannelType::ServerThreadPrivate, MemoryChannelKind::PrivateThread)
        .map(ChannelType::ServerForum, MemoryChannelKind::Forum)
        // every channel kind is the same native struct
        .fallback_type(TypeTag::of::<MemoryChannel>())
}

fn permissions() -> EnumTable<PermissionType, MemoryPermission> {
    use MemoryPermission as P;
    use PermissionType::*;
    EnumTable::new()
        .map(CreateInstantInvite, P::CREATE_INSTANT_INVITE)
        .map(KickMembers, P::KICK_MEMBERS)
        .map(BanMembers, P::BAN_MEMBERS)
        .map(Administrator, P::ADMINISTRATOR)
        .map(ManageChannels, P::MANAGE_CHANNELS)
        .map(ManageServer, P::MANAGE_GUILD)
        .map(AddReactions, P::ADD_REACTIONS)
        .map(ViewAuditLog, P::VIEW_AUDIT_LOG)
        .map(ViewChannel, P::VIEW_CHANNEL)
        .map(SendMessages, P::SEND_MESSAGES)
        .map(ManageMessages, P::MANAGE_MESSAGES)
        .map(EmbedLinks, P::EMBED_LINKS)
        .map(AttachFile, P::ATTACH_FILES)
        .map(ReadMessageHistory, P::READ_MESSAGE_HISTORY)
        .map(MentionAnyone, P::MENTION_EVERYONE)
        .map(ConnectVoice, P::CONNECT)
        .map(Speak, P::SPEAK)
        .map(ChangeNickname, P::CHANGE_NICKNAME)
        .map(ManageRoles, P::MANAGE_ROLES)
        .map(UseApplicationCommands, P::USE_APPLICATION_COMMANDS)
        .map(ModerateMembers, P::MODERATE_MEMBERS)
}

fn message_flags() -> EnumTable<MessageFlag, MemoryMessageFlag> {
    EnumTable::new()
        .map(MessageFlag::Ephemeral, MemoryMessageFlag::EPHEMERAL)
        .map(MessageFlag::Silent, MemoryMessageFlag::SUPPRESS_NOTIFICATIONS)
}

fn option_types() -> EnumTable<SlashCommandOptionType, MemoryOptionKind> {
    use MemoryOptionKind as K;
    use SlashCommandOptionType as O;
    EnumTable::new()
        .map(O::Subcommand, K::SubCommand)
        .map(O::SubcommandGroup, K::SubCommandGroup)
        .map(O::String, K::String)
        .map(O::Integer, K::Integer)
        .map(O::Number, K::Number)
        .map(O::Boolean, K::Boolean)
        .map(O::User, K::User)
        .map(O::Channel, K::Channel)
        .map(O::Role, K::Role)
        .map(O::Mentionable, K::Mentionable)
        .typed(O::User, TypeTag::of::<MemoryUser>())
        .typed(O::Channel, TypeTag::of::<MemoryChannel>())
        .typed(O::Role, TypeTag::of::<MemoryRole>())
}

fn contexts() -> EnumTable<ContextType, MemoryContext> {
    EnumTable::new()
        .map(ContextType::Server, MemoryContext::Guild)
        .map(ContextType::BotDm, MemoryContext::BotDm)
        .map(ContextType::OtherDm, MemoryContext::PrivateChannel)
}

fn installation_types() -> EnumTable<InstallationType, MemoryIntegrationType> {
    EnumTable::new()
        .map(InstallationType::ServerInstall, MemoryIntegrationType::GuildInstall)
        .map(InstallationType::UserInstall, MemoryIntegrationType::UserInstall)
}

fn locales() -> EnumTable<Locale, MemoryLocale> {
    MemoryLocale::RECOGNIZED
        .iter()
        .fold(EnumTable::new(), |table, native| {
            match Locale::from_language_tag(native.0) {
                Locale::Unknown => table,
                locale => table.map(locale, *native),
            }
        })
}

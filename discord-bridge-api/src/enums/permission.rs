bridge_enum! {
    /// A permission that can be granted to a role or overridden on a channel.
    pub enum PermissionType {
        ViewChannel => "VIEW_CHANNEL",
        ManageChannels => "MANAGE_CHANNELS",
        ManageRoles => "MANAGE_ROLES",
        CreateExpressions => "CREATE_EXPRESSIONS",
        ManageExpressions => "MANAGE_EXPRESSIONS",
        ViewAuditLog => "VIEW_AUDIT_LOG",
        ViewServerInsights => "VIEW_SERVER_INSIGHTS",
        ManageWebhooks => "MANAGE_WEBHOOKS",
        ManageServer => "MANAGE_SERVER",
        CreateInstantInvite => "CREATE_INSTANT_INVITE",
        ChangeNickname => "CHANGE_NICKNAME",
        ManageNicknames => "MANAGE_NICKNAMES",
        KickMembers => "KICK_MEMBERS",
        BanMembers => "BAN_MEMBERS",
        ModerateMembers => "MODERATE_MEMBERS",
        SendMessages => "SEND_MESSAGES",
        SendMessagesInThreads => "SEND_MESSAGES_IN_THREADS",
        CreatePublicThreads => "CREATE_PUBLIC_THREADS",
        CreatePrivateThreads => "CREATE_PRIVATE_THREADS",
        EmbedLinks => "EMBED_LINKS",
        AttachFile => "ATTACH_FILE",
        AddReactions => "ADD_REACTIONS",
        UseExternalEmojis => "USE_EXTERNAL_EMOJIS",
        UseExternalStickers => "USE_EXTERNAL_STICKERS",
        MentionAnyone => "MENTION_ANYONE",
        ManageMessages => "MANAGE_MESSAGES",
        ManageThreads => "MANAGE_THREADS",
        ReadMessageHistory => "READ_MESSAGE_HISTORY",
        SendTtsMessages => "SEND_TTS_MESSAGES",
        SendVoiceMessages => "SEND_VOICE_MESSAGES",
        CreatePolls => "CREATE_POLLS",
        ConnectVoice => "CONNECT_VOICE",
        Speak => "SPEAK",
        Video => "VIDEO",
        UseSoundboard => "USE_SOUNDBOARD",
        UseExternalSoundboard => "USE_EXTERNAL_SOUNDBOARD",
        UseVoiceActivity => "USE_VOICE_ACTIVITY",
        PrioritySpeaker => "PRIORITY_SPEAKER",
        MuteMembers => "MUTE_MEMBERS",
        DeafenMembers => "DEAFEN_MEMBERS",
        MoveMembers => "MOVE_MEMBERS",
        SetChannelStatus => "SET_CHANNEL_STATUS",
        UseApplicationCommands => "USE_APPLICATION_COMMANDS",
        StartEmbeddedActivities => "START_EMBEDDED_ACTIVITIES",
        UseExternalApps => "USE_EXTERNAL_APPS",
        RequestToSpeak => "REQUEST_TO_SPEAK",
        CreateEvents => "CREATE_EVENTS",
        ManageEvents => "MANAGE_EVENTS",
        Administrator => "ADMINISTRATOR",
        ViewMonetizationAnalytics => "VIEW_MONETIZATION_ANALYTICS",
        Unknown => "UNKNOWN",
    }
}

impl PermissionType {
    /// The label Discord shows for this permission in its client.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ViewChannel => "View Channel",
            Self::ManageChannels => "Manage Channels",
            Self::ManageRoles => "Manage Roles",
            Self::CreateExpressions => "Create Expressions",
            Self::ManageExpressions => "Manage Expressions",
            Self::ViewAuditLog => "View Audit Log",
            Self::ViewServerInsights => "View Server Insights",
            Self::ManageWebhooks => "Manage Webhooks",
            Self::ManageServer => "Manage Server",
            Self::CreateInstantInvite => "Create Invite",
            Self::ChangeNickname => "Change Nickname",
            Self::ManageNicknames => "Manage Nickname",
            Self::KickMembers => "Kick Members",
            Self::BanMembers => "Ban Members",
            Self::ModerateMembers => "Time out Members",
            Self::SendMessages => "Send Messages",
            Self::SendMessagesInThreads => "Send Messages in Threads",
            Self::CreatePublicThreads => "Create Public Threads",
            Self::CreatePrivateThreads => "Create Private Threads",
            Self::EmbedLinks => "Embed Links",
            Self::AttachFile => "Attach Files",
            Self::AddReactions => "Add Reactions",
            Self::UseExternalEmojis => "Use External Emojis",
            Self::UseExternalStickers => "Use External Stickers",
            Self::MentionAnyone => "Mention @everyone, @here and All Roles",
            Self::ManageMessages => "Manage Messages",
            Self::ManageThreads => "Manage Threads",
            Self::ReadMessageHistory => "Read Message History",
            Self::SendTtsMessages => "Send TTS Messages",
            Self::SendVoiceMessages => "Send Voice Messages",
            Self::CreatePolls => "Create Polls",
            Self::ConnectVoice => "Connect",
            Self::Speak => "Speak",
            Self::Video => "Video",
            Self::UseSoundboard => "Use Soundboard",
            Self::UseExternalSoundboard => "Use External Sounds",
            Self::UseVoiceActivity => "Use Voice Activity",
            Self::PrioritySpeaker => "Priority Speaker",
            Self::MuteMembers => "Mute Members",
            Self::DeafenMembers => "Deafen Members",
            Self::MoveMembers => "Move Members",
            Self::SetChannelStatus => "Set Voice Channel Status",
            Self::UseApplicationCommands => "Use Application Commands",
            Self::StartEmbeddedActivities => "Use Activities",
            Self::UseExternalApps => "Use External Apps",
            Self::RequestToSpeak => "Request to Speak",
            Self::CreateEvents => "Create Events",
            Self::ManageEvents => "Manage Events",
            Self::Administrator => "Administrator",
            Self::ViewMonetizationAnalytics => "View Monetization Analytics",
            Self::Unknown => "Unknown",
        }
    }
}

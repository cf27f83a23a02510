bridge_enum! {
    /// Where an application command may be used.
    pub enum ContextType {
        Unknown => "UNKNOWN",
        Server => "SERVER",
        /// A DM with the command's own bot.
        BotDm => "BOT_DM",
        /// A DM or group DM unrelated to the command's bot.
        OtherDm => "OTHER_DM",
    }
}

bridge_enum! {
    /// How an application is installed.
    pub enum InstallationType {
        Unknown => "UNKNOWN",
        ServerInstall => "SERVER_INSTALL",
        UserInstall => "USER_INSTALL",
    }
}

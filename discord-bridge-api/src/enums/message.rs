bridge_enum! {
    /// Flags attached to a message. Incomplete; only the flags callers set.
    pub enum MessageFlag {
        Unknown => "UNKNOWN",
        /// Only shown to the user who triggered the interaction, and never
        /// stored by Discord. Only valid on interaction responses.
        Ephemeral => "EPHEMERAL",
        /// Sends no notifications regardless of mentions or user settings.
        Silent => "SILENT",
    }
}

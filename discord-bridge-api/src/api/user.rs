use crate::entity::DiscordEntity;

pub trait Mentionable: DiscordEntity {
    /// The `<@...>` style tag that mentions this entity in a message.
    fn mention_tag(&self) -> String;
}

pub trait User: Mentionable {
    fn name(&self) -> String;

    fn is_bot(&self) -> bool;
}

/// A file attached to a message or passed as a command option.
pub trait Attachment: DiscordEntity {
    fn file_name(&self) -> String;

    fn url(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;
}

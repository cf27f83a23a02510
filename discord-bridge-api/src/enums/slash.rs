use super::TypeValue;
use crate::api::{Attachment, Channel, Mentionable, Role, User};
use discord_bridge_types::TypeTag;
use std::any::Any;

bridge_enum! {
    /// The type of a slash command option.
    pub enum SlashCommandOptionType {
        Subcommand => "SUBCOMMAND",
        SubcommandGroup => "SUBCOMMAND_GROUP",
        String => "STRING",
        Integer => "INTEGER",
        Number => "NUMBER",
        Boolean => "BOOLEAN",
        User => "USER",
        Channel => "CHANNEL",
        Role => "ROLE",
        Mentionable => "MENTIONABLE",
        Attachment => "ATTACHMENT",
        Unknown => "UNKNOWN",
    }
}

impl SlashCommandOptionType {
    /// Subcommands and groups carry nested options instead of a value.
    pub fn is_subcommand(&self) -> bool {
        matches!(self, Self::Subcommand | Self::SubcommandGroup)
    }
}

impl TypeValue for SlashCommandOptionType {
    fn type_representation(&self) -> TypeTag {
        match self {
            Self::Subcommand | Self::SubcommandGroup => TypeTag::of::<()>(),
            Self::String => TypeTag::of::<std::string::String>(),
            Self::Integer => TypeTag::of::<i64>(),
            Self::Number => TypeTag::of::<f64>(),
            Self::Boolean => TypeTag::of::<bool>(),
            Self::User => TypeTag::of::<dyn User>(),
            Self::Channel => TypeTag::of::<dyn Channel>(),
            Self::Role => TypeTag::of::<dyn Role>(),
            Self::Mentionable => TypeTag::of::<dyn Mentionable>(),
            Self::Attachment => TypeTag::of::<dyn Attachment>(),
            Self::Unknown => TypeTag::of::<dyn Any>(),
        }
    }
}

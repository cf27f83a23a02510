//! The backend-independent Discord surface.
//!
//! Every trait here is implemented by bridge wrappers. Operations that hit
//! the network are `async` and run on whatever runtime the backend uses.

mod channel;
mod command;
mod discord;
mod interaction;
mod server;
mod user;

pub use channel::{Channel, ServerChannel, ServerTextChannel, TextChannel};
pub use command::{
    ChoiceValue, SlashCommand, SlashCommandData, SlashCommandOptionChoiceData,
    SlashCommandOptionData, MAX_CHOICE_COUNT, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
    MAX_OPTION_COUNT,
};
pub use discord::DiscordApi;
pub use interaction::{
    ResponseBuilder, SlashCommandAutocompleteInteraction, SlashCommandInteraction,
    SlashCommandInteractionOption, SlashCommandInteractionOptionProvider,
};
pub use server::{Role, Server};
pub use user::{Attachment, Mentionable, User};

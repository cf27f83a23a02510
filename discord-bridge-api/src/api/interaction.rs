//! Invoked slash commands and the responses sent back to them.
//!
//! Option values stay native: [`SlashCommandInteractionOption::value`]
//! hands out the backend's own object, and
//! [`value_as`](SlashCommandInteractionOption::value_as) checks it against
//! the backend's type representation of an option type before returning it.

use super::{Channel, Server, SlashCommandOptionChoiceData, User};
use crate::bridge::{BridgeExt, DiscordBridge};
use crate::entity::{BridgeApi, DiscordEntity};
use crate::enums::{MessageFlag, SlashCommandOptionType};
use crate::error::BridgeResult;
use crate::native::NativeHandle;
use async_trait::async_trait;
use discord_bridge_types::Snowflake;
use std::any::Any;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Holds invoked options: an interaction, or a subcommand option.
pub trait SlashCommandInteractionOptionProvider {
    /// Top-level options, in invocation order.
    fn options(&self) -> Vec<Arc<dyn SlashCommandInteractionOption>>;

    fn option_by_name(&self, name: &str) -> Option<Arc<dyn SlashCommandInteractionOption>> {
        self.options().into_iter().find(|o| o.name() == name)
    }

    /// Every option with subcommands and groups flattened in, depth first.
    /// A subcommand precedes its own options.
    fn arguments(&self) -> Vec<Arc<dyn SlashCommandInteractionOption>> {
        self.options().into_iter().flat_map(spread).collect()
    }

    /// Like [`option_by_name`](Self::option_by_name), searching subcommands too.
    fn argument_by_name(&self, name: &str) -> Option<Arc<dyn SlashCommandInteractionOption>> {
        self.arguments().into_iter().find(|o| o.name() == name)
    }
}

fn spread(
    option: Arc<dyn SlashCommandInteractionOption>,
) -> Vec<Arc<dyn SlashCommandInteractionOption>> {
    let nested = option.options();
    std::iter::once(option)
        .chain(nested.into_iter().flat_map(spread))
        .collect()
}

/// One option as the invoking user filled it in.
pub trait SlashCommandInteractionOption: BridgeApi + SlashCommandInteractionOptionProvider {
    fn name(&self) -> String;

    fn option_type(&self) -> SlashCommandOptionType;

    /// Whether this option is the one being autocompleted. `None` outside
    /// autocomplete interactions.
    fn is_autocomplete_target(&self) -> Option<bool>;

    /// The native value. `None` for subcommands and groups.
    fn value(&self) -> Option<NativeHandle>;

    /// The value, if its native type is the one the backend uses for
    /// `option_type`.
    fn value_as(&self, option_type: SlashCommandOptionType) -> Option<NativeHandle> {
        let expected = self.bridge().type_representation(option_type);
        self.value().filter(|value| value.type_tag() == expected)
    }

    fn string_value(&self) -> Option<String> {
        self.value_as(SlashCommandOptionType::String)?
            .downcast_ref::<String>()
            .cloned()
    }

    fn integer_value(&self) -> Option<i64> {
        self.value_as(SlashCommandOptionType::Integer)?
            .downcast_ref::<i64>()
            .copied()
    }

    fn number_value(&self) -> Option<f64> {
        self.value_as(SlashCommandOptionType::Number)?
            .downcast_ref::<f64>()
            .copied()
    }

    fn boolean_value(&self) -> Option<bool> {
        self.value_as(SlashCommandOptionType::Boolean)?
            .downcast_ref::<bool>()
            .copied()
    }
}

/// Content and flags of an interaction response or followup message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseBuilder {
    pub content: String,
    pub flags: BTreeSet<MessageFlag>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Replaces every flag.
    pub fn with_flags(mut self, flags: impl IntoIterator<Item = MessageFlag>) -> Self {
        self.flags = flags.into_iter().collect();
        self
    }

    pub fn with_flag(mut self, flag: MessageFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Only the invoking user sees the response.
    pub fn ephemeral(self) -> Self {
        self.with_flag(MessageFlag::Ephemeral)
    }

    /// Each flag as the backend's native flag type `N`.
    ///
    /// Fails with `UnsupportedValue` on the first flag the backend cannot
    /// represent.
    pub fn native_flags<N: Any>(&self, bridge: &dyn DiscordBridge) -> BridgeResult<Vec<N>> {
        self.flags
            .iter()
            .map(|flag| bridge.to_native::<N, _>(*flag))
            .collect()
    }
}

/// A slash command a user invoked.
///
/// Every response method converts its flags before any I/O, so a flag the
/// backend cannot represent sends nothing.
#[async_trait]
pub trait SlashCommandInteraction: DiscordEntity + SlashCommandInteractionOptionProvider {
    /// The bot application the command belongs to.
    fn application_id(&self) -> Snowflake;

    fn command_id(&self) -> Snowflake;

    fn command_name(&self) -> String;

    /// Set when the invoked command is a server command.
    fn server_command_server_id(&self) -> Option<Snowflake>;

    fn user(&self) -> Arc<dyn User>;

    fn server(&self) -> Option<Arc<dyn Server>>;

    /// The channel the command was invoked in, resolved to its most specific
    /// wrapper.
    fn channel(&self) -> BridgeResult<Option<Arc<dyn Channel>>>;

    /// The command name followed by every invoked group and subcommand.
    fn full_command_name(&self) -> Vec<String> {
        std::iter::once(self.command_name())
            .chain(
                self.arguments()
                    .into_iter()
                    .filter(|o| o.value().is_none())
                    .map(|o| o.name()),
            )
            .collect()
    }

    /// Sends the initial response.
    async fn respond(&self, response: &ResponseBuilder) -> BridgeResult<()>;

    /// Acknowledges the interaction now; the response follows through
    /// [`update_response`](Self::update_response).
    async fn respond_later(&self, ephemeral: bool) -> BridgeResult<()>;

    /// Replaces the initial or deferred response.
    async fn update_response(&self, response: &ResponseBuilder) -> BridgeResult<()>;

    /// Sends a followup message after the initial response and returns its ID.
    async fn followup(&self, response: &ResponseBuilder) -> BridgeResult<Snowflake>;

    /// Edits a followup message this interaction sent.
    async fn update_followup(
        &self,
        message_id: Snowflake,
        response: &ResponseBuilder,
    ) -> BridgeResult<()>;
}

/// An interaction raised while a user is still typing an autocompletable
/// option. Option values may be incomplete or missing.
#[async_trait]
pub trait SlashCommandAutocompleteInteraction: SlashCommandInteraction {
    /// The option being autocompleted.
    fn target_option(&self) -> Option<Arc<dyn SlashCommandInteractionOption>> {
        self.arguments()
            .into_iter()
            .find(|o| o.is_autocomplete_target() == Some(true))
    }

    /// Offers `choices` for the target option. Choice values must match the
    /// target option's type, otherwise this fails with `InvalidCommand`.
    async fn suggest(&self, choices: Vec<SlashCommandOptionChoiceData>) -> BridgeResult<()>;
}

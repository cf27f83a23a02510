//! Interaction wrappers.
//!
//! Invoked and autocomplete interactions share one native struct and one
//! wrapper; only autocomplete interactions are exposed through
//! [`SlashCommandAutocompleteInteraction`].

use crate::channel::channel_resolver;
use crate::command::choice_to_native;
use crate::native::{
    MemoryInteraction, MemoryInteractionOption, MemoryMessageFlag, MemoryOptionValue,
};
use crate::server::ServerImpl;
use crate::user::UserImpl;
use async_trait::async_trait;
use discord_bridge_api::api::{
    Channel, ResponseBuilder, Server, SlashCommandAutocompleteInteraction,
    SlashCommandInteraction, SlashCommandInteractionOption,
    SlashCommandInteractionOptionProvider, SlashCommandOptionChoiceData, User, MAX_CHOICE_COUNT,
};
use discord_bridge_api::enums::{MessageFlag, SlashCommandOptionType};
use discord_bridge_api::{
    impl_entity, BridgeApi, BridgeError, BridgeExt, BridgeRef, BridgeResult, DiscordBridge,
    EntityHandle, NativeHandle, Snowflake,
};
use std::sync::Arc;
use tracing::debug;

fn flag_bits(bridge: &dyn DiscordBridge, response: &ResponseBuilder) -> BridgeResult<u32> {
    Ok(response
        .native_flags::<MemoryMessageFlag>(bridge)?
        .into_iter()
        .fold(0, |bits, flag| bits | flag.0))
}

// ================================================================
// Options
// ================================================================

pub struct InteractionOptionImpl {
    bridge: BridgeRef,
    native: NativeHandle,
    option: Arc<MemoryInteractionOption>,
    autocomplete: bool,
}

impl InteractionOptionImpl {
    fn wrap(
        bridge: &BridgeRef,
        option: &Arc<MemoryInteractionOption>,
        autocomplete: bool,
    ) -> Arc<dyn SlashCommandInteractionOption> {
        Arc::new(Self {
            bridge: Arc::clone(bridge),
            native: NativeHandle::from_arc(Arc::clone(option)),
            option: Arc::clone(option),
            autocomplete,
        })
    }
}

fn wrap_options(
    bridge: &BridgeRef,
    options: &[Arc<MemoryInteractionOption>],
    autocomplete: bool,
) -> Vec<Arc<dyn SlashCommandInteractionOption>> {
    options
        .iter()
        .map(|o| InteractionOptionImpl::wrap(bridge, o, autocomplete))
        .collect()
}

impl BridgeApi for InteractionOptionImpl {
    fn implementation(&self) -> &NativeHandle {
        &self.native
    }

    fn bridge(&self) -> &BridgeRef {
        &self.bridge
    }
}

impl SlashCommandInteractionOptionProvider for InteractionOptionImpl {
    fn options(&self) -> Vec<Arc<dyn SlashCommandInteractionOption>> {
        wrap_options(&self.bridge, &self.option.options, self.autocomplete)
    }
}

impl SlashCommandInteractionOption for InteractionOptionImpl {
    fn name(&self) -> String {
        self.option.name.clone()
    }

    fn option_type(&self) -> SlashCommandOptionType {
        self.bridge
            .from_native::<SlashCommandOptionType, _>(self.option.kind)
            .unwrap_or(SlashCommandOptionType::Unknown)
    }

    fn is_autocomplete_target(&self) -> Option<bool> {
        self.autocomplete.then_some(self.option.focused)
    }

    fn value(&self) -> Option<NativeHandle> {
        Some(match self.option.value.as_ref()? {
            MemoryOptionValue::Str(s) => NativeHandle::new(s.clone()),
            MemoryOptionValue::Int(i) => NativeHandle::new(*i),
            MemoryOptionValue::Float(f) => NativeHandle::new(*f),
            MemoryOptionValue::Bool(b) => NativeHandle::new(*b),
            MemoryOptionValue::User(u) => NativeHandle::from_arc(Arc::clone(u)),
            MemoryOptionValue::Channel(c) => NativeHandle::from_arc(Arc::clone(c)),
            MemoryOptionValue::Role(r) => NativeHandle::from_arc(Arc::clone(r)),
        })
    }
}

// ================================================================
// Interactions
// ================================================================

pub struct SlashCommandInteractionImpl {
    handle: EntityHandle,
    interaction: Arc<MemoryInteraction>,
}

impl SlashCommandInteractionImpl {
    fn new(bridge: &BridgeRef, interaction: Arc<MemoryInteraction>) -> Self {
        let handle = EntityHandle::new(
            Arc::clone(bridge),
            NativeHandle::from_arc(Arc::clone(&interaction)),
            interaction.id.to_string(),
        );
        Self {
            handle,
            interaction,
        }
    }

    pub(crate) fn wrap(
        bridge: &BridgeRef,
        interaction: Arc<MemoryInteraction>,
    ) -> Arc<dyn SlashCommandInteraction> {
        Arc::new(Self::new(bridge, interaction))
    }

    /// Fails with `NoApplicableWrapper` unless `interaction` is an
    /// autocomplete interaction.
    pub(crate) fn wrap_autocomplete(
        bridge: &BridgeRef,
        interaction: Arc<MemoryInteraction>,
    ) -> BridgeResult<Arc<dyn SlashCommandAutocompleteInteraction>> {
        if !interaction.autocomplete {
            return Err(BridgeError::NoApplicableWrapper {
                capability: "SlashCommandAutocompleteInteraction",
                object: std::any::type_name::<MemoryInteraction>().to_string(),
            });
        }
        Ok(Arc::new(Self::new(bridge, interaction)))
    }

    fn bits(&self, response: &ResponseBuilder) -> BridgeResult<u32> {
        flag_bits(self.handle.bridge().as_ref(), response)
    }
}

impl_entity!(SlashCommandInteractionImpl);

impl SlashCommandInteractionOptionProvider for SlashCommandInteractionImpl {
    fn options(&self) -> Vec<Arc<dyn SlashCommandInteractionOption>> {
        wrap_options(
            self.handle.bridge(),
            &self.interaction.options,
            self.interaction.autocomplete,
        )
    }
}

#[async_trait]
impl SlashCommandInteraction for SlashCommandInteractionImpl {
    fn application_id(&self) -> Snowflake {
        Snowflake::new(self.interaction.application_id)
    }

    fn command_id(&self) -> Snowflake {
        Snowflake::new(self.interaction.command.id)
    }

    fn command_name(&self) -> String {
        self.interaction.command.spec.name.clone()
    }

    fn server_command_server_id(&self) -> Option<Snowflake> {
        self.interaction.command.guild_id.map(Snowflake::new)
    }

    fn user(&self) -> Arc<dyn User> {
        UserImpl::wrap(self.handle.bridge(), Arc::clone(&self.interaction.user))
    }

    fn server(&self) -> Option<Arc<dyn Server>> {
        self.interaction
            .guild
            .as_ref()
            .map(|g| ServerImpl::wrap(self.handle.bridge(), Arc::clone(g)))
    }

    fn channel(&self) -> BridgeResult<Option<Arc<dyn Channel>>> {
        self.interaction
            .channel
            .as_ref()
            .map(|c| {
                let native = NativeHandle::from_arc(Arc::clone(c));
                channel_resolver().resolve(self.handle.bridge(), native)
            })
            .transpose()
    }

    async fn respond(&self, response: &ResponseBuilder) -> BridgeResult<()> {
        let bits = self.bits(response)?;
        self.interaction
            .respond(&response.content, bits)
            .map_err(BridgeError::backend)?;
        debug!(interaction = self.interaction.id, "Responded to interaction");
        Ok(())
    }

    async fn respond_later(&self, ephemeral: bool) -> BridgeResult<()> {
        let bits = if ephemeral {
            self.handle
                .bridge()
                .to_native::<MemoryMessageFlag, _>(MessageFlag::Ephemeral)?
                .0
        } else {
            0
        };
        self.interaction.defer(bits).map_err(BridgeError::backend)?;
        debug!(interaction = self.interaction.id, ephemeral, "Deferred interaction response");
        Ok(())
    }

    async fn update_response(&self, response: &ResponseBuilder) -> BridgeResult<()> {
        let bits = self.bits(response)?;
        self.interaction
            .edit_response(&response.content, bits)
            .map_err(BridgeError::backend)
    }

    async fn followup(&self, response: &ResponseBuilder) -> BridgeResult<Snowflake> {
        let bits = self.bits(response)?;
        let id = self
            .interaction
            .followup(&response.content, bits)
            .map_err(BridgeError::backend)?;
        debug!(interaction = self.interaction.id, message = id, "Sent followup");
        Ok(Snowflake::new(id))
    }

    async fn update_followup(
        &self,
        message_id: Snowflake,
        response: &ResponseBuilder,
    ) -> BridgeResult<()> {
        let bits = self.bits(response)?;
        self.interaction
            .edit_followup(message_id.get(), &response.content, bits)
            .map_err(BridgeError::backend)
    }
}

#[async_trait]
impl SlashCommandAutocompleteInteraction for SlashCommandInteractionImpl {
    async fn suggest(&self, choices: Vec<SlashCommandOptionChoiceData>) -> BridgeResult<()> {
        let target = self.target_option().ok_or_else(|| {
            BridgeError::InvalidCommand(format!(
                "interaction {} has no focused option",
                self.interaction.id
            ))
        })?;
        if choices.len() > MAX_CHOICE_COUNT {
            return Err(BridgeError::InvalidCommand(format!(
                "more than {MAX_CHOICE_COUNT} suggestions"
            )));
        }
        let expected = target.option_type();
        if let Some(choice) = choices.iter().find(|c| c.value.option_type() != expected) {
            return Err(BridgeError::InvalidCommand(format!(
                "suggestion '{}' for option '{}' is not a {}",
                choice.name,
                target.name(),
                expected
            )));
        }

        let natives = choices
            .iter()
            .map(|c| (c.name.clone(), choice_to_native(&c.value)))
            .collect::<Vec<_>>();
        let count = natives.len();
        self.interaction
            .suggest(natives)
            .map_err(BridgeError::backend)?;
        debug!(interaction = self.interaction.id, count, "Sent autocomplete suggestions");
        Ok(())
    }
}

//! Slash command registration and wrappers.

use crate::native::{
    MemoryChannelKind, MemoryChoice, MemoryCommand, MemoryCommandSpec, MemoryContext,
    MemoryIntegrationType, MemoryLocale, MemoryOptionKind, MemoryOptionSpec, MemoryPermission,
};
use discord_bridge_api::api::{
    ChoiceValue, Mentionable, SlashCommand, SlashCommandData, SlashCommandOptionChoiceData,
    SlashCommandOptionData,
};
use discord_bridge_api::enums::{
    BridgeEnum, ChannelType, ContextType, InstallationType, Locale, SlashCommandOptionType,
};
use discord_bridge_api::{
    impl_entity, BridgeExt, BridgeRef, BridgeResult, DiscordBridge, DiscordEntity, EntityHandle,
    NativeHandle, Snowflake,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::debug;

// ================================================================
// Abstract -> native
// ================================================================

/// Converts registration data to the client's spec.
///
/// Every enum value is converted before anything is sent, so an unsupported
/// value fails with `UnsupportedValue` and registers nothing.
pub(crate) fn to_spec(
    bridge: &dyn DiscordBridge,
    data: &SlashCommandData,
) -> BridgeResult<MemoryCommandSpec> {
    data.validate()?;

    let default_member_permissions = match &data.required_permissions {
        Some(permissions) => Some(
            permissions
                .iter()
                .map(|p| bridge.to_native::<MemoryPermission, _>(*p))
                .try_fold(0u64, |bits, p| p.map(|p| bits | p.bits()))?,
        ),
        None => None,
    };

    Ok(MemoryCommandSpec {
        name: data.name.clone(),
        description: data.description.clone(),
        name_localizations: localizations(bridge, &data.name_localizations)?,
        description_localizations: localizations(bridge, &data.description_localizations)?,
        options: data
            .options
            .iter()
            .map(|o| option_to_spec(bridge, o))
            .collect::<BridgeResult<_>>()?,
        default_member_permissions,
        contexts: data
            .contexts
            .iter()
            .map(|c| bridge.to_native::<MemoryContext, _>(*c))
            .collect::<BridgeResult<_>>()?,
        integration_types: data
            .installation_types
            .iter()
            .map(|i| bridge.to_native::<MemoryIntegrationType, _>(*i))
            .collect::<BridgeResult<_>>()?,
        nsfw: data.nsfw,
    })
}

fn option_to_spec(
    bridge: &dyn DiscordBridge,
    option: &SlashCommandOptionData,
) -> BridgeResult<MemoryOptionSpec> {
    Ok(MemoryOptionSpec {
        name: option.name.clone(),
        description: option.description.clone(),
        kind: bridge.to_native::<MemoryOptionKind, _>(option.option_type)?,
        name_localizations: localizations(bridge, &option.name_localizations)?,
        description_localizations: localizations(bridge, &option.description_localizations)?,
        required: option.required,
        autocomplete: option.autocompletable,
        choices: option
            .choices
            .iter()
            .map(|c| (c.name.clone(), choice_to_native(&c.value)))
            .collect(),
        options: option
            .options
            .iter()
            .map(|o| option_to_spec(bridge, o))
            .collect::<BridgeResult<_>>()?,
        channel_kinds: option
            .channel_types
            .iter()
            .map(|t| bridge.to_native::<MemoryChannelKind, _>(*t))
            .collect::<BridgeResult<_>>()?,
    })
}

fn localizations(
    bridge: &dyn DiscordBridge,
    map: &BTreeMap<Locale, String>,
) -> BridgeResult<Vec<(MemoryLocale, String)>> {
    map.iter()
        .map(|(locale, text)| Ok((bridge.to_native::<MemoryLocale, _>(*locale)?, text.clone())))
        .collect()
}

pub(crate) fn choice_to_native(value: &ChoiceValue) -> MemoryChoice {
    match value {
        ChoiceValue::String(s) => MemoryChoice::Str(s.clone()),
        ChoiceValue::Integer(i) => MemoryChoice::Int(*i),
        ChoiceValue::Number(n) => MemoryChoice::Float(*n),
    }
}

// ================================================================
// Native -> abstract
// ================================================================

fn read<T: BridgeEnum, N: Send + Sync + 'static>(bridge: &dyn DiscordBridge, native: N) -> T {
    bridge.from_native::<T, N>(native).unwrap_or(T::UNKNOWN)
}

fn read_localizations(
    bridge: &dyn DiscordBridge,
    natives: &[(MemoryLocale, String)],
) -> BTreeMap<Locale, String> {
    natives
        .iter()
        .map(|(locale, text)| (read::<Locale, _>(bridge, *locale), text.clone()))
        .filter(|(locale, _)| !locale.is_unknown())
        .collect()
}

fn option_from_spec(
    bridge: &dyn DiscordBridge,
    spec: &MemoryOptionSpec,
) -> SlashCommandOptionData {
    let mut option = SlashCommandOptionData::new(
        spec.name.clone(),
        spec.description.clone(),
        read::<SlashCommandOptionType, _>(bridge, spec.kind),
    )
    .required(spec.required)
    .autocompletable(spec.autocomplete)
    .with_channel_types(
        spec.channel_kinds
            .iter()
            .map(|k| read::<ChannelType, _>(bridge, *k)),
    );
    option.name_localizations = read_localizations(bridge, &spec.name_localizations);
    option.description_localizations = read_localizations(bridge, &spec.description_localizations);
    option.choices = spec
        .choices
        .iter()
        .map(|(name, value)| {
            let value = match value {
                MemoryChoice::Str(s) => ChoiceValue::String(s.clone()),
                MemoryChoice::Int(i) => ChoiceValue::Integer(*i),
                MemoryChoice::Float(f) => ChoiceValue::Number(*f),
            };
            SlashCommandOptionChoiceData::new(name.clone(), value)
        })
        .collect();
    option.options = spec
        .options
        .iter()
        .map(|o| option_from_spec(bridge, o))
        .collect();
    option
}

/// A registered memory command.
pub struct SlashCommandImpl {
    handle: EntityHandle,
    command: Arc<MemoryCommand>,
}

impl SlashCommandImpl {
    pub(crate) fn wrap(bridge: &BridgeRef, command: Arc<MemoryCommand>) -> Arc<dyn SlashCommand> {
        let handle = EntityHandle::new(
            Arc::clone(bridge),
            NativeHandle::from_arc(Arc::clone(&command)),
            command.id.to_string(),
        );
        Arc::new(Self { handle, command })
    }
}

impl_entity!(SlashCommandImpl);

impl Mentionable for SlashCommandImpl {
    fn mention_tag(&self) -> String {
        format!("</{}:{}>", self.command.spec.name, self.id_as_string())
    }
}

impl SlashCommand for SlashCommandImpl {
    fn name(&self) -> String {
        self.command.spec.name.clone()
    }

    fn description(&self) -> String {
        self.command.spec.description.clone()
    }

    fn server_id(&self) -> Option<Snowflake> {
        self.command.guild_id.map(Snowflake::new)
    }

    fn options(&self) -> Vec<SlashCommandOptionData> {
        let bridge = self.handle.bridge().as_ref();
        self.command
            .spec
            .options
            .iter()
            .map(|o| option_from_spec(bridge, o))
            .collect()
    }

    fn contexts(&self) -> BTreeSet<ContextType> {
        let bridge = self.handle.bridge().as_ref();
        self.command
            .spec
            .contexts
            .iter()
            .map(|c| read::<ContextType, _>(bridge, *c))
            .collect()
    }

    fn installation_types(&self) -> BTreeSet<InstallationType> {
        let bridge = self.handle.bridge().as_ref();
        self.command
            .spec
            .integration_types
            .iter()
            .map(|i| read::<InstallationType, _>(bridge, *i))
            .collect()
    }

    fn nsfw(&self) -> bool {
        self.command.spec.nsfw
    }
}

// ================================================================
// Caching
// ================================================================

pub(crate) fn wrap_all(
    bridge: &BridgeRef,
    commands: Vec<Arc<MemoryCommand>>,
) -> Vec<Arc<dyn SlashCommand>> {
    commands
        .into_iter()
        .map(|c| SlashCommandImpl::wrap(bridge, c))
        .collect()
}

/// Records `commands` in the bridge's cache. With `replace`, cached commands
/// of the same scope that are no longer registered are dropped first.
pub(crate) async fn remember(
    bridge: &BridgeRef,
    server: Option<Snowflake>,
    commands: &[Arc<dyn SlashCommand>],
    replace: bool,
) {
    let Some(cache) = bridge.command_cache() else {
        return;
    };
    if replace {
        for stale in cache.for_server(server).await {
            if let Ok(id) = stale.id() {
                cache.remove(id).await;
            }
        }
    }
    let cached = cache.populate(commands).await;
    debug!(?server, cached, "Cached slash commands");
}

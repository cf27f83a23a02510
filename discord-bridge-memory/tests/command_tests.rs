use discord_bridge_api::api::{
    ChoiceValue, DiscordApi, SlashCommandData, SlashCommandOptionChoiceData,
    SlashCommandOptionData,
};
use discord_bridge_api::enums::{
    ChannelType, ContextType, InstallationType, Locale, PermissionType, SlashCommandOptionType,
};
use discord_bridge_api::*;
use discord_bridge_memory::native::{MemoryContext, MemoryLocale, MemoryOptionKind, MemoryPermission};
use discord_bridge_memory::{MemoryBridge, MemoryClient, MemoryError};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::sync::Arc;

fn load_with(client: &Arc<MemoryClient>, config: &BridgeConfig) -> Arc<dyn DiscordApi> {
    MemoryBridge::with_config(config)
        .load_api(NativeHandle::from_arc(Arc::clone(client)))
        .unwrap()
}

fn load(client: &Arc<MemoryClient>) -> Arc<dyn DiscordApi> {
    load_with(client, &BridgeConfig::default())
}

fn ban_command() -> SlashCommandData {
    SlashCommandData::new("ban", "Ban a member")
        .with_localized_name(Locale::German, "bannen")
        .with_required_permissions([PermissionType::BanMembers])
        .with_contexts([ContextType::Server])
        .with_installation_types([InstallationType::ServerInstall])
        .with_option(SlashCommandOptionData::new(
            "user",
            "Who to ban",
            SlashCommandOptionType::User,
        ))
        .with_option(
            SlashCommandOptionData::new("days", "Messages to delete", SlashCommandOptionType::Integer)
                .required(false)
                .with_choice(SlashCommandOptionChoiceData::new("none", 0i64))
                .with_choice(SlashCommandOptionChoiceData::new("week", 7i64)),
        )
}

// ── Registration ──────────────────────────────────────────────────

#[tokio::test]
async fn registers_converted_spec() {
    let client = MemoryClient::login("helper");
    let api = load(&client);

    let registered = api
        .bulk_update_global_commands(vec![ban_command()])
        .await
        .unwrap();
    assert_eq!(registered.len(), 1);

    let native = client.global_commands().unwrap();
    let spec = &native[0].spec;
    assert_eq!(spec.name, "ban");
    assert_eq!(
        spec.name_localizations,
        vec![(MemoryLocale("de"), "bannen".to_string())]
    );
    assert_eq!(
        spec.default_member_permissions,
        Some(MemoryPermission::BAN_MEMBERS.bits())
    );
    assert_eq!(spec.contexts, vec![MemoryContext::Guild]);
    assert_eq!(spec.options[0].kind, MemoryOptionKind::User);
    assert!(!spec.options[1].required);
    assert_eq!(spec.options[1].choices.len(), 2);
}

#[tokio::test]
async fn unrecognized_locale_fails_before_registering() {
    let client = MemoryClient::login("helper");
    let api = load(&client);

    let err = api
        .bulk_update_global_commands(vec![
            ban_command().with_localized_name(Locale::Italian, "bannare"),
        ])
        .await
        .err()
        .unwrap();
    assert!(matches!(
        err,
        BridgeError::UnsupportedValue {
            domain: EnumDomain::Locale,
            variant: "ITALIAN",
            ..
        }
    ));
    assert!(client.global_commands().unwrap().is_empty());
}

#[tokio::test]
async fn attachment_option_is_rejected() {
    let client = MemoryClient::login("helper");
    let api = load(&client);
    let command = SlashCommandData::new("upload", "Upload a file").with_option(
        SlashCommandOptionData::new("file", "The file", SlashCommandOptionType::Attachment),
    );

    let err = api
        .bulk_update_global_commands(vec![command])
        .await
        .err()
        .unwrap();
    assert!(matches!(
        err,
        BridgeError::UnsupportedValue {
            domain: EnumDomain::SlashCommandOptionType,
            variant: "ATTACHMENT",
            ..
        }
    ));
}

#[tokio::test]
async fn invalid_data_is_rejected() {
    let client = MemoryClient::login("helper");
    let api = load(&client);
    let err = api
        .bulk_update_global_commands(vec![SlashCommandData::new("Bad Name", "desc")])
        .await
        .err()
        .unwrap();
    assert!(matches!(err, BridgeError::InvalidCommand(_)));
}

#[tokio::test]
async fn duplicate_names_surface_backend_error() {
    let client = MemoryClient::login("helper");
    let api = load(&client);
    let err = api
        .bulk_update_global_commands(vec![
            SlashCommandData::new("ping", "Ping"),
            SlashCommandData::new("ping", "Pong"),
        ])
        .await
        .err()
        .unwrap();
    match err {
        BridgeError::Backend(source) => assert_eq!(
            source.downcast_ref::<MemoryError>(),
            Some(&MemoryError::DuplicateCommand("ping".to_string()))
        ),
        other => panic!("unexpected error: {other}"),
    }
}

// ── Reading back ──────────────────────────────────────────────────

#[tokio::test]
async fn wrappers_read_back_abstract_values() {
    let client = MemoryClient::login("helper");
    let api = load(&client);
    api.bulk_update_global_commands(vec![ban_command()])
        .await
        .unwrap();

    let commands = api.global_slash_commands().await.unwrap();
    let ban = &commands[0];
    assert_eq!(ban.name(), "ban");
    assert_eq!(ban.server_id(), None);
    assert_eq!(ban.contexts(), BTreeSet::from([ContextType::Server]));
    assert_eq!(
        ban.installation_types(),
        BTreeSet::from([InstallationType::ServerInstall])
    );
    assert_eq!(ban.mention_tag(), format!("</ban:{}>", ban.id_as_string()));

    let options = ban.options();
    assert_eq!(options[0].option_type, SlashCommandOptionType::User);
    assert_eq!(options[1].choices[1].value, ChoiceValue::Integer(7));
}

#[tokio::test]
async fn channel_option_types_round_trip() {
    let client = MemoryClient::login("helper");
    let api = load(&client);
    let command = SlashCommandData::new("move", "Move the conversation").with_option(
        SlashCommandOptionData::new("to", "Destination", SlashCommandOptionType::Channel)
            .with_channel_types([ChannelType::ServerText, ChannelType::ServerForum]),
    );

    let registered = api.bulk_update_global_commands(vec![command]).await.unwrap();
    assert_eq!(
        registered[0].options()[0].channel_types,
        BTreeSet::from([ChannelType::ServerText, ChannelType::ServerForum])
    );
}

// ── Server scope and caching ──────────────────────────────────────

#[tokio::test]
async fn server_commands_are_cached_per_scope() {
    let client = MemoryClient::login("helper");
    let guild = client.create_guild("lab").unwrap();
    let api = load(&client);
    let server = api.servers().unwrap().remove(0);
    let server_id = Snowflake::new(guild.id);

    api.bulk_update_global_commands(vec![SlashCommandData::new("help", "Show help")])
        .await
        .unwrap();
    let local = server
        .bulk_update_server_commands(vec![
            SlashCommandData::new("kick", "Kick a member"),
            SlashCommandData::new("mute", "Mute a member"),
        ])
        .await
        .unwrap();
    assert_eq!(local[0].server_id(), Some(server_id));

    let cache = api.bridge().command_cache().unwrap();
    assert_eq!(cache.len().await, 3);
    assert_eq!(cache.for_server(Some(server_id)).await.len(), 2);

    // replacing the server's commands drops the stale ones
    server
        .bulk_update_server_commands(vec![SlashCommandData::new("kick", "Kick a member")])
        .await
        .unwrap();
    assert_eq!(cache.for_server(Some(server_id)).await.len(), 1);
    assert_eq!(cache.for_server(None).await.len(), 1);
    assert_eq!(server.server_slash_commands().await.unwrap().len(), 1);
}

#[tokio::test]
async fn cache_can_be_disabled() {
    let client = MemoryClient::login("helper");
    let config = BridgeConfig {
        command_cache: CommandCacheConfig { enabled: false },
        ..BridgeConfig::default()
    };
    let api = load_with(&client, &config);
    api.bulk_update_global_commands(vec![SlashCommandData::new("help", "Show help")])
        .await
        .unwrap();
    assert!(api.bridge().command_cache().is_none());
}

#[tokio::test]
async fn closed_session_fails_registration() {
    let client = MemoryClient::login("helper");
    let api = load(&client);
    client.close();
    let err = api.global_slash_commands().await.err().unwrap();
    assert!(matches!(err, BridgeError::Backend(_)));
}

use discord_bridge_api::enums::{ChannelType, MessageFlag};
use discord_bridge_api::*;
use discord_bridge_memory::native::MemoryMessageFlag;
use discord_bridge_memory::{
    channel_resolver, server_channel_resolver, wrap_channel, MemoryBridge, MemoryChannelKind,
    MemoryClient, MemoryError,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn setup() -> (BridgeRef, Arc<MemoryClient>) {
    (MemoryBridge::new(), MemoryClient::login("helper"))
}

fn backend_error(err: BridgeError) -> MemoryError {
    match err {
        BridgeError::Backend(source) => source
            .downcast_ref::<MemoryError>()
            .cloned()
            .expect("memory error"),
        other => panic!("expected a backend error, got {other}"),
    }
}

// ── Resolution ────────────────────────────────────────────────────

#[test]
fn guild_text_channel_resolves_to_most_specific_wrapper() {
    let (bridge, client) = setup();
    let guild = client.create_guild("lab").unwrap();
    let native = guild.create_channel(MemoryChannelKind::Text, "general").unwrap();

    assert_eq!(
        channel_resolver().generality(&NativeHandle::from_arc(Arc::clone(&native))),
        vec![
            ("MemoryChannel", 1),
            ("MemoryTextChannel", 2),
            ("MemoryServerChannel", 2),
            ("MemoryServerTextChannel", 4),
        ]
    );

    let channel = wrap_channel(&bridge, native).unwrap();
    assert_eq!(channel.channel_type(), ChannelType::ServerText);
    assert!(channel.as_text_channel().is_some());
    assert!(channel.as_server_channel().is_some());
    assert!(channel.as_server_text_channel().is_some());
}

#[test]
fn voice_channel_is_server_only() {
    let (bridge, client) = setup();
    let guild = client.create_guild("lab").unwrap();
    let native = guild.create_channel(MemoryChannelKind::Voice, "lounge").unwrap();

    let selected = channel_resolver()
        .select(&NativeHandle::from_arc(Arc::clone(&native)))
        .unwrap();
    assert_eq!(selected.name(), "MemoryServerChannel");

    let channel = wrap_channel(&bridge, native).unwrap();
    assert_eq!(channel.channel_type(), ChannelType::ServerVoice);
    assert!(channel.as_text_channel().is_none());
    assert_eq!(channel.as_server_channel().unwrap().name(), "lounge");
}

#[test]
fn dm_is_text_only() {
    let (bridge, client) = setup();
    let native = client.open_channel(MemoryChannelKind::Dm).unwrap();

    let channel = wrap_channel(&bridge, native).unwrap();
    assert_eq!(channel.channel_type(), ChannelType::Private);
    assert!(channel.as_text_channel().is_some());
    assert!(channel.as_server_channel().is_none());
}

#[test]
fn unrecognized_kind_falls_back_to_plain_channel() {
    let (bridge, client) = setup();
    let native = client
        .open_channel(MemoryChannelKind::Unrecognized(3))
        .unwrap();

    let channel = wrap_channel(&bridge, native).unwrap();
    assert_eq!(channel.channel_type(), ChannelType::Unknown);
    assert!(channel.as_text_channel().is_none());
    assert!(channel.as_server_channel().is_none());
}

#[test]
fn foreign_objects_have_no_wrapper() {
    let (bridge, _client) = setup();
    let err = channel_resolver()
        .resolve(&bridge, NativeHandle::new("not a channel"))
        .err()
        .unwrap();
    assert!(matches!(
        err,
        BridgeError::NoApplicableWrapper {
            capability: "Channel",
            ..
        }
    ));
}

#[test]
fn server_channel_resolver_skips_dms() {
    let (bridge, client) = setup();
    let dm = client.open_channel(MemoryChannelKind::Dm).unwrap();
    assert!(server_channel_resolver()
        .resolve(&bridge, NativeHandle::from_arc(dm))
        .is_err());
}

#[test]
fn wrapper_keeps_identity_and_backend() {
    let (bridge, client) = setup();
    let native = client.open_channel(MemoryChannelKind::Dm).unwrap();
    let id = native.id;
    let handle = NativeHandle::from_arc(Arc::clone(&native));

    let channel = channel_resolver().resolve(&bridge, handle.clone()).unwrap();
    assert_eq!(channel.id().unwrap(), Snowflake::new(id));
    assert_eq!(channel.id_as_string(), id.to_string());
    assert!(channel.implementation().ptr_eq(&handle));
    assert!(Arc::ptr_eq(channel.bridge(), &bridge));
}

// ── Messaging ─────────────────────────────────────────────────────

#[tokio::test]
async fn send_message_converts_flags() {
    let (bridge, client) = setup();
    let guild = client.create_guild("lab").unwrap();
    let native = guild.create_channel(MemoryChannelKind::Text, "general").unwrap();
    let channel = wrap_channel(&bridge, Arc::clone(&native)).unwrap();

    let id = channel
        .as_text_channel()
        .unwrap()
        .send_message("hello", &[MessageFlag::Silent, MessageFlag::Ephemeral])
        .await
        .unwrap();

    let messages = native.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(Snowflake::new(messages[0].id), id);
    assert_eq!(messages[0].content, "hello");
    assert_eq!(
        messages[0].flags,
        MemoryMessageFlag::SUPPRESS_NOTIFICATIONS.0 | MemoryMessageFlag::EPHEMERAL.0
    );
}

#[tokio::test]
async fn unsupported_flag_sends_nothing() {
    let (bridge, client) = setup();
    let native = client.open_channel(MemoryChannelKind::Dm).unwrap();
    let channel = wrap_channel(&bridge, Arc::clone(&native)).unwrap();

    let err = channel
        .as_text_channel()
        .unwrap()
        .send_message("hello", &[MessageFlag::Unknown])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BridgeError::UnsupportedValue {
            domain: EnumDomain::MessageFlag,
            ..
        }
    ));
    assert!(native.messages().is_empty());
}

#[tokio::test]
async fn closed_session_surfaces_backend_error() {
    let (bridge, client) = setup();
    let native = client.open_channel(MemoryChannelKind::Dm).unwrap();
    let channel = wrap_channel(&bridge, native).unwrap();
    client.close();

    let err = channel
        .as_text_channel()
        .unwrap()
        .send_message("hello", &[])
        .await
        .unwrap_err();
    assert_eq!(backend_error(err), MemoryError::SessionClosed);
}

// ── Server channels ───────────────────────────────────────────────

#[tokio::test]
async fn server_channel_links_back_to_its_server() {
    let (bridge, client) = setup();
    let guild = client.create_guild("lab").unwrap();
    let native = guild
        .create_text_channel_with_topic("rules", "be nice")
        .unwrap();
    let channel = wrap_channel(&bridge, native).unwrap();

    let text = channel.as_server_text_channel().unwrap();
    assert_eq!(text.topic().as_deref(), Some("be nice"));
    let server = text.server().unwrap();
    assert_eq!(server.name(), "lab");
    assert_eq!(server.id().unwrap(), Snowflake::new(guild.id));
}

#[tokio::test]
async fn delete_removes_channel_once() {
    let (bridge, client) = setup();
    let guild = client.create_guild("lab").unwrap();
    let native = guild.create_channel(MemoryChannelKind::Category, "misc").unwrap();
    let channel = wrap_channel(&bridge, Arc::clone(&native)).unwrap();
    let server_channel = channel.as_server_channel().unwrap();

    server_channel.delete().await.unwrap();
    assert!(native.is_deleted());
    assert!(guild.channels().is_empty());

    let err = server_channel.delete().await.unwrap_err();
    assert_eq!(backend_error(err), MemoryError::UnknownChannel(native.id));
}

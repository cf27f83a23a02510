use discord_bridge_api::*;
use discord_bridge_identity::IdentityBridge;
use discord_bridge_memory::{MemoryBridge, MemoryClient, NAME};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn registry(config: BridgeConfig) -> BridgeRegistry {
    BridgeRegistry::with_config(config)
        .with_bridge(IdentityBridge::shared())
        .with_bridge(MemoryBridge::new())
}

fn session() -> NativeHandle {
    NativeHandle::from_arc(MemoryClient::login("helper"))
}

#[test]
fn memory_client_finds_memory_bridge() {
    let registry = registry(BridgeConfig::default());
    let native = session();

    let found = registry.find(&native);
    let accepting: Vec<_> = found.iter().map(|b| b.name()).collect();
    assert_eq!(accepting, vec![NAME]);

    let api = registry.load(native.clone()).unwrap();
    assert_eq!(api.bridge().name(), NAME);
    assert!(api.implementation().ptr_eq(&native));
    assert!(api.implementation().is::<MemoryClient>());
}

#[test]
fn loaded_api_exposes_the_session() {
    let client = MemoryClient::login("helper");
    let api = MemoryBridge::new()
        .load_api(NativeHandle::from_arc(Arc::clone(&client)))
        .unwrap();
    let native = api.implementation().downcast_arc::<MemoryClient>().unwrap();
    assert!(Arc::ptr_eq(&native, &client));
}

#[test]
fn foreign_objects_are_rejected() {
    let registry = registry(BridgeConfig::default());
    let err = registry.load(NativeHandle::new(42u32)).err().unwrap();
    assert!(matches!(err, BridgeError::NoCompatibleBridge { .. }));
}

#[test]
fn two_memory_bridges_are_ambiguous_by_default() {
    let registry = registry(BridgeConfig::default()).with_bridge(MemoryBridge::new());
    match registry.load(session()).err().unwrap() {
        BridgeError::AmbiguousBridge { bridges, .. } => {
            assert_eq!(bridges, vec![NAME.to_string(), NAME.to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn first_registered_mode_picks_the_earliest() {
    let config = BridgeConfig {
        discovery: DiscoveryMode::FirstRegistered,
        ..BridgeConfig::default()
    };
    let registry = registry(config).with_bridge(MemoryBridge::new());
    let api = registry.load(session()).unwrap();
    assert!(Arc::ptr_eq(api.bridge(), &registry.bridges()[1]));
}

#[test]
fn disabled_bridge_is_skipped() {
    let config = BridgeConfig {
        disabled_bridges: [NAME.to_string()].into(),
        ..BridgeConfig::default()
    };
    let registry = registry(config);
    assert!(registry.find(&session()).is_empty());
    assert!(matches!(
        registry.load(session()),
        Err(BridgeError::NoCompatibleBridge { .. })
    ));
}

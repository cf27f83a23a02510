mod common;

use common::StubBridge;
use discord_bridge_api::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;

struct SessionA;
struct SessionB;

fn first_registered() -> BridgeConfig {
    BridgeConfig {
        discovery: DiscoveryMode::FirstRegistered,
        ..BridgeConfig::default()
    }
}

// ── Discovery ─────────────────────────────────────────────────────

#[test]
fn second_bridge_loads_when_first_rejects() {
    let first = StubBridge::accepting::<SessionA>("first");
    let second = StubBridge::accepting::<SessionB>("second");
    let registry = BridgeRegistry::new()
        .with_bridge(first.clone())
        .with_bridge(second.clone());

    let api = registry.load(NativeHandle::new(SessionB)).unwrap();

    assert_eq!(api.bridge().name(), "second");
    assert!(api.implementation().is::<SessionB>());
    assert_eq!(first.loads(), 0);
    assert_eq!(second.loads(), 1);
}

#[test]
fn no_accepting_bridge() {
    let registry = BridgeRegistry::new().with_bridge(StubBridge::rejecting("only"));
    let err = registry.load(NativeHandle::new(SessionA)).err().unwrap();
    match err {
        BridgeError::NoCompatibleBridge { object } => assert!(object.ends_with("SessionA")),
        other => panic!("expected NoCompatibleBridge, got {other:?}"),
    }
}

#[test]
fn empty_registry_has_no_compatible_bridge() {
    let err = BridgeRegistry::new()
        .load(NativeHandle::new(SessionA))
        .err()
        .unwrap();
    assert!(matches!(err, BridgeError::NoCompatibleBridge { .. }));
}

#[test]
fn exact_mode_rejects_ambiguity() {
    let a = StubBridge::accepting::<SessionA>("a");
    let b = StubBridge::accepting::<SessionA>("b");
    let registry = BridgeRegistry::new().with_bridge(a.clone()).with_bridge(b.clone());

    let err = registry.load(NativeHandle::new(SessionA)).err().unwrap();
    match err {
        BridgeError::AmbiguousBridge { bridges, .. } => assert_eq!(bridges, vec!["a", "b"]),
        other => panic!("expected AmbiguousBridge, got {other:?}"),
    }
    assert_eq!(a.loads() + b.loads(), 0);
}

#[test]
fn first_registered_mode_takes_the_first() {
    let a = StubBridge::accepting::<SessionA>("a");
    let b = StubBridge::accepting::<SessionA>("b");
    let registry = BridgeRegistry::with_config(first_registered())
        .with_bridge(a.clone())
        .with_bridge(b.clone());

    let api = registry.load(NativeHandle::new(SessionA)).unwrap();
    assert_eq!(api.bridge().name(), "a");
    assert_eq!(b.loads(), 0);
}

#[test]
fn load_first_short_circuits() {
    let a = StubBridge::accepting::<SessionA>("a");
    let b = StubBridge::accepting::<SessionA>("b");
    let registry = BridgeRegistry::new().with_bridge(a.clone()).with_bridge(b.clone());

    let api = registry.load_first(NativeHandle::new(SessionA)).unwrap();
    assert_eq!(api.bridge().name(), "a");
    assert_eq!(b.probes(), 0);
}

#[test]
fn load_exact_ignores_configured_mode() {
    let registry = BridgeRegistry::with_config(first_registered())
        .with_bridge(StubBridge::accepting::<SessionA>("a"))
        .with_bridge(StubBridge::accepting::<SessionA>("b"));

    let result = registry.load_exact(NativeHandle::new(SessionA));
    assert!(matches!(result, Err(BridgeError::AmbiguousBridge { .. })));
}

#[test]
fn disabled_bridges_are_skipped() {
    let config = BridgeConfig {
        disabled_bridges: ["a".to_string()].into(),
        ..BridgeConfig::default()
    };
    let a = StubBridge::accepting::<SessionA>("a");
    let b = StubBridge::accepting::<SessionA>("b");
    let registry = BridgeRegistry::with_config(config)
        .with_bridge(a.clone())
        .with_bridge(b.clone());

    let api = registry.load(NativeHandle::new(SessionA)).unwrap();
    assert_eq!(api.bridge().name(), "b");
    assert_eq!(a.probes(), 0);
    assert_eq!(registry.bridges().len(), 2);
}

#[test]
fn find_lists_accepting_bridges_in_order() {
    let registry = BridgeRegistry::new()
        .with_bridge(StubBridge::accepting::<SessionA>("a"))
        .with_bridge(StubBridge::accepting::<SessionB>("b"))
        .with_bridge(StubBridge::new("any", |_| true));

    let names: Vec<_> = registry
        .find(&NativeHandle::new(SessionB))
        .iter()
        .map(|b| b.name().to_string())
        .collect();
    assert_eq!(names, vec!["b", "any"]);
}

#[test]
fn bridge_named_lookup() {
    let registry = BridgeRegistry::new().with_bridge(StubBridge::rejecting("named"));
    assert!(registry.bridge_named("named").is_some());
    assert!(registry.bridge_named("missing").is_none());
}

// ── Global registry ───────────────────────────────────────────────

#[test]
fn global_registry_initializes_once() {
    let bridge: BridgeRef = StubBridge::accepting::<SessionA>("global");
    let installed = init_global(BridgeRegistry::new().with_bridge(Arc::clone(&bridge))).unwrap();
    assert_eq!(installed.bridges().len(), 1);
    assert!(global().is_some());

    let again = init_global(BridgeRegistry::new());
    assert!(matches!(again, Err(BridgeError::AlreadyInitialized)));
    assert_eq!(global().unwrap().bridges()[0].name(), "global");
}

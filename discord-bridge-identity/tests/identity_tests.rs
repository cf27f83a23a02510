use discord_bridge_api::enums::{BridgeEnum, ChannelType, Locale, PermissionType, SlashCommandOptionType};
use discord_bridge_api::*;
use discord_bridge_identity::{IdentityBridge, NAME};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;

// ── Support ───────────────────────────────────────────────────────

#[test]
fn supports_every_declared_variant() {
    let bridge = IdentityBridge::new();
    for domain in EnumDomain::ALL {
        let supported: Vec<_> = bridge.supported_values(*domain).into_iter().collect();
        let mut declared = domain.declared_variants();
        declared.sort();
        assert_eq!(supported, declared, "domain {domain}");
    }
}

#[test]
fn never_supports_unknown() {
    let bridge = IdentityBridge::new();
    for domain in EnumDomain::ALL {
        assert!(!bridge.supported_values(*domain).contains(&domain.unknown()));
    }
    assert!(!bridge.is_supported(ChannelType::Unknown));
}

#[test]
fn typed_helpers() {
    let bridge = IdentityBridge::new();
    assert!(bridge.supported::<PermissionType>().contains(&PermissionType::Administrator));
    assert_eq!(bridge.to_native::<Locale, _>(Locale::Korean).unwrap(), Locale::Korean);
    assert_eq!(
        bridge.from_native::<ChannelType, _>(ChannelType::ServerStage).unwrap(),
        ChannelType::ServerStage
    );
}

// ── Conversion ────────────────────────────────────────────────────

#[test]
fn conversion_is_identity() {
    let bridge = IdentityBridge::new();
    let value: BridgeEnumValue = SlashCommandOptionType::Mentionable.into();
    let native = bridge.implementation_value(value).unwrap();
    assert_eq!(
        native.downcast_ref::<SlashCommandOptionType>(),
        Some(&SlashCommandOptionType::Mentionable)
    );
    assert_eq!(
        bridge
            .convert_internal(EnumDomain::SlashCommandOptionType, &native)
            .unwrap(),
        value
    );
}

#[test]
fn unknown_is_still_written_as_itself() {
    let native = IdentityBridge::new()
        .implementation_value(ChannelType::Unknown.into())
        .unwrap();
    assert_eq!(native.downcast_ref::<ChannelType>(), Some(&ChannelType::Unknown));
}

#[test]
fn foreign_native_is_a_mismatch() {
    let err = IdentityBridge::new()
        .convert_internal(EnumDomain::Locale, &NativeValue::new("en-US"))
        .unwrap_err();
    assert!(matches!(err, BridgeError::TypeMismatch { domain: EnumDomain::Locale, .. }));
}

#[test]
fn other_domain_is_a_mismatch() {
    let native = NativeValue::new(ChannelType::Private);
    let err = IdentityBridge::new()
        .convert_internal(EnumDomain::ContextType, &native)
        .unwrap_err();
    assert!(matches!(err, BridgeError::TypeMismatch { .. }));
}

// ── Types ─────────────────────────────────────────────────────────

#[test]
fn type_representations_are_abstract() {
    let bridge = IdentityBridge::new();
    for channel in ChannelType::ALL {
        assert_eq!(bridge.type_representation(*channel), channel.type_representation());
    }
    for kind in ApiKind::ALL {
        assert_eq!(bridge.implementation_type(*kind), Some(kind.abstract_type()));
    }
}

// ── Discovery ─────────────────────────────────────────────────────

#[test]
fn never_loads_an_api() {
    let bridge = IdentityBridge::shared();
    assert_eq!(bridge.name(), NAME);
    assert!(!bridge.can_load_api(&NativeHandle::new(())));

    let registry = BridgeRegistry::new().with_bridge(bridge.clone());
    let err = registry.load(NativeHandle::new(())).err().unwrap();
    assert!(matches!(err, BridgeError::NoCompatibleBridge { .. }));
    assert!(Arc::ptr_eq(&bridge, &IdentityBridge::shared()));
}

// ── Properties ────────────────────────────────────────────────────

#[test]
fn every_domain_round_trips() {
    let bridge = IdentityBridge::new();
    for domain in EnumDomain::ALL {
        let supported = bridge.supported_values(*domain);
        assert!(!supported.is_empty(), "domain {domain}");
        for value in supported {
            let native = bridge.implementation_value(value).unwrap();
            assert_eq!(bridge.convert_internal(*domain, &native).unwrap(), value);
        }
    }
}

proptest! {
    #[test]
    fn every_supported_value_round_trips(index in 0..PermissionType::ALL.len()) {
        let bridge = IdentityBridge::new();
        let value: BridgeEnumValue = PermissionType::ALL[index].into();
        let native = bridge.implementation_value(value).unwrap();
        let back = bridge.convert_internal(EnumDomain::PermissionType, &native).unwrap();
        prop_assert_eq!(back, value);
    }
}

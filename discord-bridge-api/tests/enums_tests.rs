use discord_bridge_api::api::{Channel, ServerChannel, ServerTextChannel, TextChannel, User};
use discord_bridge_api::enums::*;
use discord_bridge_api::TypeTag;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

// ── Domains ───────────────────────────────────────────────────────

#[test]
fn every_domain_has_exactly_one_unknown() {
    for domain in EnumDomain::ALL {
        let unknowns: Vec<_> = domain
            .variants()
            .into_iter()
            .filter(|v| v.is_unknown())
            .collect();
        assert_eq!(unknowns, vec![domain.unknown()], "domain {domain}");
    }
}

#[test]
fn declared_variants_exclude_unknown() {
    for domain in EnumDomain::ALL {
        let declared = domain.declared_variants();
        assert_eq!(declared.len() + 1, domain.variants().len());
        assert!(declared.iter().all(|v| v.domain() == *domain));
    }
}

#[test]
fn variant_names_are_unique_within_domain() {
    for domain in EnumDomain::ALL {
        let names: HashSet<_> = domain.variants().iter().map(|v| v.name()).collect();
        assert_eq!(names.len(), domain.variants().len(), "domain {domain}");
    }
}

#[test]
fn domain_from_name_is_lenient() {
    assert_eq!(EnumDomain::from_name("ChannelType"), Some(EnumDomain::ChannelType));
    assert_eq!(EnumDomain::from_name("channel_type"), Some(EnumDomain::ChannelType));
    assert_eq!(
        EnumDomain::from_name("slash-command-option-type"),
        Some(EnumDomain::SlashCommandOptionType)
    );
    assert_eq!(EnumDomain::from_name("colour"), None);
}

#[test]
fn domain_counts_match_declarations() {
    assert_eq!(ChannelType::ALL.len(), 15);
    assert_eq!(MessageFlag::ALL.len(), 3);
    assert_eq!(ContextType::ALL.len(), 4);
    assert_eq!(InstallationType::ALL.len(), 3);
    assert_eq!(SlashCommandOptionType::ALL.len(), 12);
    assert_eq!(Locale::ALL.len(), 32);
}

// ── Union ─────────────────────────────────────────────────────────

#[test]
fn union_round_trips_through_try_from() {
    let value: BridgeEnumValue = ChannelType::ServerForum.into();
    assert_eq!(value.domain(), EnumDomain::ChannelType);
    assert_eq!(ChannelType::try_from(value), Ok(ChannelType::ServerForum));
    assert_eq!(MessageFlag::try_from(value), Err(value));
}

#[test]
fn union_display_is_qualified() {
    let value: BridgeEnumValue = PermissionType::ManageChannels.into();
    assert_eq!(value.to_string(), "PermissionType.MANAGE_CHANNELS");
}

#[test]
fn abstract_native_round_trip() {
    let value: BridgeEnumValue = Locale::Japanese.into();
    let native = value.to_abstract_native();
    assert!(native.downcast_ref::<Locale>().is_some());
    assert_eq!(
        BridgeEnumValue::from_abstract_native(EnumDomain::Locale, &native),
        Some(value)
    );
    assert_eq!(
        BridgeEnumValue::from_abstract_native(EnumDomain::ChannelType, &native),
        None
    );
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn variants_serialize_by_name() {
    let json = serde_json::to_string(&ChannelType::ServerThreadPublic).unwrap();
    assert_eq!(json, "\"SERVER_THREAD_PUBLIC\"");
    for v in SlashCommandOptionType::ALL {
        let json = serde_json::to_string(v).unwrap();
        assert_eq!(json, format!("\"{}\"", v.name()));
    }
}

#[test]
fn union_serializes_with_domain_tag() {
    let value: BridgeEnumValue = ContextType::BotDm.into();
    let json = serde_json::to_value(value).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "domain": "ContextType", "value": "BOT_DM" })
    );
    let back: BridgeEnumValue = serde_json::from_value(json).unwrap();
    assert_eq!(back, value);
}

// ── Extras ────────────────────────────────────────────────────────

#[test]
fn permission_display_names() {
    assert_eq!(PermissionType::ModerateMembers.display_name(), "Time out Members");
    assert_eq!(PermissionType::CreateInstantInvite.display_name(), "Create Invite");
    assert_eq!(PermissionType::ViewMonetizationAnalytics.name(), "VIEW_MONETIZATION_ANALYTICS");
}

#[test]
fn locale_language_tags() {
    assert_eq!(Locale::EnglishUs.language_tag(), "en-US");
    assert_eq!(Locale::SpanishLatam.language_tag(), "es-419");
    assert_eq!(Locale::from_language_tag("zh-tw"), Locale::ChineseTaiwan);
    assert_eq!(Locale::from_language_tag(""), Locale::Unknown);
    assert_eq!(Locale::from_language_tag("tlh"), Locale::Unknown);
}

#[test]
fn every_declared_locale_has_a_distinct_tag() {
    let tags: HashSet<_> = Locale::declared().map(|l| l.language_tag()).collect();
    assert_eq!(tags.len(), Locale::ALL.len() - 1);
    for locale in Locale::declared() {
        assert_eq!(Locale::from_language_tag(locale.language_tag()), locale);
    }
}

// ── Type values ───────────────────────────────────────────────────

#[test]
fn channel_type_representations() {
    assert_eq!(
        ChannelType::Private.type_representation(),
        TypeTag::of::<dyn TextChannel>()
    );
    assert_eq!(
        ChannelType::ServerThreadPrivate.type_representation(),
        TypeTag::of::<dyn ServerTextChannel>()
    );
    assert_eq!(
        ChannelType::ServerVoice.type_representation(),
        TypeTag::of::<dyn ServerChannel>()
    );
    assert_eq!(
        ChannelType::Unknown.type_representation(),
        TypeTag::of::<dyn Channel>()
    );
}

#[test]
fn option_type_representations() {
    assert_eq!(
        SlashCommandOptionType::Integer.type_representation(),
        TypeTag::of::<i64>()
    );
    assert_eq!(
        SlashCommandOptionType::User.type_representation(),
        TypeTag::of::<dyn User>()
    );
    assert_eq!(
        SlashCommandOptionType::Subcommand.type_representation(),
        TypeTag::of::<()>()
    );
}

#[test]
fn type_value_variant_delegates() {
    let variant = TypeValueVariant::from(ChannelType::ServerNews);
    assert_eq!(variant.domain(), EnumDomain::ChannelType);
    assert_eq!(variant.value(), BridgeEnumValue::from(ChannelType::ServerNews));
    assert_eq!(
        variant.type_representation(),
        ChannelType::ServerNews.type_representation()
    );
}

//! Support-matrix and resolution reports for the bundled bridges.

use discord_bridge_api::{
    ApiKind, BridgeConfig, BridgeRegistry, DiscordBridge, EnumDomain, NativeHandle,
    SpecificityResolver,
};
use discord_bridge_identity::IdentityBridge;
use discord_bridge_memory::{MemoryBridge, MemoryChannelKind, MemoryClient};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Which values of one domain a bridge can represent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DomainSupport {
    pub domain: String,
    pub supported: Vec<String>,
    pub unsupported: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BridgeReport {
    pub bridge: String,
    pub enabled: bool,
    pub domains: Vec<DomainSupport>,
    /// Native type backing each abstract API type, if any.
    pub implementation_types: BTreeMap<String, Option<String>>,
}

/// One wrapper candidate's score for a native object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResolutionReport {
    pub object: String,
    pub generality: Vec<(String, usize)>,
    pub selected: Option<String>,
}

/// A registry holding every bundled bridge, identity first.
pub fn bundled_registry(config: BridgeConfig) -> BridgeRegistry {
    let memory = MemoryBridge::with_config(&config);
    BridgeRegistry::with_config(config)
        .with_bridge(IdentityBridge::shared())
        .with_bridge(memory)
}

/// Describes `bridge` over `domains`. Unknown is never listed.
pub fn support_report(
    bridge: &dyn DiscordBridge,
    domains: &[EnumDomain],
    enabled: bool,
) -> BridgeReport {
    let domains = domains
        .iter()
        .map(|domain| {
            let supported = bridge.supported_values(*domain);
            let (yes, no): (Vec<_>, Vec<_>) = domain
                .declared_variants()
                .into_iter()
                .partition(|v| supported.contains(v));
            DomainSupport {
                domain: domain.to_string(),
                supported: yes.iter().map(|v| v.name().to_string()).collect(),
                unsupported: no.iter().map(|v| v.name().to_string()).collect(),
            }
        })
        .collect();

    let implementation_types = ApiKind::ALL
        .iter()
        .map(|kind| {
            let native = bridge.implementation_type(*kind).map(|t| t.name().to_string());
            (format!("{kind:?}"), native)
        })
        .collect();

    BridgeReport {
        bridge: bridge.name().to_string(),
        enabled,
        domains,
        implementation_types,
    }
}

/// Reports for every bridge in `registry`.
pub fn registry_report(registry: &BridgeRegistry, domains: &[EnumDomain]) -> Vec<BridgeReport> {
    registry
        .bridges()
        .iter()
        .map(|b| {
            let enabled = registry.config().is_bridge_enabled(b.name());
            support_report(b.as_ref(), domains, enabled)
        })
        .collect()
}

/// Scores `resolver`'s candidates against one native object.
pub fn resolution_report<W: ?Sized + 'static>(
    resolver: &SpecificityResolver<W>,
    object: impl Into<String>,
    native: &NativeHandle,
) -> ResolutionReport {
    ResolutionReport {
        object: object.into(),
        generality: resolver
            .generality(native)
            .into_iter()
            .map(|(name, score)| (name.to_string(), score))
            .collect(),
        selected: resolver.select(native).ok().map(|c| c.name().to_string()),
    }
}

/// Resolves one channel of every memory channel kind in a throwaway
/// session.
pub fn memory_channel_resolutions() -> anyhow::Result<Vec<ResolutionReport>> {
    let client = MemoryClient::login("inspect");
    let guild = client.create_guild("inspect")?;
    let resolver = discord_bridge_memory::channel_resolver();

    let mut reports = Vec::new();
    for code in [0u8, 1, 2, 4, 5, 10, 11, 12, 13, 15, 3] {
        let kind = MemoryChannelKind::from_code(code);
        let channel = if kind.is_guild() {
            guild.create_channel(kind, &format!("{kind:?}").to_lowercase())?
        } else {
            client.open_channel(kind)?
        };
        reports.push(resolution_report(
            resolver,
            format!("{kind:?}"),
            &NativeHandle::from_arc(channel),
        ));
    }
    Ok(reports)
}

/// Plain-text rendering of support reports.
pub fn render_support(reports: &[BridgeReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let state = if report.enabled { "" } else { " (disabled)" };
        let _ = writeln!(out, "== {}{} ==", report.bridge, state);
        for domain in &report.domains {
            let total = domain.supported.len() + domain.unsupported.len();
            let _ = writeln!(
                out,
                "  {:<24} {:>3}/{:<3}",
                domain.domain,
                domain.supported.len(),
                total
            );
            if !domain.unsupported.is_empty() {
                let _ = writeln!(out, "    missing: {}", domain.unsupported.join(", "));
            }
        }
        for (kind, native) in &report.implementation_types {
            let native = native.as_deref().unwrap_or("-");
            let _ = writeln!(out, "  {kind:<24} {native}");
        }
    }
    out
}

/// Plain-text rendering of resolution reports.
pub fn render_resolutions(reports: &[ResolutionReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let selected = report.selected.as_deref().unwrap_or("<none>");
        let _ = writeln!(out, "{:<20} -> {}", report.object, selected);
        for (name, score) in &report.generality {
            let _ = writeln!(out, "    {name:<28} {score}");
        }
    }
    out
}

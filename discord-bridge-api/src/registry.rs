//! Ordered bridge discovery.
//!
//! Bridges register in a fixed order, then each native session is offered to
//! them through [`DiscordBridge::can_load_api`]. Only a bridge that accepted
//! the object is ever asked to load it.

use crate::api::DiscordApi;
use crate::bridge::BridgeRef;
use crate::config::{BridgeConfig, DiscoveryMode};
use crate::error::{BridgeError, BridgeResult};
use crate::native::NativeHandle;
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

static GLOBAL: OnceLock<BridgeRegistry> = OnceLock::new();

/// Installs the process-wide registry. Fails if one is already installed.
pub fn init_global(registry: BridgeRegistry) -> BridgeResult<&'static BridgeRegistry> {
    let mut pending = Some(registry);
    let installed = GLOBAL.get_or_init(|| pending.take().unwrap_or_default());
    if pending.is_some() {
        return Err(BridgeError::AlreadyInitialized);
    }
    info!(bridges = installed.bridges.len(), "Global bridge registry initialized");
    Ok(installed)
}

/// The process-wide registry, if [`init_global`] has run.
pub fn global() -> Option<&'static BridgeRegistry> {
    GLOBAL.get()
}

#[derive(Default)]
pub struct BridgeRegistry {
    bridges: Vec<BridgeRef>,
    config: BridgeConfig,
}

impl BridgeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        Self {
            bridges: Vec::new(),
            config,
        }
    }

    pub fn register(&mut self, bridge: BridgeRef) {
        let enabled = self.config.is_bridge_enabled(bridge.name());
        info!(bridge = %bridge.name(), enabled, "Registered bridge");
        self.bridges.push(bridge);
    }

    pub fn with_bridge(mut self, bridge: BridgeRef) -> Self {
        self.register(bridge);
        self
    }

    /// Every registered bridge in registration order, disabled ones included.
    pub fn bridges(&self) -> &[BridgeRef] {
        &self.bridges
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn bridge_named(&self, name: &str) -> Option<&BridgeRef> {
        self.bridges.iter().find(|b| b.name() == name)
    }

    /// Enabled bridges that accept `native`, in registration order.
    pub fn find(&self, native: &NativeHandle) -> Vec<&BridgeRef> {
        self.enabled().filter(|b| b.can_load_api(native)).collect()
    }

    /// Loads `native` according to the configured [`DiscoveryMode`].
    pub fn load(&self, native: NativeHandle) -> BridgeResult<Arc<dyn DiscordApi>> {
        match self.config.discovery {
            DiscoveryMode::Exact => self.load_exact(native),
            DiscoveryMode::FirstRegistered => {
                let accepting = self.find(&native);
                if accepting.len() > 1 {
                    warn!(
                        object = native.type_name(),
                        bridges = ?names(&accepting),
                        "Multiple bridges accept object, using the first registered"
                    );
                }
                match accepting.first() {
                    Some(bridge) => Self::load_with(bridge, native),
                    None => Err(no_compatible(&native)),
                }
            }
        }
    }

    /// Loads `native` with the first accepting bridge without consulting
    /// the rest.
    pub fn load_first(&self, native: NativeHandle) -> BridgeResult<Arc<dyn DiscordApi>> {
        match self.enabled().find(|b| b.can_load_api(&native)) {
            Some(bridge) => Self::load_with(bridge, native),
            None => Err(no_compatible(&native)),
        }
    }

    /// Loads `native`, requiring exactly one accepting bridge.
    pub fn load_exact(&self, native: NativeHandle) -> BridgeResult<Arc<dyn DiscordApi>> {
        match self.find(&native).as_slice() {
            [] => Err(no_compatible(&native)),
            [bridge] => Self::load_with(bridge, native),
            accepting => Err(BridgeError::AmbiguousBridge {
                object: native.type_name().to_string(),
                bridges: names(accepting),
            }),
        }
    }

    fn enabled(&self) -> impl Iterator<Item = &BridgeRef> {
        self.bridges
            .iter()
            .filter(|b| self.config.is_bridge_enabled(b.name()))
    }

    fn load_with(bridge: &BridgeRef, native: NativeHandle) -> BridgeResult<Arc<dyn DiscordApi>> {
        let object = native.type_name();
        let api = Arc::clone(bridge).load_api(native)?;
        info!(bridge = %bridge.name(), object, "Loaded Discord API");
        Ok(api)
    }
}

impl std::fmt::Debug for BridgeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeRegistry")
            .field("bridges", &names(&self.bridges.iter().collect::<Vec<_>>()))
            .field("config", &self.config)
            .finish()
    }
}

fn names(bridges: &[&BridgeRef]) -> Vec<String> {
    bridges.iter().map(|b| b.name().to_string()).collect()
}

fn no_compatible(native: &NativeHandle) -> BridgeError {
    BridgeError::NoCompatibleBridge {
        object: native.type_name().to_string(),
    }
}

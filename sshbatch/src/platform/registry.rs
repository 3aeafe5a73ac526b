//! Lookup of built-in platform definitions by device type.

use std::collections::HashMap;

use log::warn;

use super::definition::PlatformDefinition;
use super::vendors;

/// Registry for platform definitions.
#[derive(Debug)]
pub struct PlatformRegistry {
    platforms: HashMap<String, PlatformDefinition>,
}

impl PlatformRegistry {
    /// Create a registry holding the built-in platforms.
    pub fn builtin() -> Self {
        let mut registry = Self {
            platforms: HashMap::new(),
        };
        registry.register(vendors::huawei::platform());
        registry.register(vendors::hp_comware::platform());
        registry.register(vendors::cisco_ios::platform());
        registry.register(vendors::linux::platform());
        registry
    }

    /// Register a platform definition, replacing any with the same name.
    pub fn register(&mut self, platform: PlatformDefinition) {
        self.platforms.insert(platform.name.clone(), platform);
    }

    /// Get a platform by device type name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&PlatformDefinition> {
        self.platforms.get(&name.trim().to_ascii_lowercase())
    }

    /// Resolve a device type, falling back to a bare platform with no
    /// session preparation when the type is not known.
    pub fn resolve(&self, name: &str) -> PlatformDefinition {
        match self.get(name) {
            Some(platform) => platform.clone(),
            None => {
                warn!("Unknown device type '{}', no session preparation will be done", name);
                PlatformDefinition::new(name.trim())
            }
        }
    }

    /// List all registered platform names.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.platforms.keys()
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

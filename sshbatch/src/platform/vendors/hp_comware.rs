//! HP/H3C Comware platform definition.
//!
//! Comware shares the `<sysname>` / `[sysname]` prompt style with VRP.

use crate::platform::PlatformDefinition;

/// Create the Comware platform definition.
pub fn platform() -> PlatformDefinition {
    PlatformDefinition::new("hp_comware").with_on_open_command("screen-length disable")
}

//! Cisco IOS platform definition.

use crate::platform::PlatformDefinition;

/// Create the Cisco IOS platform definition.
pub fn platform() -> PlatformDefinition {
    PlatformDefinition::new("cisco_ios")
        .with_on_open_command("terminal length 0")
        .with_on_open_command("terminal width 511")
}

//! Linux platform definition.
//!
//! Plain shells do not page output, so nothing is sent on open.

use crate::platform::PlatformDefinition;

/// Create the Linux platform definition.
pub fn platform() -> PlatformDefinition {
    PlatformDefinition::new("linux")
}

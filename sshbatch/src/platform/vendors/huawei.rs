//! Huawei VRP platform definition.
//!
//! # Prompt Examples
//!
//! ```text
//! <HUAWEI>                  # user view
//! [~HUAWEI]                 # system view (two-stage commit)
//! [HUAWEI-GigabitEthernet0/0/1]
//! ```

use crate::platform::PlatformDefinition;

/// Create the Huawei VRP platform definition.
pub fn platform() -> PlatformDefinition {
    PlatformDefinition::new("huawei").with_on_open_command("screen-length 0 temporary")
}

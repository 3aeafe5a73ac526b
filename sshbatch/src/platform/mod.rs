//! Platform definitions for the supported device types.
//!
//! A run targets a single device type. Its platform decides how a freshly
//! opened shell is prepared before the batch commands are sent.

mod definition;
mod registry;
pub mod vendors;

pub use definition::PlatformDefinition;
pub use registry::PlatformRegistry;

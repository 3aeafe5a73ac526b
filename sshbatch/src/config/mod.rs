//! Run configuration: host and command lists, connection profile.
//!
//! Everything here is plain file I/O done once at startup. The executor and
//! runner only ever see the loaded values.

pub mod env;
mod files;
mod profile;

pub use env::load_profile;
pub use files::{COMMANDS_FILE, ENV_FILE, HOSTS_FILE, LOG_FOLDER, Workspace, read_lines};
pub use profile::{CONNECT_TIMEOUT, ConnectionProfile, READ_TIMEOUT, SESSION_TIMEOUT};

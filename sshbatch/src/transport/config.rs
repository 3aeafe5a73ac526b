//! SSH connection configuration.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Host key verification mode, analogous to OpenSSH's `StrictHostKeyChecking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostKeyVerification {
    /// Reject unknown and changed keys.
    Strict,

    /// Accept and learn unknown keys, reject changed keys.
    AcceptNew,

    /// Accept all keys without checking. Network gear is commonly reached
    /// by address with no known_hosts entries, so this is the default.
    #[default]
    Disabled,
}

impl FromStr for HostKeyVerification {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "yes" => Ok(Self::Strict),
            "accept-new" | "accept_new" => Ok(Self::AcceptNew),
            "disabled" | "no" | "" => Ok(Self::Disabled),
            _ => Err(ConfigError::InvalidValue {
                key: "SSH_HOST_KEY_CHECK".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Per-host SSH connection configuration.
#[derive(Debug)]
pub struct SshConfig {
    /// Target host (hostname or IP address).
    pub host: String,

    pub port: u16,

    pub username: String,

    pub password: SecretString,

    /// Bound on TCP connect plus SSH handshake.
    pub connect_timeout: Duration,

    /// Bound on authentication and the initial prompt.
    pub timeout: Duration,

    pub terminal_width: u32,

    pub terminal_height: u32,

    pub host_key_verification: HostKeyVerification,

    /// Path to known_hosts file. `None` uses `~/.ssh/known_hosts`.
    pub known_hosts_path: Option<PathBuf>,
}

impl SshConfig {
    /// Get the socket address for connection.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

//! Connection parameters shared by every host in a run.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::platform::PlatformDefinition;
use crate::transport::{HostKeyVerification, SshConfig};

/// Bound on TCP connect plus SSH handshake.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Bound on authentication and the initial prompt.
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(10);

/// Bound on each command's response.
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// The shared connection profile of a run.
///
/// Loaded once at startup and passed down explicitly; the password is never
/// shown by `Debug`.
#[derive(Debug)]
pub struct ConnectionProfile {
    pub device_type: String,
    pub username: String,
    pub password: SecretString,
    pub port: u16,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub host_key_verification: HostKeyVerification,
    pub known_hosts_path: Option<PathBuf>,
}

impl ConnectionProfile {
    /// Create a profile with the default port, timeouts and host key mode.
    pub fn new(
        device_type: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            device_type: device_type.into(),
            username: username.into(),
            password: SecretString::from(password.into()),
            port: 22,
            timeout: SESSION_TIMEOUT,
            connect_timeout: CONNECT_TIMEOUT,
            host_key_verification: HostKeyVerification::default(),
            known_hosts_path: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Build the SSH configuration for one host.
    pub fn ssh_config(&self, host: &str, platform: &PlatformDefinition) -> SshConfig {
        SshConfig {
            host: host.to_string(),
            port: self.port,
            username: self.username.clone(),
            password: SecretString::from(self.password.expose_secret().to_string()),
            connect_timeout: self.connect_timeout,
            timeout: self.timeout,
            terminal_width: platform.terminal_width,
            terminal_height: platform.terminal_height,
            host_key_verification: self.host_key_verification,
            known_hosts_path: self.known_hosts_path.clone(),
        }
    }
}

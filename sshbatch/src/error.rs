//! Error types for sshbatch.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Main error type for sshbatch operations.
#[derive(Error, Debug)]
pub enum Error {
    /// SSH transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Shell channel errors
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Configuration loading errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Local I/O errors (log sink, workspace files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Transport layer errors (SSH connection, authentication).
#[derive(Error, Debug)]
pub enum TransportError {
    /// Failed to open the TCP connection
    #[error("Connection failed to {host}:{port}: {source}")]
    ConnectionFailed {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    /// SSH handshake or protocol error
    #[error("SSH error: {0}")]
    Ssh(#[from] russh::Error),

    /// Authentication failed
    #[error("Authentication failed for user '{user}'")]
    AuthenticationFailed { user: String },

    /// Server host key differs from the known_hosts entry
    #[error("Host key for {host}:{port} changed (known_hosts line {line})")]
    HostKeyChanged { host: String, port: u16, line: usize },

    /// Server host key not present in known_hosts (strict mode)
    #[error("Host key for {host}:{port} is not in known_hosts")]
    HostKeyUnknown { host: String, port: u16 },

    /// known_hosts could not be read or written
    #[error("known_hosts error: {0}")]
    KnownHosts(String),

    /// Operation timed out
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Shell channel errors (prompt matching, PTY operations).
#[derive(Error, Debug)]
pub enum ChannelError {
    /// Prompt pattern not seen before the read timeout
    #[error("Pattern not found within {0:?}")]
    PatternTimeout(Duration),

    /// Channel closed by the remote side
    #[error("Channel closed")]
    Closed,

    /// SSH protocol error on the channel
    #[error("Channel SSH error: {0}")]
    Ssh(russh::Error),

    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The credentials file could not be parsed
    #[error("Failed to parse '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A variable holds a value that cannot be used
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Result type alias using sshbatch's Error.
pub type Result<T> = std::result::Result<T, Error>;

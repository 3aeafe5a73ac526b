//! Per-host command execution.
//!
//! One call to [`CommandExecutor::execute`] opens a session to a host, sends
//! every command in order and closes the session again. Errors never leave
//! this module; they are logged and folded into an [`ExecutionResult`].

use std::fmt;
use std::time::Duration;

use log::{error, info, warn};
use thiserror::Error;

use crate::channel::PromptPattern;
use crate::config::{ConnectionProfile, READ_TIMEOUT};
use crate::driver::{Connector, Session};
use crate::error::{Error, TransportError};

/// Why a host failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionFailure {
    /// No session was established within the connect timeout.
    #[error("connect timeout")]
    ConnectTimeout,

    /// The device rejected the credentials.
    #[error("authentication failure")]
    AuthenticationFailure,

    /// Anything else, while connecting or while running a command.
    #[error("{0}")]
    GenericExecutionError(String),
}

impl ExecutionFailure {
    /// Classify an error raised while acquiring a session.
    pub fn from_connect_error(err: &Error) -> Self {
        match err {
            Error::Transport(TransportError::Timeout(_))
            | Error::Transport(TransportError::ConnectionFailed { .. }) => Self::ConnectTimeout,
            Error::Transport(TransportError::AuthenticationFailed { .. }) => {
                Self::AuthenticationFailure
            }
            other => Self::GenericExecutionError(other.to_string()),
        }
    }

    /// Classify an error raised by a command on an open session.
    pub fn from_command_error(err: &Error) -> Self {
        Self::GenericExecutionError(err.to_string())
    }
}

/// Outcome of running the command list on one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Succeeded,
    Failed(ExecutionFailure),
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn failure(&self) -> Option<&ExecutionFailure> {
        match self {
            Self::Succeeded => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => f.write_str("succeeded"),
            Self::Failed(failure) => write!(f, "failed: {failure}"),
        }
    }
}

/// Runs a command list against single hosts with a shared profile.
pub struct CommandExecutor<'a, C> {
    connector: &'a C,
    profile: &'a ConnectionProfile,
    read_timeout: Duration,
}

impl<'a, C: Connector> CommandExecutor<'a, C> {
    pub fn new(connector: &'a C, profile: &'a ConnectionProfile) -> Self {
        Self {
            connector,
            profile,
            read_timeout: READ_TIMEOUT,
        }
    }

    /// Override the per-command read timeout.
    pub fn read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Run `commands` on `host`, in order, stopping at the first failure.
    ///
    /// An opened session is closed exactly once whatever happens.
    pub async fn execute(
        &self,
        host: &str,
        commands: &[String],
        prompt: &PromptPattern,
    ) -> ExecutionResult {
        info!("Connecting to device: {}", host);

        let mut session = match self.connector.connect(host, self.profile, prompt).await {
            Ok(session) => session,
            Err(e) => {
                let failure = ExecutionFailure::from_connect_error(&e);
                log_failure(host, &failure);
                return ExecutionResult::Failed(failure);
            }
        };
        info!("Connection established with: {}", host);

        let outcome = self.send_all(&mut session, host, commands, prompt).await;

        if let Err(e) = session.close().await {
            warn!("Error while closing the session to {}: {}", host, e);
        }

        match outcome {
            Ok(()) => {
                info!("Commands executed successfully on: {}", host);
                ExecutionResult::Succeeded
            }
            Err(e) => {
                let failure = ExecutionFailure::from_command_error(&e);
                log_failure(host, &failure);
                ExecutionResult::Failed(failure)
            }
        }
    }

    async fn send_all(
        &self,
        session: &mut C::Session,
        host: &str,
        commands: &[String],
        prompt: &PromptPattern,
    ) -> crate::error::Result<()> {
        for command in commands {
            info!("Sending command '{}' to {}", command, host);
            let output = session
                .send_command(command, prompt, self.read_timeout)
                .await?;
            info!("Response from {} for '{}':\n{}", host, command, output.trim());
        }
        Ok(())
    }
}

fn log_failure(host: &str, failure: &ExecutionFailure) {
    match failure {
        ExecutionFailure::ConnectTimeout => {
            error!("Timeout while connecting to: {}", host)
        }
        ExecutionFailure::AuthenticationFailure => {
            error!("Authentication error while connecting to: {}", host)
        }
        ExecutionFailure::GenericExecutionError(message) => error!(
            "An error occurred while connecting or executing commands on {}: {}",
            host, message
        ),
    }
}

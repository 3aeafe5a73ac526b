//! Session driver: the capability the executor consumes.
//!
//! The executor only talks to the [`Connector`] and [`Session`] traits.
//! [`SshConnector`] is the real implementation; tests plug in fakes.

mod generic;
pub(crate) mod response;

pub use generic::{SshConnector, SshSession};
pub use response::normalize_output;

use std::future::Future;
use std::time::Duration;

use crate::channel::PromptPattern;
use crate::config::ConnectionProfile;
use crate::error::Result;

/// Opens sessions to hosts.
pub trait Connector: Send + Sync {
    /// The session type this connector produces.
    type Session: Session;

    /// Connect and authenticate to `host`, then wait for the first prompt.
    ///
    /// On error nothing is left open.
    fn connect(
        &self,
        host: &str,
        profile: &ConnectionProfile,
        prompt: &PromptPattern,
    ) -> impl Future<Output = Result<Self::Session>> + Send;
}

/// An open interactive session to one device.
pub trait Session: Send {
    /// Send a command and return its output once the prompt comes back.
    fn send_command(
        &mut self,
        command: &str,
        prompt: &PromptPattern,
        read_timeout: Duration,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Close the session.
    fn close(self) -> impl Future<Output = Result<()>> + Send;
}

//! SSH implementation of the session driver.

use std::time::{Duration, Instant};

use log::{debug, trace};

use super::response::normalize_output;
use super::{Connector, Session};
use crate::channel::{DEFAULT_SEARCH_DEPTH, PromptPattern, ShellChannel};
use crate::config::ConnectionProfile;
use crate::error::Result;
use crate::platform::PlatformDefinition;
use crate::transport::SshTransport;

/// Opens SSH shell sessions prepared for one device platform.
#[derive(Debug, Clone)]
pub struct SshConnector {
    platform: PlatformDefinition,
}

impl SshConnector {
    /// Create a connector for devices of `platform`.
    pub fn new(platform: PlatformDefinition) -> Self {
        Self { platform }
    }
}

impl Connector for SshConnector {
    type Session = SshSession;

    async fn connect(
        &self,
        host: &str,
        profile: &ConnectionProfile,
        prompt: &PromptPattern,
    ) -> Result<SshSession> {
        let transport = SshTransport::connect(profile.ssh_config(host, &self.platform)).await?;

        let channel = match transport.open_channel().await {
            Ok(channel) => channel,
            Err(e) => {
                if let Err(close_err) = transport.close().await {
                    debug!("disconnect from {} after failed channel open: {}", host, close_err);
                }
                return Err(e);
            }
        };

        let mut session = SshSession {
            host: host.to_string(),
            transport,
            channel: ShellChannel::new(channel, DEFAULT_SEARCH_DEPTH),
        };

        if let Err(e) = session.prepare(&self.platform, prompt, profile.timeout).await {
            if let Err(close_err) = session.close().await {
                debug!("close of {} after failed preparation: {}", host, close_err);
            }
            return Err(e);
        }

        Ok(session)
    }
}

/// An open shell on one device.
pub struct SshSession {
    host: String,
    transport: SshTransport,
    channel: ShellChannel,
}

impl SshSession {
    /// Wait for the login banner to end at a prompt, then run the
    /// platform's preparation commands.
    async fn prepare(
        &mut self,
        platform: &PlatformDefinition,
        prompt: &PromptPattern,
        timeout: Duration,
    ) -> Result<()> {
        let banner = self.channel.read_until_pattern(prompt.regex(), timeout).await?;
        trace!("{} banner: {:?}", self.host, String::from_utf8_lossy(&banner));

        for command in &platform.on_open_commands {
            debug!("preparing {} with '{}'", self.host, command);
            self.send_command(command, prompt, timeout).await?;
        }

        Ok(())
    }
}

impl Session for SshSession {
    async fn send_command(
        &mut self,
        command: &str,
        prompt: &PromptPattern,
        read_timeout: Duration,
    ) -> Result<String> {
        let start = Instant::now();

        self.channel.send(command).await?;
        let data = self
            .channel
            .read_until_pattern(prompt.regex(), read_timeout)
            .await?;

        let raw = String::from_utf8_lossy(&data);
        debug!(
            "{}: '{}' answered with {} bytes in {:?}",
            self.host,
            command,
            data.len(),
            start.elapsed()
        );

        Ok(normalize_output(&raw, command))
    }

    async fn close(self) -> Result<()> {
        // Disconnect even if the channel is already gone
        let channel_result = self.channel.close().await;
        self.transport.close().await?;
        channel_result
    }
}

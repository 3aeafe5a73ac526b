//! Interactive shell channel: write a line, read until the prompt.

use std::time::Duration;

use log::trace;
use regex::bytes::Regex;
use russh::client::Msg;
use russh::{Channel, ChannelMsg};
use tokio::time::Instant;

use super::buffer::PatternBuffer;
use crate::error::{ChannelError, Result};

/// A PTY shell channel with prompt-based reads.
pub struct ShellChannel {
    channel: Channel<Msg>,
    buffer: PatternBuffer,
}

impl ShellChannel {
    /// Wrap an already opened shell channel.
    pub fn new(channel: Channel<Msg>, search_depth: usize) -> Self {
        Self {
            channel,
            buffer: PatternBuffer::new(search_depth),
        }
    }

    /// Send one line of input, terminated with a newline.
    pub async fn send(&mut self, input: &str) -> Result<()> {
        let line = format!("{input}\n");
        trace!("send: {:?}", line);
        self.channel
            .data(line.as_bytes())
            .await
            .map_err(ChannelError::Ssh)?;
        Ok(())
    }

    /// Read until the tail of the output matches `pattern`.
    ///
    /// Returns everything read since the last successful call, including
    /// the matched prompt.
    pub async fn read_until_pattern(&mut self, pattern: &Regex, timeout: Duration) -> Result<Vec<u8>> {
        let deadline = Instant::now() + timeout;

        loop {
            if self.buffer.tail_contains(pattern) {
                return Ok(self.buffer.take());
            }

            let msg = tokio::time::timeout_at(deadline, self.channel.wait())
                .await
                .map_err(|_| {
                    trace!("no prompt in {:?}", self.buffer.as_str_lossy());
                    ChannelError::PatternTimeout(timeout)
                })?;

            match msg {
                Some(ChannelMsg::Data { data }) => self.buffer.extend(&data[..]),
                Some(ChannelMsg::ExtendedData { data, .. }) => self.buffer.extend(&data[..]),
                Some(ChannelMsg::Eof) | Some(ChannelMsg::Close) | None => {
                    return Err(ChannelError::Closed.into());
                }
                Some(_) => {}
            }
        }
    }

    /// Signal end of input and close the channel.
    pub async fn close(self) -> Result<()> {
        self.channel.eof().await.map_err(ChannelError::Ssh)?;
        self.channel.close().await.map_err(ChannelError::Ssh)?;
        Ok(())
    }
}

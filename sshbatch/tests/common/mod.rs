//! In-memory transport used by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sshbatch::error::{ChannelError, Result, TransportError};
use sshbatch::{ConnectionProfile, Connector, PromptPattern, Session};

/// Something the fake transport did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open(String),
    Send(String, String),
    Close(String),
}

/// How a fake connect attempt fails.
#[derive(Debug, Clone, Copy)]
pub enum ConnectFailure {
    Timeout,
    Auth,
    Other,
}

#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Event>>>);

impl Journal {
    fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    pub fn events_for(&self, host: &str) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|event| match event {
                Event::Open(h) | Event::Send(h, _) | Event::Close(h) => h == host,
            })
            .collect()
    }

    pub fn count(&self, matches: impl Fn(&Event) -> bool) -> usize {
        self.events().iter().filter(|e| matches(e)).count()
    }
}

#[derive(Debug, Default)]
pub struct FakeConnector {
    pub journal: Journal,
    connect_failures: HashMap<String, ConnectFailure>,
    command_failures: HashMap<String, String>,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make connecting to `host` fail.
    pub fn fail_connect(mut self, host: &str, failure: ConnectFailure) -> Self {
        self.connect_failures.insert(host.to_string(), failure);
        self
    }

    /// Make `command` time out on `host`.
    pub fn fail_command(mut self, host: &str, command: &str) -> Self {
        self.command_failures
            .insert(host.to_string(), command.to_string());
        self
    }
}

impl Connector for FakeConnector {
    type Session = FakeSession;

    async fn connect(
        &self,
        host: &str,
        profile: &ConnectionProfile,
        _prompt: &PromptPattern,
    ) -> Result<FakeSession> {
        match self.connect_failures.get(host) {
            Some(ConnectFailure::Timeout) => {
                return Err(TransportError::Timeout(profile.connect_timeout).into());
            }
            Some(ConnectFailure::Auth) => {
                return Err(TransportError::AuthenticationFailed {
                    user: profile.username.clone(),
                }
                .into());
            }
            Some(ConnectFailure::Other) => return Err(ChannelError::Closed.into()),
            None => {}
        }

        self.journal.push(Event::Open(host.to_string()));
        Ok(FakeSession {
            host: host.to_string(),
            journal: self.journal.clone(),
            fail_on: self.command_failures.get(host).cloned(),
        })
    }
}

pub struct FakeSession {
    host: String,
    journal: Journal,
    fail_on: Option<String>,
}

impl Session for FakeSession {
    async fn send_command(
        &mut self,
        command: &str,
        _prompt: &PromptPattern,
        read_timeout: Duration,
    ) -> Result<String> {
        self.journal
            .push(Event::Send(self.host.clone(), command.to_string()));

        if self.fail_on.as_deref() == Some(command) {
            return Err(ChannelError::PatternTimeout(read_timeout).into());
        }
        Ok(format!("output of {command}\n"))
    }

    async fn close(self) -> Result<()> {
        self.journal.push(Event::Close(self.host));
        Ok(())
    }
}

pub fn profile() -> ConnectionProfile {
    ConnectionProfile::new("huawei", "admin", "secret")
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

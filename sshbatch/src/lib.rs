//! # sshbatch
//!
//! Apply a fixed list of CLI commands to a list of network devices over SSH,
//! one device at a time, with full transcript logs.
//!
//! A run reads three files from the working directory:
//!
//! - `hosts`: one device address per line
//! - `commands`: one command per line, sent in order
//! - `.env`: `SSH_USERNAME`, `SSH_PASSWORD`, `SSH_PORT`, `DEVICE_TYPE`
//!
//! Missing files are created on the first run (empty, or with placeholder
//! credentials), which then stops until they are filled in. Every action is
//! logged to `log/<timestamp>.log`, errors additionally to
//! `log/<timestamp>_errors.log`.
//!
//! ## Library use
//!
//! ```rust,no_run
//! use sshbatch::{CommandExecutor, ConnectionProfile, PromptPattern, SshConnector};
//! use sshbatch::platform::vendors::huawei;
//!
//! # async fn example() {
//! let profile = ConnectionProfile::new("huawei", "admin", "secret");
//! let connector = SshConnector::new(huawei::platform());
//! let executor = CommandExecutor::new(&connector, &profile);
//!
//! let commands = vec!["display version".to_string()];
//! let result = executor
//!     .execute("10.0.0.1", &commands, &PromptPattern::default())
//!     .await;
//! println!("10.0.0.1 {result}");
//! # }
//! ```

pub mod app;
pub mod channel;
pub mod config;
pub mod driver;
pub mod error;
pub mod executor;
pub mod logging;
pub mod platform;
pub mod runner;
pub mod transport;

// Re-export main types for convenience
pub use app::{RunStatus, run};
pub use channel::PromptPattern;
pub use config::{ConnectionProfile, Workspace};
pub use driver::{Connector, Session, SshConnector};
pub use error::Error;
pub use executor::{CommandExecutor, ExecutionFailure, ExecutionResult};
pub use runner::{BatchRunner, Precondition};

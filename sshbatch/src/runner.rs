//! Sequential batch over the host list.

use crate::channel::PromptPattern;
use crate::driver::Connector;
use crate::executor::CommandExecutor;

/// Why a batch cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    NoHosts,
    NoCommands,
    NoDeviceType,
}

impl Precondition {
    /// Console message for the unmet condition.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoHosts => "No hosts found in the 'hosts' file.",
            Self::NoCommands => "No commands found in the 'commands' file.",
            Self::NoDeviceType => {
                "The DEVICE_TYPE variable is not defined in the .env file. Please add DEVICE_TYPE=your_device_type to the '.env' file."
            }
        }
    }
}

/// Check that there is something to do, in order: hosts, commands,
/// device type. The first unmet condition is returned.
pub fn check_preconditions(
    hosts: &[String],
    commands: &[String],
    device_type: &str,
) -> Result<(), Precondition> {
    if hosts.is_empty() {
        Err(Precondition::NoHosts)
    } else if commands.is_empty() {
        Err(Precondition::NoCommands)
    } else if device_type.trim().is_empty() {
        Err(Precondition::NoDeviceType)
    } else {
        Ok(())
    }
}

/// Drives the executor over every host, one at a time.
pub struct BatchRunner<'a, C> {
    executor: CommandExecutor<'a, C>,
}

impl<'a, C: Connector> BatchRunner<'a, C> {
    pub fn new(executor: CommandExecutor<'a, C>) -> Self {
        Self { executor }
    }

    /// Run `commands` on each host in order.
    ///
    /// A failed host never stops the batch; per-host outcomes only reach
    /// the log.
    pub async fn run_batch(&self, hosts: &[String], commands: &[String], prompt: &PromptPattern) {
        for host in hosts {
            println!("\nConfiguring device: {}", host);
            self.executor.execute(host, commands, prompt).await;
        }
    }
}

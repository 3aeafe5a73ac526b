//! One complete run: prepare the workspace, load configuration, run the batch.

use crate::channel::PromptPattern;
use crate::config::{ConnectionProfile, Workspace, load_profile};
use crate::driver::Connector;
use crate::error::Result;
use crate::executor::CommandExecutor;
use crate::runner::{BatchRunner, Precondition, check_preconditions};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Nothing was contacted because a precondition did not hold.
    Aborted(Precondition),

    /// Every host was attempted. Per-host outcomes are only in the logs.
    Completed,
}

/// Run the batch described by the files in `workspace`.
///
/// Missing files are created first, so a fresh workspace always ends in
/// [`RunStatus::Aborted`]. The connector is only built once the
/// preconditions hold.
pub async fn run<C, F>(workspace: &Workspace, make_connector: F) -> Result<RunStatus>
where
    C: Connector,
    F: FnOnce(&ConnectionProfile) -> C,
{
    workspace.ensure_defaults()?;

    let hosts = workspace.read_hosts()?;
    let commands = workspace.read_commands()?;
    let profile = load_profile(&workspace.env_file)?;

    if let Err(unmet) = check_preconditions(&hosts, &commands, &profile.device_type) {
        println!("{}", unmet.message());
        return Ok(RunStatus::Aborted(unmet));
    }

    println!(
        "Starting configuration for devices of type: {}",
        profile.device_type
    );

    let prompt = PromptPattern::default();
    let connector = make_connector(&profile);
    let runner = BatchRunner::new(CommandExecutor::new(&connector, &profile));
    runner.run_batch(&hosts, &commands, &prompt).await;

    println!(
        "\nConfiguration process completed. Logs have been saved in the '{}' folder.",
        workspace.log_dir.display()
    );
    Ok(RunStatus::Completed)
}

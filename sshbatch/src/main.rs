//! `sshbatch` binary: run the commands in `commands` on every host in
//! `hosts`, using the credentials in `.env`.

use sshbatch::platform::PlatformRegistry;
use sshbatch::{SshConnector, Workspace, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = Workspace::default();
    logging::init(&workspace.log_dir)?;

    let registry = PlatformRegistry::builtin();
    let result = sshbatch::run(&workspace, |profile| {
        SshConnector::new(registry.resolve(&profile.device_type))
    })
    .await;

    log::logger().flush();
    result?;
    Ok(())
}

//! Executor, runner and full-run behavior against the fake transport.

mod common;

use std::fs;

use common::{ConnectFailure, Event, FakeConnector, profile, strings};
use sshbatch::{
    BatchRunner, CommandExecutor, ExecutionFailure, ExecutionResult, Precondition, PromptPattern,
    RunStatus, Workspace,
};

#[tokio::test]
async fn test_zero_commands_succeed_after_connect() {
    let connector = FakeConnector::new();
    let profile = profile();
    let executor = CommandExecutor::new(&connector, &profile);

    let result = executor
        .execute("10.0.0.1", &[], &PromptPattern::default())
        .await;

    assert_eq!(result, ExecutionResult::Succeeded);
    assert_eq!(
        connector.journal.events(),
        [
            Event::Open("10.0.0.1".into()),
            Event::Close("10.0.0.1".into()),
        ]
    );
}

#[tokio::test]
async fn test_commands_sent_in_order() {
    let connector = FakeConnector::new();
    let profile = profile();
    let executor = CommandExecutor::new(&connector, &profile);
    let commands = strings(&["system-view", "interface GE0/0/1", "description uplink", "commit"]);

    let result = executor
        .execute("10.0.0.1", &commands, &PromptPattern::default())
        .await;

    assert!(result.is_success());
    let sent: Vec<_> = connector
        .journal
        .events()
        .into_iter()
        .filter_map(|e| match e {
            Event::Send(_, command) => Some(command),
            _ => None,
        })
        .collect();
    assert_eq!(sent, commands);
}

#[tokio::test]
async fn test_first_failure_aborts_remaining_commands() {
    let connector = FakeConnector::new().fail_command("10.0.0.1", "display bgp peer");
    let profile = profile();
    let executor = CommandExecutor::new(&connector, &profile);
    let commands = strings(&["display version", "display bgp peer", "display clock"]);

    let result = executor
        .execute("10.0.0.1", &commands, &PromptPattern::default())
        .await;

    assert!(matches!(
        result,
        ExecutionResult::Failed(ExecutionFailure::GenericExecutionError(_))
    ));
    assert_eq!(
        connector.journal.events(),
        [
            Event::Open("10.0.0.1".into()),
            Event::Send("10.0.0.1".into(), "display version".into()),
            Event::Send("10.0.0.1".into(), "display bgp peer".into()),
            Event::Close("10.0.0.1".into()),
        ]
    );
}

#[tokio::test]
async fn test_connect_failures_are_classified_and_send_nothing() {
    let connector = FakeConnector::new()
        .fail_connect("10.0.0.1", ConnectFailure::Timeout)
        .fail_connect("10.0.0.2", ConnectFailure::Auth)
        .fail_connect("10.0.0.3", ConnectFailure::Other);
    let profile = profile();
    let executor = CommandExecutor::new(&connector, &profile);
    let commands = strings(&["display version"]);
    let prompt = PromptPattern::default();

    let timeout = executor.execute("10.0.0.1", &commands, &prompt).await;
    let auth = executor.execute("10.0.0.2", &commands, &prompt).await;
    let other = executor.execute("10.0.0.3", &commands, &prompt).await;

    assert_eq!(timeout, ExecutionResult::Failed(ExecutionFailure::ConnectTimeout));
    assert_eq!(auth, ExecutionResult::Failed(ExecutionFailure::AuthenticationFailure));
    assert!(matches!(
        other,
        ExecutionResult::Failed(ExecutionFailure::GenericExecutionError(_))
    ));
    assert!(connector.journal.events().is_empty());
}

#[tokio::test]
async fn test_every_opened_session_closed_exactly_once() {
    let connector = FakeConnector::new()
        .fail_command("10.0.0.2", "display version")
        .fail_connect("10.0.0.3", ConnectFailure::Auth);
    let profile = profile();
    let executor = CommandExecutor::new(&connector, &profile);
    let commands = strings(&["display version", "display clock"]);
    let prompt = PromptPattern::default();

    for host in ["10.0.0.1", "10.0.0.2", "10.0.0.3"] {
        executor.execute(host, &commands, &prompt).await;

        let events = connector.journal.events_for(host);
        let opens = events.iter().filter(|e| matches!(e, Event::Open(_))).count();
        let closes = events.iter().filter(|e| matches!(e, Event::Close(_))).count();
        assert_eq!(opens, closes, "{host}");
        assert!(closes <= 1, "{host}");
        if opens == 1 {
            assert_eq!(events.last(), Some(&Event::Close(host.to_string())));
        }
    }
}

#[tokio::test]
async fn test_failed_host_does_not_stop_batch() {
    let connector = FakeConnector::new().fail_connect("10.0.0.2", ConnectFailure::Timeout);
    let profile = profile();
    let runner = BatchRunner::new(CommandExecutor::new(&connector, &profile));
    let hosts = strings(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
    let commands = strings(&["display version", "display clock"]);

    runner
        .run_batch(&hosts, &commands, &PromptPattern::default())
        .await;

    for host in ["10.0.0.1", "10.0.0.3"] {
        assert_eq!(
            connector.journal.events_for(host),
            [
                Event::Open(host.into()),
                Event::Send(host.into(), "display version".into()),
                Event::Send(host.into(), "display clock".into()),
                Event::Close(host.into()),
            ]
        );
    }
    assert!(connector.journal.events_for("10.0.0.2").is_empty());
}

#[tokio::test]
async fn test_hosts_processed_sequentially() {
    let connector = FakeConnector::new();
    let profile = profile();
    let runner = BatchRunner::new(CommandExecutor::new(&connector, &profile));
    let hosts = strings(&["10.0.0.1", "10.0.0.2", "10.0.0.1"]);

    runner
        .run_batch(&hosts, &strings(&["display version"]), &PromptPattern::default())
        .await;

    let opens_and_closes: Vec<_> = connector
        .journal
        .events()
        .into_iter()
        .filter(|e| !matches!(e, Event::Send(..)))
        .collect();
    assert_eq!(
        opens_and_closes,
        [
            Event::Open("10.0.0.1".into()),
            Event::Close("10.0.0.1".into()),
            Event::Open("10.0.0.2".into()),
            Event::Close("10.0.0.2".into()),
            Event::Open("10.0.0.1".into()),
            Event::Close("10.0.0.1".into()),
        ]
    );
}

#[tokio::test]
async fn test_first_run_creates_files_and_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::new(dir.path());

    let status = sshbatch::run(&workspace, |_| -> FakeConnector {
        panic!("no device may be contacted on a first run")
    })
    .await
    .unwrap();

    assert_eq!(status, RunStatus::Aborted(Precondition::NoHosts));
    assert!(workspace.hosts_file.exists());
    assert!(workspace.commands_file.exists());
    assert!(workspace.env_file.exists());
}

#[tokio::test]
async fn test_missing_commands_abort_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::new(dir.path());
    fs::write(&workspace.hosts_file, "10.0.0.1\n").unwrap();

    let status = sshbatch::run(&workspace, |_| -> FakeConnector {
        panic!("no device may be contacted without commands")
    })
    .await
    .unwrap();

    assert_eq!(status, RunStatus::Aborted(Precondition::NoCommands));
}

#[tokio::test]
async fn test_missing_device_type_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::new(dir.path());
    fs::write(&workspace.hosts_file, "10.0.0.1\n").unwrap();
    fs::write(&workspace.commands_file, "display version\n").unwrap();
    fs::write(&workspace.env_file, "SSH_USERNAME=admin\nSSH_PASSWORD=secret\n").unwrap();

    let status = sshbatch::run(&workspace, |_| -> FakeConnector {
        panic!("no device may be contacted without a device type")
    })
    .await
    .unwrap();

    assert_eq!(status, RunStatus::Aborted(Precondition::NoDeviceType));
}

#[tokio::test]
async fn test_full_run_two_hosts() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::new(dir.path());
    fs::write(&workspace.hosts_file, "10.0.0.1\n\n10.0.0.2\n").unwrap();
    fs::write(&workspace.commands_file, "display version\n").unwrap();
    fs::write(
        &workspace.env_file,
        "SSH_USERNAME=admin\nSSH_PASSWORD=secret\nSSH_PORT=22\nDEVICE_TYPE=huawei\n",
    )
    .unwrap();

    let connector = FakeConnector::new().fail_connect("10.0.0.1", ConnectFailure::Auth);
    let journal = connector.journal.clone();
    let mut seen_device_type = None;

    let status = sshbatch::run(&workspace, |profile| {
        seen_device_type = Some(profile.device_type.clone());
        connector
    })
    .await
    .unwrap();

    assert_eq!(status, RunStatus::Completed);
    assert_eq!(seen_device_type.as_deref(), Some("huawei"));
    assert!(journal.events_for("10.0.0.1").is_empty());
    assert_eq!(
        journal.events_for("10.0.0.2"),
        [
            Event::Open("10.0.0.2".into()),
            Event::Send("10.0.0.2".into(), "display version".into()),
            Event::Close("10.0.0.2".into()),
        ]
    );
}

//! Workspace files: host list, command list, credentials, log folder.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Result;

pub const HOSTS_FILE: &str = "hosts";
pub const COMMANDS_FILE: &str = "commands";
pub const ENV_FILE: &str = ".env";
pub const LOG_FOLDER: &str = "log";

/// Placeholder credentials written on first run. They have to be edited
/// before anything can connect.
const ENV_TEMPLATE: &str = "\
SSH_USERNAME=your_username
SSH_PASSWORD=your_password
SSH_PORT=22
DEVICE_TYPE=huawei
";

/// Locations of the files a run reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub hosts_file: PathBuf,
    pub commands_file: PathBuf,
    pub env_file: PathBuf,
    pub log_dir: PathBuf,
}

impl Workspace {
    /// The standard file names under `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            hosts_file: root.join(HOSTS_FILE),
            commands_file: root.join(COMMANDS_FILE),
            env_file: root.join(ENV_FILE),
            log_dir: root.join(LOG_FOLDER),
        }
    }

    /// Create whichever of the credentials, hosts and commands files are
    /// missing. Existing files are left untouched, so calling this again is
    /// a no-op.
    ///
    /// Returns the paths that were created.
    pub fn ensure_defaults(&self) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();

        if create_if_missing(&self.env_file, ENV_TEMPLATE)? {
            warn!(
                "File '{}' not found. Creating a '{}' file with example information. Please edit this file with your credentials.",
                self.env_file.display(),
                self.env_file.display()
            );
            created.push(self.env_file.clone());
        }

        for path in [&self.hosts_file, &self.commands_file] {
            if create_if_missing(path, "")? {
                warn!(
                    "File '{}' not found. Creating an empty '{}' file.",
                    path.display(),
                    path.display()
                );
                created.push(path.clone());
            }
        }

        Ok(created)
    }

    /// Read the host list.
    pub fn read_hosts(&self) -> Result<Vec<String>> {
        read_lines(&self.hosts_file)
    }

    /// Read the command list.
    pub fn read_commands(&self) -> Result<Vec<String>> {
        read_lines(&self.commands_file)
    }
}

impl Default for Workspace {
    /// Relative paths in the current directory.
    fn default() -> Self {
        Self::new("")
    }
}

/// Write `contents` to `path` unless it already exists.
fn create_if_missing(path: &Path, contents: &str) -> io::Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(contents.as_bytes())?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

/// One entry per non-blank line, trimmed, in file order.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_lines(&contents))
}

fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

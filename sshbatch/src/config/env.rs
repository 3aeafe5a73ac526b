//! Credentials and connection settings from the `.env` file.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use super::profile::ConnectionProfile;
use crate::error::{ConfigError, Result};
use crate::transport::HostKeyVerification;

pub const SSH_USERNAME: &str = "SSH_USERNAME";
pub const SSH_PASSWORD: &str = "SSH_PASSWORD";
pub const SSH_PORT: &str = "SSH_PORT";
pub const DEVICE_TYPE: &str = "DEVICE_TYPE";
pub const SSH_HOST_KEY_CHECK: &str = "SSH_HOST_KEY_CHECK";
pub const SSH_KNOWN_HOSTS: &str = "SSH_KNOWN_HOSTS";

/// Load the connection profile from `path`.
///
/// Variables already present in the process environment win over the file,
/// as with `dotenv`. A missing file yields an all-default profile.
pub fn load_profile(path: &Path) -> Result<ConnectionProfile> {
    let vars = read_env_file(path)?;
    profile_from_vars(|key| std::env::var(key).ok().or_else(|| vars.get(key).cloned()))
}

/// Parse `KEY=value` pairs without touching the process environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let iter = match dotenv::from_path_iter(path) {
        Ok(iter) => iter,
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} not found, using defaults", path.display());
            return Ok(HashMap::new());
        }
        Err(e) => return Err(parse_error(path, e).into()),
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| parse_error(path, e))?;
        vars.insert(key, value);
    }
    Ok(vars)
}

fn parse_error(path: &Path, e: dotenv::Error) -> ConfigError {
    ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Build a profile from a variable lookup.
pub fn profile_from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<ConnectionProfile> {
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).unwrap_or_default();

    let port = match get(SSH_PORT).as_str() {
        "" => 22,
        value => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
            key: SSH_PORT.to_string(),
            value: value.to_string(),
        })?,
    };

    let host_key_verification: HostKeyVerification = get(SSH_HOST_KEY_CHECK).parse()?;

    let known_hosts = get(SSH_KNOWN_HOSTS);

    let mut profile = ConnectionProfile::new(get(DEVICE_TYPE), get(SSH_USERNAME), get(SSH_PASSWORD))
        .with_port(port);
    profile.host_key_verification = host_key_verification;
    profile.known_hosts_path = (!known_hosts.is_empty()).then(|| PathBuf::from(known_hosts));

    Ok(profile)
}

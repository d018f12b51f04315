use std::env;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::constants::{defaults, envvars};

#[derive(Error, Debug)]
pub enum HostNameError {
    #[error("could not read host name: {0}")]
    Lookup(#[from] nix::Error),
    #[error("host name is not valid UTF-8")]
    NotUtf8,
}

static HOST_NAME: Lazy<String> = Lazy::new(resolve_host_name);

/// Short host name, resolved once per process.
pub fn host_name() -> &'static str {
    HOST_NAME.as_str()
}

/// Host name up to (not including) the first '.'.
pub fn short_host_name(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

fn get_system_host_name() -> Result<String, HostNameError> {
    nix::unistd::gethostname()?
        .into_string()
        .map_err(|_| HostNameError::NotUtf8)
}

fn resolve_host_name() -> String {
    resolve_host_name_with(get_system_host_name)
}

fn resolve_host_name_with(lookup: impl FnOnce() -> Result<String, HostNameError>) -> String {
    if let Ok(name) = env::var(envvars::HOST_NAME) {
        if !name.is_empty() {
            log::debug!("Host name overridden by {}: {}", envvars::HOST_NAME, name);
            return short_host_name(&name).to_string();
        }
    }
    match lookup() {
        Ok(name) => short_host_name(&name).to_string(),
        Err(e) => {
            log::warn!("{e}; using '{}'", defaults::HOST_NAME);
            defaults::HOST_NAME.to_string()
        }
    }
}

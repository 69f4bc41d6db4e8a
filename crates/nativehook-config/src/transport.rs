//! Normalized transport settings handed to the prestart hook.

use std::path::{Path, PathBuf};

use crate::consul::ConsulConfig;

/// How a task reaches the mesh agent API.
///
/// Built once from [`ConsulConfig`] when the hook is constructed. Empty
/// strings in the operator config are folded into `None` so consumers only
/// ever test for presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsulTransportConfig {
    /// Agent address, carried for callers; the hook itself never reads it.
    pub http_addr: String,
    pub auth: Option<String>,
    pub ssl: Option<bool>,
    pub verify_ssl: Option<bool>,
    pub ca_file: Option<PathBuf>,
    pub cert_file: Option<PathBuf>,
    pub key_file: Option<PathBuf>,
}

impl ConsulTransportConfig {
    pub fn ca_file(&self) -> Option<&Path> {
        self.ca_file.as_deref()
    }

    pub fn cert_file(&self) -> Option<&Path> {
        self.cert_file.as_deref()
    }

    pub fn key_file(&self) -> Option<&Path> {
        self.key_file.as_deref()
    }
}

impl From<&ConsulConfig> for ConsulTransportConfig {
    fn from(consul: &ConsulConfig) -> Self {
        Self {
            http_addr: consul.address.clone(),
            auth: consul.auth.clone().filter(|a| !a.is_empty()),
            ssl: consul.ssl,
            verify_ssl: consul.verify_ssl,
            ca_file: non_empty_path(&consul.ca_file),
            cert_file: non_empty_path(&consul.cert_file),
            key_file: non_empty_path(&consul.key_file),
        }
    }
}

fn non_empty_path(path: &Option<PathBuf>) -> Option<PathBuf> {
    path.clone().filter(|p| !p.as_os_str().is_empty())
}

/// Render a tri-state flag the way the mesh client library parses it.
pub fn encode_tri_state(value: Option<bool>) -> Option<&'static str> {
    match value {
        Some(true) => Some("true"),
        Some(false) => Some("false"),
        None => None,
    }
}

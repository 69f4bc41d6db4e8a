//! Copies the mesh agent's TLS material into a task's secrets directory.
//!
//! Each configured source is copied byte-for-byte under a fixed basename so
//! the paths the task sees do not depend on where the operator keeps the
//! files on the host:
//! - `consul_ca_file` — CA bundle
//! - `consul_cert_file` — client certificate
//! - `consul_key_file` — client key (0600 on Unix)
//!
//! Unset sources are skipped. Whether to copy at all is the caller's call.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use nativehook_config::ConsulTransportConfig;

use crate::error::HookError;
use crate::names;

/// One of the three pieces of TLS material shared with a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TlsMaterial {
    Ca,
    Cert,
    Key,
}

impl TlsMaterial {
    pub const ALL: [TlsMaterial; 3] = [Self::Ca, Self::Cert, Self::Key];

    /// Basename inside the secrets directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Ca => names::CA_FILE,
            Self::Cert => names::CERT_FILE,
            Self::Key => names::KEY_FILE,
        }
    }

    /// Environment variable pointing the client library at this file.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Ca => names::ENV_CACERT,
            Self::Cert => names::ENV_CLIENT_CERT,
            Self::Key => names::ENV_CLIENT_KEY,
        }
    }

    /// Operator-configured source path, if any.
    pub fn source(self, config: &ConsulTransportConfig) -> Option<&Path> {
        match self {
            Self::Ca => config.ca_file(),
            Self::Cert => config.cert_file(),
            Self::Key => config.key_file(),
        }
    }
}

impl fmt::Display for TlsMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ca => "CA certificate",
            Self::Cert => "client certificate",
            Self::Key => "client key",
        })
    }
}

/// Result of staging a single piece of material.
#[derive(Debug)]
pub enum CopyOutcome {
    /// No source configured; nothing written.
    Absent,
    Copied {
        material: TlsMaterial,
        path: PathBuf,
        bytes: u64,
    },
    Failed(HookError),
}

impl CopyOutcome {
    pub fn into_result(self) -> Result<CopyOutcome, HookError> {
        match self {
            Self::Failed(e) => Err(e),
            other => Ok(other),
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }
}

/// Copy one piece of material from `source` into `dest_dir`.
pub fn copy_certificate(
    material: TlsMaterial,
    source: Option<&Path>,
    dest_dir: &Path,
) -> CopyOutcome {
    let Some(source) = source else {
        tracing::debug!(%material, "No source configured, skipping");
        return CopyOutcome::Absent;
    };

    match copy_file(material, source, dest_dir) {
        Ok((path, bytes)) => CopyOutcome::Copied {
            material,
            path,
            bytes,
        },
        Err(e) => CopyOutcome::Failed(e),
    }
}

fn copy_file(
    material: TlsMaterial,
    source: &Path,
    dest_dir: &Path,
) -> Result<(PathBuf, u64), HookError> {
    // The source is read in full before the destination is touched, so a
    // failed read never truncates a previously staged file.
    let contents = read_source(material, source)?;

    let dest = dest_dir.join(material.file_name());
    write_dest(material, &dest, &contents)?;

    Ok((dest, contents.len() as u64))
}

fn read_source(material: TlsMaterial, source: &Path) -> Result<Vec<u8>, HookError> {
    let mut input = File::open(source).map_err(|e| HookError::TlsOpen {
        material,
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut contents = Vec::new();
    input
        .read_to_end(&mut contents)
        .map_err(|e| HookError::TlsRead {
            material,
            path: source.to_path_buf(),
            source: e,
        })?;
    Ok(contents)
}

fn write_dest(material: TlsMaterial, dest: &Path, contents: &[u8]) -> Result<(), HookError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    // The key is created owner-only (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        if material == TlsMaterial::Key {
            options.mode(0o600);
        }
    }

    let mut output = options.open(dest).map_err(|e| HookError::TlsPrepare {
        material,
        path: dest.to_path_buf(),
        source: e,
    })?;

    // An existing key keeps its old mode on open; tighten it before writing
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if material == TlsMaterial::Key {
            output
                .set_permissions(std::fs::Permissions::from_mode(0o600))
                .map_err(|e| HookError::TlsPrepare {
                    material,
                    path: dest.to_path_buf(),
                    source: e,
                })?;
        }
    }

    output.write_all(contents).map_err(|e| HookError::TlsCopy {
        material,
        path: dest.to_path_buf(),
        source: e,
    })
}

/// Copy every configured piece of material into `dest_dir`.
///
/// Stops at the first failure; files already written are left in place.
pub fn copy_certificates(
    config: &ConsulTransportConfig,
    dest_dir: &Path,
) -> Result<Vec<CopyOutcome>, HookError> {
    let mut outcomes = Vec::with_capacity(TlsMaterial::ALL.len());
    for material in TlsMaterial::ALL {
        let outcome = copy_certificate(material, material.source(config), dest_dir);
        outcomes.push(outcome.into_result()?);
    }

    let copied = outcomes.iter().filter(|o| o.is_copied()).count();
    if copied > 0 {
        tracing::info!(
            path = %dest_dir.display(),
            copied,
            "Consul TLS material staged"
        );
    }

    Ok(outcomes)
}

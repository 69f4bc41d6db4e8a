//! Prestart hook error types.

use std::path::PathBuf;

use crate::certs::TlsMaterial;

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("failed to open consul TLS {material} {}: {source}", path.display())]
    TlsOpen {
        material: TlsMaterial,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read consul TLS {material} {}: {source}", path.display())]
    TlsRead {
        material: TlsMaterial,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to prepare consul TLS {material} {}: {source}", path.display())]
    TlsPrepare {
        material: TlsMaterial,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy consul TLS {material} to {}: {source}", path.display())]
    TlsCopy {
        material: TlsMaterial,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to load SI token {}: {source}", path.display())]
    TokenRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("prestart cancelled")]
    Cancelled,
}

impl HookError {
    /// The TLS material involved, if this is a provisioning failure.
    pub fn material(&self) -> Option<TlsMaterial> {
        match self {
            Self::TlsOpen { material, .. }
            | Self::TlsRead { material, .. }
            | Self::TlsPrepare { material, .. }
            | Self::TlsCopy { material, .. } => Some(*material),
            Self::TokenRead { .. } | Self::Cancelled => None,
        }
    }
}

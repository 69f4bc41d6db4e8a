//! Nativehook — prestart credential bootstrap for connect-native tasks.
//!
//! A connect-native task links the mesh client library directly instead of
//! running behind a sidecar proxy. Before it starts it needs the agent's TLS
//! material in its private secrets directory and a handful of environment
//! variables telling the library how to reach the agent. This crate stages
//! both, without touching values the task definition already sets.

pub mod certs;
pub mod env;
pub mod error;
pub mod hook;
pub mod lifecycle;
pub mod names;
pub mod token;

pub use certs::{copy_certificate, copy_certificates, CopyOutcome, TlsMaterial};
pub use env::tls_env;
pub use error::HookError;
pub use hook::{ConnectNativeHook, HookConfig};
pub use lifecycle::{PrestartHook, PrestartRequest, PrestartResponse, Task, TaskDir, TaskKind};
pub use token::{load_token, set_token_env};

// Re-exported so callers can build a hook from the node config alone
pub use nativehook_config::{ConsulConfig, ConsulTransportConfig};
pub use tokio_util::sync::CancellationToken;

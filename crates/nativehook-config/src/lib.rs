//! Nativehook Config — operator configuration for the node's mesh agent.
//!
//! The node config file carries a `[consul]` section describing how local
//! workloads reach the mesh agent API: address, basic-auth credential, TLS
//! switches and the paths of the TLS material the agent itself uses.
//! [`ConsulConfig`] is that section as written; [`ConsulTransportConfig`] is
//! the normalized, immutable view handed to the prestart hook.

pub mod consul;
pub mod transport;

pub use consul::{load_consul_config, parse_consul_config, ConsulConfig, DEFAULT_CONSUL_ADDRESS};
pub use transport::{encode_tri_state, ConsulTransportConfig};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid node config: {0}")]
    Parse(String),
}

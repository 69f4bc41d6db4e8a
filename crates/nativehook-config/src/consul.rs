use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Address of the local mesh agent when the operator does not set one.
pub const DEFAULT_CONSUL_ADDRESS: &str = "127.0.0.1:8500";

/// The `[consul]` section of the node config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsulConfig {
    pub address: String,
    pub auth: Option<String>,
    pub ssl: Option<bool>,
    pub verify_ssl: Option<bool>,
    /// Share the agent's TLS material with connect-native tasks.
    /// Unset is treated as disabled.
    pub share_ssl: Option<bool>,
    pub ca_file: Option<PathBuf>,
    pub cert_file: Option<PathBuf>,
    pub key_file: Option<PathBuf>,
}

impl Default for ConsulConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_CONSUL_ADDRESS.to_string(),
            auth: None,
            ssl: None,
            verify_ssl: None,
            share_ssl: None,
            ca_file: None,
            cert_file: None,
            key_file: None,
        }
    }
}

impl ConsulConfig {
    pub fn shares_tls(&self) -> bool {
        self.share_ssl.unwrap_or(false)
    }
}

#[derive(Debug, Default, Deserialize)]
struct NodeConfigFile {
    #[serde(default)]
    consul: ConsulConfig,
}

/// Load the `[consul]` section from a node config file.
///
/// A missing file or a file without the section yields the defaults.
pub fn load_consul_config(path: &Path) -> Result<ConsulConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => parse_consul_config(&raw),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                path = %path.display(),
                "Node config not found, using consul defaults"
            );
            Ok(ConsulConfig::default())
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

pub fn parse_consul_config(raw: &str) -> Result<ConsulConfig, ConfigError> {
    let file: NodeConfigFile = toml::from_str(raw)
        .map_err(|e| ConfigError::Parse(format!("invalid consul section: {e}")))?;
    Ok(file.consul)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_consul_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ConsulConfig::default());
        assert!(!config.shares_tls());
    }

    #[test]
    fn missing_section_yields_defaults() {
        let config = parse_consul_config("[client]\nenabled = true\n").unwrap();
        assert_eq!(config.address, DEFAULT_CONSUL_ADDRESS);
        assert_eq!(config.auth, None);
    }

    #[test]
    fn consul_section_is_parsed() {
        let raw = r#"
[consul]
address = "10.0.0.5:8501"
auth = "user:password"
ssl = true
verify_ssl = false
share_ssl = true
ca_file = "/etc/consul.d/ca.pem"
cert_file = "/etc/consul.d/cert.pem"
key_file = "/etc/consul.d/key.pem"
"#;
        let config = parse_consul_config(raw).unwrap();
        assert_eq!(config.address, "10.0.0.5:8501");
        assert_eq!(config.auth.as_deref(), Some("user:password"));
        assert_eq!(config.ssl, Some(true));
        assert_eq!(config.verify_ssl, Some(false));
        assert!(config.shares_tls());
        assert_eq!(config.ca_file, Some(PathBuf::from("/etc/consul.d/ca.pem")));
        assert_eq!(config.key_file, Some(PathBuf::from("/etc/consul.d/key.pem")));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_consul_config("[consul\naddress = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn wrong_field_type_is_a_parse_error() {
        let err = parse_consul_config("[consul]\nssl = \"yes\"\n").unwrap_err();
        assert!(err.to_string().contains("invalid consul section"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("node.toml");
        std::fs::write(&path, "[consul]\nshare_ssl = false\nauth = \"a:b\"\n").unwrap();

        let config = load_consul_config(&path).unwrap();
        assert!(!config.shares_tls());
        assert_eq!(config.auth.as_deref(), Some("a:b"));
    }

    #[test]
    fn unreadable_config_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory exists but cannot be read as a config file
        let err = load_consul_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

//! Well-known file and environment variable names.
//!
//! These must match what the mesh client library reads and what the
//! service identity provisioner writes, so they are fixed constants rather
//! than configuration.

/// Name of the hook as reported to the lifecycle engine.
pub const HOOK_NAME: &str = "connect_native";

/// Secrets directory as mounted inside the task.
pub const TASK_SECRETS_DIR: &str = "/secrets";

// Secrets-directory basenames
pub const CA_FILE: &str = "consul_ca_file";
pub const CERT_FILE: &str = "consul_cert_file";
pub const KEY_FILE: &str = "consul_key_file";

/// Service identity token written by an earlier provisioning step.
pub const SI_TOKEN_FILE: &str = "si_token";

// Environment variables read by the mesh client library
pub const ENV_CACERT: &str = "CONSUL_CACERT";
pub const ENV_CLIENT_CERT: &str = "CONSUL_CLIENT_CERT";
pub const ENV_CLIENT_KEY: &str = "CONSUL_CLIENT_KEY";
pub const ENV_HTTP_AUTH: &str = "CONSUL_HTTP_AUTH";
pub const ENV_HTTP_SSL: &str = "CONSUL_HTTP_SSL";
pub const ENV_HTTP_SSL_VERIFY: &str = "CONSUL_HTTP_SSL_VERIFY";
pub const ENV_HTTP_TOKEN: &str = "CONSUL_HTTP_TOKEN";

//! Environment overrides for reaching the mesh agent API.

use std::collections::HashMap;
use std::path::Path;

use nativehook_config::{encode_tri_state, ConsulTransportConfig};

use crate::certs::TlsMaterial;
use crate::names;

/// Compute the mesh client variables the task still needs.
///
/// A variable the task already declares with a non-empty value is left
/// alone. Otherwise the operator value is used: file variables point at the
/// fixed names under `task_secrets_dir`, whether or not the files were
/// actually copied. Only overridden keys are returned.
pub fn tls_env(
    config: &ConsulTransportConfig,
    task_env: &HashMap<String, String>,
    task_secrets_dir: &Path,
) -> HashMap<String, String> {
    let mut candidates: Vec<(&'static str, Option<String>)> = TlsMaterial::ALL
        .into_iter()
        .map(|material| {
            let value = material.source(config).map(|_| {
                task_secrets_dir
                    .join(material.file_name())
                    .to_string_lossy()
                    .into_owned()
            });
            (material.env_var(), value)
        })
        .collect();
    candidates.push((names::ENV_HTTP_AUTH, config.auth.clone()));
    candidates.push((
        names::ENV_HTTP_SSL,
        encode_tri_state(config.ssl).map(str::to_string),
    ));
    candidates.push((
        names::ENV_HTTP_SSL_VERIFY,
        encode_tri_state(config.verify_ssl).map(str::to_string),
    ));

    candidates
        .into_iter()
        .filter(|(key, _)| !task_declares(task_env, key))
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect()
}

fn task_declares(task_env: &HashMap<String, String>, key: &str) -> bool {
    task_env.get(key).is_some_and(|v| !v.is_empty())
}

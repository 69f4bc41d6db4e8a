//! Service identity token lookup.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::error::HookError;
use crate::names;

/// Read the service identity token from the secrets directory.
///
/// Returns `None` when no token was provisioned for the task.
pub fn load_token(secrets_dir: &Path) -> Result<Option<String>, HookError> {
    let path = secrets_dir.join(names::SI_TOKEN_FILE);
    match std::fs::read_to_string(&path) {
        Ok(token) => Ok(Some(token)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No SI token for task");
            Ok(None)
        }
        Err(e) => Err(HookError::TokenRead { path, source: e }),
    }
}

/// Set `CONSUL_HTTP_TOKEN` in `env` if a token exists. The token always wins.
pub fn set_token_env(
    secrets_dir: &Path,
    env: &mut HashMap<String, String>,
) -> Result<(), HookError> {
    if let Some(token) = load_token(secrets_dir)? {
        env.insert(names::ENV_HTTP_TOKEN.to_string(), token);
    }
    Ok(())
}

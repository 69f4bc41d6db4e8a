//! The connect-native prestart hook.
//!
//! Runs once per connect-native task before it starts:
//! 1. If the operator shares TLS with tasks, copy the agent's TLS material
//!    into the task's secrets directory.
//! 2. Compose the mesh client environment the task does not already set,
//!    plus the service identity token if one was provisioned.

use nativehook_config::{ConsulConfig, ConsulTransportConfig};
use tokio_util::sync::CancellationToken;

use crate::certs::copy_certificates;
use crate::env::tls_env;
use crate::error::HookError;
use crate::lifecycle::{PrestartHook, PrestartRequest, PrestartResponse};
use crate::names;
use crate::token::set_token_env;

/// Per-allocation hook settings, fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookConfig {
    pub alloc_id: String,
    pub share_tls: bool,
    pub consul: ConsulTransportConfig,
}

impl HookConfig {
    pub fn new(alloc_id: impl Into<String>, consul: &ConsulConfig) -> Self {
        Self {
            alloc_id: alloc_id.into(),
            share_tls: consul.shares_tls(),
            consul: ConsulTransportConfig::from(consul),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConnectNativeHook {
    config: HookConfig,
}

impl ConnectNativeHook {
    pub fn new(config: HookConfig) -> Self {
        Self { config }
    }
}

impl PrestartHook for ConnectNativeHook {
    fn name(&self) -> &str {
        names::HOOK_NAME
    }

    fn prestart(
        &self,
        cancel: &CancellationToken,
        request: &PrestartRequest,
        response: &mut PrestartResponse,
    ) -> Result<(), HookError> {
        if !request.task.kind.is_connect_native() {
            tracing::debug!(
                alloc_id = %self.config.alloc_id,
                task = %request.task.name,
                "Task is not connect-native, nothing to do"
            );
            response.done = true;
            return Ok(());
        }

        let secrets_dir = request.task_dir.secrets_dir();

        if self.config.share_tls {
            copy_certificates(&self.config.consul, secrets_dir)?;
        }

        if cancel.is_cancelled() {
            return Err(HookError::Cancelled);
        }

        let mut environment = tls_env(
            &self.config.consul,
            &request.task_env,
            &request.task_dir.task_secrets_dir,
        );
        set_token_env(secrets_dir, &mut environment)?;

        if !environment.is_empty() {
            tracing::debug!(
                alloc_id = %self.config.alloc_id,
                task = %request.task.name,
                service = %request.task.kind.value(),
                vars = environment.len(),
                "Setting connect-native environment"
            );
            response.env.extend(environment);
        }

        response.done = true;
        Ok(())
    }
}

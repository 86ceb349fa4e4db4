//! Immutable connection settings shared by the worker and trigger modes.

use std::collections::HashMap;
use std::str::FromStr;

use anyhow::{Context, bail, ensure};
use temporal_sdk_core::Url;

pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_HOST_PORT: &str = "127.0.0.1:7233";
pub const DEFAULT_TASK_QUEUE: &str = "SimpleWorker";
pub const DEFAULT_CLIENT_NAME: &str = "simple-worker-client";
pub const DEFAULT_SERVICE_NAME: &str = "temporal-frontend";

/// Header naming the calling client on every outbound RPC.
pub const CALLER_HEADER: &str = "rpc-caller";
/// Header naming the remote service every outbound RPC is addressed to.
pub const SERVICE_HEADER: &str = "rpc-service";

/// Where the orchestration service lives and how this process identifies
/// itself to it.
///
/// Built once at startup and handed to constructors by reference; nothing
/// mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub namespace: String,
    pub host_port: String,
    pub task_queue: String,
    pub client_name: String,
    pub service_name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            host_port: DEFAULT_HOST_PORT.to_owned(),
            task_queue: DEFAULT_TASK_QUEUE.to_owned(),
            client_name: DEFAULT_CLIENT_NAME.to_owned(),
            service_name: DEFAULT_SERVICE_NAME.to_owned(),
        }
    }
}

impl ServiceConfig {
    /// Reject empty values and any `host_port` that is not `host:port`.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (field, value) in [
            ("namespace", &self.namespace),
            ("host_port", &self.host_port),
            ("task_queue", &self.task_queue),
            ("client_name", &self.client_name),
            ("service_name", &self.service_name),
        ] {
            ensure!(!value.trim().is_empty(), "`{field}` must not be empty");
        }
        self.target_url()?;
        Ok(())
    }

    /// URL the gRPC transport dials.
    pub fn target_url(&self) -> anyhow::Result<Url> {
        let Some((host, port)) = self.host_port.rsplit_once(':') else {
            bail!("`host_port` {:?} has no port", self.host_port);
        };
        ensure!(
            !host.is_empty() && !host.contains(['/', '\\', '#', '?', '@']),
            "`host_port` {:?} has no valid host",
            self.host_port
        );
        let port = port
            .parse::<u16>()
            .with_context(|| format!("`host_port` {:?} has an invalid port", self.host_port))?;

        let url = Url::from_str(&format!("http://{}", self.host_port))
            .with_context(|| format!("invalid host_port {:?}", self.host_port))?;

        // The parsed URL must dial exactly the host:port that was written.
        ensure!(
            url.port_or_known_default() == Some(port)
                && url.username().is_empty()
                && url.password().is_none()
                && url.path() == "/"
                && url.query().is_none()
                && url.fragment().is_none(),
            "`host_port` {:?} is not a plain host:port",
            self.host_port
        );

        Ok(url)
    }

    /// Caller/service headers attached to every RPC.
    pub fn rpc_headers(&self) -> HashMap<String, String> {
        HashMap::from([
            (CALLER_HEADER.to_owned(), self.client_name.clone()),
            (SERVICE_HEADER.to_owned(), self.service_name.clone()),
        ])
    }
}

//! Client configuration.

use menagerie_types::ResourceKind;
use serde::{Deserialize, Serialize};

/// Connection settings for the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL collections are resolved against (e.g. `http://localhost:3000/api`).
    pub base_url: String,
    /// Per-request timeout (ms).
    pub timeout_ms: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Optional bearer token.
    pub auth_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_ms: 30_000,
            user_agent: format!("menagerie/{}", env!("CARGO_PKG_VERSION")),
            auth_token: None,
        }
    }
}

/// Behaviour of the session controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long a notification stays visible (ms).
    pub notification_ttl_ms: u64,
    /// Kind that is active before the first `select`.
    pub initial_kind: ResourceKind,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            notification_ttl_ms: 3_000,
            initial_kind: ResourceKind::Person,
        }
    }
}

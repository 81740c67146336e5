use std::sync::Arc;

use crate::core::AppConfig;
use crate::gateway::Gateway;
use crate::mcp::McpServer;

/// Read-only after startup, so it is shared without a lock
pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub gateway: Gateway,
    pub mcp: McpServer,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            gateway: Gateway::new(config)?,
            mcp: McpServer::new(),
        })
    }
}

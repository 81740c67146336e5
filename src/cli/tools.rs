use anyhow::Result;

use crate::mcp::McpServer;

/// Print the tools advertised over MCP
pub fn run() -> Result<()> {
    let manifest = McpServer::new().list_tools();
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}

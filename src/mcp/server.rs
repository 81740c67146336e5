//! Dispatch of MCP requests to the tool registry

use serde_json::{Value, json};

use super::protocol::{
    CallToolParams, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, InitializeParams,
    JSONRPC_VERSION, JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, negotiate_version,
};
use super::tools::{self, BoxedToolCall};
use crate::core::error::GatewayError;
use crate::gateway::Gateway;

pub const SERVER_NAME: &str = "calgate";

pub struct McpServer {
    tools: Vec<BoxedToolCall>,
}

impl McpServer {
    pub fn new() -> Self {
        Self { tools: tools::all() }
    }

    /// The `tools/list` result
    pub fn list_tools(&self) -> Value {
        json!({ "tools": self.tools })
    }

    /// Handle one JSON-RPC message. Returns `None` for notifications,
    /// which get no response.
    pub async fn handle(&self, gateway: &Gateway, message: Value) -> Option<JsonRpcResponse> {
        let id = message.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(message) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                ));
            }
        };
        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::failure(
                id,
                INVALID_REQUEST,
                "jsonrpc must be \"2.0\"",
            ));
        }

        if request.has_null_id() {
            return Some(JsonRpcResponse::failure(
                Value::Null,
                INVALID_REQUEST,
                "id must be a string or number",
            ));
        }

        if request.is_notification() {
            tracing::debug!("Received MCP notification {}", request.method);
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        let params = request.params.unwrap_or(Value::Null);
        tracing::debug!("Handling MCP request {}", request.method);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize(params)),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, self.list_tools()),
            "tools/call" => self.call_tool(gateway, id, params).await,
            method => JsonRpcResponse::failure(
                id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", method),
            ),
        };
        Some(response)
    }

    fn initialize(&self, params: Value) -> Value {
        let params: InitializeParams = serde_json::from_value(params).unwrap_or_default();
        json!({
            "protocolVersion": negotiate_version(params.protocol_version.as_deref()),
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION"),
            }
        })
    }

    async fn call_tool(&self, gateway: &Gateway, id: Value, params: Value) -> JsonRpcResponse {
        let params: CallToolParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return JsonRpcResponse::failure(
                    id,
                    INVALID_PARAMS,
                    format!("Invalid tools/call params: {}", e),
                );
            }
        };

        let Some(tool) = self
            .tools
            .iter()
            .find(|t| t.function_name() == params.name)
        else {
            return JsonRpcResponse::failure(
                id,
                INVALID_PARAMS,
                format!("Unknown tool: {}", params.name),
            );
        };

        let args = params.arguments.unwrap_or(Value::Null);
        match tool.call(gateway, args).await {
            Ok(output) => match serde_json::to_string(&output) {
                Ok(text) => JsonRpcResponse::success(
                    id,
                    json!({
                        "content": [{ "type": "text", "text": text }],
                        "structuredContent": output,
                        "isError": false,
                    }),
                ),
                Err(e) => JsonRpcResponse::failure(id, INTERNAL_ERROR, e.to_string()),
            },
            // Tool failures are results so the model can see them
            Err(err) => JsonRpcResponse::success(id, tool_error(&params.name, &err)),
        }
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn tool_error(name: &str, err: &GatewayError) -> Value {
    tracing::warn!("Tool {} failed: {}", name, err);
    json!({
        "content": [{ "type": "text", "text": err.to_string() }],
        "structuredContent": {
            "error": { "code": err.code(), "message": err.to_string() }
        },
        "isError": true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AppConfig;

    fn gateway() -> Gateway {
        Gateway::new(AppConfig::from_lookup(|_| None).unwrap()).unwrap()
    }

    async fn send(message: Value) -> Option<JsonRpcResponse> {
        McpServer::new().handle(&gateway(), message).await
    }

    #[tokio::test]
    async fn it_initializes() {
        let resp = send(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2025-03-26",
                "capabilities": {},
                "clientInfo": {"name": "test", "version": "0"}
            }
        }))
        .await
        .unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], "2025-03-26");
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn it_ignores_notifications() {
        let resp = send(json!({"jsonrpc": "2.0", "method": "notifications/initialized"})).await;
        assert!(resp.is_none());
    }

    #[tokio::test]
    async fn it_rejects_null_ids() {
        let resp = send(json!({"jsonrpc": "2.0", "id": null, "method": "tools/list"}))
            .await
            .unwrap();
        assert_eq!(resp.id, Value::Null);
        assert!(resp.result.is_none());
        assert_eq!(resp.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn it_rejects_unknown_methods() {
        let resp = send(json!({"jsonrpc": "2.0", "id": "a", "method": "resources/list"}))
            .await
            .unwrap();
        assert_eq!(resp.id, json!("a"));
        assert_eq!(resp.error.unwrap().code, METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn it_rejects_malformed_requests() {
        let resp = send(json!({"id": 3, "params": {}})).await.unwrap();
        assert_eq!(resp.id, json!(3));
        assert_eq!(resp.error.unwrap().code, INVALID_REQUEST);

        let resp = send(json!({"jsonrpc": "1.0", "id": 4, "method": "ping"}))
            .await
            .unwrap();
        assert_eq!(resp.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn it_rejects_unknown_tools() {
        let resp = send(json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {"name": "delete_everything", "arguments": {}}
        }))
        .await
        .unwrap();
        assert_eq!(resp.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn it_reports_tool_failures_as_results() {
        let resp = send(json!({
            "jsonrpc": "2.0",
            "id": 6,
            "method": "tools/call",
            "params": {"name": "create_task", "arguments": {"name": "Water plants"}}
        }))
        .await
        .unwrap();
        let result = resp.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["structuredContent"]["error"]["code"],
            "authentication_error"
        );
        assert!(
            result["content"][0]["text"]
                .as_str()
                .unwrap()
                .contains("AIRTABLE_API_KEY")
        );
    }

    #[tokio::test]
    async fn it_answers_pings() {
        let resp = send(json!({"jsonrpc": "2.0", "id": 9, "method": "ping"}))
            .await
            .unwrap();
        assert_eq!(resp.result.unwrap(), json!({}));
    }
}

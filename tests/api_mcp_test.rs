//! Integration tests for the MCP endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use mockito::Matcher;
    use serde_json::json;
    use tower::util::ServiceExt;

    use crate::test_utils::{
        body_to_json, body_to_string, get_request, json_request, raw_request, test_app,
        test_config,
    };

    #[tokio::test]
    async fn it_initializes() {
        let app = test_app(test_config(None, None));

        let response = app
            .oneshot(json_request(
                "POST",
                "/mcp",
                json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "method": "initialize",
                    "params": {
                        "protocolVersion": "2025-06-18",
                        "capabilities": {},
                        "clientInfo": {"name": "voice-agent", "version": "1.0"}
                    }
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["id"], 1);
        assert_eq!(body["result"]["protocolVersion"], "2025-06-18");
        assert!(body["result"]["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn it_accepts_notifications() {
        let app = test_app(test_config(None, None));

        let response = app
            .oneshot(json_request(
                "POST",
                "/mcp",
                json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(body_to_string(response.into_body()).await, "");
    }

    /// A null id is a malformed request, not a notification
    #[tokio::test]
    async fn it_answers_requests_with_a_null_id() {
        let app = test_app(test_config(None, None));

        let response = app
            .oneshot(json_request(
                "POST",
                "/mcp",
                json!({"jsonrpc": "2.0", "id": null, "method": "tools/list"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["error"]["code"], -32600);
        assert_eq!(body["id"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn it_lists_tools() {
        let app = test_app(test_config(None, None));

        let response = app
            .oneshot(json_request(
                "POST",
                "/mcp",
                json!({"jsonrpc": "2.0", "id": "list", "method": "tools/list"}),
            ))
            .await
            .unwrap();

        let body = body_to_json(response.into_body()).await;
        let names: Vec<&str> = body["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "list_calendar_events",
                "create_calendar_event",
                "check_availability",
                "create_task",
                "search_contacts",
                "create_reminder",
            ]
        );
        assert_eq!(body["result"]["tools"][0]["inputSchema"]["type"], "object");
    }

    /// Tool calls go through the same gateway as the REST routes
    #[tokio::test]
    async fn it_calls_a_tool() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/appTEST/Contacts")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"records": [
                    {"id": "rec1", "fields": {"Name": "Ada Lovelace", "Email": "ada@example.com"}}
                ]})
                .to_string(),
            )
            .create_async()
            .await;
        let app = test_app(test_config(None, Some(&server.url())));

        let response = app
            .oneshot(json_request(
                "POST",
                "/mcp",
                json!({
                    "jsonrpc": "2.0",
                    "id": 2,
                    "method": "tools/call",
                    "params": {"name": "search_contacts", "arguments": {"search_term": "ada"}}
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["result"]["isError"], false);
        assert_eq!(body["result"]["structuredContent"]["count"], 1);
        let text = body["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Ada Lovelace"));
    }

    #[tokio::test]
    async fn it_returns_tool_errors_as_results() {
        let app = test_app(test_config(None, None));

        let response = app
            .oneshot(json_request(
                "POST",
                "/mcp",
                json!({
                    "jsonrpc": "2.0",
                    "id": 3,
                    "method": "tools/call",
                    "params": {"name": "list_calendar_events", "arguments": {}}
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["result"]["isError"], true);
        assert_eq!(
            body["result"]["structuredContent"]["error"]["code"],
            "authentication_error"
        );
    }

    #[tokio::test]
    async fn it_rejects_unparseable_messages() {
        let app = test_app(test_config(None, None));

        let response = app
            .oneshot(raw_request("POST", "/mcp", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["error"]["code"], -32700);
        assert_eq!(body["id"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn it_rejects_batches() {
        let app = test_app(test_config(None, None));

        let response = app
            .oneshot(json_request(
                "POST",
                "/mcp",
                json!([{"jsonrpc": "2.0", "id": 1, "method": "ping"}]),
            ))
            .await
            .unwrap();

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["error"]["code"], -32600);
    }

    #[tokio::test]
    async fn it_rejects_unknown_methods() {
        let app = test_app(test_config(None, None));

        let response = app
            .oneshot(json_request(
                "POST",
                "/mcp",
                json!({"jsonrpc": "2.0", "id": 4, "method": "prompts/list"}),
            ))
            .await
            .unwrap();

        let body = body_to_json(response.into_body()).await;
        assert_eq!(body["error"]["code"], -32601);
    }

    /// There is no server-initiated stream
    #[tokio::test]
    async fn it_does_not_offer_a_stream() {
        let app = test_app(test_config(None, None));

        let response = app.oneshot(get_request("/mcp")).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

//! Airtable REST client for reading and creating table records

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::error::{Result, Service};
use crate::core::upstream::send_json;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: String,
    #[serde(rename = "createdTime", skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Read a field as text. Airtable omits empty fields entirely.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct ListRecordsResponse {
    #[serde(default)]
    records: Vec<Record>,
    offset: Option<String>,
}

pub struct AirtableClient {
    client: Client,
    base_url: String,
    api_key: String,
    base_id: String,
}

impl AirtableClient {
    pub fn new(client: Client, base_url: &str, api_key: &str, base_id: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            base_id: base_id.to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(&self.base_id),
            urlencoding::encode(table)
        )
    }

    /// Fetch every record in `table`, optionally narrowed by an
    /// Airtable formula. Pages are followed via `offset`.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn list_records(
        &self,
        table: &str,
        filter_formula: Option<&str>,
    ) -> Result<Vec<Record>> {
        let url = self.table_url(table);
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut query: Vec<(&str, &str)> = Vec::new();
            if let Some(formula) = filter_formula {
                query.push(("filterByFormula", formula));
            }
            if let Some(offset) = offset.as_deref() {
                query.push(("offset", offset));
            }

            let request = self
                .client
                .get(&url)
                .bearer_auth(&self.api_key)
                .query(&query);
            let page: ListRecordsResponse = send_json(Service::Airtable, request).await?;
            records.extend(page.records);

            match page.offset {
                Some(next) if !next.is_empty() => offset = Some(next),
                _ => break,
            }
        }

        tracing::debug!("Fetched {} records from {}", records.len(), table);
        Ok(records)
    }

    #[tracing::instrument(skip(self, fields), level = "debug")]
    pub async fn create_record(&self, table: &str, fields: Map<String, Value>) -> Result<Record> {
        let request = self
            .client
            .post(self.table_url(table))
            .bearer_auth(&self.api_key)
            .json(&json!({ "fields": fields }));
        let record: Record = send_json(Service::Airtable, request).await?;
        tracing::info!("Created record {} in {}", record.id, table);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GatewayError;
    use mockito::Matcher;

    #[tokio::test]
    async fn it_pages_through_records() {
        let mut server = mockito::Server::new_async().await;
        let _first = server
            .mock("GET", "/appTEST/Contacts")
            .match_header("authorization", "Bearer key")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"records": [{"id": "rec1", "createdTime": "2025-01-01T00:00:00.000Z", "fields": {"Name": "Ada"}}], "offset": "itr2"}"#,
            )
            .create_async()
            .await;
        let _second = server
            .mock("GET", "/appTEST/Contacts")
            .match_query(Matcher::UrlEncoded("offset".into(), "itr2".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"records": [{"id": "rec2", "fields": {}}]}"#)
            .create_async()
            .await;

        let client = AirtableClient::new(Client::new(), &server.url(), "key", "appTEST");
        let records = client.list_records("Contacts", None).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text_field("Name"), Some("Ada"));
        assert_eq!(records[1].id, "rec2");
    }

    #[tokio::test]
    async fn it_sends_filter_formulas() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/appTEST/My%20Table")
            .match_query(Matcher::UrlEncoded(
                "filterByFormula".into(),
                "{Status}='Done'".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"records": []}"#)
            .create_async()
            .await;

        let client = AirtableClient::new(Client::new(), &server.url(), "key", "appTEST");
        let records = client
            .list_records("My Table", Some("{Status}='Done'"))
            .await
            .unwrap();
        assert!(records.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_wraps_fields_on_create() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/appTEST/Tasks")
            .match_body(Matcher::Json(json!({"fields": {"Name": "Call mom"}})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "recNew", "createdTime": "2025-01-01T00:00:00.000Z", "fields": {"Name": "Call mom"}}"#)
            .create_async()
            .await;

        let client = AirtableClient::new(Client::new(), &server.url(), "key", "appTEST");
        let mut fields = Map::new();
        fields.insert("Name".to_string(), json!("Call mom"));
        let record = client.create_record("Tasks", fields).await.unwrap();
        assert_eq!(record.id, "recNew");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_reports_missing_tables() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/appTEST/Nope")
            .with_status(404)
            .with_body(r#"{"error": {"type": "TABLE_NOT_FOUND", "message": "Could not find table Nope"}}"#)
            .create_async()
            .await;

        let client = AirtableClient::new(Client::new(), &server.url(), "key", "appTEST");
        let err = client.create_record("Nope", Map::new()).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Upstream {
                status: Some(404),
                ..
            }
        ));
        assert!(err.to_string().contains("Could not find table Nope"));
    }
}

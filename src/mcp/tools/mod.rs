//! Tools exposed over MCP. Every tool runs the same gateway operation
//! as its REST route.

pub mod calendar;
pub use calendar::{CheckAvailabilityTool, CreateCalendarEventTool, ListCalendarEventsTool};

pub mod tasks;
pub use tasks::{CreateTaskTool, SearchContactsTool};

pub mod reminders;
pub use reminders::CreateReminderTool;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::core::error::{GatewayError, Result};
use crate::gateway::Gateway;

#[derive(Serialize)]
pub struct Property {
    pub r#type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Property>>,
}

impl Property {
    pub fn string(description: &str) -> Self {
        Self {
            r#type: String::from("string"),
            description: description.to_string(),
            items: None,
        }
    }

    pub fn integer(description: &str) -> Self {
        Self {
            r#type: String::from("integer"),
            description: description.to_string(),
            items: None,
        }
    }

    pub fn string_array(description: &str, item_description: &str) -> Self {
        Self {
            r#type: String::from("array"),
            description: description.to_string(),
            items: Some(Box::new(Self::string(item_description))),
        }
    }
}

#[derive(Serialize)]
pub struct Parameters<Props: Serialize> {
    pub r#type: String,
    pub properties: Props,
    pub required: Vec<String>,
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

impl<Props: Serialize> Parameters<Props> {
    pub fn object(properties: Props, required: &[&str]) -> Self {
        Self {
            r#type: String::from("object"),
            properties,
            required: required.iter().map(|r| r.to_string()).collect(),
            additional_properties: false,
        }
    }
}

/// Serializes as an MCP tool definition
#[derive(Serialize)]
pub struct Function<Props: Serialize> {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Parameters<Props>,
}

// The registry is a list of boxed trait objects that also need to be
// serialized for `tools/list`. `serde::Serialize` is not object safe so
// the trait is built on `erased_serde` instead.
#[async_trait]
pub trait ToolCall: erased_serde::Serialize {
    async fn call(&self, gateway: &Gateway, args: Value) -> Result<Value>;
    fn function_name(&self) -> String;
}
erased_serde::serialize_trait_object!(ToolCall);

pub type BoxedToolCall = Box<dyn ToolCall + Send + Sync + 'static>;

/// Every tool the server offers
pub fn all() -> Vec<BoxedToolCall> {
    vec![
        Box::new(ListCalendarEventsTool::new()),
        Box::new(CreateCalendarEventTool::new()),
        Box::new(CheckAvailabilityTool::new()),
        Box::new(CreateTaskTool::new()),
        Box::new(SearchContactsTool::new()),
        Box::new(CreateReminderTool::new()),
    ]
}

pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T> {
    // Clients may leave out `arguments` when nothing is required
    let args = if args.is_null() {
        Value::Object(Map::new())
    } else {
        args
    };
    serde_json::from_value(args)
        .map_err(|e| GatewayError::validation(format!("Invalid arguments: {}", e)))
}

pub(crate) fn to_output<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| GatewayError::Internal(e.into()))
}

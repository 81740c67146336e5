use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{Function, Parameters, Property, ToolCall, parse_args, to_output};
use crate::api::public::reminders::CreateReminderRequest;
use crate::core::error::Result;
use crate::gateway::{Gateway, reminders};

#[derive(Serialize)]
pub struct CreateReminderProps {
    pub title: Property,
    pub datetime: Property,
    pub notes: Property,
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct CreateReminderTool {
    pub function: Function<CreateReminderProps>,
}

#[async_trait]
impl ToolCall for CreateReminderTool {
    async fn call(&self, gateway: &Gateway, args: Value) -> Result<Value> {
        let req: CreateReminderRequest = parse_args(args)?;
        to_output(reminders::create_reminder(gateway, req).await?)
    }

    fn function_name(&self) -> String {
        self.function.name.clone()
    }
}

impl CreateReminderTool {
    pub fn new() -> Self {
        let function = Function {
            name: String::from("create_reminder"),
            description: String::from(
                "Set a reminder. Adds a 15 minute calendar event and a pending task.",
            ),
            input_schema: Parameters::object(
                CreateReminderProps {
                    title: Property::string("What to be reminded about."),
                    datetime: Property::string("When to be reminded, as an RFC 3339 timestamp."),
                    notes: Property::string("Extra details for the reminder."),
                },
                &["title", "datetime"],
            ),
        };
        Self { function }
    }
}

impl Default for CreateReminderTool {
    fn default() -> Self {
        Self::new()
    }
}

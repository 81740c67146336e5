use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::{Function, Parameters, Property, ToolCall, parse_args, to_output};
use crate::api::public::contacts::ContactSearchRequest;
use crate::api::public::tasks::CreateTaskRequest;
use crate::core::error::Result;
use crate::gateway::{Gateway, contacts, tasks};

#[derive(Serialize)]
pub struct CreateTaskProps {
    pub name: Property,
    pub status: Property,
    pub priority: Property,
    pub due_date: Property,
    pub notes: Property,
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct CreateTaskTool {
    pub function: Function<CreateTaskProps>,
}

#[async_trait]
impl ToolCall for CreateTaskTool {
    async fn call(&self, gateway: &Gateway, args: Value) -> Result<Value> {
        let req: CreateTaskRequest = parse_args(args)?;
        to_output(tasks::create_task(gateway, req).await?)
    }

    fn function_name(&self) -> String {
        self.function.name.clone()
    }
}

impl CreateTaskTool {
    pub fn new() -> Self {
        let function = Function {
            name: String::from("create_task"),
            description: String::from("Add a task to the Airtable task list."),
            input_schema: Parameters::object(
                CreateTaskProps {
                    name: Property::string("What needs to be done."),
                    status: Property::string("Task status (default is 'To Do')."),
                    priority: Property::string("Task priority (default is 'Medium')."),
                    due_date: Property::string("Due date as YYYY-MM-DD."),
                    notes: Property::string("Extra notes for the task."),
                },
                &["name"],
            ),
        };
        Self { function }
    }
}

impl Default for CreateTaskTool {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct SearchContactsProps {
    pub search_term: Property,
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct SearchContactsTool {
    pub function: Function<SearchContactsProps>,
}

#[async_trait]
impl ToolCall for SearchContactsTool {
    async fn call(&self, gateway: &Gateway, args: Value) -> Result<Value> {
        let req: ContactSearchRequest = parse_args(args)?;
        to_output(contacts::search_contacts(gateway, req).await?)
    }

    fn function_name(&self) -> String {
        self.function.name.clone()
    }
}

impl SearchContactsTool {
    pub fn new() -> Self {
        let function = Function {
            name: String::from("search_contacts"),
            description: String::from(
                "Find contacts whose name or email contains the search term.",
            ),
            input_schema: Parameters::object(
                SearchContactsProps {
                    search_term: Property::string("Part of a name or email address."),
                },
                &["search_term"],
            ),
        };
        Self { function }
    }
}

impl Default for SearchContactsTool {
    fn default() -> Self {
        Self::new()
    }
}

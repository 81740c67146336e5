//! Public types for the generic Airtable records API
use serde::{Deserialize, Serialize};

use crate::airtable::Record;

#[derive(Debug, Default, Deserialize)]
pub struct RecordsQuery {
    pub filter_formula: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub records: Vec<Record>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    pub success: bool,
    pub record: Record,
}

//! Public types for the contacts API
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ContactSearchRequest {
    #[serde(default)]
    pub search_term: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactSearchResponse {
    pub contacts: Vec<Contact>,
    pub count: usize,
}

pub mod client;
pub use client::{AirtableClient, Record};

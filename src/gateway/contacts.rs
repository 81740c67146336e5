use super::Gateway;
use crate::airtable::Record;
use crate::api::public::contacts::{Contact, ContactSearchRequest, ContactSearchResponse};
use crate::core::error::Result;

/// Contacts whose name or email contains `term`, ignoring case. An
/// empty term matches everyone.
pub fn matching_contacts(records: Vec<Record>, term: &str) -> Vec<Contact> {
    let term = term.trim().to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            let name = record.text_field("Name").unwrap_or_default().to_lowercase();
            let email = record.text_field("Email").unwrap_or_default().to_lowercase();
            name.contains(&term) || email.contains(&term)
        })
        .map(|record| Contact {
            name: record.text_field("Name").map(str::to_string),
            email: record.text_field("Email").map(str::to_string),
            phone: record.text_field("Phone").map(str::to_string),
            id: record.id,
        })
        .collect()
}

pub async fn search_contacts(
    gateway: &Gateway,
    req: ContactSearchRequest,
) -> Result<ContactSearchResponse> {
    let table = &gateway.config().airtable_contacts_table;
    let records = gateway.airtable()?.list_records(table, None).await?;
    let contacts = matching_contacts(records, &req.search_term);
    Ok(ContactSearchResponse {
        count: contacts.len(),
        contacts,
    })
}

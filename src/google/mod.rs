pub mod gcal;
pub use gcal::{CalendarClient, Event, EventDateTime};

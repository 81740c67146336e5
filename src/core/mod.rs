pub mod config;
pub use config::AppConfig;

pub mod error;
pub use error::{GatewayError, Result};

pub mod upstream;

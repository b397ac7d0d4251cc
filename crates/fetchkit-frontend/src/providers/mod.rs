//! Context providers for shared application configuration.

pub mod api;

pub use api::{ApiConfig, ApiProvider};

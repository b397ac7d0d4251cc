//! Route handlers for the demo API.

pub mod health;
pub mod v1;

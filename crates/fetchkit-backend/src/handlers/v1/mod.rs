//! Handlers mounted under `/api/v1`.

pub mod echo;
pub mod slow;
pub mod status;
pub mod upload;

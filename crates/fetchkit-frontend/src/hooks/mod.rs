//! Custom hooks.

pub mod use_fetch;

pub use use_fetch::{UseFetchHandle, use_fetch};

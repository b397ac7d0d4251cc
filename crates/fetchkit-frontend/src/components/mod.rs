//! Reusable UI components for the fetchkit demo.

pub mod response_view;

pub use response_view::*;

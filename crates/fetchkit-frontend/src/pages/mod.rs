//! Page components for different routes in the application.

pub mod about;
pub mod playground;

pub use about::*;
pub use playground::*;

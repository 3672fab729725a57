//! Data models for the application
//!
//! This module contains the state structures used by the task reviewer.

mod app;
mod request;
mod view;

// Re-export all public types
pub use app::*;
pub use request::*;
pub use view::*;

//! Client SDK for the task analysis service
//!
//! Wire types, input validation, the error taxonomy, card classification and
//! the HTTP client shared by the terminal UI and the CLI.

pub mod api;
pub mod card;
pub mod error;
pub mod input;
pub mod review;
pub mod types;

// Re-export async trait for implementors of TaskReviewApi
pub use async_trait::async_trait;

pub use api::{ApiConfig, HttpTaskReviewApi, TaskReviewApi};
pub use card::{render_tasks, Priority, ResultsView, TaskCard, NO_TASKS_PLACEHOLDER};
pub use error::ReviewError;
pub use input::parse_task_input;
pub use review::{
    analyze_tasks, submit_for_analysis, submit_for_suggestion, suggest_tasks, Review, ReviewKind,
    SuggestOptions,
};
pub use types::*;

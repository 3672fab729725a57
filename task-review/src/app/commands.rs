//! Events delivered to the App from background request tasks

use task_review_sdk::{Review, ReviewError};

/// Events that background tasks send back to the UI loop
#[derive(Debug)]
pub enum AppEvent {
    /// An analyze or suggest request finished
    ReviewFinished {
        request_id: u64,
        result: Result<Review, ReviewError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationLevel {
    Warning,
    Error,
}

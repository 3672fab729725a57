//! Main application state

use chrono::{DateTime, Local};
use std::sync::Arc;
use task_review_sdk::{Review, Strategy, TaskReviewApi};
use tokio::sync::mpsc;

use super::{Focus, RequestTracker};
use crate::app::commands::AppEvent;
use crate::app::input::TaskInput;
use crate::app::notifications::NotificationManager;
use crate::config::AppSettings;

/// Main application state
pub struct App {
    pub settings: AppSettings,
    pub should_quit: bool,

    // Input pane
    pub input: TaskInput,
    pub focus: Focus,
    pub strategy: Strategy,

    // Results pane
    pub review: Option<Review>,
    pub selected_card: usize,
    pub expanded_card: Option<usize>,
    pub last_updated: Option<DateTime<Local>>,

    // Status banner
    pub notifications: NotificationManager,

    // Requests
    pub requests: RequestTracker,
    pub api: Arc<dyn TaskReviewApi>,
    pub events_tx: mpsc::UnboundedSender<AppEvent>,
    pub events_rx: mpsc::UnboundedReceiver<AppEvent>,

    // Handle to the runtime background requests are spawned on
    pub tokio_handle: tokio::runtime::Handle,
}

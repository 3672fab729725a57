//! Application state and module organization
//!
//! This module contains the main App struct and re-exports all functionality
//! organized by domain.

use std::sync::Arc;
use task_review_sdk::TaskReviewApi;
use tokio::sync::mpsc;

use crate::config::AppSettings;

mod models;
pub use models::*;

pub mod commands;
pub mod input;
pub mod notifications;

// Declare submodules
mod actions;
mod key_handlers;
mod navigation;

use input::TaskInput;
use notifications::NotificationManager;

impl App {
    pub fn new(
        api: Arc<dyn TaskReviewApi>,
        settings: AppSettings,
        tokio_handle: tokio::runtime::Handle,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            strategy: settings.strategy,
            requests: RequestTracker::new(settings.render_policy),
            settings,
            should_quit: false,
            input: TaskInput::new(),
            focus: Focus::Input,
            review: None,
            selected_card: 0,
            expanded_card: None,
            last_updated: None,
            notifications: NotificationManager::new(),
            api,
            events_tx,
            events_rx,
            tokio_handle,
        }
    }

    /// Start with `text` already in the input pane
    pub fn with_input(mut self, text: impl Into<String>) -> Self {
        self.input.set_text(text);
        self
    }

    pub fn is_loading(&self) -> bool {
        self.requests.in_flight() > 0
    }
}

//! Analyze and suggest actions and their completion handling

use chrono::Local;
use task_review_sdk::{
    analyze_tasks, parse_task_input, suggest_tasks, Review, ReviewError, SuggestOptions,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::commands::AppEvent;
use super::*;

impl App {
    /// Validate the input pane and score its tasks in the background
    pub fn submit_for_analysis(&mut self) {
        let tasks = match parse_task_input(self.input.text()) {
            Ok(tasks) => tasks,
            Err(e) => {
                self.show_error(&e);
                return;
            }
        };

        let request_id = self.requests.issue();
        let api = self.api.clone();
        let weights = self.settings.weights.clone();
        let tx = self.events_tx.clone();
        debug!(request_id, tasks = tasks.len(), "spawning analyze request");

        self.tokio_handle.spawn(async move {
            let result = analyze_tasks(api.as_ref(), tasks, weights.as_ref()).await;
            let _ = tx.send(AppEvent::ReviewFinished { request_id, result });
        });
    }

    /// Validate the input pane and ask for suggestions under the selected strategy
    pub fn submit_for_suggestion(&mut self) {
        let tasks = match parse_task_input(self.input.text()) {
            Ok(tasks) => tasks,
            Err(e) => {
                self.show_error(&e);
                return;
            }
        };

        let request_id = self.requests.issue();
        let api = self.api.clone();
        let options = SuggestOptions {
            strategy: self.strategy,
            top: self.settings.top,
        };
        let tx = self.events_tx.clone();
        debug!(request_id, tasks = tasks.len(), strategy = %options.strategy, "spawning suggest request");

        self.tokio_handle.spawn(async move {
            let result = suggest_tasks(api.as_ref(), tasks, options).await;
            let _ = tx.send(AppEvent::ReviewFinished { request_id, result });
        });
    }

    /// Drain finished requests without blocking
    pub fn poll_events(&mut self) {
        loop {
            match self.events_rx.try_recv() {
                Ok(event) => self.handle_event(event),
                Err(mpsc::error::TryRecvError::Empty) => break,
                // The app holds a sender, so this only happens during teardown
                Err(mpsc::error::TryRecvError::Disconnected) => break,
            }
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ReviewFinished { request_id, result } => {
                if !self.requests.complete(request_id) {
                    debug!(request_id, "dropping response from a superseded request");
                    return;
                }
                match result {
                    Ok(review) => self.apply_review(review),
                    Err(e) => self.show_error(&e),
                }
            }
        }
    }

    /// Replace the results pane with a finished review
    pub fn apply_review(&mut self, review: Review) {
        if let Some(meta) = &review.meta {
            if !meta.cycles.is_empty() {
                let cycles = meta
                    .cycles
                    .iter()
                    .map(|cycle| cycle.join(" -> "))
                    .collect::<Vec<_>>()
                    .join("; ");
                self.notifications
                    .warning(format!("Dependency cycle detected: {}", cycles));
            }
        }

        self.review = Some(review);
        self.selected_card = 0;
        self.expanded_card = None;
        self.last_updated = Some(Local::now());
    }

    pub fn show_error(&mut self, error: &ReviewError) {
        if error.is_input_error() {
            debug!(kind = error.kind(), "rejected input: {}", error);
        } else {
            warn!(kind = error.kind(), "request failed: {}", error);
        }
        self.notifications.error(error.to_string());
    }
}

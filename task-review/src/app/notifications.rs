//! Status banner for user-visible feedback
//!
//! A single slot: showing a message replaces whatever was shown before and
//! restarts the dismissal clock, so an older message's expiry can never clear
//! a newer one.

use std::time::{Duration, Instant};

use super::commands::NotificationLevel;

/// How long a message stays on screen
pub const BANNER_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: usize,
    pub timestamp: Instant,
    pub level: NotificationLevel,
    pub message: String,
    pub auto_dismiss_after: Option<Duration>,
}

impl Notification {
    pub fn is_active_at(&self, now: Instant) -> bool {
        match self.auto_dismiss_after {
            Some(duration) => now.saturating_duration_since(self.timestamp) < duration,
            None => true,
        }
    }
}

pub struct NotificationManager {
    current: Option<Notification>,
    next_id: usize,
    ttl: Duration,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::with_ttl(BANNER_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: None,
            next_id: 0,
            ttl,
        }
    }

    /// Show an error message
    pub fn error(&mut self, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Error, message.into())
    }

    /// Show a warning message
    pub fn warning(&mut self, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Warning, message.into())
    }

    pub fn push(&mut self, level: NotificationLevel, message: String) -> usize {
        self.push_at(level, message, Instant::now())
    }

    /// Replace the current message, starting its clock at `now`
    pub fn push_at(&mut self, level: NotificationLevel, message: String, now: Instant) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        self.current = Some(Notification {
            id,
            timestamp: now,
            level,
            message,
            auto_dismiss_after: Some(self.ttl),
        });

        id
    }

    /// Dismiss a message by ID. A stale ID leaves the newer message alone.
    pub fn dismiss(&mut self, id: usize) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    /// Get the message on screen, if it has not expired
    pub fn get_active(&self) -> Option<&Notification> {
        self.active_at(Instant::now())
    }

    pub fn active_at(&self, now: Instant) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.is_active_at(now))
    }

    /// Drop the message once it has expired
    pub fn cleanup_expired(&mut self) {
        self.cleanup_expired_at(Instant::now());
    }

    pub fn cleanup_expired_at(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| !n.is_active_at(now)) {
            self.current = None;
        }
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

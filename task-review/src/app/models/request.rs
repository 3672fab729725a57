//! Ordering of overlapping requests

use crate::config::RenderPolicy;

/// Hands out request sequence numbers and decides whether a finished
/// request may still replace the results.
#[derive(Debug, Clone)]
pub struct RequestTracker {
    policy: RenderPolicy,
    next_id: u64,
    latest_issued: Option<u64>,
    in_flight: usize,
}

impl RequestTracker {
    pub fn new(policy: RenderPolicy) -> Self {
        Self {
            policy,
            next_id: 1,
            latest_issued: None,
            in_flight: 0,
        }
    }

    /// Register a new request and return its id
    pub fn issue(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.latest_issued = Some(id);
        self.in_flight += 1;
        id
    }

    /// Mark a request finished. Returns whether its outcome should be shown.
    pub fn complete(&mut self, request_id: u64) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        match self.policy {
            RenderPolicy::LastResponse => true,
            RenderPolicy::LatestRequest => self.latest_issued == Some(request_id),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

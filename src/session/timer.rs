use std::time::{Duration, Instant};

/// A completion waiting out the "case solved" display delay.
///
/// The session holds at most one of these. It is consumed when it fires and simply
/// dropped when the player navigates away, so it can fire at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCompletion {
    case_id: String,
    due: Instant,
}

impl PendingCompletion {
    pub fn new(case_id: impl Into<String>, scheduled_at: Instant, delay: Duration) -> Self {
        Self {
            case_id: case_id.into(),
            due: scheduled_at + delay,
        }
    }

    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    pub fn due(&self) -> Instant {
        self.due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    /// Time left before firing, zero once due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}

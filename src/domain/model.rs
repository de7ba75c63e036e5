use chrono::{DateTime, Utc};

/// One fetched status body. Handed to the sink and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub iteration: u32,
    pub fetched_at: DateTime<Utc>,
    pub body: String,
}

impl StatusRecord {
    /// Invalid UTF-8 is replaced rather than rejected; the body is logged as-is.
    pub fn from_bytes(iteration: u32, bytes: &[u8]) -> Self {
        Self {
            iteration,
            fetched_at: Utc::now(),
            body: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PollSummary {
    pub iterations: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl PollSummary {
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

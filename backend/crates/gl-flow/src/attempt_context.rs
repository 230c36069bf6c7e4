use crate::Operation;

use gl_core::AccountRole;

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use uuid::Uuid;

static ATTEMPT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Correlation data for one workflow run
#[derive(Debug, Clone)]
pub struct AttemptContext {
    /// Unique id for this run
    pub attempt_id: String,
    /// Sequence number within this process
    pub attempt_seq: u64,
    pub role: AccountRole,
    pub operation: Operation,
    /// Start time for latency tracking
    pub started_at: Instant,
}

impl AttemptContext {
    pub fn new(role: AccountRole, operation: Operation) -> Self {
        Self {
            attempt_id: Uuid::new_v4().simple().to_string(),
            attempt_seq: ATTEMPT_COUNTER.fetch_add(1, Ordering::SeqCst),
            role,
            operation,
            started_at: Instant::now(),
        }
    }

    /// Get elapsed time since the run started
    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Create a log prefix for structured logging
    pub fn log_prefix(&self) -> String {
        format!(
            "[attempt={} role={} op={}]",
            &self.attempt_id[..8.min(self.attempt_id.len())],
            self.role,
            self.operation
        )
    }
}

//! Queue Error Types

use std::time::Duration;

/// Outcome of a rejected queue operation
///
/// Every variant is an expected signal the caller branches on, not an anomaly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// The queue no longer accepts items, or it is closed and fully drained
    #[error("Queue is closed")]
    Closed,

    /// Bounded queue at capacity; only reported by non-blocking inserts
    #[error("Queue is full (capacity: {capacity})")]
    Full { capacity: usize },

    /// A bounded wait expired while the queue stayed full (or empty) and open
    #[error("Timed out after {waited:?}")]
    Timeout { waited: Duration },

    /// The internal lock was poisoned by a thread that panicked while holding it
    #[error("Queue state poisoned: {message}")]
    Poisoned { message: String },
}

impl QueueError {
    /// True for the terminal `Closed` signal
    pub fn is_closed(&self) -> bool {
        matches!(self, QueueError::Closed)
    }

    /// True when a non-blocking insert found no free slot
    pub fn is_full(&self) -> bool {
        matches!(self, QueueError::Full { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, QueueError::Timeout { .. })
    }
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

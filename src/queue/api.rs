//! Public API for the queue system
//!
//! External modules should import from here rather than directly from internal modules.
//! See module documentation for complete usage examples and architecture details.

// Core queue components
pub use crate::queue::blocking::BlockingQueue;
pub use crate::queue::consumer::{IntoIter, Iter, QueueConsumer};
pub use crate::queue::publisher::QueuePublisher;

// Lifecycle
pub use crate::queue::policy::ClosePolicy;

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};

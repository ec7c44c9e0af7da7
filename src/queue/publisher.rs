//! Queue Publisher for inserting items
//!
//! Publishers are cheap, cloneable handles on the insert side of a queue.
//! They keep the shared queue alive, so a publisher outliving its
//! `BlockingQueue` simply observes a closed queue.

use crate::queue::error::QueueResult;
use crate::queue::internal::SharedQueue;
use std::sync::Arc;
use std::time::Duration;

/// Insert-side handle for a [`BlockingQueue`](crate::queue::api::BlockingQueue)
///
/// # Example
///
/// ```rust
/// # use blocking_queue::queue::api::{BlockingQueue, QueueError};
/// let queue = BlockingQueue::bounded(1);
/// let publisher = queue.publisher();
///
/// publisher.offer("job")?;
/// assert!(publisher.try_offer("another").unwrap_err().is_full());
/// # Ok::<(), QueueError>(())
/// ```
pub struct QueuePublisher<T> {
    queue: Arc<SharedQueue<T>>,
}

impl<T> QueuePublisher<T> {
    pub(crate) fn new(queue: Arc<SharedQueue<T>>) -> Self {
        Self { queue }
    }

    /// Append an item, waiting for a free slot while the queue is full
    pub fn offer(&self, item: T) -> QueueResult<()> {
        self.queue.offer(item)
    }

    /// Append an item or fail immediately with `Full`/`Closed`
    pub fn try_offer(&self, item: T) -> QueueResult<()> {
        self.queue.try_offer(item)
    }

    /// Append an item, waiting at most `timeout` for a free slot
    pub fn offer_timeout(&self, item: T, timeout: Duration) -> QueueResult<()> {
        self.queue.offer_timeout(item, timeout)
    }

    pub fn size(&self) -> usize {
        self.queue.len()
    }

    pub fn is_closed(&self) -> bool {
        self.queue.is_closed()
    }
}

impl<T> Clone for QueuePublisher<T> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
        }
    }
}

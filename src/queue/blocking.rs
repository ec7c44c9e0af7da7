//! BlockingQueue - owning handle for a closeable FIFO queue
//!
//! The `BlockingQueue` owns the queue lifecycle. Producers and consumers may
//! use it directly (typically behind an `Arc`) or through lightweight
//! [`QueuePublisher`] / [`QueueConsumer`] handles. Dropping the owner closes
//! the queue, which releases every thread blocked through a handle.

use crate::queue::consumer::QueueConsumer;
use crate::queue::error::QueueResult;
use crate::queue::internal::SharedQueue;
use crate::queue::policy::ClosePolicy;
use crate::queue::publisher::QueuePublisher;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Thread-safe FIFO queue with optional capacity and explicit close
///
/// # Thread Safety
///
/// All operations take `&self`. Share the queue with `Arc<BlockingQueue<T>>`,
/// or hand out [`QueuePublisher`] and [`QueueConsumer`] handles.
///
/// # Example
///
/// ```rust
/// use blocking_queue::queue::api::{BlockingQueue, ClosePolicy, QueueError};
/// use std::thread;
///
/// let queue = BlockingQueue::bounded(2);
/// let publisher = queue.publisher();
///
/// let producer = thread::spawn(move || {
///     for i in 0..5 {
///         publisher.offer(i)?;
///     }
///     Ok::<(), QueueError>(())
/// });
///
/// let mut received = Vec::new();
/// while received.len() < 5 {
///     received.push(queue.take()?);
/// }
/// producer.join().unwrap()?;
///
/// queue.close(ClosePolicy::Drain);
/// assert_eq!(received, vec![0, 1, 2, 3, 4]);
/// assert_eq!(queue.take(), Err(QueueError::Closed));
/// # Ok::<(), QueueError>(())
/// ```
pub struct BlockingQueue<T> {
    shared: Arc<SharedQueue<T>>,
}

impl<T> BlockingQueue<T> {
    /// Create a queue; `capacity == 0` means unbounded
    pub fn new(capacity: usize) -> Self {
        Self {
            shared: Arc::new(SharedQueue::new(capacity)),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Create a queue that holds at most `capacity` items
    ///
    /// A capacity of zero yields an unbounded queue.
    pub fn bounded(capacity: usize) -> Self {
        Self::new(capacity)
    }

    /// Maximum number of buffered items, `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        match self.shared.capacity() {
            0 => None,
            capacity => Some(capacity),
        }
    }

    /// Create an insert-side handle sharing this queue
    pub fn publisher(&self) -> QueuePublisher<T> {
        QueuePublisher::new(Arc::clone(&self.shared))
    }

    /// Create a remove-side handle sharing this queue
    pub fn consumer(&self) -> QueueConsumer<T> {
        QueueConsumer::new(Arc::clone(&self.shared))
    }

    /// Append an item, waiting for a free slot while the queue is full
    ///
    /// Returns `Closed` if the queue is closed before or while waiting;
    /// the item is dropped in that case.
    pub fn offer(&self, item: T) -> QueueResult<()> {
        self.shared.offer(item)
    }

    /// Append an item or fail immediately with `Full`/`Closed`
    pub fn try_offer(&self, item: T) -> QueueResult<()> {
        self.shared.try_offer(item)
    }

    /// Append an item, waiting at most `timeout` for a free slot
    pub fn offer_timeout(&self, item: T, timeout: Duration) -> QueueResult<()> {
        self.shared.offer_timeout(item, timeout)
    }

    /// Remove and return the head item, waiting while the queue is empty
    ///
    /// Returns `Closed` only once the queue is closed and drained.
    pub fn take(&self) -> QueueResult<T> {
        self.shared.take()
    }

    /// Remove the head item, waiting at most `timeout` for one to arrive
    pub fn take_timeout(&self, timeout: Duration) -> QueueResult<T> {
        self.shared.take_timeout(timeout)
    }

    /// Remove and discard the head item (same waiting rules as `take`)
    pub fn pop(&self) -> QueueResult<()> {
        self.shared.pop()
    }

    /// Close the queue; idempotent
    pub fn close(&self, policy: ClosePolicy) {
        self.shared.close(policy);
    }

    /// Snapshot of the number of buffered items
    pub fn size(&self) -> usize {
        self.shared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> Drop for BlockingQueue<T> {
    fn drop(&mut self) {
        self.shared.close(ClosePolicy::Drain);
    }
}

impl<T> fmt::Debug for BlockingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingQueue")
            .field("capacity", &self.capacity())
            .field("size", &self.size())
            .field("closed", &self.is_closed())
            .finish()
    }
}

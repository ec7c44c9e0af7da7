//! Queue Consumer for removing items
//!
//! Consumers are cloneable handles on the remove side of a queue. Several
//! consumers share one queue; each item is delivered to exactly one of them.

use crate::queue::error::{QueueError, QueueResult};
use crate::queue::internal::SharedQueue;
use std::sync::Arc;
use std::time::Duration;

/// Remove-side handle for a [`BlockingQueue`](crate::queue::api::BlockingQueue)
///
/// # Example
///
/// ```rust
/// # use blocking_queue::queue::api::{BlockingQueue, ClosePolicy};
/// let queue = BlockingQueue::new(0);
/// let consumer = queue.consumer();
///
/// for i in 1..=3 {
///     queue.offer(i).unwrap();
/// }
/// queue.close(ClosePolicy::Drain);
///
/// // Yields the remaining items, then stops at `Closed`
/// let items: Vec<i32> = consumer.iter().collect();
/// assert_eq!(items, vec![1, 2, 3]);
/// ```
pub struct QueueConsumer<T> {
    queue: Arc<SharedQueue<T>>,
}

impl<T> QueueConsumer<T> {
    pub(crate) fn new(queue: Arc<SharedQueue<T>>) -> Self {
        Self { queue }
    }

    /// Remove and return the head item, waiting while the queue is empty
    pub fn take(&self) -> QueueResult<T> {
        self.queue.take()
    }

    /// Remove the head item, waiting at most `timeout` for one to arrive
    pub fn take_timeout(&self, timeout: Duration) -> QueueResult<T> {
        self.queue.take_timeout(timeout)
    }

    /// Remove and discard the head item
    pub fn pop(&self) -> QueueResult<()> {
        self.queue.pop()
    }

    /// Blocking iterator over taken items
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { consumer: self }
    }

    pub fn size(&self) -> usize {
        self.queue.len()
    }

    pub fn is_closed(&self) -> bool {
        self.queue.is_closed()
    }

    fn next_item(&self) -> Option<T> {
        match self.queue.take() {
            Ok(item) => Some(item),
            Err(QueueError::Closed) => None,
            Err(e) => {
                log::trace!("Consumer iteration stopped: {}", e);
                None
            }
        }
    }
}

impl<T> Clone for QueueConsumer<T> {
    fn clone(&self) -> Self {
        Self {
            queue: Arc::clone(&self.queue),
        }
    }
}

/// Borrowing iterator returned by [`QueueConsumer::iter`]
///
/// Each `next` blocks like `take`; iteration ends once the queue is closed
/// and drained.
pub struct Iter<'a, T> {
    consumer: &'a QueueConsumer<T>,
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.consumer.next_item()
    }
}

/// Owning iterator returned by `QueueConsumer::into_iter`
pub struct IntoIter<T> {
    consumer: QueueConsumer<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.consumer.next_item()
    }
}

impl<T> IntoIterator for QueueConsumer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { consumer: self }
    }
}

impl<'a, T> IntoIterator for &'a QueueConsumer<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

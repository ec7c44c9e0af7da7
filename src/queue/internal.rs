//! Internal shared queue state and synchronization protocol
//!
//! All synchronization lives here:
//! - One mutex guards the buffer and the closed flag as a single unit
//! - `not_empty` is waited on by consumers, `not_full` by producers (bounded only)
//! - Inserts wake one consumer, removals wake one producer, close wakes everyone
//!
//! Every wait is a predicate loop (`wait_while`), so spurious wakeups are harmless.

use crate::core::sync::{handle_mutex_poison, recover_poison};
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::policy::ClosePolicy;
use std::collections::VecDeque;
use std::mem;
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::Duration;

/// State protected by the queue mutex
#[derive(Debug)]
struct QueueState<T> {
    buffer: VecDeque<T>,
    /// Monotonic: false -> true only
    closed: bool,
}

impl<T> QueueState<T> {
    fn is_full(&self, capacity: usize) -> bool {
        capacity > 0 && self.buffer.len() >= capacity
    }
}

/// Queue shared between the owning `BlockingQueue` and its handles
#[derive(Debug)]
pub struct SharedQueue<T> {
    state: Mutex<QueueState<T>>,
    not_empty: Condvar,
    not_full: Condvar,
    /// 0 means unbounded
    capacity: usize,
}

fn poisoned(message: String) -> QueueError {
    QueueError::Poisoned { message }
}

impl<T> SharedQueue<T> {
    /// Create an open, empty queue; `capacity == 0` means unbounded
    pub fn new(capacity: usize) -> Self {
        let buffer = if capacity > 0 {
            VecDeque::with_capacity(capacity)
        } else {
            VecDeque::new()
        };

        Self {
            state: Mutex::new(QueueState {
                buffer,
                closed: false,
            }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_bounded(&self) -> bool {
        self.capacity > 0
    }

    fn lock(&self) -> QueueResult<MutexGuard<'_, QueueState<T>>> {
        handle_mutex_poison(self.state.lock(), poisoned)
    }

    /// Insert at the tail, blocking while the queue is bounded, full and open
    pub fn offer(&self, item: T) -> QueueResult<()> {
        let state = self.lock()?;
        if state.closed {
            return Err(QueueError::Closed);
        }

        let capacity = self.capacity;
        let state = handle_mutex_poison(
            self.not_full
                .wait_while(state, |s| !s.closed && s.is_full(capacity)),
            poisoned,
        )?;

        // Closed wins over capacity
        if state.closed {
            return Err(QueueError::Closed);
        }

        self.enqueue(state, item);
        Ok(())
    }

    /// Insert at the tail without ever suspending
    pub fn try_offer(&self, item: T) -> QueueResult<()> {
        let state = self.lock()?;
        if state.closed {
            return Err(QueueError::Closed);
        }
        if state.is_full(self.capacity) {
            return Err(QueueError::Full {
                capacity: self.capacity,
            });
        }

        self.enqueue(state, item);
        Ok(())
    }

    /// Like `offer`, but gives up with `Timeout` once `timeout` has elapsed
    pub fn offer_timeout(&self, item: T, timeout: Duration) -> QueueResult<()> {
        let state = self.lock()?;
        if state.closed {
            return Err(QueueError::Closed);
        }

        let capacity = self.capacity;
        let (state, wait) = handle_mutex_poison(
            self.not_full
                .wait_timeout_while(state, timeout, |s| !s.closed && s.is_full(capacity)),
            poisoned,
        )?;

        if state.closed {
            return Err(QueueError::Closed);
        }
        if wait.timed_out() {
            return Err(QueueError::Timeout { waited: timeout });
        }

        self.enqueue(state, item);
        Ok(())
    }

    fn enqueue(&self, mut state: MutexGuard<'_, QueueState<T>>, item: T) {
        state.buffer.push_back(item);
        drop(state);
        self.not_empty.notify_one();
    }

    /// Remove and return the head item, blocking while the queue is empty and open
    ///
    /// A closed queue keeps yielding buffered items until it is empty.
    pub fn take(&self) -> QueueResult<T> {
        let state = self.lock()?;
        let state = handle_mutex_poison(
            self.not_empty
                .wait_while(state, |s| s.buffer.is_empty() && !s.closed),
            poisoned,
        )?;

        self.dequeue(state)
    }

    /// Like `take`, but gives up with `Timeout` once `timeout` has elapsed
    pub fn take_timeout(&self, timeout: Duration) -> QueueResult<T> {
        let state = self.lock()?;
        let (state, wait) = handle_mutex_poison(
            self.not_empty
                .wait_timeout_while(state, timeout, |s| s.buffer.is_empty() && !s.closed),
            poisoned,
        )?;

        if wait.timed_out() {
            return Err(QueueError::Timeout { waited: timeout });
        }

        self.dequeue(state)
    }

    /// Remove and drop the head item
    ///
    /// The item is dropped after the lock is released.
    pub fn pop(&self) -> QueueResult<()> {
        self.take().map(drop)
    }

    fn dequeue(&self, mut state: MutexGuard<'_, QueueState<T>>) -> QueueResult<T> {
        match state.buffer.pop_front() {
            Some(item) => {
                drop(state);
                if self.is_bounded() {
                    self.not_full.notify_one();
                }
                Ok(item)
            }
            None => {
                log::trace!("Queue is closed and empty");
                Err(QueueError::Closed)
            }
        }
    }

    /// Close the queue and wake every waiter on both conditions
    ///
    /// Never fails: a poisoned lock is recovered so that close is usable from `Drop`.
    pub fn close(&self, policy: ClosePolicy) {
        let discarded = {
            let mut state = recover_poison(self.state.lock());
            let was_closed = state.closed;
            state.closed = true;

            let discarded = match policy {
                ClosePolicy::Immediate => mem::take(&mut state.buffer),
                ClosePolicy::Drain => VecDeque::new(),
            };

            if !was_closed {
                log::trace!(
                    "Queue closed ({}), {} item(s) discarded, {} remaining",
                    policy,
                    discarded.len(),
                    state.buffer.len()
                );
            }
            discarded
        };

        self.not_empty.notify_all();
        self.not_full.notify_all();

        // Discarded items are dropped outside the lock
        drop(discarded);
    }

    pub fn len(&self) -> usize {
        recover_poison(self.state.lock()).buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        recover_poison(self.state.lock()).buffer.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        recover_poison(self.state.lock()).closed
    }
}

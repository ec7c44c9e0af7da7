//! Blocking Queue Component
//!
//! A thread-safe FIFO queue for handing work items from producer threads to
//! consumer threads, with optional back-pressure and an explicit close.
//!
//! # Overview
//!
//! - **Bounded or unbounded**: a capacity of `0` means unbounded; otherwise
//!   producers block while the queue is full
//! - **Blocking consumers**: `take`/`pop` block while the queue is empty
//! - **Close policies**: [`ClosePolicy::Drain`] keeps buffered items for
//!   consumers, [`ClosePolicy::Immediate`] discards them
//! - **No stranded threads**: closing (or dropping the queue) wakes every
//!   blocked producer and consumer
//! - **Result values, not panics**: every operation reports
//!   `Ok`, [`QueueError::Closed`] or [`QueueError::Full`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   offer    ┌──────────────────────────────┐   take/pop   ┌──────────────┐
//! │  Producer A  │ ─────────► │         SharedQueue          │ ───────────► │  Consumer A  │
//! └──────────────┘            │  Mutex { buffer, closed }    │              └──────────────┘
//! ┌──────────────┐   offer    │  not_full  ◄── producers wait│   take/pop   ┌──────────────┐
//! │  Producer B  │ ─────────► │  not_empty ◄── consumers wait│ ───────────► │  Consumer B  │
//! └──────────────┘            └──────────────────────────────┘              └──────────────┘
//!                                           ▲
//!                                  close / drop(BlockingQueue)
//!                                  wakes all waiters
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use blocking_queue::queue::{BlockingQueue, ClosePolicy, QueueError};
//! use std::thread;
//!
//! let queue = BlockingQueue::bounded(3);
//! let consumer = queue.consumer();
//!
//! let worker = thread::spawn(move || consumer.iter().sum::<i32>());
//!
//! for i in 1..=10 {
//!     queue.offer(i).unwrap();
//! }
//! queue.close(ClosePolicy::Drain);
//!
//! assert_eq!(worker.join().unwrap(), 55);
//! assert_eq!(queue.offer(11), Err(QueueError::Closed));
//! ```

pub mod api;
mod blocking;
mod consumer;
mod error;
mod internal;
mod policy;
mod publisher;

pub use blocking::BlockingQueue;
pub use consumer::{IntoIter, Iter, QueueConsumer};
pub use error::{QueueError, QueueResult};
pub use policy::ClosePolicy;
pub use publisher::QueuePublisher;

#[cfg(test)]
mod tests;

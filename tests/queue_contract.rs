//! Queue contract tests
//!
//! Exercises the public queue API the way an external producer/consumer
//! program would, covering the documented result variants.

use blocking_queue::queue::api::{BlockingQueue, ClosePolicy, QueueError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_fifo_within_capacity() {
    let queue = BlockingQueue::bounded(5);
    for i in 0..5 {
        assert_eq!(queue.offer(i), Ok(()));
    }
    for i in 0..5 {
        assert_eq!(queue.take(), Ok(i));
    }
}

#[test]
fn test_full_queue_reports_full_without_blocking() {
    let queue = BlockingQueue::bounded(2);
    queue.offer('a').unwrap();
    queue.offer('b').unwrap();

    assert_eq!(queue.try_offer('c'), Err(QueueError::Full { capacity: 2 }));

    queue.pop().unwrap();
    assert_eq!(queue.try_offer('c'), Ok(()));
}

#[test]
fn test_capacity_one_handoff() {
    let queue = Arc::new(BlockingQueue::bounded(1));
    let producer_blocked_then_done = Arc::new(AtomicBool::new(false));

    assert_eq!(queue.offer(1), Ok(()));

    let producer = {
        let queue = Arc::clone(&queue);
        let done = Arc::clone(&producer_blocked_then_done);
        thread::spawn(move || {
            let result = queue.offer(2);
            done.store(true, Ordering::SeqCst);
            result
        })
    };

    thread::sleep(Duration::from_millis(100));
    assert!(!producer_blocked_then_done.load(Ordering::SeqCst));

    assert_eq!(queue.take(), Ok(1));
    assert_eq!(producer.join().unwrap(), Ok(()));
    assert_eq!(queue.take(), Ok(2));
}

#[test]
fn test_drain_close_contract() {
    let queue = BlockingQueue::unbounded();
    queue.offer("x").unwrap();
    queue.offer("y").unwrap();

    queue.close(ClosePolicy::default());

    assert_eq!(queue.offer("z"), Err(QueueError::Closed));
    assert_eq!(queue.take(), Ok("x"));
    assert_eq!(queue.take(), Ok("y"));
    assert_eq!(queue.take(), Err(QueueError::Closed));
}

#[test]
fn test_immediate_close_contract() {
    let queue = BlockingQueue::bounded(1);
    queue.offer(10).unwrap();

    let blocked_producer = {
        let publisher = queue.publisher();
        thread::spawn(move || publisher.offer(11))
    };
    thread::sleep(Duration::from_millis(50));

    queue.close(ClosePolicy::Immediate);

    assert_eq!(queue.size(), 0);
    assert_eq!(blocked_producer.join().unwrap(), Err(QueueError::Closed));
    assert_eq!(queue.take(), Err(QueueError::Closed));
}

#[test]
fn test_dropping_queue_releases_waiters() {
    let queue: BlockingQueue<u8> = BlockingQueue::bounded(1);
    let waiters: Vec<_> = (0..3)
        .map(|_| {
            let consumer = queue.consumer();
            thread::spawn(move || consumer.take())
        })
        .collect();

    thread::sleep(Duration::from_millis(50));
    drop(queue);

    for waiter in waiters {
        assert_eq!(waiter.join().unwrap(), Err(QueueError::Closed));
    }
}

#[test]
fn test_consumer_loop_until_closed() {
    let queue = BlockingQueue::bounded(3);
    let consumer = queue.consumer();
    let worker = thread::spawn(move || {
        let mut received = Vec::new();
        loop {
            match consumer.take() {
                Ok(item) => received.push(item),
                Err(e) if e.is_closed() => break,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
        received
    });

    for i in 0..10 {
        queue.offer(i).unwrap();
    }
    queue.close(ClosePolicy::Drain);

    assert_eq!(worker.join().unwrap(), (0..10).collect::<Vec<_>>());
    assert!(queue.is_closed());
    assert_eq!(queue.size(), 0);
}

//! Tests for concurrent queue operations: blocking, wakeups and close races

#[cfg(test)]
mod tests {
    use crate::queue::api::{BlockingQueue, ClosePolicy, QueueError};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{mpsc, Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    const SETTLE: Duration = Duration::from_millis(100);

    #[test]
    fn test_full_queue_blocks_until_take() {
        let queue = Arc::new(BlockingQueue::bounded(1));
        assert_eq!(queue.offer(1), Ok(()));

        let finished = Arc::new(AtomicBool::new(false));
        let producer = {
            let queue = Arc::clone(&queue);
            let finished = Arc::clone(&finished);
            thread::spawn(move || {
                let result = queue.offer(2);
                finished.store(true, Ordering::SeqCst);
                result
            })
        };

        thread::sleep(SETTLE);
        assert!(
            !finished.load(Ordering::SeqCst),
            "offer(2) should block while the queue is full"
        );

        assert_eq!(queue.take(), Ok(1));
        assert_eq!(producer.join().unwrap(), Ok(()));
        assert!(finished.load(Ordering::SeqCst));
        assert_eq!(queue.take(), Ok(2));
    }

    #[test]
    fn test_empty_queue_blocks_until_offer() {
        let queue = Arc::new(BlockingQueue::unbounded());
        let (tx, rx) = mpsc::channel();

        let consumer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let item = queue.take();
                tx.send(()).unwrap();
                item
            })
        };

        assert!(rx.recv_timeout(SETTLE).is_err(), "take should block");

        queue.offer("work").unwrap();
        assert_eq!(consumer.join().unwrap(), Ok("work"));
    }

    #[test]
    fn test_pop_blocks_until_offer() {
        let queue = Arc::new(BlockingQueue::bounded(1));
        let consumer = queue.consumer();

        let popper = thread::spawn(move || consumer.pop());

        thread::sleep(SETTLE);
        queue.offer(7).unwrap();

        assert_eq!(popper.join().unwrap(), Ok(()));
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn test_immediate_close_releases_all_waiters() {
        let queue = BlockingQueue::bounded(1);
        queue.offer(0).unwrap();

        // Producers block on the full queue
        let producers: Vec<_> = (1..=3)
            .map(|i| {
                let publisher = queue.publisher();
                thread::spawn(move || publisher.offer(i))
            })
            .collect();

        thread::sleep(SETTLE);
        queue.close(ClosePolicy::Immediate);

        for producer in producers {
            assert_eq!(producer.join().unwrap(), Err(QueueError::Closed));
        }
        assert_eq!(queue.size(), 0);

        // Consumers arriving after the close see no stale item
        let consumers: Vec<_> = (0..3)
            .map(|_| {
                let consumer = queue.consumer();
                thread::spawn(move || consumer.take())
            })
            .collect();
        for consumer in consumers {
            assert_eq!(consumer.join().unwrap(), Err(QueueError::Closed));
        }
    }

    #[test]
    fn test_close_releases_blocked_consumers() {
        let queue: BlockingQueue<u32> = BlockingQueue::unbounded();

        let consumers: Vec<_> = (0..4)
            .map(|_| {
                let consumer = queue.consumer();
                thread::spawn(move || consumer.take())
            })
            .collect();

        thread::sleep(SETTLE);
        queue.close(ClosePolicy::Drain);

        for consumer in consumers {
            assert_eq!(consumer.join().unwrap(), Err(QueueError::Closed));
        }
    }

    #[test]
    fn test_immediate_close_releases_blocked_consumers() {
        let queue: BlockingQueue<u32> = BlockingQueue::bounded(2);
        let (tx, rx) = mpsc::channel();

        let takers: Vec<_> = (0..3)
            .map(|_| {
                let consumer = queue.consumer();
                let tx = tx.clone();
                thread::spawn(move || {
                    let result = consumer.take();
                    tx.send(()).unwrap();
                    result
                })
            })
            .collect();
        let poppers: Vec<_> = (0..3)
            .map(|_| {
                let consumer = queue.consumer();
                let tx = tx.clone();
                thread::spawn(move || {
                    let result = consumer.pop();
                    tx.send(()).unwrap();
                    result
                })
            })
            .collect();

        assert!(
            rx.recv_timeout(SETTLE).is_err(),
            "take and pop should block on an empty queue"
        );

        queue.close(ClosePolicy::Immediate);
        assert_eq!(queue.offer(1), Err(QueueError::Closed));

        for taker in takers {
            assert_eq!(taker.join().unwrap(), Err(QueueError::Closed));
        }
        for popper in poppers {
            assert_eq!(popper.join().unwrap(), Err(QueueError::Closed));
        }
        assert_eq!(queue.size(), 0);
    }

    #[test]
    fn test_blocked_producer_rejected_after_drain_close() {
        // Closed dominates capacity even if a slot frees after the close
        let queue = BlockingQueue::bounded(1);
        queue.offer(1).unwrap();

        let publisher = queue.publisher();
        let producer = thread::spawn(move || publisher.offer(2));

        thread::sleep(SETTLE);
        queue.close(ClosePolicy::Drain);
        assert_eq!(queue.take(), Ok(1));

        assert_eq!(producer.join().unwrap(), Err(QueueError::Closed));
        assert_eq!(queue.take(), Err(QueueError::Closed));
    }

    #[test]
    fn test_drain_close_delivers_every_item_once() {
        let queue = BlockingQueue::bounded(8);
        let consumers: Vec<_> = (0..4)
            .map(|_| {
                let consumer = queue.consumer();
                thread::spawn(move || consumer.iter().collect::<Vec<u32>>())
            })
            .collect();

        for i in 0..500 {
            queue.offer(i).unwrap();
        }
        queue.close(ClosePolicy::Drain);

        let mut seen = HashSet::new();
        for consumer in consumers {
            for item in consumer.join().unwrap() {
                assert!(seen.insert(item), "item {} delivered twice", item);
            }
        }
        assert_eq!(seen.len(), 500);
    }

    #[test]
    fn test_multiple_producers_multiple_consumers() {
        let producer_count = 4;
        let items_per_producer = 250;
        let queue = BlockingQueue::bounded(16);
        let barrier = Arc::new(Barrier::new(producer_count));

        let producers: Vec<_> = (0..producer_count)
            .map(|p| {
                let publisher = queue.publisher();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for i in 0..items_per_producer {
                        publisher.offer((p, i)).unwrap();
                    }
                })
            })
            .collect();

        let consumers: Vec<_> = (0..3)
            .map(|_| {
                let consumer = queue.consumer();
                thread::spawn(move || consumer.iter().collect::<Vec<(usize, usize)>>())
            })
            .collect();

        for producer in producers {
            producer.join().unwrap();
        }
        queue.close(ClosePolicy::Drain);

        let mut per_producer: Vec<Vec<usize>> = vec![Vec::new(); producer_count];
        let mut total = 0;
        for consumer in consumers {
            let received = consumer.join().unwrap();
            total += received.len();

            // Each consumer sees any single producer's items in order
            let mut last_seen = vec![None; producer_count];
            for (p, i) in received {
                if let Some(prev) = last_seen[p] {
                    assert!(i > prev, "producer {} order violated", p);
                }
                last_seen[p] = Some(i);
                per_producer[p].push(i);
            }
        }

        assert_eq!(total, producer_count * items_per_producer);
        for mut items in per_producer {
            items.sort_unstable();
            assert_eq!(items, (0..items_per_producer).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_bounded_queue_never_exceeds_capacity() {
        let capacity = 3;
        let queue = Arc::new(BlockingQueue::bounded(capacity));
        let stop = Arc::new(AtomicBool::new(false));

        let producers: Vec<_> = (0..3)
            .map(|_| {
                let publisher = queue.publisher();
                thread::spawn(move || {
                    let mut offered = 0;
                    while publisher.offer(offered).is_ok() {
                        offered += 1;
                    }
                })
            })
            .collect();

        let observer = {
            let queue = Arc::clone(&queue);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let mut max_seen = 0;
                while !stop.load(Ordering::SeqCst) {
                    max_seen = max_seen.max(queue.size());
                    thread::yield_now();
                }
                max_seen
            })
        };

        for _ in 0..300 {
            queue.take().unwrap();
        }

        stop.store(true, Ordering::SeqCst);
        let max_seen = observer.join().unwrap();
        queue.close(ClosePolicy::Immediate);
        for producer in producers {
            producer.join().unwrap();
        }

        assert!(max_seen <= capacity, "observed size {}", max_seen);
    }

    #[test]
    fn test_offer_timeout_succeeds_when_slot_frees() {
        let queue = Arc::new(BlockingQueue::bounded(1));
        queue.offer(1).unwrap();

        let producer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.offer_timeout(2, Duration::from_secs(10)))
        };

        thread::sleep(SETTLE);
        assert_eq!(queue.take(), Ok(1));
        assert_eq!(producer.join().unwrap(), Ok(()));
        assert_eq!(queue.take(), Ok(2));
    }
}

//! Producer/consumer run over a single queue
//!
//! Producers offer integers until they are done or the queue is closed;
//! consumers take until the queue reports `Closed`. Once every producer has
//! finished, the queue is closed with the configured policy.

use crate::app::cli::config::DemoConfig;
use crate::app::error::{DemoError, DemoResult};
use crate::queue::api::{BlockingQueue, QueueConsumer, QueueError, QueuePublisher};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Totals collected from a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    /// Items accepted by the queue
    pub produced: usize,
    /// Items received by consumers
    pub consumed: usize,
    /// Items still buffered after all threads finished
    pub final_size: usize,
    pub closed: bool,
}

/// Run producers and consumers to completion
///
/// The configuration is validated first; producer `id` offers the integers
/// `id * items .. (id + 1) * items`.
pub fn run_demo(config: &DemoConfig) -> DemoResult<DemoSummary> {
    config.validate()?;
    let queue: BlockingQueue<usize> = BlockingQueue::new(config.capacity);
    log::info!(
        "Starting demo: capacity {}, {} producer(s) x {} item(s), {} consumer(s), close policy {}",
        queue
            .capacity()
            .map_or_else(|| "unbounded".to_string(), |c| c.to_string()),
        config.producers,
        config.items,
        config.consumers,
        config.close_policy
    );

    let delay = Duration::from_millis(config.consumer_delay_ms);
    let consumers: Vec<JoinHandle<DemoResult<usize>>> = (0..config.consumers)
        .map(|id| {
            let consumer = queue.consumer();
            thread::spawn(move || consume(id, &consumer, delay))
        })
        .collect();

    let producers: Vec<JoinHandle<DemoResult<usize>>> = (0..config.producers)
        .map(|id| {
            let publisher = queue.publisher();
            let first = id * config.items;
            let items = first..first + config.items;
            thread::spawn(move || produce(id, &publisher, items))
        })
        .collect();

    let produced = join_all(producers, "producer")?;
    queue.close(config.close_policy);
    log::info!(
        "Producers completed {} item(s), queue closed ({})",
        produced,
        config.close_policy
    );

    let consumed = join_all(consumers, "consumer")?;

    let summary = DemoSummary {
        produced,
        consumed,
        final_size: queue.size(),
        closed: queue.is_closed(),
    };
    log::info!(
        "The end -> queue size: {}, is closed: {}",
        summary.final_size,
        summary.closed
    );

    Ok(summary)
}

fn produce(
    id: usize,
    publisher: &QueuePublisher<usize>,
    items: std::ops::Range<usize>,
) -> DemoResult<usize> {
    let mut produced = 0;
    for item in items {
        match publisher.offer(item) {
            Ok(()) => {
                log::info!("Producer {} task: {}", id, item);
                produced += 1;
            }
            Err(QueueError::Closed) => {
                log::info!("Queue is closed, producer {} exiting", id);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(produced)
}

fn consume(id: usize, consumer: &QueueConsumer<usize>, delay: Duration) -> DemoResult<usize> {
    let mut consumed = 0;
    loop {
        match consumer.take() {
            Ok(item) => {
                log::info!(
                    "Consumer {} task: {} (over: {})",
                    id,
                    item,
                    consumer.size()
                );
                consumed += 1;
            }
            Err(QueueError::Closed) => {
                log::info!("Queue is closed, consumer {} exiting", id);
                return Ok(consumed);
            }
            Err(e) => return Err(e.into()),
        }

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

fn join_all(handles: Vec<JoinHandle<DemoResult<usize>>>, role: &str) -> DemoResult<usize> {
    let mut total = 0;
    for handle in handles {
        total += handle.join().map_err(|_| DemoError::ThreadPanicked {
            role: role.to_string(),
        })??;
    }
    Ok(total)
}

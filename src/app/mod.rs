//! Demonstration producer/consumer application
//!
//! Drives a [`BlockingQueue`](crate::queue::api::BlockingQueue) from producer
//! and consumer threads, configured from a TOML file and the command line.

pub mod cli;
pub mod demo;
pub mod error;
pub mod startup;

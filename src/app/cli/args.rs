//! Command line arguments for the demo
//!
//! Every option is optional so that unset flags fall through to the
//! configuration file and then to built-in defaults.

use crate::core::logging::LogFormat;
use crate::queue::api::ClosePolicy;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use std::path::PathBuf;
use strum::IntoEnumIterator;

#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "bqdemo")]
#[command(about = "Producer/consumer demonstration of a closeable blocking queue")]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Queue capacity (0 = unbounded)
    #[arg(short = 'n', long = "capacity", value_name = "N")]
    pub capacity: Option<usize>,

    /// Items offered by each producer
    #[arg(short = 'i', long = "items", value_name = "N")]
    pub items: Option<usize>,

    /// Number of producer threads
    #[arg(short = 'p', long = "producers", value_name = "N")]
    pub producers: Option<usize>,

    /// Number of consumer threads
    #[arg(short = 'C', long = "consumers", value_name = "N")]
    pub consumers: Option<usize>,

    /// Pause after each consumed item
    #[arg(short = 'd', long = "consumer-delay-ms", value_name = "MILLIS")]
    pub consumer_delay_ms: Option<u64>,

    /// What happens to queued items when producers finish
    #[arg(
        long = "close-policy",
        value_name = "POLICY",
        value_parser = PossibleValuesParser::new(ClosePolicy::iter().map(|p| p.to_string()))
    )]
    pub close_policy: Option<String>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(
        short = 'o',
        long = "log-format",
        value_name = "FORMAT",
        value_parser = PossibleValuesParser::new(LogFormat::iter().map(|f| f.to_string()))
    )]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Explicit color choice, `None` when neither flag was given (auto/TTY)
    pub fn color_choice(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

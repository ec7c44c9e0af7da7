//! TOML configuration file loading
//!
//! Values are layered: built-in defaults, then the configuration file, then
//! command line arguments.

use super::args::Args;
use crate::app::error::{DemoError, DemoResult};
use crate::queue::api::ClosePolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Effective demo configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Queue capacity, 0 = unbounded
    pub capacity: usize,
    /// Items offered by each producer
    pub items: usize,
    pub producers: usize,
    pub consumers: usize,
    pub consumer_delay_ms: u64,
    pub close_policy: ClosePolicy,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    /// `None` = color when stdout is a terminal
    pub color: Option<bool>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            capacity: 3,
            items: 10,
            producers: 1,
            consumers: 1,
            consumer_delay_ms: 100,
            close_policy: ClosePolicy::Drain,
            log_level: None,
            log_format: None,
            log_file: None,
            color: None,
        }
    }
}

impl DemoConfig {
    /// Default config location: `<config_dir>/BlockingQueue/bqdemo.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("BlockingQueue").join("bqdemo.toml"))
    }

    pub fn from_toml_str(contents: &str, path: &Path) -> DemoResult<Self> {
        toml::from_str(contents).map_err(|source| DemoError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> DemoResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| DemoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Build the effective configuration for the given arguments
    ///
    /// An explicitly named config file must exist; the default one is used
    /// only if present.
    pub fn resolve(args: &Args) -> DemoResult<Self> {
        let config_path = match &args.config_file {
            Some(path) if !path.exists() => {
                return Err(DemoError::ConfigNotFound { path: path.clone() })
            }
            Some(path) => Some(path.clone()),
            None => Self::default_config_path().filter(|path| path.exists()),
        };

        let mut config = match config_path {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };

        config.apply_args(args)?;
        config.validate()?;
        Ok(config)
    }

    /// Override file values with whatever was given on the command line
    pub fn apply_args(&mut self, args: &Args) -> DemoResult<()> {
        if let Some(capacity) = args.capacity {
            self.capacity = capacity;
        }
        if let Some(items) = args.items {
            self.items = items;
        }
        if let Some(producers) = args.producers {
            self.producers = producers;
        }
        if let Some(consumers) = args.consumers {
            self.consumers = consumers;
        }
        if let Some(delay) = args.consumer_delay_ms {
            self.consumer_delay_ms = delay;
        }
        if let Some(policy) = &args.close_policy {
            self.close_policy =
                ClosePolicy::from_str(policy).map_err(|e| DemoError::InvalidValue {
                    field: "close_policy".to_string(),
                    message: format!("'{}': {}", policy, e),
                })?;
        }
        if let Some(level) = &args.log_level {
            self.log_level = Some(level.clone());
        }
        if let Some(format) = &args.log_format {
            self.log_format = Some(format.clone());
        }
        if let Some(file) = &args.log_file {
            self.log_file = Some(file.clone());
        }
        if let Some(color) = args.color_choice() {
            self.color = Some(color);
        }
        Ok(())
    }

    pub fn validate(&self) -> DemoResult<()> {
        if self.producers == 0 {
            return Err(DemoError::InvalidValue {
                field: "producers".to_string(),
                message: "at least one producer is required".to_string(),
            });
        }
        if self.consumers == 0 {
            return Err(DemoError::InvalidValue {
                field: "consumers".to_string(),
                message: "at least one consumer is required".to_string(),
            });
        }
        if self.producers.checked_mul(self.items).is_none() {
            return Err(DemoError::InvalidValue {
                field: "items".to_string(),
                message: format!(
                    "{} producer(s) x {} item(s) exceeds the item numbering range",
                    self.producers, self.items
                ),
            });
        }
        Ok(())
    }
}

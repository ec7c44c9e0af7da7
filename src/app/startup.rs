use super::cli::args::Args;
use super::cli::config::DemoConfig;
use super::demo::{run_demo, DemoSummary};
use super::error::{DemoError, DemoResult};
use crate::core::logging::init_logging;
use clap::Parser;
use std::io::IsTerminal;

/// Binary entry point: parse arguments, run, exit non-zero on error
pub fn startup() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Resolve configuration, initialise logging and run the demo
pub fn run(args: &Args) -> DemoResult<DemoSummary> {
    let config = DemoConfig::resolve(args)?;

    let use_color = config
        .color
        .unwrap_or_else(|| std::io::stdout().is_terminal());
    let log_file = config
        .log_file
        .as_deref()
        .map(|path| {
            path.to_str().ok_or_else(|| DemoError::InvalidValue {
                field: "log_file".to_string(),
                message: format!("path is not valid UTF-8: {}", path.display()),
            })
        })
        .transpose()?;

    init_logging(
        config.log_level.as_deref(),
        config.log_format.as_deref(),
        log_file,
        use_color,
    )
    .map_err(|e| DemoError::Logging {
        message: e.to_string(),
    })?;

    log::debug!(
        "bqdemo {} (git {}, built {})",
        env!("CARGO_PKG_VERSION"),
        crate::GIT_HASH,
        crate::BUILD_TIME
    );
    log::debug!("Effective configuration: {:?}", config);

    run_demo(&config)
}

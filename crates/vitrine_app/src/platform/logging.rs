//! Log setup for the vitrine binary.
//!
//! File output goes to `./vitrine.log` in the current working directory.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./vitrine.log";

/// Destination for log output.
#[allow(dead_code)]
pub enum LogDestination {
    File,
    Terminal,
    Both,
}

/// Installs the global logger. Safe to call once; failure to create the log
/// file degrades to whatever terminal logger was requested.
pub fn initialize(destination: LogDestination) {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        match File::create(LOG_FILE) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("Warning: could not create {LOG_FILE}: {err}"),
        }
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

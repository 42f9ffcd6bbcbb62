//! Basic logger usage example
//!
//! Demonstrates context-bound loggers, every level, and muting levels at
//! runtime.
//!
//! Run with: cargo run --example basic_usage

use log_pipeline::prelude::*;
use log_pipeline::info;

fn main() {
    println!("=== Log Pipeline - Basic Usage Example ===\n");

    let logger = Logger::new("BasicUsage");

    println!("1. Logging at every level:");
    logger.log("This is a log message", []);
    logger.info("This is an info message", [LogValue::from(1)]);
    logger.success("This is a success message", []);
    logger.warn("This is a warning message", []);
    logger.debug("This is a debug message", []);
    logger.verbose("This is a verbose message", []);
    logger.error("This is an error message", Some(LogValue::from("example trace")));

    println!("\n2. Muting everything except warnings and errors:");
    global().set_log_levels([LogLevel::Warn, LogLevel::Error]);
    logger.info("Info message (hidden)", []);
    logger.debug("Debug message (hidden)", []);
    logger.warn("Warning message (visible)", []);

    println!("\n3. Switching to JSON output:");
    global().set_log_levels(LogLevel::ALL);
    global().set_formatter(std::sync::Arc::new(JsonFormatter::new()));
    info!(logger, "Processed {} items", 100);

    println!("\n=== Example completed successfully! ===");
}

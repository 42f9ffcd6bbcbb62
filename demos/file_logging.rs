//! File logging example
//!
//! Demonstrates fanning out to the console and a file simultaneously.
//!
//! Run with: cargo run --example file_logging

use log_pipeline::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Log Pipeline - File Logging Example ===\n");

    let multi = Arc::new(
        MultiOutput::default()
            .with_output(ConsoleOutput::new())
            .with_output(FileOutput::new("application.log")),
    );
    global().set_output(multi.clone());

    let logger = Logger::new("FileLogging");

    println!("1. Logging to both console and file:");
    logger.info("Application started", []);
    logger.debug("Loading configuration...", []);
    logger.warn("Using default settings for some options", []);
    logger.error("Failed to load optional plugin", None);

    println!("\n2. Detaching the console:");
    multi.remove_output("console");
    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i), []);
    }

    global().flush();

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");
}

//! Output trait for log destinations and the delivery boundary

use super::{error::Result, log_level::LogLevel};
use crate::outputs::ConsoleOutput;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A sink for formatted log text.
///
/// `write` may block on I/O. Errors are returned rather than raised so that
/// [`deliver`] can contain them; callers of the logging API never see them.
pub trait LogOutput: Send + Sync {
    fn write(&self, message: &str, level: LogLevel) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Write through `output`, containing both returned errors and panics.
///
/// Failures are reported as a diagnostic on the console's error stream.
/// Returns whether the write succeeded.
pub fn deliver(output: &dyn LogOutput, message: &str, level: LogLevel) -> bool {
    match catch_unwind(AssertUnwindSafe(|| output.write(message, level))) {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            report(&format!(
                "[LOGGER ERROR] Output '{}' failed: {}",
                output.name(),
                e
            ));
            false
        }
        Err(panic_info) => {
            report(&format!(
                "[LOGGER CRITICAL] Output '{}' panicked: {}. \
                 Other outputs continue to function.",
                output.name(),
                panic_message(panic_info.as_ref())
            ));
            false
        }
    }
}

/// Flush `output` with the same containment as [`deliver`]
pub fn flush_contained(output: &dyn LogOutput) -> bool {
    match catch_unwind(AssertUnwindSafe(|| output.flush())) {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            report(&format!(
                "[LOGGER ERROR] Output '{}' flush failed: {}",
                output.name(),
                e
            ));
            false
        }
        Err(panic_info) => {
            report(&format!(
                "[LOGGER CRITICAL] Output '{}' panicked during flush: {}",
                output.name(),
                panic_message(panic_info.as_ref())
            ));
            false
        }
    }
}

/// Emit a pipeline diagnostic. Errors here have nowhere left to go.
pub(crate) fn report(diagnostic: &str) {
    let _ = ConsoleOutput::new().write(diagnostic, LogLevel::Error);
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

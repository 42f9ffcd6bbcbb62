//! Fan-out over several outputs

use crate::core::output::{deliver, flush_contained};
use crate::core::{LogLevel, LogOutput, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Delivers every write to each member in order.
///
/// A failing member is reported and skipped; the rest still receive the line.
/// Writes iterate a snapshot of the member list, so adding or removing
/// members never disturbs a write already in progress.
#[derive(Default)]
pub struct MultiOutput {
    outputs: RwLock<Vec<Arc<dyn LogOutput>>>,
}

impl MultiOutput {
    pub fn new(outputs: Vec<Arc<dyn LogOutput>>) -> Self {
        Self {
            outputs: RwLock::new(outputs),
        }
    }

    #[must_use]
    pub fn with_output<O: LogOutput + 'static>(self, output: O) -> Self {
        self.add_output(Arc::new(output));
        self
    }

    pub fn add_output(&self, output: Arc<dyn LogOutput>) {
        self.outputs.write().push(output);
    }

    /// Remove every member called `name`, returning how many were removed
    pub fn remove_output(&self, name: &str) -> usize {
        let mut outputs = self.outputs.write();
        let before = outputs.len();
        outputs.retain(|o| o.name() != name);
        before - outputs.len()
    }

    pub fn names(&self) -> Vec<String> {
        self.outputs.read().iter().map(|o| o.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.outputs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.read().is_empty()
    }

    fn snapshot(&self) -> Vec<Arc<dyn LogOutput>> {
        self.outputs.read().clone()
    }
}

impl LogOutput for MultiOutput {
    fn write(&self, message: &str, level: LogLevel) -> Result<()> {
        for output in self.snapshot() {
            deliver(output.as_ref(), message, level);
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        for output in self.snapshot() {
            flush_contained(output.as_ref());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "multi"
    }
}

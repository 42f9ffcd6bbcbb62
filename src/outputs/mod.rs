//! Output implementations

pub mod console;
pub mod file;
pub mod multi;

pub use console::ConsoleOutput;
pub use file::FileOutput;
pub use multi::MultiOutput;

pub use crate::core::LogOutput;

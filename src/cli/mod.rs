/// CLI layer: argument parsing, legacy short flags, and output formatting.
pub mod aliases;
pub mod args;
pub mod output;

pub use args::{Cli, Command, OutputTarget};
pub use output::{OutputFormat, Stream, write_error, write_summary, write_summary_to};

/// Record files: CSV input for `add_contacts` and the harvest output sink.
pub mod set;
pub mod sink;

pub use set::{PUBLIC_IDENTIFIER_COLUMN, RecordSet};
pub use sink::OutputSink;

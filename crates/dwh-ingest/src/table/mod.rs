//! Delimited table reading and writing.

mod reader;
mod writer;

pub use reader::{read_csv_headers, read_entity_table, read_string_table};
pub use writer::write_csv_table;

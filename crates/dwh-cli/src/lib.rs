//! Library side of the `university-dwh` binary.

pub mod generate;
pub mod logging;
pub mod pipeline;
pub mod types;

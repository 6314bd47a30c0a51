//! Check job configuration.

mod job;

pub use job::{CheckFlags, CheckJob, SourceType};

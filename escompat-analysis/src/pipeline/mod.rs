//! Cached, batched, order-preserving file pipeline.

mod cache;
mod runner;

pub use cache::{CacheStats, FileCache};
pub use runner::CheckPipeline;

//! Tracing initialization.

mod setup;

pub use setup::init_tracing;

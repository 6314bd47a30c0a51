//! Core data types: edition ordinals and report structures.

pub mod report;
pub mod versions;

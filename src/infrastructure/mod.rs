//! Adapters for the domain ports.

pub mod in_memory;
pub mod tracing_log;

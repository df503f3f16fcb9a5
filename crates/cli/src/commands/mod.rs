//! CLI command implementations.

pub mod browse;
pub mod session;

//! Shared test utilities used across extrap crates.

pub mod ci;
pub mod tracing;

//! Shared types for the SlamData end-to-end test harness
//!
//! This crate contains the types shared between the configuration
//! loader and the harness proper, currently the connector taxonomy.

pub mod connector;

// Re-export commonly used types
pub use connector::{Connector, COUCHBASE_WAIT_TIME_MS, DEFAULT_WAIT_TIME_MS};

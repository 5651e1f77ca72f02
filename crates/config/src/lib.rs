//! Test configuration for the SlamData end-to-end harness
//!
//! Reads the `CONNECTOR_*` and `QUASAR_PORT` environment variables and
//! assembles the immutable record the harness consumes: selenium wait
//! times, the SlamData URL, database connection parameters, and the
//! fixed upload/download fixture locations.

pub mod loader;
pub mod schema;

pub use loader::{ConfigLoader, ENV_VARS};
pub use schema::{
    DatabaseConfig, DownloadConfig, EnvVars, SeleniumConfig, TestConfig, UploadConfig,
};

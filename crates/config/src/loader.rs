//! Configuration loader implementation

use crate::schema::{EnvVars, TestConfig};
use figment::providers::Env;
use tracing::debug;

/// Environment variables the loader consumes
pub const ENV_VARS: [&str; 4] = [
    "CONNECTOR_HOST",
    "CONNECTOR_PORT",
    "CONNECTOR_TYPE",
    "QUASAR_PORT",
];

/// Configuration loader backed by the process environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the test configuration from the process environment.
    ///
    /// Cannot fail: missing variables surface as the `undefined`
    /// placeholder inside the assembled record.
    pub fn load() -> TestConfig {
        Self::load_from(&Env::raw().only(&ENV_VARS))
    }

    /// Load from an explicit environment view.
    ///
    /// Values are taken from the provider's raw name/value pairs, not
    /// figment's parsed value model, so every field carries exactly
    /// what the environment spelled out (a port of `08080` stays
    /// `08080`).
    pub fn load_from(env: &Env) -> TestConfig {
        let vars = EnvVars::from_pairs(
            env.iter()
                .map(|(key, value)| (key.as_str().to_string(), value)),
        );

        let config = TestConfig::from_env_vars(vars);
        debug!(
            "Loaded test configuration: connector {} at {}:{}, slamdata at {}",
            config.database.kind, config.database.host, config.database.port, config.slamdata_url
        );

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use types::{COUCHBASE_WAIT_TIME_MS, DEFAULT_WAIT_TIME_MS};

    #[test]
    fn test_load_reads_the_process_environment() {
        Jail::expect_with(|jail| {
            jail.set_env("CONNECTOR_HOST", "h");
            jail.set_env("CONNECTOR_PORT", "1234");
            jail.set_env("CONNECTOR_TYPE", "mongodb");
            jail.set_env("QUASAR_PORT", "8080");

            let config = ConfigLoader::load();
            assert_eq!(config.database.host, "h");
            assert_eq!(config.database.port, "1234");
            assert_eq!(config.database.kind, "mongodb");
            assert_eq!(config.database.name, "testDb");
            assert_eq!(config.slamdata_url, "http://localhost:8080");
            assert_eq!(config.selenium.wait_time, DEFAULT_WAIT_TIME_MS);
            Ok(())
        });
    }

    #[test]
    fn test_load_tolerates_an_empty_environment() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load();
            assert_eq!(config.database.host, "undefined");
            assert_eq!(config.slamdata_url, "http://localhost:undefined");
            assert_eq!(config.selenium.wait_time, DEFAULT_WAIT_TIME_MS);
            Ok(())
        });
    }

    #[test]
    fn test_couchbase_environment_gets_the_longer_wait() {
        Jail::expect_with(|jail| {
            jail.set_env("CONNECTOR_TYPE", "couchbase");

            let config = ConfigLoader::load();
            assert_eq!(config.selenium.wait_time, COUCHBASE_WAIT_TIME_MS);
            Ok(())
        });
    }

    #[test]
    fn test_values_are_passed_through_verbatim() {
        Jail::expect_with(|jail| {
            jail.set_env("QUASAR_PORT", "08080");
            jail.set_env("CONNECTOR_PORT", "007");

            let config = ConfigLoader::load();
            assert_eq!(config.slamdata_url, "http://localhost:08080");
            assert_eq!(config.database.port, "007");
            Ok(())
        });
    }

    #[test]
    fn test_loading_twice_yields_equal_records() {
        Jail::expect_with(|jail| {
            jail.set_env("CONNECTOR_HOST", "localhost");
            jail.set_env("CONNECTOR_PORT", "27017");
            jail.set_env("CONNECTOR_TYPE", "mongodb");
            jail.set_env("QUASAR_PORT", "8080");

            assert_eq!(ConfigLoader::load(), ConfigLoader::load());
            Ok(())
        });
    }
}

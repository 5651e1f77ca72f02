//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use types::Connector;

/// Placeholder embedded when an environment variable is not set.
///
/// Mirrors the legacy harness, where an unset variable stringified as
/// `undefined` inside derived values such as the SlamData URL. Missing
/// variables never fail the load; consumers detect the malformed value
/// at their own use sites.
pub const MISSING_VALUE: &str = "undefined";

/// Raw snapshot of the environment variables the harness consumes.
///
/// Field names are the lowercased variable names. Assembly is a pure
/// function of this record, so tests can build configurations without
/// touching the process environment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnvVars {
    pub connector_host: Option<String>,
    pub connector_port: Option<String>,
    pub connector_type: Option<String>,
    pub quasar_port: Option<String>,
}

impl EnvVars {
    /// Collect a snapshot from raw name/value pairs.
    ///
    /// Names match case-insensitively, the way the environment is
    /// looked up; unknown names are ignored. Values are kept exactly
    /// as spelled, with no parsing or canonicalization.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut vars = EnvVars::default();
        for (key, value) in pairs {
            let slot = match key.as_ref().to_ascii_lowercase().as_str() {
                "connector_host" => &mut vars.connector_host,
                "connector_port" => &mut vars.connector_port,
                "connector_type" => &mut vars.connector_type,
                "quasar_port" => &mut vars.quasar_port,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        vars
    }
}

/// Main test configuration structure.
///
/// Constructed once at harness start and never mutated. Serialized
/// field names match the record shape the legacy harness consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConfig {
    /// Selenium timing configuration
    pub selenium: SeleniumConfig,
    /// URL of the SlamData instance under test
    pub slamdata_url: String,
    /// Database connector under test
    pub database: DatabaseConfig,
    /// Upload fixture configuration
    #[serde(default)]
    pub upload: UploadConfig,
    /// Download directory configuration
    #[serde(default)]
    pub download: DownloadConfig,
}

/// Selenium timing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeleniumConfig {
    /// Explicit wait timeout in milliseconds
    pub wait_time: u64,
}

/// Database connector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    /// Database name
    #[serde(default = "default_database_name")]
    pub name: String,
    /// Connector type (mongodb, couchbase, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Connector host
    pub host: String,
    /// Connector port, kept as the raw spelling from the environment
    pub port: String,
}

/// Upload fixture configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    /// Fixture files uploaded during the suite, in upload order
    #[serde(default = "default_upload_paths")]
    pub file_paths: Vec<String>,
}

/// Download directory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadConfig {
    /// Directory the browser downloads into
    #[serde(default = "default_download_folder")]
    pub folder: String,
}

// Default value functions

fn default_database_name() -> String {
    "testDb".to_string()
}

fn default_upload_paths() -> Vec<String> {
    vec![
        "./test/line-delimited.json".to_string(),
        "./test/array-wrapped.json".to_string(),
    ]
}

fn default_download_folder() -> String {
    "tmp/test/downloads".to_string()
}

impl TestConfig {
    /// Assemble the configuration from an explicit environment snapshot.
    ///
    /// Pure: the same snapshot always yields a structurally equal
    /// record. Missing variables become [`MISSING_VALUE`] rather than
    /// an error.
    pub fn from_env_vars(vars: EnvVars) -> Self {
        let host = vars.connector_host.unwrap_or_else(missing);
        let port = vars.connector_port.unwrap_or_else(missing);
        let kind = vars.connector_type.unwrap_or_else(missing);
        let quasar_port = vars.quasar_port.unwrap_or_else(missing);

        TestConfig {
            selenium: SeleniumConfig {
                wait_time: Connector::from_type(&kind).selenium_wait_time(),
            },
            slamdata_url: format!("http://localhost:{}", quasar_port),
            database: DatabaseConfig {
                name: default_database_name(),
                kind,
                host,
                port,
            },
            upload: UploadConfig::default(),
            download: DownloadConfig::default(),
        }
    }
}

fn missing() -> String {
    MISSING_VALUE.to_string()
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::from_env_vars(EnvVars::default())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            file_paths: default_upload_paths(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            folder: default_download_folder(),
        }
    }
}

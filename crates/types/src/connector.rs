//! Connector taxonomy for the database under test

use std::fmt;

/// Selenium wait time for couchbase-backed runs, in milliseconds
pub const COUCHBASE_WAIT_TIME_MS: u64 = 50_000;

/// Selenium wait time for every other connector, in milliseconds
pub const DEFAULT_WAIT_TIME_MS: u64 = 30_000;

/// Database connector under test, as named by `CONNECTOR_TYPE`.
///
/// Unknown spellings are preserved rather than rejected; the harness
/// treats any connector string as valid and only branches on the
/// connectors it knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connector {
    MongoDb,
    Couchbase,
    Other(String),
}

impl Connector {
    /// Parse the raw `CONNECTOR_TYPE` spelling. Never fails.
    pub fn from_type(kind: &str) -> Self {
        match kind {
            "mongodb" => Connector::MongoDb,
            "couchbase" => Connector::Couchbase,
            other => Connector::Other(other.to_string()),
        }
    }

    /// How long selenium should wait on this connector, in milliseconds.
    ///
    /// Couchbase runs settle more slowly than the other connectors and
    /// get a longer wait.
    pub fn selenium_wait_time(&self) -> u64 {
        match self {
            Connector::Couchbase => COUCHBASE_WAIT_TIME_MS,
            _ => DEFAULT_WAIT_TIME_MS,
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connector::MongoDb => f.write_str("mongodb"),
            Connector::Couchbase => f.write_str("couchbase"),
            Connector::Other(kind) => f.write_str(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_connectors_parse() {
        assert_eq!(Connector::from_type("mongodb"), Connector::MongoDb);
        assert_eq!(Connector::from_type("couchbase"), Connector::Couchbase);
    }

    #[test]
    fn test_unknown_connectors_are_preserved() {
        let connector = Connector::from_type("marklogic");
        assert_eq!(connector, Connector::Other("marklogic".to_string()));
        assert_eq!(connector.to_string(), "marklogic");
    }

    #[test]
    fn test_couchbase_gets_the_longer_wait() {
        assert_eq!(
            Connector::Couchbase.selenium_wait_time(),
            COUCHBASE_WAIT_TIME_MS
        );
    }

    #[test]
    fn test_other_connectors_get_the_default_wait() {
        assert_eq!(Connector::MongoDb.selenium_wait_time(), DEFAULT_WAIT_TIME_MS);
        assert_eq!(
            Connector::from_type("marklogic").selenium_wait_time(),
            DEFAULT_WAIT_TIME_MS
        );
    }
}

//! Server configuration derived from the environment.

use std::env;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Environment variable naming the listen port.
const PORT_VAR: &str = "PORT";
/// Environment variable enabling fixture seeding (`1` to enable).
const SEED_VAR: &str = "SEED_EXAMPLE_DATA";
/// Listen port used when `PORT` is unset.
const DEFAULT_PORT: u16 = 8000;

/// Configuration failures that abort startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The port variable is set but is not a valid TCP port.
    #[error("{var} must be a TCP port number, got {value:?}")]
    InvalidPort {
        /// The offending environment variable.
        var: &'static str,
        /// The raw value found in the environment.
        value: String,
    },
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
    seed_example_data: bool,
}

impl ServerConfig {
    /// Construct a configuration directly; used by tests.
    pub fn new(bind_addr: SocketAddr, seed_example_data: bool) -> Self {
        Self {
            bind_addr,
            seed_example_data,
        }
    }

    /// Read configuration from the environment.
    ///
    /// `PORT` defaults to 8000 when unset; `SEED_EXAMPLE_DATA=1` pre-populates
    /// the collections with the example fixtures.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set to something
    /// that is not a TCP port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(PORT_VAR, env::var(PORT_VAR).ok())?;
        let seed_example_data = env::var(SEED_VAR).ok().as_deref() == Some("1");
        Ok(Self {
            bind_addr: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port)),
            seed_example_data,
        })
    }

    /// The socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether the stores start from the example fixtures.
    pub fn seed_example_data(&self) -> bool {
        self.seed_example_data
    }
}

fn parse_port(var: &'static str, raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_to_port_8000_when_unset() {
        assert_eq!(parse_port(PORT_VAR, None), Ok(DEFAULT_PORT));
    }

    #[rstest]
    #[case("8080", 8080)]
    #[case("1", 1)]
    #[case("65535", 65535)]
    fn accepts_valid_ports(#[case] raw: &str, #[case] expected: u16) {
        assert_eq!(parse_port(PORT_VAR, Some(raw.into())), Ok(expected));
    }

    #[rstest]
    #[case("eight thousand")]
    #[case("")]
    #[case("-1")]
    #[case("70000")]
    fn rejects_invalid_ports(#[case] raw: &str) {
        let result = parse_port(PORT_VAR, Some(raw.into()));
        assert_eq!(
            result,
            Err(ConfigError::InvalidPort {
                var: PORT_VAR,
                value: raw.into()
            })
        );
    }
}

//! Configuration constants and server settings for pagesim.

/// Default interface the HTTP server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

/// Longest reference sequence the server accepts in one request.
///
/// The simulators themselves have no limit. A snapshot never holds more
/// than `min(sequence.len(), frameSize)` pages, so one request copies at
/// most `MAX_SEQUENCE_LEN²` page ids whatever `frameSize` is.
pub const MAX_SEQUENCE_LEN: usize = 100_000;

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Maximum accepted sequence length per request.
    pub max_sequence_len: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_sequence_len: MAX_SEQUENCE_LEN,
        }
    }
}

impl ServerConfig {
    /// Set the host (builder style).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port (builder style).
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the maximum sequence length (builder style).
    pub fn with_max_sequence_len(mut self, max: usize) -> Self {
        self.max_sequence_len = max;
        self
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_sequence_len, MAX_SEQUENCE_LEN);
    }

    #[test]
    fn test_server_config_builders() {
        let config = ServerConfig::default()
            .with_host("0.0.0.0")
            .with_port(8080)
            .with_max_sequence_len(10);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.max_sequence_len, 10);
    }
}

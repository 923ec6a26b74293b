//! Server configuration module

use clap::Parser;

use crate::config::{
    checkout::CheckoutConfig, db::DatabaseConfig, logging::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod checkout;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;

pub(crate) use logging::LogFormat;

/// Yori JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "yori-json", about = "Yori JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Order code settings.
    #[command(flatten)]
    pub checkout: CheckoutConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_flags_into_settings() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "yori-json",
            "--database-url",
            "postgres://localhost/yori",
            "--log-level",
            "info",
            "--host",
            "127.0.0.1",
            "--port",
            "8698",
            "--order-code-prefix",
            "YORI",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:8698");
        assert_eq!(config.database.database_url, "postgres://localhost/yori");
        assert_eq!(config.checkout.order_code_prefix, "YORI");
        assert_eq!(config.checkout.order_code_attempts.get(), 5);
        assert_eq!(config.server.shutdown_timeout().as_secs(), 30);

        Ok(())
    }

    #[test]
    fn rejects_zero_order_code_attempts() {
        let result = ServerConfig::try_parse_from([
            "yori-json",
            "--database-url",
            "postgres://localhost/yori",
            "--order-code-attempts",
            "0",
        ]);

        assert!(result.is_err(), "zero attempts can never place an order");
    }
}

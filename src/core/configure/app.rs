use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub db: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn get_socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    pub fn get_http_addr(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database_name: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn get_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name
        )
    }
}

impl AppConfig {
    /// Defaults, overridden by an optional settings file, overridden by
    /// `APP__`-prefixed environment variables (e.g. `APP__SERVER__PORT`).
    pub fn read() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("db.host", "127.0.0.1")?
            .set_default("db.port", 5432)?
            .set_default("db.username", "postgres")?
            .set_default("db.password", "postgres")?
            .set_default("db.database_name", "inventory")?
            .set_default("db.max_connections", 10)?
            .add_source(config::File::with_name("settings/base").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_readable() {
        let config = AppConfig::read().unwrap();
        assert_eq!(config.db.port, 5432);
        assert!(config.db.get_url().starts_with("postgres://"));
    }
}

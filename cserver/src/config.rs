use std::path::Path;

use serde::Deserialize;

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    45861
}

fn default_database() -> String {
    ".cserver.db".to_string()
}

/// Server configuration, loaded from an optional TOML file. Every field
/// has a default, so an empty file and no file behave the same.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database")]
    pub database: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            database: default_database(),
        }
    }
}

impl ServerConfig {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_development_endpoint() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:45861");
        assert_eq!(config.database, ".cserver.db");
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: ServerConfig = toml::from_str("port = 8080").unwrap();
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database, ".cserver.db");
    }

    #[test]
    fn test_full_file_overrides_everything() {
        let config: ServerConfig = toml::from_str(
            "bind = \"0.0.0.0\"\nport = 9000\ndatabase = \"/var/lib/cserver/commands.db\"",
        )
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:9000");
        assert_eq!(config.database, "/var/lib/cserver/commands.db");
    }

    #[test]
    fn test_missing_file_is_a_startup_error() {
        let result = ServerConfig::from_path(Path::new("/nonexistent/cserver.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_unparsable_file_is_a_startup_error() {
        let result: Result<ServerConfig, _> = toml::from_str("port = \"not a number\"");
        assert!(result.is_err());
    }
}

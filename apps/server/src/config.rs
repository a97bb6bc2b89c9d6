//! Server configuration read from the environment.

use anyhow::Context;
use std::path::PathBuf;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub settings_path: PathBuf,
}

impl Config {
    /// Read `HOST`, `PORT` and `SETTINGS_PATH`, applying defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("invalid PORT: {}", value))?,
            Err(_) => 3000,
        };
        let settings_path = std::env::var("SETTINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_settings_path());

        Ok(Self {
            host,
            port,
            settings_path,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_settings_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("simple-flashcards")
        .join("settings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_settings_file() {
        let path = default_settings_path();
        assert!(path.ends_with("simple-flashcards/settings.json"));
    }

    #[test]
    fn addr_joins_host_and_port() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            settings_path: PathBuf::from("settings.json"),
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }
}

use std::{
    fs,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

const DEFAULT_DATA_DIR: &str = "folio-data";
const DEFAULT_CHAT_API_URL: &str = "http://127.0.0.1:8090/chat";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory of the JSON comment store.
    pub data_dir: PathBuf,
    pub web: Web,
    pub chat: Chat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.into(),
            web: Default::default(),
            chat: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Web {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for Web {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            enable_cors: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Chat {
    /// Endpoint of the opaque chat-reply backend.
    pub api_url: String,
    #[serde(deserialize_with = "duration_str::deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Chat {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_CHAT_API_URL.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Reads the configuration from the given TOML file.
    ///
    /// Without an explicit path the default file is used if it exists,
    /// otherwise the built-in defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration file '{}'", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse configuration file '{}'", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_file() {
        let toml_str = r#"
            data_dir = "/var/lib/folio"

            [web]
            address = "0.0.0.0"
            port = 8080
            enable_cors = true

            [chat]
            api_url = "https://bot.example.com/chat"
            timeout = "5s"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/folio"));
        assert_eq!(config.web.address, "0.0.0.0".parse::<IpAddr>().unwrap());
        assert_eq!(config.web.port, 8080);
        assert!(config.web.enable_cors);
        assert_eq!(config.chat.api_url, "https://bot.example.com/chat");
        assert_eq!(config.chat.timeout, Duration::from_secs(5));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}

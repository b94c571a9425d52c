//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub upstream: UpstreamConfig,
}

fn default_port() -> u16 {
    3000
}

/// Where the BlueLink backend lives. The dashboard forwards `/login`,
/// `/arduinos` and `/mappings` there verbatim.
#[derive(Debug, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    // The backend's default bind
    "http://127.0.0.1:8000".to_string()
}

pub fn load_config() -> Result<Config> {
    let config_dir = directories::ProjectDirs::from("io", "bluelink-hw", "bluelink-dashboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 3000)?
        .set_default("upstream.base_url", default_base_url())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (BLUELINK_PORT, BLUELINK_UPSTREAM__BASE_URL, etc.)
        .add_source(
            ::config::Environment::with_prefix("BLUELINK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_apply_without_environment() {
        std::env::remove_var("BLUELINK_PORT");
        std::env::remove_var("BLUELINK_UPSTREAM__BASE_URL");

        let config = load_config().unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    #[serial]
    fn environment_overrides_defaults() {
        std::env::set_var("BLUELINK_PORT", "4000");
        std::env::set_var("BLUELINK_UPSTREAM__BASE_URL", "http://10.0.0.5:9000");

        let config = load_config().unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.upstream.base_url, "http://10.0.0.5:9000");

        std::env::remove_var("BLUELINK_PORT");
        std::env::remove_var("BLUELINK_UPSTREAM__BASE_URL");
    }
}

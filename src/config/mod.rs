//! Configuration module

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default)]
    pub endpoint_host: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            endpoint_host: None,
            output_dir: default_output_dir(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Command-line values that take precedence over file and environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub server_url: Option<String>,
    pub endpoint_host: Option<String>,
    pub output_dir: Option<PathBuf>,
}

fn default_server_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Config {
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = &overrides.config_file {
            builder = builder.add_source(config::File::from(path.as_path()));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("WG24")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        config.apply(overrides);
        Ok(config)
    }

    fn apply(&mut self, overrides: &Overrides) {
        if let Some(url) = &overrides.server_url {
            self.server_url = url.clone();
        }
        if let Some(host) = &overrides.endpoint_host {
            self.endpoint_host = Some(host.clone());
        }
        if let Some(dir) = &overrides.output_dir {
            self.output_dir = dir.clone();
        }
    }

    pub fn server_url(&self) -> Result<Url, ConfigError> {
        Ok(Url::parse(&self.server_url)?)
    }

    /// Host written into `Endpoint`: the override, else the server URL host
    pub fn endpoint_host(&self) -> Result<String, ConfigError> {
        if let Some(host) = self.endpoint_host.as_deref().filter(|h| !h.is_empty()) {
            return Ok(host.to_string());
        }

        let url = self.server_url()?;
        url.host_str()
            .map(str::to_string)
            .ok_or_else(|| ConfigError::MissingHost(self.server_url.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api: Api,
    session: Session,
    download: Download,
}

impl AppConfig {
    /// Layers the built-in defaults, `config.toml`, `config_local.toml` and `WIPEDASH_*` environment variables,
    /// e.g. `WIPEDASH_API__BASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("session.token_file", ".wipedash_token")?
            .set_default("download.directory", ".")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("WIPEDASH").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn download(&self) -> &Download {
        &self.download
    }
}

#[derive(Debug, Deserialize)]
pub struct Api {
    base_url: String,
}

impl Api {
    /// The base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Debug, Deserialize)]
pub struct Session {
    token_file: PathBuf,
}

impl Session {
    pub fn token_file(&self) -> &Path {
        &self.token_file
    }
}

#[derive(Debug, Deserialize)]
pub struct Download {
    directory: PathBuf,
}

impl Download {
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                api: Api {
                    base_url: DEFAULT_API_BASE_URL.to_string(),
                },
                session: Session {
                    token_file: PathBuf::from(".wipedash_token"),
                },
                download: Download {
                    directory: std::env::temp_dir(),
                },
            },
        }
    }

    pub fn base_url(mut self, url: String) -> Self {
        self.config.api.base_url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

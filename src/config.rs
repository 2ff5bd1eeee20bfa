//! Build and packaging configuration: PWA manifest metadata, dev server binding
//! and the backend the client talks to.
//!
//! The defaults live in `SphereMint.toml` and are compiled in. A different file
//! can be named with `SPHEREMINT_CONFIG`, and `HOST`, `PORT` and `API_BASE_URL`
//! override individual values.

use crate::error::AppError;
use serde::Deserialize;
use std::env::var;
use url::Url;

pub const DEFAULT_CONFIG: &str = include_str!("../SphereMint.toml");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BuildConfig {
    pub app: AppConfig,
    pub server: ServerConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AppConfig {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub theme_color: String,
    pub background_color: String,
    pub icons: Vec<IconConfig>,
    pub assets: AssetConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IconConfig {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Files outside the manifest icon set that the page shell links to.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AssetConfig {
    pub logo: String,
    pub apple_touch_icon: String,
    pub mask_icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub public_dir: String,
}

impl BuildConfig {
    pub fn from_toml_str<S: AsRef<str>>(raw: S) -> Result<Self, AppError> {
        Ok(toml::from_str(raw.as_ref())?)
    }

    /// Reads the configuration file (or the compiled-in defaults) and applies
    /// environment overrides.
    pub fn load() -> Result<Self, AppError> {
        let mut config = match var("SPHEREMINT_CONFIG") {
            Ok(path) => {
                tracing::info!("loading configuration from {path}");
                Self::from_toml_str(std::fs::read_to_string(path)?)?
            }
            Err(_) => Self::from_toml_str(DEFAULT_CONFIG)?,
        };
        config.server.apply_overrides(
            var("HOST").ok(),
            var("PORT").ok(),
            var("API_BASE_URL").ok(),
        );
        Ok(config)
    }
}

impl ServerConfig {
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<String>,
        api_base_url: Option<String>,
    ) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(e) => tracing::warn!("ignoring invalid PORT {port:?}: {e}"),
            }
        }
        if let Some(api_base_url) = api_base_url {
            self.api_base_url = api_base_url;
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn api_url(&self) -> Result<Url, AppError> {
        Ok(Url::parse(&self.api_base_url)?)
    }
}

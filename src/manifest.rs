use crate::config::{AppConfig, IconConfig};
use crate::error::AppError;
use serde::Serialize;

pub const MANIFEST_PATH: &str = "/manifest.webmanifest";
pub const MANIFEST_CONTENT_TYPE: &str = "application/manifest+json";

/// The web app manifest that makes the client installable.
#[derive(Serialize)]
pub struct WebManifest<'a> {
    pub name: &'a str,
    pub short_name: &'a str,
    pub description: &'a str,
    pub theme_color: &'a str,
    pub background_color: &'a str,
    pub display: &'static str,
    pub start_url: &'static str,
    pub icons: Vec<ManifestIcon>,
}

#[derive(Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl<'a> WebManifest<'a> {
    pub fn new(app: &'a AppConfig) -> Self {
        Self {
            name: &app.name,
            short_name: &app.short_name,
            description: &app.description,
            theme_color: &app.theme_color,
            background_color: &app.background_color,
            display: "standalone",
            start_url: "/",
            icons: app.icons.iter().map(ManifestIcon::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&IconConfig> for ManifestIcon {
    fn from(icon: &IconConfig) -> Self {
        Self {
            src: public_asset(&icon.src),
            sizes: icon.sizes.clone(),
            mime_type: icon.mime_type.clone(),
        }
    }
}

/// Absolute URL path of a file served from the public directory.
pub fn public_asset<S: AsRef<str>>(file: S) -> String {
    format!("/public/{}", file.as_ref().trim_start_matches('/'))
}

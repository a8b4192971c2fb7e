use crate::profiles::ActiveProfiles;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub profiles: ActiveProfiles,
    pub docs: DocsConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Generated API documentation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Serve the document and the UI at all.
    pub enabled: bool,
    pub openapi_path: String,
    pub ui_path: String,
    pub info: ApiInfo,
}

/// Document-level metadata (`info` object).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
    pub contact: ContactInfo,
    pub license: LicenseInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LicenseInfo {
    pub name: String,
    pub url: String,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            openapi_path: "/api-docs/openapi.json".to_owned(),
            ui_path: "/docs".to_owned(),
            info: ApiInfo::default(),
        }
    }
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: "Greeting API".to_owned(),
            description: "REST API for greeting messages".to_owned(),
            version: "v1.0.0".to_owned(),
            contact: ContactInfo::default(),
            license: LicenseInfo::default(),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            name: "Salute Maintainers".to_owned(),
            email: "example@example.com".to_owned(),
            url: "https://example.com".to_owned(),
        }
    }
}

impl Default for LicenseInfo {
    fn default() -> Self {
        Self {
            name: "Apache 2.0".to_owned(),
            url: "https://www.apache.org/licenses/LICENSE-2.0".to_owned(),
        }
    }
}

use serde::Deserialize;

/// Runtime settings, overridable through `BADGESERVICE_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Path to a JSON badge catalog, the built-in sample catalog is used when unset
    pub badge_catalog_path: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .add_source(config::Environment::with_prefix("BADGESERVICE").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use shared_kernel::configuration::config;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,
    /// Comma separated. Empty allows any origin.
    #[serde(default)]
    allowed_origins: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

impl Settings {
    pub fn parse() -> anyhow::Result<Self> {
        config::<Settings>()
    }
}

impl ApplicationSettings {
    pub fn address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Settings, StorageBackend};
    use serde_json::json;

    #[test]
    fn test_storage_defaults_to_postgres() {
        let settings: Settings = serde_json::from_value(json!({
            "application": { "host": "0.0.0.0", "port": "8080" }
        }))
        .unwrap();
        assert_eq!(settings.storage.backend, StorageBackend::Postgres);
        assert_eq!(settings.application.address(), ("0.0.0.0".to_string(), 8080));
        assert!(settings.application.allowed_origins().is_empty());
    }

    #[test]
    fn test_allowed_origins_are_split_on_commas() {
        let settings: Settings = serde_json::from_value(json!({
            "application": {
                "host": "127.0.0.1",
                "port": 8080,
                "allowed_origins": "https://a.example, https://b.example,"
            },
            "storage": { "backend": "memory" }
        }))
        .unwrap();
        assert_eq!(settings.storage.backend, StorageBackend::Memory);
        assert_eq!(
            settings.application.allowed_origins(),
            vec!["https://a.example", "https://b.example"]
        );
    }
}

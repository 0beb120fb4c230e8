use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use shared_kernel::configuration::config;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct Settings {
    database: DbSettings,
}

type DbName = String;
#[derive(Debug, Deserialize)]
pub struct DbSettings {
    host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    port: u16,
    username: String,
    password: Secret<String>,
    database_name: DbName,
    require_ssl: bool,
    #[serde(default = "default_max_connections")]
    max_connections: u32,
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl DbSettings {
    fn connect_options(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.username)
            .password(self.password.expose_secret())
            .port(self.port)
            .ssl_mode(ssl_mode)
    }
}

impl Settings {
    pub fn parse() -> anyhow::Result<Self> {
        config::<Settings>()
    }

    pub fn max_connections(&self) -> u32 {
        self.database.max_connections
    }

    pub fn without_db(&self) -> (PgConnectOptions, DbName) {
        (
            self.database.connect_options(),
            self.database.database_name.clone(),
        )
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.database
            .connect_options()
            .database(&self.database.database_name)
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;

    #[test]
    fn test_max_connections_defaults_when_missing() {
        let settings: Settings = serde_json::from_value(serde_json::json!({
            "database": {
                "host": "localhost",
                "port": "5432",
                "username": "postgres",
                "password": "password",
                "database_name": "locations",
                "require_ssl": false
            }
        }))
        .unwrap();
        assert_eq!(settings.max_connections(), 10);
    }
}

use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Name of the environment variable that selects the overlay file,
/// e.g. `APP_ENVIRONMENT=production` loads `configuration/production.yaml`
/// on top of `configuration/base.yaml`.
pub const ENVIRONMENT_VARIABLE: &str = "APP_ENVIRONMENT";

fn configuration_directory() -> anyhow::Result<PathBuf> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    Ok(base_path.join("configuration"))
}

pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    config_from(&configuration_directory()?)
}

pub fn config_from<Settings: DeserializeOwned>(
    configuration_directory: &Path,
) -> anyhow::Result<Settings> {
    let environment = std::env::var(ENVIRONMENT_VARIABLE).ok();
    let mut builder = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false));

    if let Some(environment) = environment {
        builder = builder.add_source(
            config::File::from(configuration_directory.join(format!("{environment}.yaml")))
                .required(false),
        );
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to build configuration")?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}

#[cfg(test)]
mod tests {
    use super::config_from;
    use serde::Deserialize;
    use std::path::Path;

    #[derive(Deserialize, Debug)]
    struct Settings {
        application: ApplicationSettings,
    }

    #[derive(Deserialize, Debug)]
    struct ApplicationSettings {
        port: u16,
    }

    #[test]
    fn test_missing_configuration_directory_fails_to_deserialize() {
        let result =
            config_from::<Settings>(Path::new("/this/directory/does/not/exist/configuration"));
        assert!(result.is_err())
    }

    #[test]
    fn test_settings_are_read_from_base_file() {
        let directory = std::env::temp_dir().join(format!("config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&directory).unwrap();
        std::fs::write(directory.join("base.yaml"), "application:\n  port: 8081\n").unwrap();

        let settings = config_from::<Settings>(&directory).unwrap();

        assert_eq!(settings.application.port, 8081);
        std::fs::remove_dir_all(directory).unwrap();
    }
}

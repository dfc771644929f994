use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use serde::Deserialize;

use super::constants::{defaults, env};

#[derive(Debug, Deserialize, Clone)]
pub struct StorefrontSetting {
    pub catalog: CatalogSetting,
    pub logging: LoggingSetting,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSetting {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSetting {
    pub filter: String,
}

impl StorefrontSetting {
    /// Loads settings from built-in defaults, then `config/storefront.{json,...}` if present,
    /// then `CAMISA__*` environment variables (a `.env` file is read first).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::builder()?
            .add_source(File::with_name(defaults::CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(env::ENV_PREFIX).separator(env::ENV_SEPARATOR))
            .build()?
            .try_deserialize()
    }

    /// Builds settings from a JSON document layered over the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from_str(raw, FileFormat::Json))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("catalog.path", defaults::CATALOG_PATH)?
            .set_default("logging.filter", defaults::LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let settings = StorefrontSetting::from_json("{}").unwrap();
        assert_eq!(settings.catalog.path, defaults::CATALOG_PATH);
        assert_eq!(settings.logging.filter, defaults::LOG_FILTER);
    }

    #[test]
    fn json_overrides_defaults() {
        let settings = StorefrontSetting::from_json(
            r#"{ "catalog": { "path": "/srv/loja/produtos.json" }, "logging": { "filter": "camisa=debug" } }"#,
        )
        .unwrap();
        assert_eq!(settings.catalog.path, "/srv/loja/produtos.json");
        assert_eq!(settings.logging.filter, "camisa=debug");
    }

    // The only test touching process environment; keep it that way so parallel tests
    // cannot observe the overrides.
    #[test]
    fn environment_overrides_file_and_defaults() {
        unsafe {
            std::env::set_var(env::CATALOG_PATH_ENV_VAR, "/srv/override/produtos.json");
            std::env::set_var(env::LOG_FILTER_ENV_VAR, "warn");
        }

        let settings = StorefrontSetting::load();

        unsafe {
            std::env::remove_var(env::CATALOG_PATH_ENV_VAR);
            std::env::remove_var(env::LOG_FILTER_ENV_VAR);
        }

        let settings = settings.expect("Failed to load settings");
        assert_eq!(settings.catalog.path, "/srv/override/produtos.json");
        assert_eq!(settings.logging.filter, "warn");
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(StorefrontSetting::from_json(r#"{ "catalog": "nope" }"#).is_err());
    }
}

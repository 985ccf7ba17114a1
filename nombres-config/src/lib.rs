//! Configuration for the nombres speller
//!
//! Speller [`Options`] can be kept outside the code, in a JSON, TOML or
//! `.env` file and in `NOMBRES_*` environment variables. [`Settings`]
//! layers those sources, later ones winning, and resolves them into a
//! validated [`SpellConfig`].
//!
//! ```rust
//! use nombres_config::{FileFormat, Settings};
//! use nombres_spell::SpellOut;
//!
//! let options = Settings::new()
//!     .load_str(r#"locale = "fr-BE""#, FileFormat::Toml)?
//!     .load_vars([("NOMBRES_MODE".to_string(), "ordinal".to_string())])
//!     .options()?;
//!
//! assert_eq!(90u8.spell_out(&options)?, "nonantième");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Recognized keys: `flags`, `gender`, `mode`, `region`, `locale`,
//! `second`, `septante`, `huitante`, `octante`, `nonante`,
//! `cent_1100_1999`. Unknown keys are ignored, so the logging variables
//! sharing the `NOMBRES_` prefix do not interfere.

pub mod env;
pub mod error;
pub mod loader;
pub mod spell_config;
pub mod validation;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use spell_config::SpellConfig;
pub use validation::{ConfigValidator, Validate};

use nombres_log::debug;
use nombres_spell::Options;
use serde_json::{Map, Value};
use std::path::Path;

/// Layered speller configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    values: Map<String, Value>,
    env_prefix: Option<String>,
}

impl Settings {
    /// Empty settings reading `NOMBRES_*` variables.
    pub fn new() -> Self {
        Self::with_prefix(env::DEFAULT_PREFIX)
    }

    /// Empty settings reading `<prefix>_*` variables.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            values: Map::new(),
            env_prefix: Some(prefix.into()),
        }
    }

    /// Set one key.
    pub fn set<T: serde::Serialize>(mut self, key: &str, value: T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;
        self.values.insert(normalize_key(key), value);
        Ok(self)
    }

    /// Layer the content of a configuration document.
    pub fn load_str(mut self, content: &str, format: FileFormat) -> Result<Self> {
        let value = ConfigLoader::new(format)
            .with_env_prefix(self.env_prefix.clone())
            .parse(content)?;
        self.merge(value)?;
        Ok(self)
    }

    /// Layer a configuration file, its format taken from the extension.
    pub fn load_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let value = ConfigLoader::auto(path)?
            .with_env_prefix(self.env_prefix.clone())
            .load_file(path)?;
        self.merge(value)?;
        Ok(self)
    }

    /// Layer the process environment.
    pub fn load_env(self) -> Result<Self> {
        let vars = EnvLoader::new(self.env_prefix.clone()).load()?;
        Ok(self.merge_strings(vars))
    }

    /// Layer explicit variable pairs, filtered by prefix like the environment.
    pub fn load_vars<I>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = EnvLoader::new(self.env_prefix.clone()).load_from(vars);
        self.merge_strings(vars)
    }

    /// Layer a dotenv file without touching the process environment.
    ///
    /// With no path, `.env` is searched in the current directory and its
    /// parents and silently skipped when absent.
    pub fn load_dotenv(self, path: Option<&Path>) -> Result<Self> {
        let iter = match path {
            Some(path) => {
                dotenvy::from_path_iter(path).map_err(|e| ConfigError::LoadError(e.to_string()))?
            }
            None => match dotenvy::dotenv_iter() {
                Ok(iter) => iter,
                Err(_) => return Ok(self),
            },
        };

        let vars = iter
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(self.load_vars(vars))
    }

    /// Check if a key has been set by any layer.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(&normalize_key(key))
    }

    /// Deserialize and validate.
    pub fn build(&self) -> Result<SpellConfig> {
        let config: SpellConfig = serde_json::from_value(Value::Object(self.values.clone()))
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Deserialize, validate and resolve into speller options.
    pub fn options(&self) -> Result<Options> {
        self.build()?.to_options()
    }

    fn merge(&mut self, value: Value) -> Result<()> {
        let Value::Object(map) = value else {
            return Err(ConfigError::ParseError(
                "configuration root must be a table".to_string(),
            ));
        };

        debug!(target: "nombres::config", "merging {} keys", map.len());
        for (key, value) in map {
            self.values.insert(normalize_key(&key), value);
        }
        Ok(())
    }

    fn merge_strings(mut self, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        for (key, value) in vars {
            self.values.insert(normalize_key(&key), Value::String(value));
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Options from the `NOMBRES_*` environment variables alone.
pub fn options_from_env() -> Result<Options> {
    Settings::new().load_env()?.options()
}

/// `cent-1100-1999` and `CENT_1100_1999` both name `cent_1100_1999`.
fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nombres_spell::{Gender, Mode, Region};

    fn vars(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_settings() {
        assert_eq!(Settings::new().options().unwrap(), Options::default());
    }

    #[test]
    fn test_set_and_has() {
        let settings = Settings::new().set("Cent-1100-1999", true).unwrap();
        assert!(settings.has("cent_1100_1999"));
        assert!(!settings.has("second"));
        assert!(settings.options().unwrap().cent_1100_1999);
    }

    #[test]
    fn test_later_layers_win() {
        let settings = Settings::new()
            .load_str(r#"{"mode": "ordinal", "gender": "feminine"}"#, FileFormat::Json)
            .unwrap()
            .load_vars(vars(&[("NOMBRES_MODE", "cardinal"), ("NOMBRES_LOG_LEVEL", "trace")]));

        let options = settings.options().unwrap();
        assert_eq!(options.mode, Mode::Cardinal);
        assert_eq!(options.gender, Gender::Feminine);
    }

    #[test]
    fn test_custom_prefix() {
        let options = Settings::with_prefix("APP_NUMBERS")
            .load_vars(vars(&[
                ("APP_NUMBERS_REGION", "belgium"),
                ("NOMBRES_REGION", "switzerland"),
            ]))
            .options()
            .unwrap();
        assert_eq!(options, Options::from(Region::Belgium));
    }

    #[test]
    fn test_env_document_uses_settings_prefix() {
        let content = "APP_REGION=belgium\nNOMBRES_REGION=switzerland\n";
        let from_str = Settings::with_prefix("APP")
            .load_str(content, FileFormat::Env)
            .unwrap()
            .options()
            .unwrap();
        let from_vars = Settings::with_prefix("APP")
            .load_vars(vars(&[("APP_REGION", "belgium"), ("NOMBRES_REGION", "switzerland")]))
            .options()
            .unwrap();
        assert_eq!(from_str, from_vars);
        assert_eq!(from_str, Options::from(Region::Belgium));
    }

    #[test]
    fn test_non_table_root_is_rejected() {
        let result = Settings::new().load_str("[1, 2]", FileFormat::Json);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_bad_boolean_is_a_deserialization_error() {
        let settings = Settings::new().load_vars(vars(&[("NOMBRES_SECOND", "maybe")]));
        assert!(matches!(
            settings.build(),
            Err(ConfigError::DeserializationError(_))
        ));
    }
}

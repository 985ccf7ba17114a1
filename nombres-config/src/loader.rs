// Configuration file loaders

use crate::env::{DEFAULT_PREFIX, EnvLoader};
use crate::{ConfigError, Result};
use nombres_log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
    Env,
}

impl FileFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            "env" => Some(FileFormat::Env),
            _ => None,
        }
    }

    /// Format of `path`, by extension. A bare `.env` file counts as
    /// [`FileFormat::Env`].
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.file_name().and_then(|n| n.to_str()) == Some(".env") {
            return Some(FileFormat::Env);
        }
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(FileFormat::from_extension)
    }
}

/// Configuration file loader
pub struct ConfigLoader {
    format: FileFormat,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    pub fn new(format: FileFormat) -> Self {
        Self {
            format,
            env_prefix: Some(DEFAULT_PREFIX.to_string()),
        }
    }

    /// Prefix a `.env` key must carry to be kept, `None` to keep every key.
    pub fn with_env_prefix(mut self, prefix: Option<String>) -> Self {
        self.env_prefix = prefix;
        self
    }

    /// Auto-detect format from file extension
    pub fn auto(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path).ok_or_else(|| {
            ConfigError::LoadError(format!("Unsupported format: {}", path.display()))
        })?;

        Ok(Self::new(format))
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Load configuration from file
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        debug!(
            target: "nombres::config",
            "loading {:?} configuration from {}", self.format, path.display()
        );
        self.parse(&content)
    }

    /// Parse configuration from string
    pub fn parse(&self, content: &str) -> Result<Value> {
        match self.format {
            FileFormat::Json => self.parse_json(content),
            FileFormat::Toml => self.parse_toml(content),
            FileFormat::Env => self.parse_env(content),
        }
    }

    fn parse_json(&self, content: &str) -> Result<Value> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("JSON parse error: {}", e)))
    }

    fn parse_toml(&self, content: &str) -> Result<Value> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;

        serde_json::to_value(toml_value)
            .map_err(|e| ConfigError::ParseError(format!("TOML to JSON conversion error: {}", e)))
    }

    /// `KEY=value` lines, filtered and stripped by the env prefix exactly
    /// like the process environment.
    fn parse_env(&self, content: &str) -> Result<Value> {
        let mut pairs = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::ParseError(format!("missing '=' in {:?}", line)));
            };

            let value = value.trim().trim_matches('"').trim_matches('\'');
            pairs.push((key.trim().to_string(), value.to_string()));
        }

        let map = EnvLoader::new(self.env_prefix.clone())
            .load_from(pairs)
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();
        Ok(Value::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let loader = ConfigLoader::new(FileFormat::Json);
        let result = loader.parse(r#"{"region": "belgium", "second": true}"#).unwrap();
        assert_eq!(result["region"], "belgium");
        assert_eq!(result["second"], true);
    }

    #[test]
    fn test_parse_toml() {
        let loader = ConfigLoader::new(FileFormat::Toml);
        let toml = r#"
            mode = "ordinal"
            nonante = true
        "#;

        let result = loader.parse(toml).unwrap();
        assert_eq!(result["mode"], "ordinal");
        assert_eq!(result["nonante"], true);
    }

    #[test]
    fn test_parse_env() {
        let loader = ConfigLoader::new(FileFormat::Env);
        let env = r#"
            NOMBRES_GENDER=feminine
            # Comment
            export NOMBRES_REGION="switzerland"
            SECOND='yes'
        "#;

        let result = loader.parse(env).unwrap();
        assert_eq!(result["gender"], "feminine");
        assert_eq!(result["region"], "switzerland");
        assert!(result.get("second").is_none());
    }

    #[test]
    fn test_parse_env_with_custom_prefix() {
        let env = "APP_REGION=belgium\nNOMBRES_MODE=ordinal\n";

        let loader = ConfigLoader::new(FileFormat::Env).with_env_prefix(Some("APP".to_string()));
        let result = loader.parse(env).unwrap();
        assert_eq!(result["region"], "belgium");
        assert!(result.get("mode").is_none());

        let unfiltered = ConfigLoader::new(FileFormat::Env).with_env_prefix(None);
        let result = unfiltered.parse(env).unwrap();
        assert_eq!(result["app_region"], "belgium");
        assert_eq!(result["nombres_mode"], "ordinal");
    }

    #[test]
    fn test_parse_env_rejects_bare_words() {
        let loader = ConfigLoader::new(FileFormat::Env);
        assert!(matches!(
            loader.parse("NOMBRES_REGION"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(ConfigLoader::new(FileFormat::Json).parse("{").is_err());
        assert!(ConfigLoader::new(FileFormat::Toml).parse("mode = ").is_err());
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(FileFormat::from_extension("json"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_extension("TOML"), Some(FileFormat::Toml));
        assert_eq!(FileFormat::from_extension("env"), Some(FileFormat::Env));
        assert_eq!(FileFormat::from_extension("unknown"), None);
        assert_eq!(FileFormat::from_path(Path::new("conf/.env")), Some(FileFormat::Env));
        assert!(ConfigLoader::auto("nombres.yaml").is_err());
        assert_eq!(ConfigLoader::auto("nombres.toml").unwrap().format(), FileFormat::Toml);
    }
}

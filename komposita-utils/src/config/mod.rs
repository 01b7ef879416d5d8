//! Configuration loading
//!
//! Reads typed configuration from TOML, JSON or YAML, chosen by file
//! extension, and layers file values over compiled-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yml" | "yaml" => Ok(Self::Yaml),
            _ => Err(crate::UtilError::Config(format!(
                "Unsupported config format: '{extension}' ({})",
                path.display()
            ))),
        }
    }

    /// Parse `content` in this format
    pub fn parse<T>(self, content: &str) -> crate::Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        match self {
            Self::Toml => toml::from_str(content)
                .map_err(|e| crate::UtilError::Config(format!("TOML parse error: {e}"))),
            Self::Json => serde_json::from_str(content)
                .map_err(|e| crate::UtilError::Config(format!("JSON parse error: {e}"))),
            Self::Yaml => serde_yaml::from_str(content)
                .map_err(|e| crate::UtilError::Config(format!("YAML parse error: {e}"))),
        }
    }
}

/// Load configuration from file
pub fn load_config<T>(path: &Path) -> crate::Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading configuration");
    format.parse(&content)
}

/// Merge two JSON values (second overrides first, arrays are replaced)
fn merge_json_values(base: &mut serde_json::Value, override_value: serde_json::Value) {
    match (base, override_value) {
        (serde_json::Value::Object(base_obj), serde_json::Value::Object(override_obj)) => {
            for (key, value) in override_obj {
                match base_obj.get_mut(&key) {
                    Some(existing) => merge_json_values(existing, value),
                    None => {
                        base_obj.insert(key, value);
                    }
                }
            }
        }
        (base_value, override_value) => {
            *base_value = override_value;
        }
    }
}

/// Configuration builder for fluent API
#[derive(Debug)]
pub struct ConfigBuilder<T> {
    config: T,
}

impl<T> ConfigBuilder<T>
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    /// Create new config builder with defaults
    pub fn new() -> Self {
        Self {
            config: T::default(),
        }
    }

    /// Load from file and merge
    ///
    /// The file is merged as a raw document, so keys it leaves out keep
    /// their current values even inside nested tables. An empty document
    /// overrides nothing.
    pub fn load_file(mut self, path: &Path) -> crate::Result<Self> {
        let file_value: serde_json::Value = load_config(path)?;
        if file_value.is_null() {
            tracing::debug!(path = %path.display(), "empty configuration file, keeping defaults");
            return Ok(self);
        }
        let mut base_value = serde_json::to_value(&self.config).map_err(|e| {
            crate::UtilError::Serialization(format!("Base serialization error: {e}"))
        })?;
        merge_json_values(&mut base_value, file_value);
        self.config = serde_json::from_value(base_value)
            .map_err(|e| crate::UtilError::Config(format!("{}: {e}", path.display())))?;
        Ok(self)
    }

    /// Load from file when a path is given, keep the current values otherwise
    pub fn load_optional(self, path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => self.load_file(path),
            None => Ok(self),
        }
    }

    /// Finish building
    pub fn build(self) -> T {
        self.config
    }
}

impl<T> Default for ConfigBuilder<T>
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::tempdir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestConfig {
        name: String,
        limit: usize,
        items: Vec<String>,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                limit: 30,
                items: vec!["a".to_string()],
            }
        }
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path(Path::new("x.toml")).ok(), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("x.YML")).ok(), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("x.json")).ok(), Some(ConfigFormat::Json));
        assert!(ConfigFormat::from_path(Path::new("x.ini")).is_err());
    }

    #[test]
    fn test_load_config_toml() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("test.toml");
        std::fs::write(&config_path, "name = \"test\"\nlimit = 50\nitems = [\"x\", \"y\"]\n")?;

        let config: TestConfig = load_config(&config_path)?;

        assert_eq!(config.name, "test");
        assert_eq!(config.limit, 50);
        assert_eq!(config.items, vec!["x", "y"]);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("partial.json");
        std::fs::write(&config_path, r#"{ "limit": 7 }"#)?;

        let config: TestConfig = ConfigBuilder::new().load_file(&config_path)?.build();

        assert_eq!(config.limit, 7);
        assert_eq!(config.name, "default");
        assert_eq!(config.items, vec!["a"]);
        Ok(())
    }

    #[test]
    fn test_config_builder_yaml() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("builder.yaml");
        std::fs::write(&config_path, "name: builder\nitems:\n  - one\n  - two\n")?;

        let config: TestConfig = ConfigBuilder::new()
            .load_optional(Some(config_path.as_path()))?
            .build();

        assert_eq!(config.name, "builder");
        assert_eq!(config.items, vec!["one", "two"]);
        Ok(())
    }

    #[test]
    fn test_nested_arrays_are_replaced_not_appended() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("items.toml");
        std::fs::write(&config_path, "items = []\n")?;

        let config: TestConfig = ConfigBuilder::new().load_file(&config_path)?.build();

        assert!(config.items.is_empty());
        assert_eq!(config.limit, 30);
        Ok(())
    }

    #[test]
    fn test_empty_yaml_file_keeps_defaults() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("empty.yaml");
        std::fs::write(&config_path, "")?;

        let config: TestConfig = ConfigBuilder::new().load_file(&config_path)?.build();

        assert_eq!(config, TestConfig::default());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_config_error() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("broken.toml");
        std::fs::write(&config_path, "limit = [")?;

        let result: crate::Result<TestConfig> = load_config(&config_path);
        assert!(matches!(result, Err(crate::UtilError::Config(_))));
        Ok(())
    }
}

//! Loading of `camelint.toml` configuration files.
//!
//! ```toml
//! [rules.camelcase]
//! properties = "never"
//!
//! [rules.some-other-rule]
//! enabled = false
//! ```
//!
//! Every key of a rule table other than `enabled` is passed to the rule as a
//! string property.

mod error;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use error::ConfigError;

/// File name searched for when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "camelint.toml";

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    rules: BTreeMap<String, RuleConfig>,
}

/// Settings of a single rule.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(flatten)]
    pub options: BTreeMap<String, String>,
}

fn default_enabled() -> bool {
    true
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            options: BTreeMap::new(),
        }
    }
}

impl RuleConfig {
    /// Borrow the options as the `name -> value` map rules are built from.
    pub fn properties(&self) -> HashMap<&str, &str> {
        self.options
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

impl Config {
    /// Parse configuration from TOML text. `path` is only used in errors.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Look for [`CONFIG_FILE_NAME`] in `dir`. A missing file is not an error.
    pub fn discover(dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if !candidate.is_file() {
            return Ok(None);
        }
        let config = Self::load(&candidate)?;
        Ok(Some((candidate, config)))
    }

    pub fn rule(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }

    /// Rules are enabled unless their table says `enabled = false`.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.rules.get(name).is_none_or(|rule| rule.enabled)
    }

    /// Names of every rule table in the file.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Override a single option, creating the rule table if needed.
    pub fn set_option(&mut self, rule: &str, key: &str, value: &str) {
        self.rules
            .entry(rule.to_string())
            .or_default()
            .options
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Config, ConfigError> {
        Config::from_toml_str(text, Path::new("camelint.toml"))
    }

    #[test]
    fn test_empty_config() {
        let config = parse("").unwrap();
        assert!(config.is_enabled("camelcase"));
        assert!(config.rule("camelcase").is_none());
    }

    #[test]
    fn test_rule_options() {
        let config = parse(
            r#"
[rules.camelcase]
properties = "never"
"#,
        )
        .unwrap();

        let rule = config.rule("camelcase").unwrap();
        assert!(rule.enabled);
        assert_eq!(rule.properties().get("properties"), Some(&"never"));
    }

    #[test]
    fn test_disabled_rule() {
        let config = parse(
            r#"
[rules.camelcase]
enabled = false
"#,
        )
        .unwrap();

        assert!(!config.is_enabled("camelcase"));
        assert!(config.rule("camelcase").unwrap().options.is_empty());
    }

    #[test]
    fn test_unknown_top_level_key_is_an_error() {
        let err = parse("colour = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("camelint.toml"));
    }

    #[test]
    fn test_non_string_option_is_an_error() {
        let err = parse(
            r#"
[rules.camelcase]
properties = 3
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_set_option_overrides() {
        let mut config = parse(
            r#"
[rules.camelcase]
properties = "never"
"#,
        )
        .unwrap();

        config.set_option("camelcase", "properties", "always");
        let rule = config.rule("camelcase").unwrap();
        assert_eq!(rule.properties().get("properties"), Some(&"always"));
    }

    #[test]
    fn test_discover() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::discover(dir.path()).unwrap().is_none());

        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[rules.camelcase]\nproperties = \"never\"\n",
        )
        .unwrap();

        let (path, config) = Config::discover(dir.path()).unwrap().unwrap();
        assert!(path.ends_with(CONFIG_FILE_NAME));
        assert_eq!(
            config.rule("camelcase").unwrap().options.get("properties"),
            Some(&"never".to_string())
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

//! The optional `jsongen.toml` project configuration.

use std::{path::{Path, PathBuf}, str::FromStr};

use jsongen_model::Vocabulary;
use serde::Deserialize;

use crate::{Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "jsongen.toml";

/// Root of `jsongen.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Known and cast leaf type names
    pub vocabulary: Vocabulary,
    pub output: OutputConfig,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Embed the generation time in file headers
    pub timestamp: bool,
    /// Write every generated file into this directory instead of next to its source
    pub directory: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timestamp: true,
            directory: None,
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a config file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load `path` if given, else `jsongen.toml` in `dir` when it exists,
    /// else the defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = dir.join(CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a config with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse_config(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let vocabulary = &self.vocabulary;
        if let Some(both) = vocabulary.known.iter().find(|name| vocabulary.is_cast(name)) {
            return Err(Error::validation(
                format!("'{}' is listed as both a known and a cast type", both),
                src,
                filename,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.output.timestamp);
        assert!(config.vocabulary.is_known("AnyObject"));
    }

    #[test]
    fn test_full_config() {
        let config: Config = r#"
            [vocabulary]
            known = ["AnyObject"]
            cast = ["JsonObject", "JsonArray", "JsonString"]

            [output]
            timestamp = false
            directory = "Generated"
        "#
        .parse()
        .unwrap();

        assert!(!config.vocabulary.is_known("AnyJson"));
        assert!(config.vocabulary.is_cast("JsonString"));
        assert!(!config.output.timestamp);
        assert_eq!(config.output.directory, Some(PathBuf::from("Generated")));
    }

    #[test]
    fn test_partial_vocabulary_keeps_other_default() {
        let config: Config = "[vocabulary]\nknown = [\"AnyObject\"]\n".parse().unwrap();
        assert!(config.vocabulary.is_cast("JsonObject"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "[output]\nsuffix = \"x\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::ParseConfig { .. }));
    }

    #[test]
    fn test_overlapping_vocabulary_is_rejected() {
        let err = "[vocabulary]\nknown = [\"JsonObject\"]\n"
            .parse::<Config>()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "'JsonObject' is listed as both a known and a cast type"
        );
    }

    #[test]
    fn test_discover() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());

        fs::write(dir.path().join(CONFIG_FILE), "[output]\ntimestamp = false\n").unwrap();
        assert!(!Config::discover(None, dir.path()).unwrap().output.timestamp);

        let missing = dir.path().join("other.toml");
        assert!(Config::discover(Some(&missing), dir.path()).is_err());
    }
}

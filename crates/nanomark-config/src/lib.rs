use nanomark_engine::{AbbreviationTable, ConvertOptions, HtmlConverter, ParserOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Output settings for the HTML stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlSettings {
    /// Emit XHTML instead of HTML5.
    pub xhtml: bool,
    /// Prefix for ids generated by embeds.
    pub id_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserOptions,
    pub html: HtmlSettings,
    /// Site-wide abbreviations, term to description.
    pub abbreviations: BTreeMap<String, String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/nanomark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in a user-supplied path.
    /// Returns the path unchanged if a variable is undefined.
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => path.to_path_buf(),
        }
    }

    pub fn abbreviation_table(&self) -> AbbreviationTable {
        let mut table = AbbreviationTable::new();
        for (term, description) in &self.abbreviations {
            table.insert(term, description);
        }
        table
    }

    /// An HTML stage configured from this file. No placeholder resolver is set.
    pub fn html_converter(&self) -> HtmlConverter {
        HtmlConverter::new()
            .with_parser_options(self.parser.clone())
            .with_abbreviations(self.abbreviation_table())
            .with_xhtml(self.html.xhtml)
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            id_prefix: self.html.id_prefix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanomark_engine::ContentConverter;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    fn sample() -> Config {
        Config {
            parser: ParserOptions {
                hard_line_breaks: true,
                ..ParserOptions::default()
            },
            html: HtmlSettings {
                xhtml: true,
                id_prefix: Some("post-42".to_string()),
            },
            abbreviations: BTreeMap::from([(
                "CMS".to_string(),
                "Content Management System".to_string(),
            )]),
        }
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/nanomark/config.toml"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.parser.enable_links);
        assert!(!config.html.xhtml);
    }

    #[test]
    fn test_partial_sections() {
        let config_content = r#"
[parser]
enable_links = false

[abbreviations]
W3C = "World Wide Web Consortium"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert!(!config.parser.enable_links);
        assert!(!config.parser.hard_line_breaks);
        assert_eq!(config.html, HtmlSettings::default());
        assert_eq!(
            config.abbreviations.get("W3C").map(String::as_str),
            Some("World Wide Web Consortium")
        );
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(Path::new("~/test/config.toml"));

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/config.toml"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("NANOMARK_TEST_DIR", "/test/env/path");
        }

        let expanded = Config::expand_path(Path::new("$NANOMARK_TEST_DIR/config.toml"));
        assert_eq!(expanded, PathBuf::from("/test/env/path/config.toml"));

        unsafe {
            env::remove_var("NANOMARK_TEST_DIR");
        }
    }

    #[test]
    fn test_expand_path_with_undefined_var() {
        let path = Path::new("$NANOMARK_SURELY_UNDEFINED/config.toml");
        assert_eq!(Config::expand_path(path), path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parser]\nenable_links = \"maybe\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = sample();

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_html_converter_uses_settings() {
        let config = sample();
        let html = config
            .html_converter()
            .convert("A CMS  \nworks\n\n---", &config.convert_options())
            .unwrap();

        assert_eq!(
            html,
            "<p>A <abbr title=\"Content Management System\">CMS</abbr><br />\nworks</p>\n<hr />\n"
        );
    }

    #[test]
    fn test_convert_options() {
        assert_eq!(
            sample().convert_options(),
            ConvertOptions::with_id_prefix("post-42")
        );
        assert_eq!(Config::default().convert_options().id_prefix, None);
    }
}

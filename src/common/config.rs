//! Конфигурация для rustdb-lexer
//!
//! Настройки диалекта, которые влияют на работу распознавателей:
//! разделители строк и идентификаторов, поддержка комментариев.

use crate::common::{Error, Result};
use crate::lexer::Symbol;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_STRING_DELIMITER: char = '\'';
const DEFAULT_IDENTIFIER_DELIMITER: char = '"';

/// Конфигурация лексического анализатора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Разделитель строковых литералов
    pub string_delimiter: char,
    /// Разделитель идентификаторов в кавычках
    pub identifier_delimiter: char,
    /// Разрешить идентификаторы в кавычках
    pub quoted_identifiers: bool,
    /// Пропускать комментарии `--` и `/* */`
    pub comments: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            string_delimiter: DEFAULT_STRING_DELIMITER,
            identifier_delimiter: DEFAULT_IDENTIFIER_DELIMITER,
            quoted_identifiers: true,
            comments: true,
        }
    }
}

impl LexerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LexerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Накладывает переменные окружения `RUSTDB_LEXER_*` поверх текущих
    /// значений: заданная переменная всегда побеждает
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup("RUSTDB_LEXER_STRING_DELIMITER") {
            self.string_delimiter = parse_delimiter("RUSTDB_LEXER_STRING_DELIMITER", &value)?;
        }

        if let Some(value) = lookup("RUSTDB_LEXER_IDENTIFIER_DELIMITER") {
            self.identifier_delimiter =
                parse_delimiter("RUSTDB_LEXER_IDENTIFIER_DELIMITER", &value)?;
        }

        if let Some(value) = lookup("RUSTDB_LEXER_QUOTED_IDENTIFIERS") {
            self.quoted_identifiers = parse_flag("RUSTDB_LEXER_QUOTED_IDENTIFIERS", &value)?;
        }

        if let Some(value) = lookup("RUSTDB_LEXER_COMMENTS") {
            self.comments = parse_flag("RUSTDB_LEXER_COMMENTS", &value)?;
        }

        Ok(self)
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        check_delimiter("string_delimiter", self.string_delimiter)?;
        check_delimiter("identifier_delimiter", self.identifier_delimiter)?;

        if self.string_delimiter == self.identifier_delimiter {
            return Err(Error::configuration(format!(
                "string and identifier delimiters must differ, both are `{}`",
                self.string_delimiter
            )));
        }

        Ok(())
    }
}

/// Разделитель не должен пересекаться с началом других токенов
fn check_delimiter(name: &str, delimiter: char) -> Result<()> {
    let clashes = delimiter.is_whitespace()
        || delimiter.is_alphanumeric()
        || delimiter == '_'
        || delimiter == '.'
        || delimiter == '-'
        || delimiter == '/'
        || Symbol::ALL.iter().any(|symbol| symbol.as_str().starts_with(delimiter));

    if clashes {
        return Err(Error::configuration(format!(
            "{} `{}` clashes with another token class",
            name, delimiter
        )));
    }

    Ok(())
}

fn parse_delimiter(var: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(Error::configuration(format!(
            "{} must be a single character, got `{}`",
            var, value
        ))),
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::configuration(format!(
            "{} must be a boolean, got `{}`",
            var, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LexerConfig::default();
        assert_eq!(config.string_delimiter, '\'');
        assert_eq!(config.identifier_delimiter, '"');
        assert!(config.quoted_identifiers);
        assert!(config.comments);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = LexerConfig::default();
        config.identifier_delimiter = '\'';
        assert!(config.validate().is_err());

        config = LexerConfig::default();
        config.string_delimiter = ' ';
        assert!(config.validate().is_err());

        config = LexerConfig::default();
        config.string_delimiter = ';';
        assert!(config.validate().is_err());

        config = LexerConfig::default();
        config.identifier_delimiter = '7';
        assert!(config.validate().is_err());

        config = LexerConfig::default();
        config.identifier_delimiter = '`';
        assert!(config.validate().is_ok());
    }

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_env_overrides_file_values() {
        let file = LexerConfig {
            identifier_delimiter: '`',
            comments: false,
            ..LexerConfig::default()
        };

        // Переменные возвращают значения по умолчанию поверх файла
        let config = file
            .apply_vars(vars(&[
                ("RUSTDB_LEXER_COMMENTS", "true"),
                ("RUSTDB_LEXER_IDENTIFIER_DELIMITER", "\""),
            ]))
            .unwrap();
        assert!(config.comments);
        assert_eq!(config.identifier_delimiter, '"');
    }

    #[test]
    fn test_unset_env_keeps_file_values() {
        let file = LexerConfig {
            identifier_delimiter: '`',
            quoted_identifiers: false,
            ..LexerConfig::default()
        };

        let config = file.clone().apply_vars(vars(&[])).unwrap();
        assert_eq!(config, file);

        let config = file
            .apply_vars(vars(&[("RUSTDB_LEXER_STRING_DELIMITER", "$")]))
            .unwrap();
        assert_eq!(config.string_delimiter, '$');
        assert_eq!(config.identifier_delimiter, '`');
        assert!(!config.quoted_identifiers);
    }

    #[test]
    fn test_invalid_env_value() {
        let result =
            LexerConfig::default().apply_vars(vars(&[("RUSTDB_LEXER_COMMENTS", "maybe")]));
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_config_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lexer.toml");

        let mut config = LexerConfig::default();
        config.identifier_delimiter = '`';
        config.quoted_identifiers = false;
        config.to_file(&path).unwrap();

        let loaded = LexerConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lexer.toml");
        std::fs::write(&path, "comments = false\n").unwrap();

        let loaded = LexerConfig::from_file(&path).unwrap();
        assert!(!loaded.comments);
        assert_eq!(loaded.string_delimiter, '\'');
    }

    #[test]
    fn test_invalid_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lexer.toml");
        std::fs::write(&path, "comments = \"maybe\"\n").unwrap();

        let result = LexerConfig::from_file(&path);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_delimiter("X", "`").unwrap(), '`');
        assert!(parse_delimiter("X", "``").is_err());
        assert!(parse_delimiter("X", "").is_err());
        assert!(parse_flag("X", "TRUE").unwrap());
        assert!(!parse_flag("X", "off").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }
}

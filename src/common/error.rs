//! Обработка ошибок для rustdb-lexer

use crate::lexer::Position;
use thiserror::Error;

/// Ошибка лексического анализа: ни один распознаватель не сработал
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to lex token{}, at {}", after_hint(.after), .position)]
pub struct LexError {
    /// Позиция символа, на котором остановился анализ
    pub position: Position,
    /// Текст последнего успешно прочитанного токена
    pub after: Option<String>,
}

impl LexError {
    pub fn new(position: Position, after: Option<String>) -> Self {
        Self { position, after }
    }
}

fn after_hint(after: &Option<String>) -> String {
    match after {
        Some(value) => format!(" after `{}`", value),
        None => String::new(),
    }
}

/// Основной тип ошибки для rustdb-lexer
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка лексического анализа
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Тип результата для rustdb-lexer
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::configuration(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::configuration(err.to_string())
    }
}

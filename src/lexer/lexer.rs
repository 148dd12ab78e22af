//! Драйвер лексического анализа
//!
//! Пробует распознаватели по порядку на текущем курсоре. Первый сработавший
//! сдвигает курсор, и перебор начинается заново. Если не сработал ни один,
//! анализ останавливается с ошибкой: частичный список токенов не
//! возвращается.

use crate::common::{LexError, LexerConfig, Result};
use crate::lexer::cursor::Cursor;
use crate::lexer::recognizers::Recognizer;
use crate::lexer::token::Token;
use rayon::prelude::*;

/// Лексический анализатор SQL
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    config: LexerConfig,
}

impl Lexer {
    /// Создает анализатор с настройками по умолчанию
    pub fn new() -> Self {
        Self::default()
    }

    /// Создает анализатор с заданной конфигурацией
    pub fn with_config(config: LexerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Возвращает действующую конфигурацию
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Разбивает исходный текст на токены
    pub fn lex(&self, source: &str) -> std::result::Result<Vec<Token>, LexError> {
        log::debug!("Лексический анализ: {} байт", source.len());

        let mut tokens: Vec<Token> = Vec::new();
        let mut cur = Cursor::start();

        'lex: while !cur.is_eof(source) {
            for recognizer in Recognizer::ORDER {
                if let Some(matched) = recognizer.attempt(source, cur, &self.config) {
                    cur = matched.cursor;

                    if let Some(token) = matched.token {
                        log::trace!("{:?}: {}", recognizer, token);
                        tokens.push(token);
                    }

                    continue 'lex;
                }
            }

            let err = LexError::new(cur.position, tokens.last().map(|t| t.value.clone()));
            log::debug!("Ошибка лексического анализа: {}", err);
            return Err(err);
        }

        log::debug!("Лексический анализ завершен: {} токенов", tokens.len());
        Ok(tokens)
    }

    /// Разбирает независимые тексты параллельно; результаты идут в порядке
    /// входных данных
    pub fn lex_many<S>(&self, sources: &[S]) -> Vec<std::result::Result<Vec<Token>, LexError>>
    where
        S: AsRef<str> + Sync,
    {
        sources
            .par_iter()
            .map(|source| self.lex(source.as_ref()))
            .collect()
    }
}

/// Разбивает текст на токены с настройками по умолчанию
pub fn lex(source: &str) -> std::result::Result<Vec<Token>, LexError> {
    Lexer::new().lex(source)
}

//! CLI интерфейс для rustdb-lexer
//!
//! Разбивает SQL из аргумента, файла или stdin на токены и печатает их
//! в текстовом виде или как JSON.

use crate::common::{Error, LexerConfig, Result};
use crate::lexer::{Lexer, Token};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Файл конфигурации, который ищется в рабочей директории
const DEFAULT_CONFIG_FILE: &str = "lexer.toml";

/// Формат вывода токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Одна строка на токен
    Text,
    /// JSON массив токенов
    Json,
}

/// rustdb-lexer - лексический анализатор SQL
#[derive(Debug, Parser)]
#[command(name = "rustdb-lexer")]
#[command(about = "Tokenize SQL text with the rustdb lexer")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Формат вывода
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Не пропускать комментарии
    #[arg(long)]
    pub no_comments: bool,

    /// Запретить идентификаторы в кавычках
    #[arg(long)]
    pub no_quoted_identifiers: bool,

    /// Файл с SQL текстом
    #[arg(short, long, value_name = "FILE", conflicts_with = "sql")]
    pub file: Option<PathBuf>,

    /// SQL текст; если не задан вместе с --file, читается stdin
    pub sql: Option<String>,
}

impl Cli {
    /// Инициализирует логирование: `--log-level` важнее `RUST_LOG`
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or("warn");
        let mut builder = env_logger::Builder::from_env(env);

        if let Some(level) = &self.log_level {
            builder.parse_filters(level);
        }

        // Логгер мог быть уже установлен (например, в тестах)
        let _ = builder.try_init();
    }

    /// Загружает конфигурацию: файл, затем переменные окружения, затем флаги
    pub fn load_config(&self) -> Result<LexerConfig> {
        let mut config = match &self.config {
            Some(path) => LexerConfig::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                LexerConfig::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => LexerConfig::default(),
        };

        config = config.apply_env()?;

        if self.no_comments {
            config.comments = false;
        }
        if self.no_quoted_identifiers {
            config.quoted_identifiers = false;
        }

        config.validate()?;
        log::debug!("Конфигурация лексера: {:?}", config);
        Ok(config)
    }

    /// Читает исходный текст
    pub fn read_source(&self) -> Result<String> {
        if let Some(sql) = &self.sql {
            return Ok(sql.clone());
        }

        if let Some(path) = &self.file {
            return Ok(std::fs::read_to_string(path)?);
        }

        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    }

    /// Выполняет команду и возвращает текст для вывода
    pub fn run(&self) -> Result<String> {
        let lexer = Lexer::with_config(self.load_config()?)?;
        let source = self.read_source()?;
        let tokens = lexer.lex(&source)?;
        render(&tokens, self.format)
    }

    /// Выполняет команду и печатает результат
    pub fn execute(&self) -> Result<()> {
        let output = self.run()?;
        println!("{}", output);
        Ok(())
    }
}

/// Форматирует токены для вывода
pub fn render(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(tokens
            .iter()
            .map(|token| format!("{} {} @{}", token.kind, token.value, token.position))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(tokens).map_err(Error::from),
    }
}

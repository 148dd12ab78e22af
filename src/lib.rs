//! rustdb-lexer - лексический анализатор SQL для rustdb
//!
//! Преобразует текст запроса в упорядоченную последовательность токенов с
//! позициями. Разбор токенов в операторы и выполнение запросов находятся
//! за пределами этого крейта.
//!
//! ```
//! use rustdb_lexer::{lex, TokenKind};
//!
//! let tokens = lex("select * from users;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[3].value, "users");
//! ```

pub mod cli;
pub mod common;
pub mod lexer;

pub use common::{Error, LexError, LexerConfig, Result};
pub use lexer::{lex, Cursor, Keyword, Lexer, Position, Symbol, Token, TokenKind};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Лексический анализатор SQL для rustdb
//!
//! Преобразует входной текст в последовательность токенов: ключевые слова,
//! символы, идентификаторы, строковые и числовые литералы.

pub mod cursor;
pub mod lexer;
pub mod recognizers;
pub mod token;

#[cfg(test)]
pub mod tests;

// Переэкспортируем основные типы
pub use cursor::{Cursor, Position};
pub use lexer::{lex, Lexer};
pub use recognizers::{Match, Recognizer};
pub use token::{Keyword, Symbol, Token, TokenKind};

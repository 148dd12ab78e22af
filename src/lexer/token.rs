//! Токены для SQL лексера rustdb
//!
//! Определяет виды токенов и закрытые словари ключевых слов и символов.

use crate::lexer::cursor::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Вид токена
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Symbol,
    Identifier,
    String,
    Numeric,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Numeric => "NUMERIC",
        };
        write!(f, "{}", name)
    }
}

/// Токен с видом, текстом и позицией первого символа
///
/// Два токена равны, если совпадают текст и вид; позиция в сравнении
/// не участвует.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
        }
    }

    /// Ключевое слово, если токен им является
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => self.value.parse().ok(),
            _ => None,
        }
    }

    /// Символ, если токен им является
    pub fn symbol(&self) -> Option<Symbol> {
        match self.kind {
            TokenKind::Symbol => self.value.parse().ok(),
            _ => None,
        }
    }

    /// Текст токена в виде, пригодном для повторного лексического анализа.
    ///
    /// Строки и идентификаторы в кавычках получают разделители обратно,
    /// а разделитель внутри значения удваивается.
    pub fn to_source(&self, string_delimiter: char, identifier_delimiter: char) -> String {
        match self.kind {
            TokenKind::String => quote(&self.value, string_delimiter),
            TokenKind::Identifier if !is_plain_identifier(&self.value) => {
                quote(&self.value, identifier_delimiter)
            }
            _ => self.value.clone(),
        }
    }
}

fn quote(value: &str, delimiter: char) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(delimiter);
    for ch in value.chars() {
        if ch == delimiter {
            quoted.push(delimiter);
        }
        quoted.push(ch);
    }
    quoted.push(delimiter);
    quoted
}

/// Может ли символ продолжать идентификатор
pub fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Может ли символ начинать идентификатор
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Читается ли текст как идентификатор без кавычек
fn is_plain_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => {
            chars.all(is_identifier_char) && value.parse::<Keyword>().is_err()
        }
        _ => false,
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.kind == other.kind
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.value.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') at {}", self.kind, self.value, self.position)
    }
}

/// Ключевые слова языка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    As,
    Table,
    Create,
    Insert,
    Into,
    Values,
    Int,
    Text,
}

impl Keyword {
    pub const ALL: [Keyword; 10] = [
        Keyword::Select,
        Keyword::From,
        Keyword::As,
        Keyword::Table,
        Keyword::Create,
        Keyword::Insert,
        Keyword::Into,
        Keyword::Values,
        Keyword::Int,
        Keyword::Text,
    ];

    /// Каноническое написание (в нижнем регистре)
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Select => "select",
            Keyword::From => "from",
            Keyword::As => "as",
            Keyword::Table => "table",
            Keyword::Create => "create",
            Keyword::Insert => "insert",
            Keyword::Into => "into",
            Keyword::Values => "values",
            Keyword::Int => "int",
            Keyword::Text => "text",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::ALL
            .iter()
            .copied()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown keyword: {}", s))
    }
}

/// Символы языка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Semicolon,  // ;
    Comma,      // ,
    Asterisk,   // *
    LeftParen,  // (
    RightParen, // )
}

impl Symbol {
    pub const ALL: [Symbol; 5] = [
        Symbol::Semicolon,
        Symbol::Comma,
        Symbol::Asterisk,
        Symbol::LeftParen,
        Symbol::RightParen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Semicolon => ";",
            Symbol::Comma => ",",
            Symbol::Asterisk => "*",
            Symbol::LeftParen => "(",
            Symbol::RightParen => ")",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::ALL
            .iter()
            .copied()
            .find(|symbol| symbol.as_str() == s)
            .ok_or_else(|| format!("Unknown symbol: {}", s))
    }
}

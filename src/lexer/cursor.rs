//! Позиция и курсор лексического анализатора
//!
//! Курсор является значением, а не изменяемым объектом: распознаватель получает его
//! по значению и возвращает новый. Строки и столбцы считаются с нуля.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Позиция символа в исходном тексте (строка и столбец, с нуля)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn start() -> Self {
        Self::new(0, 0)
    }

    /// Позиция после символа `ch`
    pub fn advanced(self, ch: char) -> Self {
        if ch == '\n' {
            Self::new(self.line + 1, 0)
        } else {
            Self::new(self.line, self.column + 1)
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Указатель чтения: байтовое смещение плюс кэшированная позиция
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    pub offset: usize,
    pub position: Position,
}

impl Cursor {
    pub fn new(offset: usize, position: Position) -> Self {
        Self { offset, position }
    }

    pub fn start() -> Self {
        Self::new(0, Position::start())
    }

    /// Курсор после символа `ch`, который должен стоять на текущем смещении
    pub fn advance(self, ch: char) -> Self {
        Self {
            offset: self.offset + ch.len_utf8(),
            position: self.position.advanced(ch),
        }
    }

    /// Курсор после всех символов `text`
    pub fn advance_str(self, text: &str) -> Self {
        text.chars().fold(self, Cursor::advance)
    }

    /// Непрочитанный остаток исходного текста
    pub fn rest(self, source: &str) -> &str {
        &source[self.offset..]
    }

    /// Текущий символ, если текст не закончился
    pub fn peek(self, source: &str) -> Option<char> {
        self.rest(source).chars().next()
    }

    pub fn is_eof(self, source: &str) -> bool {
        self.offset >= source.len()
    }
}

// Курсоры сравниваются только по смещению
impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for Cursor {}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

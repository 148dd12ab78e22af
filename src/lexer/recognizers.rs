//! Распознаватели токенов
//!
//! Каждый распознаватель является чистой функцией от исходного текста и курсора.
//! `None` означает «не подошло»: курсор вызывающего остаётся прежним, и
//! драйвер пробует следующий распознаватель. `Some(Match)` может не нести
//! токена: так пропускаются пробелы и комментарии.

use crate::common::LexerConfig;
use crate::lexer::cursor::Cursor;
use crate::lexer::token::{
    is_identifier_char, is_identifier_start, Keyword, Symbol, Token, TokenKind,
};

/// Результат успешного распознавания
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Токен, если распознаватель его породил
    pub token: Option<Token>,
    /// Курсор после распознанного фрагмента
    pub cursor: Cursor,
}

impl Match {
    pub fn token(token: Token, cursor: Cursor) -> Self {
        Self {
            token: Some(token),
            cursor,
        }
    }

    /// Фрагмент прочитан, но токена нет
    pub fn skip(cursor: Cursor) -> Self {
        Self {
            token: None,
            cursor,
        }
    }
}

/// Распознаватели в порядке, в котором их пробует драйвер
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognizer {
    Keyword,
    String,
    Symbol,
    Identifier,
    Numeric,
}

impl Recognizer {
    /// Порядок важен: ключевые слова раньше идентификаторов,
    /// строки и символы раньше чисел.
    pub const ORDER: [Recognizer; 5] = [
        Recognizer::Keyword,
        Recognizer::String,
        Recognizer::Symbol,
        Recognizer::Identifier,
        Recognizer::Numeric,
    ];

    pub fn attempt(self, source: &str, cursor: Cursor, config: &LexerConfig) -> Option<Match> {
        match self {
            Recognizer::Keyword => lex_keyword(source, cursor),
            Recognizer::String => lex_string(source, cursor, config.string_delimiter),
            Recognizer::Symbol => lex_symbol(source, cursor, config.comments),
            Recognizer::Identifier => lex_identifier(
                source,
                cursor,
                config
                    .quoted_identifiers
                    .then_some(config.identifier_delimiter),
            ),
            Recognizer::Numeric => lex_numeric(source, cursor),
        }
    }
}

/// Читает числовой литерал: цифры, не более одной точки и не более одного
/// маркера экспоненты (`e`/`E`) с необязательным знаком.
///
/// После маркера экспоненты точка уже недопустима. Маркер в самом конце
/// текста, вторая точка и второй маркер отклоняют весь литерал. Знак после
/// маркера забирается без проверки того, что за ним идут цифры.
pub fn lex_numeric(source: &str, ic: Cursor) -> Option<Match> {
    let bytes = source.as_bytes();
    let start = ic.offset;

    let mut period_found = match bytes.get(start) {
        Some(b) if b.is_ascii_digit() => false,
        Some(b'.') => true,
        _ => return None,
    };
    let mut exp_marker_found = false;
    let mut end = start + 1;

    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => end += 1,
            b'.' => {
                if period_found {
                    return None;
                }
                period_found = true;
                end += 1;
            }
            b'e' | b'E' => {
                if exp_marker_found {
                    return None;
                }
                period_found = true;
                exp_marker_found = true;

                if end == bytes.len() - 1 {
                    return None;
                }
                end += 1;

                if matches!(bytes[end], b'+' | b'-') {
                    end += 1;
                }
            }
            _ => break,
        }
    }

    // Все прочитанные байты ASCII, поэтому срез по границам символов
    let text = &source[start..end];
    let token = Token::new(TokenKind::Numeric, text, ic.position);
    Some(Match::token(token, ic.advance_str(text)))
}

/// Читает литерал, ограниченный символом `delimiter`.
///
/// Удвоенный разделитель внутри литерала означает один символ разделителя.
/// Возвращает раскрытое значение и курсор после закрывающего разделителя;
/// незакрытый литерал не распознаётся.
pub fn lex_delimited(source: &str, ic: Cursor, delimiter: char) -> Option<(String, Cursor)> {
    let mut chars = ic.rest(source).chars().peekable();

    if chars.next()? != delimiter {
        return None;
    }

    let mut cur = ic.advance(delimiter);
    let mut value = String::new();

    while let Some(ch) = chars.next() {
        cur = cur.advance(ch);

        if ch == delimiter {
            if chars.peek() == Some(&delimiter) {
                chars.next();
                cur = cur.advance(delimiter);
                value.push(delimiter);
                continue;
            }

            return Some((value, cur));
        }

        value.push(ch);
    }

    None
}

/// Строковый литерал
pub fn lex_string(source: &str, ic: Cursor, delimiter: char) -> Option<Match> {
    let (value, cur) = lex_delimited(source, ic, delimiter)?;
    Some(Match::token(
        Token::new(TokenKind::String, value, ic.position),
        cur,
    ))
}

/// Читает символ из словаря (самое длинное совпадение), а также пропускает
/// пробелы и, если `comments`, комментарии.
pub fn lex_symbol(source: &str, ic: Cursor, comments: bool) -> Option<Match> {
    let ch = ic.peek(source)?;

    if ch.is_whitespace() {
        return Some(Match::skip(skip_while(source, ic, char::is_whitespace)));
    }

    if comments {
        if let Some(cur) = skip_comment(source, ic) {
            return Some(Match::skip(cur));
        }
    }

    let rest = ic.rest(source);
    let symbol = Symbol::ALL
        .iter()
        .copied()
        .filter(|symbol| rest.starts_with(symbol.as_str()))
        .max_by_key(|symbol| symbol.as_str().len())?;

    let text = symbol.as_str();
    Some(Match::token(
        Token::new(TokenKind::Symbol, text, ic.position),
        ic.advance_str(text),
    ))
}

/// Пропускает комментарий `-- ...` (до перевода строки) или `/* ... */`
fn skip_comment(source: &str, ic: Cursor) -> Option<Cursor> {
    let rest = ic.rest(source);

    if rest.starts_with("--") {
        return Some(skip_while(source, ic, |ch| ch != '\n'));
    }

    if rest.starts_with("/*") {
        let end = rest[2..].find("*/")? + 4;
        return Some(ic.advance_str(&rest[..end]));
    }

    None
}

/// Ключевое слово без учёта регистра.
///
/// Совпадение засчитывается, только если следующий символ не может
/// продолжать идентификатор: `selection` не начинается с `select`.
pub fn lex_keyword(source: &str, ic: Cursor) -> Option<Match> {
    let rest = ic.rest(source);

    let keyword = Keyword::ALL
        .iter()
        .copied()
        .filter(|keyword| {
            let spelling = keyword.as_str().as_bytes();
            rest.len() >= spelling.len()
                && rest.as_bytes()[..spelling.len()].eq_ignore_ascii_case(spelling)
                && !rest[spelling.len()..]
                    .chars()
                    .next()
                    .is_some_and(is_identifier_char)
        })
        .max_by_key(|keyword| keyword.as_str().len())?;

    let len = keyword.as_str().len();
    Some(Match::token(
        Token::new(TokenKind::Keyword, keyword.as_str(), ic.position),
        ic.advance_str(&rest[..len]),
    ))
}

/// Идентификатор: буква или `_`, затем буквы, цифры и `_`.
/// Если задан `quote`, также принимается идентификатор в кавычках.
pub fn lex_identifier(source: &str, ic: Cursor, quote: Option<char>) -> Option<Match> {
    if let Some(delimiter) = quote {
        if let Some((value, cur)) = lex_delimited(source, ic, delimiter) {
            return Some(Match::token(
                Token::new(TokenKind::Identifier, value, ic.position),
                cur,
            ));
        }
    }

    if !is_identifier_start(ic.peek(source)?) {
        return None;
    }

    let cur = skip_while(source, ic, is_identifier_char);
    Some(Match::token(
        Token::new(
            TokenKind::Identifier,
            &source[ic.offset..cur.offset],
            ic.position,
        ),
        cur,
    ))
}

fn skip_while(source: &str, ic: Cursor, predicate: impl Fn(char) -> bool) -> Cursor {
    ic.rest(source)
        .chars()
        .take_while(|&ch| predicate(ch))
        .fold(ic, Cursor::advance)
}

//! Интеграционные тесты rustdb-lexer
//!
//! Проверяют публичный API: анализ целых скриптов, конфигурацию из файла,
//! пакетный анализ и формат ошибок.

use rustdb_lexer::cli::{render, OutputFormat};
use rustdb_lexer::{lex, Error, Keyword, LexerConfig, Lexer, Position, Symbol, TokenKind};
use tempfile::TempDir;

const SCRIPT: &str = "\
-- schema
create table users (
    id int,
    name text
);

/* seed data */
insert into users values (1, 'Ann'), (2, 'O''Hara');

select id as \"user id\", name from users;
";

#[test]
fn test_lex_script() {
    let tokens = lex(SCRIPT).unwrap();

    let keywords: Vec<Keyword> = tokens.iter().filter_map(|t| t.keyword()).collect();
    assert_eq!(
        keywords,
        vec![
            Keyword::Create,
            Keyword::Table,
            Keyword::Int,
            Keyword::Text,
            Keyword::Insert,
            Keyword::Into,
            Keyword::Values,
            Keyword::Select,
            Keyword::As,
            Keyword::From,
        ]
    );

    let semicolons = tokens
        .iter()
        .filter(|t| t.symbol() == Some(Symbol::Semicolon))
        .count();
    assert_eq!(semicolons, 3);

    let quoted = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Identifier && t.value == "user id")
        .unwrap();
    assert_eq!(quoted.position, Position::new(9, 13));

    let strings: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::String)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(strings, vec!["Ann", "O'Hara"]);
}

#[test]
fn test_script_positions() {
    let tokens = lex(SCRIPT).unwrap();

    // Первый токен на второй строке, после комментария
    assert_eq!(tokens[0].value, "create");
    assert_eq!(tokens[0].position, Position::new(1, 0));

    let name = tokens.iter().find(|t| t.value == "name").unwrap();
    assert_eq!(name.position, Position::new(3, 4));

    let insert = tokens.iter().find(|t| t.value == "insert").unwrap();
    assert_eq!(insert.position, Position::new(7, 0));
}

#[test]
fn test_error_is_all_or_nothing() {
    let err = lex("select a from b; select c from d where e = 1").unwrap_err();

    assert_eq!(err.position, Position::new(0, 41));
    assert_eq!(err.after.as_deref(), Some("e"));
}

#[test]
fn test_error_converts_to_crate_error() {
    fn run(source: &str) -> rustdb_lexer::Result<usize> {
        Ok(lex(source)?.len())
    }

    assert_eq!(run("select 1").unwrap(), 2);
    assert!(matches!(run("select #"), Err(Error::Lex(_))));
}

#[test]
fn test_lexer_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lexer.toml");
    std::fs::write(
        &path,
        "identifier_delimiter = \"`\"\ncomments = false\n",
    )
    .unwrap();

    let config = LexerConfig::from_file(&path).unwrap();
    let lexer = Lexer::with_config(config).unwrap();

    let tokens = lexer.lex("select `a b` from t").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "a b");

    assert!(lexer.lex("select \"a b\"").is_err());
    assert!(lexer.lex("select -- note").is_err());
}

#[test]
fn test_invalid_config_file_rejected_by_lexer() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lexer.toml");
    std::fs::write(&path, "string_delimiter = \"*\"\n").unwrap();

    let config = LexerConfig::from_file(&path).unwrap();
    let result = Lexer::with_config(config);
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_lex_many_matches_sequential() {
    let lexer = Lexer::new();
    let sources: Vec<String> = (0..64)
        .map(|i| format!("insert into t{} values ({}, 'row {}');", i, i, i))
        .collect();

    let parallel = lexer.lex_many(&sources);
    for (source, result) in sources.iter().zip(parallel) {
        assert_eq!(result.unwrap(), lexer.lex(source).unwrap());
    }
}

#[test]
fn test_render_json_roundtrip() {
    let tokens = lex(SCRIPT).unwrap();
    let json = render(&tokens, OutputFormat::Json).unwrap();
    let parsed: Vec<rustdb_lexer::Token> = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, tokens);
    for (a, b) in parsed.iter().zip(&tokens) {
        assert_eq!(a.position, b.position);
    }
}

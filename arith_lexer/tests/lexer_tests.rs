use arith_lexer::{Lexer, Token, TokenType};
use pretty_assertions::assert_eq;

#[allow(dead_code)]
fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

#[test]
fn test_numeric_literals() {
    let valid_cases = [
        ("42", TokenType::Number(42.0)),
        ("3.14159", TokenType::Number(3.14159)),
        ("0.5", TokenType::Number(0.5)),
        (".5", TokenType::Number(0.5)),
        ("10.", TokenType::Number(10.0)),
    ];

    for (input, expected) in valid_cases.iter() {
        let tokens: Vec<Token> = Lexer::new(input).collect();

        assert_eq!(
            tokens.len(),
            1,
            "Expected exactly one token for input: {input}"
        );
        assert_eq!(
            tokens[0].token_type, *expected,
            "Mismatch for input: {input}"
        );
    }
}

#[test]
fn test_invalid_numeric_literals() {
    // A maximal digit/dot run that does not parse as a float must come out
    // as a single error token, not be split into smaller valid literals.
    let test_cases = ["1.2.3", ".", "..", "3.4.5.6"];

    for input in test_cases.iter() {
        let tokens: Vec<Token> = Lexer::new(input).collect();

        assert_eq!(
            tokens.len(),
            1,
            "Expected exactly one token for input: {input}"
        );
        assert_eq!(
            tokens[0].token_type,
            TokenType::Error(input.to_string()),
            "Expected error token for input: {input}"
        );
    }
}

#[test]
fn test_operators_and_parentheses() {
    let tokens: Vec<Token> = Lexer::new("(1 + 2) * 3 - 4 / 5").collect();
    let types: Vec<TokenType> = tokens.into_iter().map(|t| t.token_type).collect();

    assert_eq!(
        types,
        vec![
            TokenType::LeftParen,
            TokenType::Number(1.0),
            TokenType::Plus,
            TokenType::Number(2.0),
            TokenType::RightParen,
            TokenType::Star,
            TokenType::Number(3.0),
            TokenType::Minus,
            TokenType::Number(4.0),
            TokenType::Slash,
            TokenType::Number(5.0),
        ]
    );
}

#[test]
fn test_whitespace_is_skipped() {
    let compact: Vec<TokenType> = Lexer::new("3+5")
        .map(|t| t.token_type)
        .collect();
    let padded: Vec<TokenType> = Lexer::new(" 3 \t+  5 \n")
        .map(|t| t.token_type)
        .collect();

    assert_eq!(compact, padded);
}

#[test]
fn test_token_locations() {
    let tokens: Vec<Token> = Lexer::new("1 + 23").collect();

    assert_eq!(tokens[0].location.line, 1);
    assert_eq!(tokens[0].location.column, 1);
    assert_eq!(tokens[0].location.offset, 0);

    assert_eq!(tokens[1].location.column, 3);
    assert_eq!(tokens[1].location.offset, 2);

    assert_eq!(tokens[2].location.column, 5);
    assert_eq!(tokens[2].location.offset, 4);
    assert_eq!(tokens[2].lexeme, "23");
}

#[test]
fn test_locations_across_lines() {
    let tokens: Vec<Token> = Lexer::new("1 +\n2").collect();

    assert_eq!(tokens[2].location.line, 2);
    assert_eq!(tokens[2].location.column, 1);
    assert_eq!(tokens[2].location.offset, 4);
}

#[test]
fn test_unrecognized_characters_become_error_tokens() {
    let tokens: Vec<Token> = Lexer::new("3 + 5 @ 2").collect();

    let error_tokens: Vec<&Token> = tokens
        .iter()
        .filter(|t| matches!(t.token_type, TokenType::Error(_)))
        .collect();

    assert_eq!(error_tokens.len(), 1);
    assert_eq!(error_tokens[0].lexeme, "@");
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(Lexer::new("").count(), 0);
    assert_eq!(Lexer::new("   \t \n ").count(), 0);
}

//! Lexer for arithmetic expressions using the industry-standard 'logos' crate
//! Recognizes numeric literals, the four binary operators, and parentheses

use log::trace;
use logos::Logos;

use crate::logos_token::LogosToken;
use crate::token::{Location, Token, TokenType};

/// Arithmetic expression lexer.
///
/// Wraps the logos scanner and converts its raw tokens into [`Token`]s with
/// source locations. Whitespace is skipped; anything the scanner cannot
/// recognize is emitted as a [`TokenType::Error`] token rather than being
/// dropped, so the evaluator can fail on it.
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, LogosToken>,
    /// The source text being lexed
    source: &'source str,
    /// Current line number (1-based)
    line: usize,
    /// Current column number (1-based)
    column: usize,
    /// Current byte offset in source
    offset: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: LogosToken::lexer(source),
            source,
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Advance the tracked position to the given byte offset
    fn advance_to(&mut self, end: usize) {
        for ch in self.source[self.offset..end].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = end;
    }

    /// Convert a LogosToken to our semantic Token type
    fn convert_token(&self, logos_token: LogosToken, lexeme: &str, location: Location) -> Token {
        let token_type = match logos_token {
            LogosToken::Number(value) => TokenType::Number(value),
            LogosToken::Plus => TokenType::Plus,
            LogosToken::Minus => TokenType::Minus,
            LogosToken::Star => TokenType::Star,
            LogosToken::Slash => TokenType::Slash,
            LogosToken::LParen => TokenType::LeftParen,
            LogosToken::RParen => TokenType::RightParen,
            LogosToken::Error => TokenType::Error(lexeme.to_string()),
        };
        Token::new(token_type, lexeme, location)
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let result = self.logos_lexer.next()?;
        let span = self.logos_lexer.span();
        let lexeme = self.logos_lexer.slice();

        // Catch up over whatever the scanner skipped since the last token,
        // then record the location at the start of this one.
        self.advance_to(span.start);
        let location = Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        };

        let token = match result {
            Ok(logos_token) => self.convert_token(logos_token, lexeme, location),
            Err(()) => {
                trace!("unrecognized input '{lexeme}' at {location}");
                Token::new(TokenType::Error(lexeme.to_string()), lexeme, location)
            }
        };

        self.advance_to(span.end);
        Some(token)
    }
}

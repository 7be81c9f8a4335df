//! Raw token definitions for the logos scanner

use logos::Logos;

/// Raw token type produced by the logos lexer.
///
/// Conversion into the richer [`Token`](crate::token::Token) type, with
/// location tracking, happens in [`Lexer`](crate::lexer::Lexer).
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum LogosToken {
    /// A numeric literal: the maximal run of digits and decimal points.
    ///
    /// A run that does not parse as a float (`1.2.3`, a lone `.`) fails the
    /// callback and is surfaced as a lexing error for the evaluator to
    /// report.
    #[regex(r"[0-9.]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // --- Operators ---
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    // --- Delimiters ---
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    // --- Whitespace (skipped) ---
    /// Unrecognised input
    #[regex(r"[ \t\n\r]+", logos::skip)]
    Error,
}

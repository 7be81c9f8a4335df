//! Arithmetic expression lexical analyzer
//!
//! This crate provides lexical analysis for arithmetic expressions,
//! converting input text into a stream of tokens for the evaluator.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenType};

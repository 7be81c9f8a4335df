//! Stack-based evaluation of arithmetic expressions.
//!
//! Each parenthesis level is evaluated with its own pair of stacks: one for
//! operand values and one for pending operators. A single cursor into the
//! token sequence is shared across recursion levels, so a parenthesized
//! sub-expression advances the same position its caller resumes from.

use arith_lexer::{Lexer, Token, TokenType};
use log::{debug, trace};
use std::fmt;

use crate::error::EvalError;

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOp {
    /// Binding strength of the operator; higher binds first.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Add | BinaryOp::Sub => 1,
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division checks its right operand before dividing; an exact zero
    /// fails with [`EvalError::DivisionByZero`].
    fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            BinaryOp::Add => Ok(lhs + rhs),
            BinaryOp::Sub => Ok(lhs - rhs),
            BinaryOp::Mul => Ok(lhs * rhs),
            BinaryOp::Div => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        };
        write!(f, "{symbol}")
    }
}

/// Evaluate an arithmetic expression and return its value.
///
/// Supports integer and decimal literals, `+ - * /` with standard
/// precedence and left-to-right associativity, and nested parentheses.
/// Whitespace is ignored. Fails with [`EvalError::InvalidExpression`] on
/// empty input, unrecognized characters, malformed literals, or structural
/// imbalance, and with [`EvalError::DivisionByZero`] when a division's
/// right operand is exactly zero.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    // Whitespace carries no meaning anywhere, including inside a digit run:
    // "1 2" is the literal 12. Strip it before lexing.
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(EvalError::invalid("expression cannot be empty"));
    }

    let tokens: Vec<Token> = Lexer::new(&stripped).collect();
    let mut evaluator = Evaluator::new(tokens);
    let value = evaluator.eval_level(0)?;
    debug!("evaluated to {value}");
    Ok(value)
}

/// Evaluates a token sequence with one cursor shared across recursion
/// levels.
///
/// The cursor only moves forward. On return from a parenthesized sub-call
/// it points one past the matching close-parenthesis, so the caller resumes
/// immediately after the sub-expression it just consumed.
struct Evaluator {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Evaluator {
    /// Create an evaluator over a token sequence, cursor at the start.
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Evaluate one parenthesis level. The top-level call passes depth 0;
    /// each `(` enters the next level with its own fresh stacks.
    fn eval_level(&mut self, depth: usize) -> Result<f64, EvalError> {
        let mut values: Vec<f64> = Vec::new();
        let mut operators: Vec<BinaryOp> = Vec::new();
        let mut closed = false;

        while let Some(token) = self.peek().cloned() {
            trace!("depth {depth}, cursor {}: {token}", self.cursor);
            match token.token_type {
                TokenType::Number(value) => {
                    values.push(value);
                    self.advance();
                }
                TokenType::LeftParen => {
                    self.advance();
                    let inner = self.eval_level(depth + 1)?;
                    values.push(inner);
                }
                TokenType::RightParen => {
                    if depth == 0 {
                        return Err(EvalError::invalid(format!(
                            "unmatched ')' at {}",
                            token.location
                        )));
                    }
                    self.advance();
                    closed = true;
                    break;
                }
                TokenType::Plus => self.push_operator(BinaryOp::Add, &mut values, &mut operators)?,
                TokenType::Minus => {
                    self.push_operator(BinaryOp::Sub, &mut values, &mut operators)?
                }
                TokenType::Star => self.push_operator(BinaryOp::Mul, &mut values, &mut operators)?,
                TokenType::Slash => {
                    self.push_operator(BinaryOp::Div, &mut values, &mut operators)?
                }
                TokenType::Error(lexeme) => {
                    return Err(EvalError::invalid(format!(
                        "unrecognized input '{lexeme}' at {}",
                        token.location
                    )));
                }
            }
        }

        if depth > 0 && !closed {
            return Err(EvalError::invalid("unmatched '('"));
        }

        // Apply remaining operators
        while let Some(op) = operators.pop() {
            apply_operation(&mut values, op)?;
        }

        // Ensure single result
        if values.len() != 1 {
            return Err(EvalError::invalid("unbalanced operators and operands"));
        }
        Ok(values[0])
    }

    /// Push a pending operator, first applying every stacked operator of
    /// equal or higher precedence. Draining on equal precedence is what
    /// makes `a - b + c` evaluate left to right.
    fn push_operator(
        &mut self,
        op: BinaryOp,
        values: &mut Vec<f64>,
        operators: &mut Vec<BinaryOp>,
    ) -> Result<(), EvalError> {
        while let Some(&top) = operators.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            operators.pop();
            apply_operation(values, top)?;
        }
        operators.push(op);
        self.advance();
        Ok(())
    }
}

/// Apply an operator to the top two values on the stack, pushing the result.
fn apply_operation(values: &mut Vec<f64>, op: BinaryOp) -> Result<(), EvalError> {
    let rhs = values.pop();
    let lhs = values.pop();
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => {
            let result = op.apply(lhs, rhs)?;
            trace!("{lhs} {op} {rhs} = {result}");
            values.push(result);
            Ok(())
        }
        _ => Err(EvalError::invalid(format!("missing operand for '{op}'"))),
    }
}

//! Tokenizer for coordinate expressions.
//!
//! Converts an expression such as `(width - 4) / 2` into a flat token
//! stream. Parentheses are not matched here; the evaluator does that.

use std::fmt;

use crate::error::{ExprError, Result};

/// A binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Multiply,
    Divide,
    Modulo,
    Add,
    Subtract,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '%' => Some(Operator::Modulo),
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulo => '%',
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// `* / %` bind tighter than `+ -`.
    pub fn is_multiplicative(self) -> bool {
        matches!(
            self,
            Operator::Multiply | Operator::Divide | Operator::Modulo
        )
    }
}

/// A token produced by the [`Lexer`].
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Int(i64),
    Double(f64),
    Operator(Operator),
    Variable(String),
    OpenParen,
    CloseParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(v) => write!(f, "{v}"),
            Token::Double(v) => write_double(f, *v),
            Token::Operator(op) => write!(f, "{}", op.as_char()),
            Token::Variable(name) => f.write_str(name),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
        }
    }
}

/// Doubles must keep a decimal point so they read back as doubles.
pub(crate) fn write_double(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let text = v.to_string();
    if text.contains('.') {
        f.write_str(&text)
    } else {
        write!(f, "{text}.0")
    }
}

/// Lexer for coordinate expressions.
///
/// # Examples
///
/// ```
/// use posexpr::token::{Lexer, Operator, Token};
///
/// let tokens: Vec<_> = Lexer::new("2*width").collect::<Result<_, _>>().unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Int(2),
///         Token::Operator(Operator::Multiply),
///         Token::Variable("width".to_string()),
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        &self.input[start..self.pos]
    }

    fn consume_number(&mut self) -> Result<Token> {
        let text = self.take_while(|c| c.is_ascii_digit() || c == '.');
        if text.contains('.') {
            match text.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Token::Double(v)),
                _ => Err(ExprError::failed(format!(
                    "Coordinate expression contains floating point number '{text}' which could not be parsed"
                ))),
            }
        } else {
            text.parse::<i64>().map(Token::Int).map_err(|_| {
                ExprError::failed(format!(
                    "Coordinate expression contains integer '{text}' which could not be parsed"
                ))
            })
        }
    }

    fn consume_variable(&mut self) -> Token {
        let name = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
        Token::Variable(name.to_string())
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let c = self.peek()?;

        if c.is_ascii_digit() || c == '.' {
            return Some(self.consume_number());
        }
        if c.is_ascii_alphabetic() {
            return Some(Ok(self.consume_variable()));
        }

        self.advance();
        match c {
            '(' => Some(Ok(Token::OpenParen)),
            ')' => Some(Ok(Token::CloseParen)),
            _ => match Operator::from_char(c) {
                Some(op) => Some(Ok(Token::Operator(op))),
                None => {
                    // Stop after the first error.
                    self.pos = self.input.len();
                    Some(Err(ExprError::BadCharacter(c)))
                }
            },
        }
    }
}

/// Tokenize a whole expression, failing when it yields no tokens.
pub fn tokenize(expr: &str) -> Result<Vec<Token>> {
    let tokens = Lexer::new(expr).collect::<Result<Vec<_>>>()?;
    if tokens.is_empty() {
        return Err(ExprError::failed(
            "Coordinate expression was empty or not understood",
        ));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        tokenize(input).unwrap()
    }

    #[test]
    fn lex_int_and_double() {
        assert_eq!(lex("14"), vec![Token::Int(14)]);
        assert_eq!(lex("14.37"), vec![Token::Double(14.37)]);
        assert_eq!(lex(".5"), vec![Token::Double(0.5)]);
    }

    #[test]
    fn lex_operators_without_spaces() {
        assert_eq!(
            lex("14-10"),
            vec![
                Token::Int(14),
                Token::Operator(Operator::Subtract),
                Token::Int(10)
            ]
        );
    }

    #[test]
    fn lex_identifiers_with_digits_and_underscores() {
        assert_eq!(
            lex("object_width+Pad2"),
            vec![
                Token::Variable("object_width".to_string()),
                Token::Operator(Operator::Add),
                Token::Variable("Pad2".to_string()),
            ]
        );
    }

    #[test]
    fn lex_parens() {
        assert_eq!(
            lex("(1)"),
            vec![Token::OpenParen, Token::Int(1), Token::CloseParen]
        );
    }

    #[test]
    fn bad_character() {
        assert_eq!(tokenize("! * 2"), Err(ExprError::BadCharacter('!')));
        assert_eq!(tokenize("2 # 3"), Err(ExprError::BadCharacter('#')));
    }

    #[test]
    fn empty_and_whitespace_fail() {
        assert!(matches!(tokenize(""), Err(ExprError::Failed(_))));
        assert!(matches!(tokenize("   "), Err(ExprError::Failed(_))));
    }

    #[test]
    fn malformed_double_fails() {
        assert!(matches!(tokenize("1.2.3"), Err(ExprError::Failed(_))));
    }

    #[test]
    fn double_display_keeps_point() {
        assert_eq!(Token::Double(2.0).to_string(), "2.0");
        assert_eq!(Token::Double(0.25).to_string(), "0.25");
    }
}

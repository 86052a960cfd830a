//! Pre-tokenized expressions.

use std::fmt;
use std::str::FromStr;

use crate::env::{Environment, Number};
use crate::error::{ExprError, Result};
use crate::eval::evaluate;
use crate::token::{Token, tokenize};

/// An expression tokenized once and evaluated any number of times.
///
/// Evaluation does not mutate the expression, so the same `Expr` yields
/// the same result for the same environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    source: String,
    tokens: Vec<Token>,
}

impl Expr {
    pub fn parse(source: &str) -> Result<Self> {
        Ok(Self {
            source: source.to_string(),
            tokens: tokenize(source)?,
        })
    }

    /// Build an expression from tokens, rendering its source with single
    /// spaces between binary operators.
    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut source = String::new();
        for (i, token) in tokens.iter().enumerate() {
            let spaced = matches!(token, Token::Operator(_))
                || matches!(tokens.get(i.wrapping_sub(1)), Some(Token::Operator(_)));
            if i > 0 && spaced {
                source.push(' ');
            }
            source.push_str(&token.to_string());
        }
        Self { source, tokens }
    }

    /// A constant expression such as `0` or `width`.
    pub fn literal(source: &str) -> Self {
        Self {
            source: source.to_string(),
            tokens: tokenize(source).unwrap_or_default(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn evaluate(&self, env: &Environment<'_>) -> Result<Number> {
        if self.tokens.is_empty() {
            return Err(ExprError::failed(
                "Coordinate expression was empty or not understood",
            ));
        }
        evaluate(&self.tokens, env)
    }

    /// The bare value in whole pixels.
    pub fn size(&self, env: &Environment<'_>) -> Result<i32> {
        self.evaluate(env).map(Number::to_pixels)
    }

    /// The value added to both the environment's `x` and `y`.
    pub fn position(&self, env: &Environment<'_>) -> Result<(i32, i32)> {
        let delta = self.size(env)?;
        Ok((env.x.wrapping_add(delta), env.y.wrapping_add(delta)))
    }
}

impl FromStr for Expr {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self> {
        Expr::parse(s)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

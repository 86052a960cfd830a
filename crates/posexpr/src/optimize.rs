//! Load-time constant folding.

use crate::env::{ConstantLookup, Number, is_builtin_variable};
use crate::expr::Expr;
use crate::token::Token;

/// Replace every theme-constant reference in `expr` with its literal value.
///
/// Built-in variables are left alone, as are names the lookup does not
/// know; those still fail at evaluation time.
pub fn replace_constants(expr: &Expr, constants: &dyn ConstantLookup) -> Expr {
    let tokens = expr
        .tokens()
        .iter()
        .map(|token| match token {
            Token::Variable(name) if !is_builtin_variable(name) => {
                match constants.lookup_constant(name) {
                    Some(Number::Int(v)) => Token::Int(v),
                    Some(Number::Double(v)) => Token::Double(v),
                    None => token.clone(),
                }
            }
            _ => token.clone(),
        })
        .collect();
    Expr::from_tokens(tokens)
}

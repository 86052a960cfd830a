//! Evaluator for tokenized expressions.
//!
//! Parenthesized groups are evaluated recursively and spliced back in as a
//! single value. The flattened list is then folded in two passes, first
//! `* / %` and then `+ -`, both left to right.

use smallvec::SmallVec;

use crate::env::{Environment, Number};
use crate::error::{ExprError, Result};
use crate::token::{Operator, Token};

#[derive(Clone, Copy, Debug)]
enum Item {
    Value(Number),
    Op(Operator),
}

type Items = SmallVec<[Item; 16]>;

/// Evaluate a token slice against an environment.
pub fn evaluate(tokens: &[Token], env: &Environment<'_>) -> Result<Number> {
    let mut items = Items::new();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Int(v) => items.push(Item::Value(Number::Int(*v))),
            Token::Double(v) => items.push(Item::Value(Number::Double(*v))),
            Token::Operator(op) => items.push(Item::Op(*op)),
            Token::Variable(name) => items.push(Item::Value(env.lookup(name)?)),
            Token::CloseParen => {
                return Err(ExprError::BadParens(
                    "Coordinate expression had a close parenthesis with no open parenthesis"
                        .to_string(),
                ));
            }
            Token::OpenParen => {
                let close = matching_paren(tokens, i)?;
                let inner = &tokens[i + 1..close];
                if inner.is_empty() {
                    return Err(ExprError::failed(
                        "Coordinate expression has empty parentheses",
                    ));
                }
                items.push(Item::Value(evaluate(inner, env)?));
                i = close;
            }
        }
        i += 1;
    }

    check_structure(&items)?;
    let items = fold(&items, Operator::is_multiplicative)?;
    let items = fold(&items, |_| true)?;

    match items.as_slice() {
        [Item::Value(v)] => Ok(*v),
        _ => Err(ExprError::failed(
            "Coordinate expression parser overflowed its buffer",
        )),
    }
}

fn matching_paren(tokens: &[Token], open: usize) -> Result<usize> {
    let mut depth = 0usize;
    for (offset, token) in tokens[open..].iter().enumerate() {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok(open + offset);
                }
            }
            _ => {}
        }
    }
    Err(ExprError::BadParens(
        "Coordinate expression had an open parenthesis with no close parenthesis".to_string(),
    ))
}

/// Values and operators must alternate, starting and ending with a value.
fn check_structure(items: &[Item]) -> Result<()> {
    let Some(first) = items.first() else {
        return Err(ExprError::failed(
            "Coordinate expression doesn't seem to have any operators or operands",
        ));
    };
    if let Item::Op(op) = first {
        return Err(ExprError::failed(format!(
            "Coordinate expression has an operator \"{}\" where an operand was expected",
            op.as_char()
        )));
    }

    for pair in items.windows(2) {
        match (pair[0], pair[1]) {
            (Item::Value(_), Item::Value(_)) => {
                return Err(ExprError::failed(
                    "Coordinate expression had an operand where an operator was expected",
                ));
            }
            (Item::Op(a), Item::Op(b)) => {
                return Err(ExprError::failed(format!(
                    "Coordinate expression has operator \"{}\" following operator \"{}\" with no operand in between",
                    b.as_char(),
                    a.as_char()
                )));
            }
            _ => {}
        }
    }

    if let Some(Item::Op(_)) = items.last() {
        return Err(ExprError::failed(
            "Coordinate expression ended with an operator instead of an operand",
        ));
    }
    Ok(())
}

/// Fold every operator accepted by `selects` into its left operand.
fn fold(items: &[Item], selects: impl Fn(Operator) -> bool) -> Result<Items> {
    let mut out = Items::new();
    let mut iter = items.iter().copied();

    if let Some(first) = iter.next() {
        out.push(first);
    }
    while let (Some(Item::Op(op)), Some(Item::Value(rhs))) = (iter.next(), iter.next()) {
        match out.last_mut() {
            Some(Item::Value(lhs)) if selects(op) => *lhs = apply(op, *lhs, rhs)?,
            _ => {
                out.push(Item::Op(op));
                out.push(Item::Value(rhs));
            }
        }
    }
    Ok(out)
}

fn apply(op: Operator, lhs: Number, rhs: Number) -> Result<Number> {
    match (lhs, rhs) {
        (Number::Int(a), Number::Int(b)) => {
            let value = match op {
                Operator::Multiply => a.wrapping_mul(b),
                Operator::Add => a.wrapping_add(b),
                Operator::Subtract => a.wrapping_sub(b),
                Operator::Divide | Operator::Modulo if b == 0 => {
                    return Err(ExprError::DivideByZero);
                }
                Operator::Divide => a.wrapping_div(b),
                Operator::Modulo => a.wrapping_rem(b),
            };
            Ok(Number::Int(value))
        }
        _ => {
            let (a, b) = (lhs.as_f64(), rhs.as_f64());
            let value = match op {
                Operator::Modulo => return Err(ExprError::ModOnFloat),
                Operator::Multiply => a * b,
                Operator::Add => a + b,
                Operator::Subtract => a - b,
                Operator::Divide if b == 0.0 => return Err(ExprError::DivideByZero),
                Operator::Divide => a / b,
            };
            Ok(Number::Double(value))
        }
    }
}

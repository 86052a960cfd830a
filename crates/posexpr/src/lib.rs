//! Coordinate expressions for window-frame themes.
//!
//! Theme draw operations describe their geometry with small arithmetic
//! expressions such as `width - 4` or `(height - title_height) / 2`. This
//! crate tokenizes and evaluates them.
//!
//! - Integers and doubles (`14`, `12.5`); an operation involving a double
//!   is performed in floating point and the final value is truncated.
//! - Operators `* / %` bind tighter than `+ -`; parentheses group.
//! - Variables come from an [`Environment`]; any other identifier is
//!   looked up as a theme constant through [`ConstantLookup`].
//!
//! # Usage
//!
//! ```
//! use posexpr::{Environment, parse_position_expression, parse_size_expression};
//!
//! let env = Environment::new(10, 20, 40, 50);
//! assert_eq!(parse_position_expression("2 * width", &env).unwrap(), (90, 100));
//! assert_eq!(parse_size_expression("height / 2", &env).unwrap(), 25);
//! ```

pub mod env;
pub mod error;
pub mod eval;
pub mod expr;
pub mod optimize;
pub mod token;

pub use env::{ConstantLookup, Environment, Number};
pub use error::{ExprError, Result};
pub use expr::Expr;
pub use optimize::replace_constants;
pub use token::{Operator, Token};

/// Evaluate `expr` and add the result to the environment's base `x` and `y`.
pub fn parse_position_expression(expr: &str, env: &Environment<'_>) -> Result<(i32, i32)> {
    Expr::parse(expr)?.position(env)
}

/// Evaluate `expr` to a bare pixel size.
pub fn parse_size_expression(expr: &str, env: &Environment<'_>) -> Result<i32> {
    Expr::parse(expr)?.size(env)
}

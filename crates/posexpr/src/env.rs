//! Evaluation environment: the named inputs an expression may reference.

use std::collections::HashMap;
use std::fmt;

use log::warn;

use crate::error::{ExprError, Result};

/// A numeric value produced during evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Double(f64),
}

impl Number {
    pub fn is_double(self) -> bool {
        matches!(self, Number::Double(_))
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Double(v) => v,
        }
    }

    /// Truncate to whole pixels. Values outside the `i32` range clamp to
    /// its ends, and NaN becomes 0.
    pub fn to_pixels(self) -> i32 {
        let pixels = match self {
            Number::Int(v) => match i32::try_from(v) {
                Ok(px) => return px,
                Err(_) if v < 0 => i32::MIN,
                Err(_) => i32::MAX,
            },
            Number::Double(v) => {
                let range = f64::from(i32::MIN)..=f64::from(i32::MAX);
                if range.contains(&v.trunc()) {
                    return v as i32;
                }
                // saturating, NaN maps to 0
                v as i32
            }
        };
        warn!("Expression value {self} does not fit in a pixel coordinate; using {pixels}");
        pixels
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Double(v) => crate::token::write_double(f, *v),
        }
    }
}

/// Source of theme-defined constants.
pub trait ConstantLookup {
    fn lookup_constant(&self, name: &str) -> Option<Number>;
}

impl ConstantLookup for HashMap<String, Number> {
    fn lookup_constant(&self, name: &str) -> Option<Number> {
        self.get(name).copied()
    }
}

/// Names the evaluator resolves without consulting constants.
pub const BUILTIN_VARIABLES: &[&str] = &[
    "width",
    "height",
    "object_width",
    "object_height",
    "left_width",
    "right_width",
    "top_height",
    "bottom_height",
    "title_width",
    "title_height",
    "icon_width",
    "icon_height",
    "mini_icon_width",
    "mini_icon_height",
];

pub fn is_builtin_variable(name: &str) -> bool {
    BUILTIN_VARIABLES.contains(&name)
}

/// The region and frame measurements an expression is evaluated against.
///
/// `x`/`y` are only used by the position API as the base the result is
/// added to. `object_width`/`object_height` are present only while
/// drawing an image; referencing them otherwise is an error.
#[derive(Clone, Copy, Default)]
pub struct Environment<'a> {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub object_width: Option<i32>,
    pub object_height: Option<i32>,
    pub left_width: i32,
    pub right_width: i32,
    pub top_height: i32,
    pub bottom_height: i32,
    pub title_width: i32,
    pub title_height: i32,
    pub icon_width: i32,
    pub icon_height: i32,
    pub mini_icon_width: i32,
    pub mini_icon_height: i32,
    pub constants: Option<&'a dyn ConstantLookup>,
}

impl<'a> Environment<'a> {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_object(mut self, width: i32, height: i32) -> Self {
        self.object_width = Some(width);
        self.object_height = Some(height);
        self
    }

    pub fn with_constants(mut self, constants: &'a dyn ConstantLookup) -> Self {
        self.constants = Some(constants);
        self
    }

    /// Resolve a variable name to its value.
    pub fn lookup(&self, name: &str) -> Result<Number> {
        let value = match name {
            "width" => self.width,
            "height" => self.height,
            "object_width" => self.object(self.object_width, name)?,
            "object_height" => self.object(self.object_height, name)?,
            "left_width" => self.left_width,
            "right_width" => self.right_width,
            "top_height" => self.top_height,
            "bottom_height" => self.bottom_height,
            "title_width" => self.title_width,
            "title_height" => self.title_height,
            "icon_width" => self.icon_width,
            "icon_height" => self.icon_height,
            "mini_icon_width" => self.mini_icon_width,
            "mini_icon_height" => self.mini_icon_height,
            _ => {
                return self
                    .constants
                    .and_then(|c| c.lookup_constant(name))
                    .ok_or_else(|| ExprError::UnknownVariable(name.to_string()));
            }
        };
        Ok(Number::Int(value as i64))
    }

    fn object(&self, value: Option<i32>, name: &str) -> Result<i32> {
        value.ok_or_else(|| ExprError::UnknownVariable(name.to_string()))
    }
}

impl fmt::Debug for Environment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("object_width", &self.object_width)
            .field("object_height", &self.object_height)
            .field("has_constants", &self.constants.is_some())
            .finish_non_exhaustive()
    }
}

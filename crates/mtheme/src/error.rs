//! Error types for theme loading and validation.

use posexpr::ExprError;
use thiserror::Error;

/// Errors that can occur while loading or validating a theme.
///
/// Loading stops at the first error. Errors raised while reading the theme
/// document are wrapped in [`ThemeError::Located`] so the message carries
/// the line and character where the offending element starts.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Structural problems: bad markup, unexpected elements or text,
    /// missing/repeated/invalid attributes, malformed attribute values.
    #[error("{0}")]
    Markup(String),

    /// Undefined or duplicate names, circular references, invalid
    /// enumeration values and incomplete styles.
    #[error("{0}")]
    Semantic(String),

    /// A geometry expression failed to tokenize or evaluate.
    #[error(transparent)]
    Expression(#[from] ExprError),

    /// An error annotated with its position in the theme document.
    #[error("Line {line} character {column}: {inner}")]
    Located {
        line: usize,
        column: usize,
        inner: Box<ThemeError>,
    },

    /// The document never opened a `<metacity_theme>` element.
    #[error("Theme file {0} did not contain a root <metacity_theme> element")]
    NoRootElement(String),

    /// An image referenced by the theme could not be decoded.
    #[error("Failed to load image \"{path}\": {message}")]
    Image { path: String, message: String },

    #[error("I/O error reading theme: {0}")]
    Io(#[from] std::io::Error),
}

/// Error categories, looking through location wrappers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Markup,
    Semantic,
    Expression,
    Io,
}

impl ThemeError {
    pub fn markup(message: impl Into<String>) -> Self {
        ThemeError::Markup(message.into())
    }

    pub fn semantic(message: impl Into<String>) -> Self {
        ThemeError::Semantic(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ThemeError::Markup(_) | ThemeError::NoRootElement(_) => ErrorKind::Markup,
            ThemeError::Semantic(_) => ErrorKind::Semantic,
            ThemeError::Expression(_) => ErrorKind::Expression,
            ThemeError::Located { inner, .. } => inner.kind(),
            ThemeError::Image { .. } | ThemeError::Io(_) => ErrorKind::Io,
        }
    }

    /// The error without any location wrapper.
    pub fn innermost(&self) -> &ThemeError {
        match self {
            ThemeError::Located { inner, .. } => inner.innermost(),
            other => other,
        }
    }

    pub(crate) fn at(self, line: usize, column: usize) -> Self {
        match self {
            located @ ThemeError::Located { .. } => located,
            inner => ThemeError::Located {
                line,
                column,
                inner: Box::new(inner),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;

//! # mtheme - Window-frame themes
//!
//! The object model of a window-frame theme and the loader that builds it
//! from a `metacity-theme-1.xml` document.
//!
//! A theme declares, by name:
//!
//! - **Frame geometries** ([`FrameLayout`]): border widths, button size and
//!   spacing, title insets
//! - **Draw-op lists** ([`DrawOpList`]): lines, rectangles, gradients,
//!   images and nested lists, positioned with expressions
//! - **Frame styles** ([`FrameStyle`]): a geometry plus a draw-op list for
//!   each frame piece and button state, falling back to a parent style
//! - **Frame style sets** ([`FrameStyleSet`]): which style to use for each
//!   window state, focus and resize axis
//!
//! Everything lives in one [`Theme`] arena and refers to other objects by
//! handle ([`LayoutId`], [`DrawOpListId`], [`StyleId`], [`StyleSetId`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use mtheme::{parse_theme, LoadOptions};
//!
//! let err = parse_theme(
//!     "<metacity_theme><info><name>A</name><name>B</name></info></metacity_theme>",
//!     &LoadOptions::new("demo"),
//! )
//! .unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Line 1 character 44: <name> specified twice for this theme"
//! );
//! ```
//!
//! Loading stops at the first error; a partially built theme is never
//! returned.

pub mod error;
pub mod image_loader;
mod macros;
pub mod options;
pub mod parser;
pub mod types;

pub use error::{ErrorKind, Result, ThemeError};
pub use image_loader::{FileImageLoader, ImageLoader, MemoryImageLoader};
pub use options::{LoadOptions, THEME_FILENAME};
pub use parser::{load_theme, parse_theme};
pub use types::*;
